//! Geometry engine: declarative page properties → pixel regions.
//!
//! `compute_layout` is pure and total: every property set produces a
//! geometry, missing values having already been coerced to 0 by the
//! property layer. Negative margins are not validated here — that is the
//! caller's responsibility.
//!
//! All dependent positions come out of one computation pass, so a geometry
//! is never partially updated: callers replace the whole value whenever any
//! page property changes.

use crate::model::{Band, Rect, UnitConverter};
use crate::properties::PageProperties;
use serde::{Deserialize, Serialize};

/// Positions of the page divider lines, in display units.
///
/// A trailing-edge (right/bottom) margin divider is `None` when its margin
/// is exactly 0 — drawn one pixel inside the page border it would otherwise
/// overlap the border and show up as a spurious line. Band dividers are
/// `None` when the band is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DividerLayout {
    pub margin_left: f64,
    pub margin_top: f64,
    pub margin_right: Option<f64>,
    pub margin_bottom: Option<f64>,
    pub header: Option<f64>,
    pub footer: Option<f64>,
}

/// Derived pixel regions of the page surface. Immutable per update.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page_width: f64,
    pub page_height: f64,
    /// Insets of the editable content area from the page edges. The left
    /// and top insets sit one document unit inside the margin so the
    /// one-pixel divider line stays visible on top of the content edge.
    pub content_left: f64,
    pub content_top: f64,
    pub content_right: f64,
    pub content_bottom: f64,
    /// Band heights; `None` when the band is hidden.
    pub header_height: Option<f64>,
    pub footer_height: Option<f64>,
    /// Offsets of the body region inside the content area. When a band is
    /// hidden its offset is 0 and the body expands into the freed space.
    pub body_top: f64,
    pub body_bottom: f64,
    pub dividers: DividerLayout,
}

impl PageGeometry {
    /// Width of the content area between the left/right insets.
    pub fn content_width(&self) -> f64 {
        self.page_width - self.content_left - self.content_right
    }

    /// Height of the content area between the top/bottom insets.
    pub fn content_height(&self) -> f64 {
        self.page_height - self.content_top - self.content_bottom
    }

    /// Pixel rectangle of a band in content-local coordinates, or `None`
    /// for a hidden band.
    pub fn band_frame(&self, band: Band) -> Option<Rect> {
        let w = self.content_width();
        let h = self.content_height();
        match band {
            Band::Header => self
                .header_height
                .map(|height| Rect::new(0.0, 0.0, w, height)),
            Band::Content => Some(Rect::new(
                0.0,
                self.body_top,
                w,
                h - self.body_top - self.body_bottom,
            )),
            Band::Footer => self
                .footer_height
                .map(|height| Rect::new(0.0, h - height, w, height)),
        }
    }
}

/// Map the declarative page properties into pixel regions and divider
/// positions.
pub fn compute_layout(props: &PageProperties, units: &dyn UnitConverter) -> PageGeometry {
    let content_left = units.to_display(props.margin_left - 1.0);
    let content_top = units.to_display(props.margin_top - 1.0);
    let content_right = units.to_display(props.margin_right);
    let content_bottom = units.to_display(props.margin_bottom);

    let header_height = props.header.then(|| units.to_display(props.header_size));
    let footer_height = props.footer.then(|| units.to_display(props.footer_size));

    let dividers = DividerLayout {
        margin_left: content_left,
        margin_top: content_top,
        margin_right: (props.margin_right != 0.0).then_some(content_right),
        margin_bottom: (props.margin_bottom != 0.0).then_some(content_bottom),
        header: props
            .header
            .then(|| units.to_display(props.margin_top + props.header_size - 1.0)),
        footer: props
            .footer
            .then(|| units.to_display(props.margin_bottom + props.footer_size)),
    };

    PageGeometry {
        page_width: units.to_display(props.width),
        page_height: units.to_display(props.height),
        content_left,
        content_top,
        content_right,
        content_bottom,
        header_height,
        footer_height,
        body_top: header_height.unwrap_or(0.0),
        body_bottom: footer_height.unwrap_or(0.0),
        dividers,
    }
}

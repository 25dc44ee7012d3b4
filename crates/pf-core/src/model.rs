//! Shared value types for the page surface.
//!
//! The page is divided into fixed vertical bands (header, content, footer).
//! Elements are placed into bands or nested containers; which element kinds
//! a region accepts is the container's own policy.

use serde::{Deserialize, Serialize};

/// The kind of element being placed or moved on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Text,
    Line,
    Image,
    Barcode,
    Table,
    Frame,
}

/// A fixed horizontal region of the page surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    Header,
    Content,
    Footer,
}

/// The divider lines drawn over the page: four page margins plus the two
/// band boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Divider {
    MarginLeft,
    MarginTop,
    MarginRight,
    MarginBottom,
    Header,
    Footer,
}

/// Axis-aligned rectangle in surface-local display units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point (px, py) lies inside this rectangle.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Maps a document-unit measurement into a display-unit measurement
/// (pixels or equivalent). Supplied by the embedding application.
pub trait UnitConverter {
    fn to_display(&self, value: f64) -> f64;
}

/// Fixed-factor converter. `Scale(1.0)` is the identity mapping.
#[derive(Debug, Clone, Copy)]
pub struct Scale(pub f64);

impl UnitConverter for Scale {
    fn to_display(&self, value: f64) -> f64 {
        value * self.0
    }
}

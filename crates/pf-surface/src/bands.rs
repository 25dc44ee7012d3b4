//! Band containers: the header/content/footer drop targets derived from
//! the current page geometry.

use crate::container::{Container, ContainerRegistry};
use pf_core::{Band, ContainerId, ElementType, PageGeometry, Rect};
use smallvec::SmallVec;
use std::cell::Cell;

/// A band of the page surface acting as a drop target.
#[derive(Debug)]
pub struct BandContainer {
    band: Band,
    id: ContainerId,
    frame: Rect,
    drag_over: Cell<bool>,
}

impl BandContainer {
    pub fn new(band: Band, frame: Rect) -> Self {
        let id = match band {
            Band::Header => ContainerId::intern("band_header"),
            Band::Content => ContainerId::intern("band_content"),
            Band::Footer => ContainerId::intern("band_footer"),
        };
        Self {
            band,
            id,
            frame,
            drag_over: Cell::new(false),
        }
    }

    pub fn band(&self) -> Band {
        self.band
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Whether the hover-accept indication is currently shown.
    pub fn is_drag_over(&self) -> bool {
        self.drag_over.get()
    }
}

impl Container for BandContainer {
    fn is_element_allowed(&self, element_type: ElementType) -> bool {
        // Repeating bands cannot host growing elements.
        match self.band {
            Band::Content => true,
            Band::Header | Band::Footer => {
                !matches!(element_type, ElementType::Table | ElementType::Frame)
            }
        }
    }

    fn offset(&self) -> (f64, f64) {
        (self.frame.x, self.frame.y)
    }

    fn id(&self) -> ContainerId {
        self.id
    }

    fn drag_over(&self, element_type: ElementType) {
        log::trace!("drag over {:?} with {element_type:?}", self.band);
        self.drag_over.set(true);
    }

    fn clear_drag_over(&self) {
        self.drag_over.set(false);
    }
}

/// Registry of the visible band containers for one page geometry.
///
/// Rebuilt whenever the geometry changes; the surrounding application may
/// register additional nested containers through its own registry instead.
#[derive(Debug, Default)]
pub struct BandRegistry {
    bands: SmallVec<[BandContainer; 3]>,
}

impl BandRegistry {
    pub fn from_geometry(geometry: &PageGeometry) -> Self {
        let mut bands = SmallVec::new();
        for band in [Band::Header, Band::Content, Band::Footer] {
            if let Some(frame) = geometry.band_frame(band) {
                bands.push(BandContainer::new(band, frame));
            }
        }
        Self { bands }
    }

    pub fn band(&self, band: Band) -> Option<&BandContainer> {
        self.bands.iter().find(|b| b.band == band)
    }
}

impl ContainerRegistry for BandRegistry {
    fn container_at(&self, x: f64, y: f64) -> Option<&dyn Container> {
        // Last registered wins: walk back-to-front so the topmost container
        // takes the hit.
        self.bands
            .iter()
            .rev()
            .find(|b| b.frame.contains(x, y))
            .map(|b| b as &dyn Container)
    }

    fn container(&self, id: ContainerId) -> Option<&dyn Container> {
        self.bands
            .iter()
            .find(|b| b.id == id)
            .map(|b| b as &dyn Container)
    }

    fn clear_drag_over(&self) {
        for band in &self.bands {
            band.drag_over.set(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::model::Scale;
    use pf_core::properties::PageProperties;
    use pf_core::compute_layout;
    use pretty_assertions::assert_eq;

    fn registry() -> BandRegistry {
        let props = PageProperties {
            width: 600.0,
            height: 800.0,
            margin_left: 20.0,
            margin_top: 20.0,
            margin_right: 0.0,
            margin_bottom: 10.0,
            header: true,
            header_size: 50.0,
            footer: true,
            footer_size: 30.0,
        };
        BandRegistry::from_geometry(&compute_layout(&props, &Scale(1.0)))
    }

    #[test]
    fn resolves_points_to_bands() {
        let reg = registry();
        let content_height = 800.0 - 19.0 - 10.0;

        let hit = reg.container_at(10.0, 10.0).unwrap();
        assert_eq!(hit.id(), ContainerId::intern("band_header"));

        let hit = reg.container_at(10.0, 100.0).unwrap();
        assert_eq!(hit.id(), ContainerId::intern("band_content"));

        let hit = reg.container_at(10.0, content_height - 5.0).unwrap();
        assert_eq!(hit.id(), ContainerId::intern("band_footer"));

        assert!(reg.container_at(-5.0, 100.0).is_none());
        assert!(reg.container_at(10.0, content_height + 5.0).is_none());
    }

    #[test]
    fn hidden_band_is_not_registered() {
        let props = PageProperties {
            width: 600.0,
            height: 800.0,
            header: false,
            footer: false,
            ..Default::default()
        };
        let reg = BandRegistry::from_geometry(&compute_layout(&props, &Scale(1.0)));
        assert!(reg.band(Band::Header).is_none());
        assert!(reg.band(Band::Content).is_some());
    }

    #[test]
    fn placement_policy_per_band() {
        let reg = registry();
        let header = reg.band(Band::Header).unwrap();
        let content = reg.band(Band::Content).unwrap();

        assert!(header.is_element_allowed(ElementType::Text));
        assert!(!header.is_element_allowed(ElementType::Table));
        assert!(!header.is_element_allowed(ElementType::Frame));
        assert!(content.is_element_allowed(ElementType::Table));
    }

    #[test]
    fn clear_drag_over_clears_every_band() {
        let reg = registry();
        reg.band(Band::Header)
            .unwrap()
            .drag_over(ElementType::Text);
        reg.band(Band::Content)
            .unwrap()
            .drag_over(ElementType::Text);
        assert!(reg.band(Band::Header).unwrap().is_drag_over());

        reg.clear_drag_over();
        assert!(!reg.band(Band::Header).unwrap().is_drag_over());
        assert!(!reg.band(Band::Content).unwrap().is_drag_over());
    }
}

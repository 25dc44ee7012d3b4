//! Presentation capability.
//!
//! The core never manipulates presentation state directly — it computes
//! geometry and interaction state and pushes the results through this
//! trait. A DOM, a retained-mode scene, or a test recorder can all sit
//! behind it.

use pf_core::{Band, Divider};
use serde::{Deserialize, Serialize};

/// Which surface the document currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentTab {
    /// The editable layout surface.
    Layout,
    /// The read-only rendered preview.
    Preview,
}

/// Side-effect sink for everything the document draws or toggles.
pub trait SurfaceView {
    /// Outer page rectangle, in display units.
    fn set_page_size(&mut self, width: f64, height: f64);

    /// Insets of the editable content area from the page edges.
    fn set_content_insets(&mut self, left: f64, top: f64, right: f64, bottom: f64);

    /// Position a divider line, or hide it with `None`.
    fn set_divider(&mut self, divider: Divider, position: Option<f64>);

    fn set_band_visible(&mut self, band: Band, visible: bool);
    fn set_band_height(&mut self, band: Band, height: f64);

    /// Offsets of the body region inside the content area.
    fn set_body_offsets(&mut self, top: f64, bottom: f64);

    fn set_grid_visible(&mut self, visible: bool);

    // ─── Tabs and preview ────────────────────────────────────────────────

    fn set_active_tab(&mut self, tab: DocumentTab);

    /// Show or hide the layout surface. The preview surface is raised via
    /// stacking order instead of being torn down, so switching back does
    /// not regenerate the artifact.
    fn set_layout_visible(&mut self, visible: bool);
    fn set_preview_raised(&mut self, raised: bool);

    /// Embed (or clear) the preview artifact by its opaque locator.
    fn set_preview_content(&mut self, locator: Option<&str>);

    fn set_preview_tab_visible(&mut self, visible: bool);
    fn set_tab_strip_visible(&mut self, visible: bool);

    /// Show or hide the spreadsheet-download affordance on the preview tab.
    fn set_spreadsheet_download_visible(&mut self, visible: bool);
}

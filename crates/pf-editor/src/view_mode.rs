//! View-mode state machine: editable layout vs. rendered preview.
//!
//! The preview surface is raised and lowered via stacking order instead of
//! being torn down, so re-entering preview mode never regenerates the
//! artifact. The preview tab affordance exists only while a preview does.

use pf_surface::{DocumentTab, SurfaceView};

/// Tracks the active tab and the lazily-materialized preview artifact.
#[derive(Debug, Default)]
pub struct ViewModeMachine {
    tab: Option<DocumentTab>,
    preview_locator: Option<String>,
    spreadsheet_enabled: bool,
}

impl ViewModeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently shown tab. Layout until the first `set_tab`.
    pub fn tab(&self) -> DocumentTab {
        self.tab.unwrap_or(DocumentTab::Layout)
    }

    pub fn preview_exists(&self) -> bool {
        self.preview_locator.is_some()
    }

    pub fn preview_locator(&self) -> Option<&str> {
        self.preview_locator.as_deref()
    }

    /// Enable the spreadsheet-download affordance on the preview tab.
    /// Driven by the host's document properties.
    pub fn set_spreadsheet_enabled(&mut self, enabled: bool, view: &mut dyn SurfaceView) {
        self.spreadsheet_enabled = enabled;
        self.refresh_tabs(view);
    }

    pub fn spreadsheet_enabled(&self) -> bool {
        self.spreadsheet_enabled
    }

    /// Switch tabs. `Layout` always succeeds; `Preview` is honored only
    /// while a preview exists — otherwise the call is a no-op and the mode
    /// stays unchanged.
    pub fn set_tab(&mut self, tab: DocumentTab, view: &mut dyn SurfaceView) {
        match tab {
            DocumentTab::Layout => {
                self.tab = Some(DocumentTab::Layout);
                view.set_active_tab(DocumentTab::Layout);
                view.set_layout_visible(true);
                view.set_preview_raised(false);
            }
            DocumentTab::Preview if self.preview_exists() => {
                self.tab = Some(DocumentTab::Preview);
                view.set_active_tab(DocumentTab::Preview);
                view.set_layout_visible(false);
                view.set_preview_raised(true);
            }
            DocumentTab::Preview => {
                log::debug!("preview tab requested but no preview exists; staying put");
            }
        }
    }

    /// Materialize a preview from its opaque locator, replacing any
    /// existing content, and switch to it.
    pub fn open_preview(&mut self, locator: &str, view: &mut dyn SurfaceView) {
        self.preview_locator = Some(locator.to_string());
        view.set_preview_content(Some(locator));
        self.set_tab(DocumentTab::Preview, view);
        self.refresh_tabs(view);
    }

    /// Evict the preview and force the layout tab.
    pub fn close_preview(&mut self, view: &mut dyn SurfaceView) {
        self.preview_locator = None;
        view.set_preview_content(None);
        self.set_tab(DocumentTab::Layout, view);
        self.refresh_tabs(view);
    }

    /// Derive tab affordance visibility: the preview tab shows iff a
    /// preview exists, and the strip shows once more than one tab is
    /// visible.
    pub fn refresh_tabs(&self, view: &mut dyn SurfaceView) {
        let preview_tab = self.preview_exists();
        view.set_preview_tab_visible(preview_tab);
        let visible_tabs = 1 + usize::from(preview_tab);
        view.set_tab_strip_visible(visible_tabs > 1);
        // The download icon lives on the preview tab, so it shows with it.
        view.set_spreadsheet_download_visible(preview_tab && self.spreadsheet_enabled);
    }
}

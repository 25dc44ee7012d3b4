//! Document facade: the interactive page surface.
//!
//! Owns the presentation handle, the derived page geometry, the drag
//! controller, and the view-mode machine, and exposes the operations the
//! embedding application drives: property updates, gestures, grid and tab
//! toggles. External collaborators come in through [`EditorContext`].

use crate::commands::CommandSink;
use crate::drag::{DragController, DragKind};
use crate::input::Modifiers;
use crate::view_mode::ViewModeMachine;
use pf_core::properties::{PageProperties, PropertySource, flag};
use pf_core::{Band, ContainerId, Divider, ElementType, PageGeometry, Rect, UnitConverter, compute_layout};
use pf_surface::{ContainerRegistry, ContainerResolver, DocumentTab, SurfaceView};

const DEFAULT_GRID_SIZE: f64 = 10.0;

/// The external collaborators the document consults: configuration,
/// unit conversion, the command pipeline, and the selection query.
pub trait EditorContext {
    fn properties(&self) -> &dyn PropertySource;
    fn units(&self) -> &dyn UnitConverter;
    fn sink(&mut self) -> &mut dyn CommandSink;
    fn has_active_selection(&self) -> bool;
    fn deselect_all(&mut self);
    /// Export the rendered report as a spreadsheet. Production and delivery
    /// of the file belong to the host.
    fn download_spreadsheet(&mut self);
}

/// The interactive canvas controller.
pub struct Document<V: SurfaceView> {
    view: V,
    geometry: PageGeometry,
    resolver: ContainerResolver,
    drag: DragController,
    mode: ViewModeMachine,
    grid_visible: bool,
    grid_size: f64,
}

impl<V: SurfaceView> Document<V> {
    pub fn new(view: V, show_grid: bool) -> Self {
        Self {
            view,
            geometry: PageGeometry::default(),
            resolver: ContainerResolver::new(),
            drag: DragController::new(),
            mode: ViewModeMachine::new(),
            grid_visible: show_grid,
            grid_size: DEFAULT_GRID_SIZE,
        }
    }

    /// Build the initial surface: geometry, grid, tab affordances, and the
    /// layout tab active.
    pub fn render(&mut self, ctx: &mut dyn EditorContext) {
        self.view.set_grid_visible(self.grid_visible);
        self.refresh_geometry(ctx);
        self.mode
            .set_spreadsheet_enabled(flag(ctx.properties(), "enable_spreadsheet"), &mut self.view);
        self.mode.refresh_tabs(&mut self.view);
        self.mode.set_tab(DocumentTab::Layout, &mut self.view);
    }

    /// Pointer press on the empty page background deselects any active
    /// selection.
    pub fn background_pressed(&mut self, ctx: &mut dyn EditorContext) {
        if ctx.has_active_selection() {
            ctx.deselect_all();
        }
    }

    // ─── Geometry ────────────────────────────────────────────────────────

    /// Recompute the whole geometry from the property source and push it to
    /// the view in one pass, so dependent positions never partially apply.
    fn refresh_geometry(&mut self, ctx: &mut dyn EditorContext) {
        let props = PageProperties::from_source(ctx.properties());
        self.geometry = compute_layout(&props, ctx.units());
        self.apply_geometry();
    }

    fn apply_geometry(&mut self) {
        let g = self.geometry;
        self.view.set_page_size(g.page_width, g.page_height);
        self.view
            .set_content_insets(g.content_left, g.content_top, g.content_right, g.content_bottom);

        self.view
            .set_divider(Divider::MarginLeft, Some(g.dividers.margin_left));
        self.view
            .set_divider(Divider::MarginTop, Some(g.dividers.margin_top));
        self.view
            .set_divider(Divider::MarginRight, g.dividers.margin_right);
        self.view
            .set_divider(Divider::MarginBottom, g.dividers.margin_bottom);
        self.view.set_divider(Divider::Header, g.dividers.header);
        self.view.set_divider(Divider::Footer, g.dividers.footer);

        self.view
            .set_band_visible(Band::Header, g.header_height.is_some());
        self.view
            .set_band_height(Band::Header, g.header_height.unwrap_or(0.0));
        self.view
            .set_band_visible(Band::Footer, g.footer_height.is_some());
        self.view
            .set_band_height(Band::Footer, g.footer_height.unwrap_or(0.0));
        self.view.set_body_offsets(g.body_top, g.body_bottom);
    }

    pub fn update_page_size(&mut self, ctx: &mut dyn EditorContext) {
        self.refresh_geometry(ctx);
    }

    pub fn update_page_margins(&mut self, ctx: &mut dyn EditorContext) {
        self.refresh_geometry(ctx);
    }

    pub fn update_header(&mut self, ctx: &mut dyn EditorContext) {
        self.refresh_geometry(ctx);
    }

    pub fn update_footer(&mut self, ctx: &mut dyn EditorContext) {
        self.refresh_geometry(ctx);
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// The presentation handle, e.g. for inspection in tests.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Pixel rectangle of a band, or `None` for a hidden band.
    pub fn band_frame(&self, band: Band) -> Option<Rect> {
        self.geometry.band_frame(band)
    }

    /// Update the surface's page-space origin used to translate absolute
    /// pointer positions.
    pub fn set_surface_origin(&mut self, x: f64, y: f64) {
        self.resolver.set_origin(x, y);
    }

    // ─── Grid ────────────────────────────────────────────────────────────

    pub fn is_grid_visible(&self) -> bool {
        self.grid_visible
    }

    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
        self.view.set_grid_visible(self.grid_visible);
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    // ─── View mode ───────────────────────────────────────────────────────

    pub fn set_tab(&mut self, tab: DocumentTab) {
        self.mode.set_tab(tab, &mut self.view);
    }

    pub fn open_preview(&mut self, locator: &str) {
        self.mode.open_preview(locator, &mut self.view);
    }

    pub fn close_preview(&mut self) {
        self.mode.close_preview(&mut self.view);
    }

    pub fn active_tab(&self) -> DocumentTab {
        self.mode.tab()
    }

    pub fn preview_exists(&self) -> bool {
        self.mode.preview_exists()
    }

    /// Trigger the spreadsheet export of the current preview. Ignored while
    /// no preview exists or the feature is disabled, since its affordance is
    /// only shown on the preview tab.
    pub fn download_spreadsheet(&mut self, ctx: &mut dyn EditorContext) {
        if self.mode.preview_exists() && self.mode.spreadsheet_enabled() {
            ctx.download_spreadsheet();
        }
    }

    // ─── Internal move/resize gestures ───────────────────────────────────

    pub fn start_drag(
        &mut self,
        x: f64,
        y: f64,
        origin: Option<ContainerId>,
        element_type: ElementType,
        kind: DragKind,
    ) {
        self.drag.start_drag(x, y, origin, element_type, kind);
    }

    pub fn pointer_moved(
        &mut self,
        x: f64,
        y: f64,
        modifiers: Modifiers,
        registry: &dyn ContainerRegistry,
        ctx: &mut dyn EditorContext,
    ) {
        if let Some(request) = self
            .drag
            .pointer_moved(x, y, modifiers, &self.resolver, registry)
        {
            ctx.sink().execute(request);
        }
    }

    pub fn stop_drag(&mut self, registry: &dyn ContainerRegistry, ctx: &mut dyn EditorContext) {
        if let Some(request) = self.drag.stop_drag(registry) {
            ctx.sink().execute(request);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_dragged(&self) -> bool {
        self.drag.is_dragged()
    }

    // ─── External palette gestures ───────────────────────────────────────

    pub fn start_browser_drag(&mut self, element_type: ElementType) {
        self.drag.start_browser_drag(element_type);
    }

    pub fn drag_entered(&mut self) {
        self.drag.drag_entered();
    }

    /// Returns `true` when the caller must suppress the platform's default
    /// drag-over handling so the drop event fires.
    pub fn drag_over(&mut self, x: f64, y: f64, registry: &dyn ContainerRegistry) -> bool {
        self.drag.drag_over(x, y, &self.resolver, registry)
    }

    pub fn drag_left(&mut self, registry: &dyn ContainerRegistry) {
        self.drag.drag_left(registry);
    }

    /// Complete a palette drop. Snapping applies when the grid is visible
    /// and the modifier key is not held at drop time.
    pub fn drop(
        &mut self,
        x: f64,
        y: f64,
        modifiers: Modifiers,
        registry: &dyn ContainerRegistry,
        ctx: &mut dyn EditorContext,
    ) {
        let snap_grid = (self.grid_visible && !modifiers.ctrl).then_some(self.grid_size);
        if let Some(request) = self.drag.drop(x, y, snap_grid, &self.resolver, registry) {
            ctx.sink().execute(request);
        }
    }
}

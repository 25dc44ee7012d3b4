//! End-to-end gesture scenarios driven through the `Document` facade.

use pf_core::model::Scale;
use pf_core::properties::{MapProperties, PropertySource};
use pf_core::{Band, ContainerId, Divider, ElementType, UnitConverter};
use pf_editor::drag::DragKind;
use pf_editor::{CommandSink, Document, EditorContext, Modifiers, MutationRequest};
use pf_surface::{BandRegistry, DocumentTab, SurfaceView};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

/// Records executed mutation requests.
#[derive(Default)]
struct RecordingSink {
    requests: Vec<MutationRequest>,
}

impl CommandSink for RecordingSink {
    fn execute(&mut self, request: MutationRequest) {
        self.requests.push(request);
    }
}

/// Minimal editor environment around the document.
struct TestContext {
    props: MapProperties,
    units: Scale,
    sink: RecordingSink,
    selection_active: bool,
    deselect_calls: usize,
    download_calls: usize,
}

impl TestContext {
    fn new() -> Self {
        let mut props = MapProperties::new();
        props.set("page_width", 600.0);
        props.set("page_height", 800.0);
        props.set("margin_left", "20");
        props.set("margin_top", 20.0);
        props.set("margin_right", 0.0);
        props.set("margin_bottom", "10");
        props.set("header", true);
        props.set("header_size", "50");
        props.set("enable_spreadsheet", true);
        Self {
            props,
            units: Scale(1.0),
            sink: RecordingSink::default(),
            selection_active: false,
            deselect_calls: 0,
            download_calls: 0,
        }
    }
}

impl EditorContext for TestContext {
    fn properties(&self) -> &dyn PropertySource {
        &self.props
    }
    fn units(&self) -> &dyn UnitConverter {
        &self.units
    }
    fn sink(&mut self) -> &mut dyn CommandSink {
        &mut self.sink
    }
    fn has_active_selection(&self) -> bool {
        self.selection_active
    }
    fn deselect_all(&mut self) {
        self.deselect_calls += 1;
    }
    fn download_spreadsheet(&mut self) {
        self.download_calls += 1;
    }
}

/// Records what the document pushes to the presentation layer.
#[derive(Default)]
struct RecordingView {
    page_size: Option<(f64, f64)>,
    insets: Option<(f64, f64, f64, f64)>,
    dividers: HashMap<String, Option<f64>>,
    band_heights: HashMap<String, f64>,
    body_offsets: Option<(f64, f64)>,
    grid_visible: Option<bool>,
    active_tab: Option<DocumentTab>,
    preview_content: Option<String>,
    download_visible: Option<bool>,
}

impl SurfaceView for RecordingView {
    fn set_page_size(&mut self, width: f64, height: f64) {
        self.page_size = Some((width, height));
    }
    fn set_content_insets(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        self.insets = Some((left, top, right, bottom));
    }
    fn set_divider(&mut self, divider: Divider, position: Option<f64>) {
        self.dividers.insert(format!("{divider:?}"), position);
    }
    fn set_band_visible(&mut self, _band: Band, _visible: bool) {}
    fn set_band_height(&mut self, band: Band, height: f64) {
        self.band_heights.insert(format!("{band:?}"), height);
    }
    fn set_body_offsets(&mut self, top: f64, bottom: f64) {
        self.body_offsets = Some((top, bottom));
    }
    fn set_grid_visible(&mut self, visible: bool) {
        self.grid_visible = Some(visible);
    }
    fn set_active_tab(&mut self, tab: DocumentTab) {
        self.active_tab = Some(tab);
    }
    fn set_layout_visible(&mut self, _visible: bool) {}
    fn set_preview_raised(&mut self, _raised: bool) {}
    fn set_preview_content(&mut self, locator: Option<&str>) {
        self.preview_content = locator.map(str::to_string);
    }
    fn set_preview_tab_visible(&mut self, _visible: bool) {}
    fn set_tab_strip_visible(&mut self, _visible: bool) {}
    fn set_spreadsheet_download_visible(&mut self, visible: bool) {
        self.download_visible = Some(visible);
    }
}

fn setup() -> (Document<RecordingView>, TestContext, BandRegistry) {
    let mut ctx = TestContext::new();
    let mut doc = Document::new(RecordingView::default(), true);
    doc.render(&mut ctx);
    let registry = BandRegistry::from_geometry(doc.geometry());
    (doc, ctx, registry)
}

#[test]
fn render_pushes_the_derived_geometry() {
    let (doc, _ctx, _registry) = setup();
    let view = doc.view();

    assert_eq!(view.page_size, Some((600.0, 800.0)));
    assert_eq!(view.insets, Some((19.0, 19.0, 0.0, 10.0)));
    assert_eq!(view.dividers["MarginRight"], None);
    assert_eq!(view.dividers["MarginBottom"], Some(10.0));
    assert_eq!(view.dividers["Header"], Some(69.0));
    assert_eq!(view.band_heights["Header"], 50.0);
    assert_eq!(view.body_offsets, Some((50.0, 0.0)));
    assert_eq!(view.grid_visible, Some(true));
    assert_eq!(view.active_tab, Some(DocumentTab::Layout));
    assert_eq!(view.preview_content, None);
    assert_eq!(doc.active_tab(), DocumentTab::Layout);
}

#[test]
fn click_and_release_produces_no_mutation() {
    let (mut doc, mut ctx, registry) = setup();

    doc.start_drag(
        100.0,
        100.0,
        Some(ContainerId::intern("band_content")),
        ElementType::Text,
        DragKind::Move,
    );
    assert!(doc.is_dragging());
    assert!(!doc.is_dragged());
    doc.stop_drag(&registry, &mut ctx);

    assert_eq!(
        ctx.sink.requests,
        vec![MutationRequest::DragSelection {
            dx: 0.0,
            dy: 0.0,
            kind: DragKind::Move,
            destination: None,
            snapped: false,
            committed: false,
        }],
        "only the reverting zero-delta update goes out"
    );
    assert!(!doc.is_dragging());
}

#[test]
fn move_gesture_previews_then_commits() {
    let (mut doc, mut ctx, registry) = setup();

    doc.start_drag(
        100.0,
        100.0,
        Some(ContainerId::intern("band_content")),
        ElementType::Text,
        DragKind::Move,
    );
    doc.pointer_moved(115.0, 100.0, Modifiers::NONE, &registry, &mut ctx);
    doc.pointer_moved(130.0, 120.0, Modifiers::NONE, &registry, &mut ctx);
    doc.stop_drag(&registry, &mut ctx);

    let committed: Vec<_> = ctx
        .sink
        .requests
        .iter()
        .filter(|r| r.is_committing())
        .collect();
    assert_eq!(committed.len(), 1);
    assert_eq!(
        committed[0],
        &MutationRequest::DragSelection {
            dx: 30.0,
            dy: 20.0,
            kind: DragKind::Move,
            destination: Some(ContainerId::intern("band_content")),
            snapped: true,
            committed: true,
        }
    );
    // The two pointer moves each produced a live preview first.
    assert_eq!(ctx.sink.requests.len(), 3);
}

#[test]
fn palette_drop_snaps_to_the_visible_grid() {
    let (mut doc, mut ctx, registry) = setup();

    doc.start_browser_drag(ElementType::Text);
    doc.drag_entered();
    assert!(doc.drag_over(23.0, 47.0, &registry));
    doc.drop(23.0, 47.0, Modifiers::NONE, &registry, &mut ctx);

    assert_eq!(
        ctx.sink.requests,
        vec![MutationRequest::InsertElement {
            element_type: ElementType::Text,
            x: 20.0,
            y: 50.0,
            container: ContainerId::intern("band_header"),
        }]
    );
}

#[test]
fn modifier_held_at_drop_time_keeps_the_raw_position() {
    let (mut doc, mut ctx, registry) = setup();

    doc.start_browser_drag(ElementType::Text);
    doc.drop(23.0, 47.0, Modifiers::CTRL, &registry, &mut ctx);

    assert_eq!(
        ctx.sink.requests,
        vec![MutationRequest::InsertElement {
            element_type: ElementType::Text,
            x: 23.0,
            y: 47.0,
            container: ContainerId::intern("band_header"),
        }]
    );
}

#[test]
fn hidden_grid_disables_drop_snapping() {
    let (mut doc, mut ctx, registry) = setup();
    doc.toggle_grid();
    assert!(!doc.is_grid_visible());

    doc.start_browser_drag(ElementType::Text);
    doc.drop(23.0, 47.0, Modifiers::NONE, &registry, &mut ctx);

    match &ctx.sink.requests[..] {
        [MutationRequest::InsertElement { x, y, .. }] => {
            assert_eq!((*x, *y), (23.0, 47.0));
        }
        other => panic!("expected one InsertElement, got {other:?}"),
    }
}

#[test]
fn rejected_or_missed_drops_stay_silent() {
    let (mut doc, mut ctx, registry) = setup();

    // Header rejects tables.
    doc.start_browser_drag(ElementType::Table);
    doc.drop(23.0, 47.0, Modifiers::NONE, &registry, &mut ctx);
    assert!(ctx.sink.requests.is_empty());

    // Outside every container.
    doc.start_browser_drag(ElementType::Text);
    doc.drop(-40.0, -40.0, Modifiers::NONE, &registry, &mut ctx);
    assert!(ctx.sink.requests.is_empty());
}

#[test]
fn nested_enter_leave_keeps_hover_until_the_last_leave() {
    let (mut doc, _ctx, registry) = setup();

    doc.start_browser_drag(ElementType::Text);
    doc.drag_entered();
    doc.drag_over(23.0, 10.0, &registry);
    doc.drag_entered();
    doc.drag_left(&registry);
    assert!(registry.band(Band::Header).unwrap().is_drag_over());

    doc.drag_left(&registry);
    assert!(!registry.band(Band::Header).unwrap().is_drag_over());
}

#[test]
fn preview_lifecycle_through_the_document() {
    let (mut doc, _ctx, _registry) = setup();

    assert!(!doc.preview_exists());
    doc.set_tab(DocumentTab::Preview);
    assert_eq!(doc.active_tab(), DocumentTab::Layout);

    doc.open_preview("artifact://report/7");
    assert_eq!(doc.active_tab(), DocumentTab::Preview);

    doc.set_tab(DocumentTab::Layout);
    doc.set_tab(DocumentTab::Preview);
    assert_eq!(doc.active_tab(), DocumentTab::Preview);
    assert!(doc.preview_exists());

    doc.close_preview();
    assert_eq!(doc.active_tab(), DocumentTab::Layout);
    doc.set_tab(DocumentTab::Preview);
    assert_eq!(doc.active_tab(), DocumentTab::Layout);
}

#[test]
fn spreadsheet_download_needs_an_enabled_preview() {
    let (mut doc, mut ctx, _registry) = setup();
    assert_eq!(doc.view().download_visible, Some(false));

    // Before any preview there is nothing to export.
    doc.download_spreadsheet(&mut ctx);
    assert_eq!(ctx.download_calls, 0);

    doc.open_preview("artifact://report/7");
    assert_eq!(doc.view().download_visible, Some(true));
    doc.download_spreadsheet(&mut ctx);
    assert_eq!(ctx.download_calls, 1);

    doc.close_preview();
    assert_eq!(doc.view().download_visible, Some(false));
    doc.download_spreadsheet(&mut ctx);
    assert_eq!(ctx.download_calls, 1);
}

#[test]
fn disabled_spreadsheet_property_hides_the_download() {
    let mut ctx = TestContext::new();
    ctx.props.set("enable_spreadsheet", false);
    let mut doc = Document::new(RecordingView::default(), true);
    doc.render(&mut ctx);

    doc.open_preview("artifact://report/7");
    assert_eq!(doc.view().download_visible, Some(false));
    doc.download_spreadsheet(&mut ctx);
    assert_eq!(ctx.download_calls, 0);
}

#[test]
fn background_press_deselects_only_with_a_selection() {
    let (mut doc, mut ctx, _registry) = setup();

    doc.background_pressed(&mut ctx);
    assert_eq!(ctx.deselect_calls, 0);

    ctx.selection_active = true;
    doc.background_pressed(&mut ctx);
    assert_eq!(ctx.deselect_calls, 1);
}

#[test]
fn surface_origin_offsets_every_gesture_position() {
    let (mut doc, mut ctx, registry) = setup();
    doc.set_surface_origin(100.0, 200.0);

    doc.start_browser_drag(ElementType::Text);
    // Absolute (123, 247) is surface-local (23, 47) — the header band.
    doc.drop(123.0, 247.0, Modifiers::NONE, &registry, &mut ctx);

    assert_eq!(
        ctx.sink.requests,
        vec![MutationRequest::InsertElement {
            element_type: ElementType::Text,
            x: 20.0,
            y: 50.0,
            container: ContainerId::intern("band_header"),
        }]
    );
}

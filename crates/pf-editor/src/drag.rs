//! Drag/drop interaction state machine.
//!
//! Two gesture kinds share one session slot:
//!
//! - **Internal** — move or resize of an already-selected element,
//!   driven by `start_drag` / `pointer_moved` / `stop_drag`.
//! - **External** — a palette drag inserting a new element type,
//!   driven by `start_browser_drag` / `drag_entered` / `drag_over` /
//!   `drag_left` / `drop`.
//!
//! Exactly one gesture is in progress at a time. Callers must not start a
//! new gesture while one is active; if they do anyway, the stale session is
//! replaced rather than panicking. There is no separate cancel operation —
//! a gesture that ends with zero net movement is a no-op commit.

use crate::commands::MutationRequest;
use crate::input::Modifiers;
use pf_core::{ContainerId, ElementType, snap_to_grid};
use pf_surface::{ContainerRegistry, ContainerResolver};
use serde::{Deserialize, Serialize};

/// Which geometry an internal gesture manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragKind {
    /// Move the selection; the gesture may carry it into another container.
    Move,
    /// Resize by one edge or corner handle; the container never changes.
    Resize(ResizeHandle),
}

impl DragKind {
    pub fn is_move(self) -> bool {
        matches!(self, DragKind::Move)
    }
}

/// Resize handles by edge or corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeHandle {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Internal(InternalDrag),
    External(ExternalDrag),
}

/// Session of an in-progress move/resize. Created on gesture start,
/// mutated on every pointer move, consumed on stop.
#[derive(Debug)]
struct InternalDrag {
    kind: DragKind,
    element_type: ElementType,
    /// Container under the pointer at gesture start.
    origin: Option<ContainerId>,
    /// Container under the pointer now (move gestures only).
    current: Option<ContainerId>,
    start_x: f64,
    start_y: f64,
    current_x: f64,
    current_y: f64,
    snap_to_grid: bool,
}

/// Session of an in-progress palette drag.
#[derive(Debug)]
struct ExternalDrag {
    element_type: ElementType,
    /// Net enter/leave nesting depth. Crossing a nested element's boundary
    /// fires a leave without truly leaving the surface; hover state is only
    /// torn down when this returns to zero.
    enter_count: u32,
    /// Container the pointer was last seen over.
    hover: Option<ContainerId>,
}

/// The interaction state machine. Owns the single gesture slot.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// An internal move/resize gesture is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Internal(_))
    }

    /// The active internal gesture has moved from its start position.
    /// Distinguishes an intentional drag from a click-and-release.
    pub fn is_dragged(&self) -> bool {
        match &self.state {
            DragState::Internal(drag) => {
                drag.start_x != drag.current_x || drag.start_y != drag.current_y
            }
            _ => false,
        }
    }

    /// An external palette drag is armed.
    pub fn is_browser_drag_active(&self) -> bool {
        matches!(self.state, DragState::External(_))
    }

    // ─── Internal move/resize ────────────────────────────────────────────

    /// Begin a move/resize gesture at absolute position (x, y).
    pub fn start_drag(
        &mut self,
        x: f64,
        y: f64,
        origin: Option<ContainerId>,
        element_type: ElementType,
        kind: DragKind,
    ) {
        if !matches!(self.state, DragState::Idle) {
            log::debug!("gesture started while another was active; replacing the stale session");
        }
        self.state = DragState::Internal(InternalDrag {
            kind,
            element_type,
            origin,
            current: None,
            start_x: x,
            start_y: y,
            current_x: x,
            current_y: y,
            snap_to_grid: false,
        });
    }

    /// Pointer moved during an internal gesture. Returns a non-committing
    /// live-preview update, or `None` when no internal gesture is active.
    pub fn pointer_moved(
        &mut self,
        x: f64,
        y: f64,
        modifiers: Modifiers,
        resolver: &ContainerResolver,
        registry: &dyn ContainerRegistry,
    ) -> Option<MutationRequest> {
        let DragState::Internal(drag) = &mut self.state else {
            return None;
        };

        if drag.kind.is_move() {
            let container = resolver.resolve(registry, x, y);
            let container_id = container.map(|c| c.id());
            // Hover feedback only changes on a container-boundary crossing.
            if container_id != drag.current {
                registry.clear_drag_over();
                if let Some(c) = container
                    && drag.origin != Some(c.id())
                {
                    c.drag_over(drag.element_type);
                }
                drag.current = container_id;
            }
        }

        drag.current_x = x;
        drag.current_y = y;
        drag.snap_to_grid = !modifiers.ctrl;

        Some(MutationRequest::DragSelection {
            dx: x - drag.start_x,
            dy: y - drag.start_y,
            kind: drag.kind,
            destination: None,
            snapped: drag.snap_to_grid,
            committed: false,
        })
    }

    /// End the internal gesture. A zero net delta produces a non-committing
    /// zero-delta update so any live preview is reverted; otherwise the
    /// update commits, carrying the destination container for move gestures.
    /// Hover indicators are cleared and the slot reset regardless of outcome.
    pub fn stop_drag(&mut self, registry: &dyn ContainerRegistry) -> Option<MutationRequest> {
        let drag = match std::mem::take(&mut self.state) {
            DragState::Internal(drag) => drag,
            other => {
                // Not our gesture kind; leave it undisturbed.
                self.state = other;
                return None;
            }
        };
        registry.clear_drag_over();

        let dx = drag.current_x - drag.start_x;
        let dy = drag.current_y - drag.start_y;
        if dx != 0.0 || dy != 0.0 {
            Some(MutationRequest::DragSelection {
                dx,
                dy,
                kind: drag.kind,
                destination: if drag.kind.is_move() {
                    drag.current
                } else {
                    None
                },
                snapped: drag.snap_to_grid,
                committed: true,
            })
        } else {
            Some(MutationRequest::DragSelection {
                dx: 0.0,
                dy: 0.0,
                kind: drag.kind,
                destination: None,
                snapped: drag.snap_to_grid,
                committed: false,
            })
        }
    }

    // ─── External palette insertion ──────────────────────────────────────

    /// Arm the controller for an externally-originated drag of a new
    /// element type.
    pub fn start_browser_drag(&mut self, element_type: ElementType) {
        if !matches!(self.state, DragState::Idle) {
            log::debug!("palette drag armed while a gesture was active; replacing it");
        }
        self.state = DragState::External(ExternalDrag {
            element_type,
            enter_count: 0,
            hover: None,
        });
    }

    /// Drag entered the surface or one of its children.
    pub fn drag_entered(&mut self) {
        if let DragState::External(drag) = &mut self.state {
            drag.enter_count += 1;
        }
    }

    /// Drag moved over the surface. Returns `true` when the caller must
    /// suppress the platform's default handling so the drop can be received.
    pub fn drag_over(
        &mut self,
        x: f64,
        y: f64,
        resolver: &ContainerResolver,
        registry: &dyn ContainerRegistry,
    ) -> bool {
        let DragState::External(drag) = &mut self.state else {
            return false;
        };

        let container = resolver.resolve(registry, x, y);
        let container_id = container.map(|c| c.id());
        if container_id != drag.hover {
            registry.clear_drag_over();
            if let Some(c) = container {
                c.drag_over(drag.element_type);
            }
            drag.hover = container_id;
        }
        true
    }

    /// Drag left the surface or one of its children. Hover state is torn
    /// down only when the net nesting depth returns to zero.
    pub fn drag_left(&mut self, registry: &dyn ContainerRegistry) {
        if let DragState::External(drag) = &mut self.state {
            drag.enter_count = drag.enter_count.saturating_sub(1);
            if drag.enter_count == 0 {
                registry.clear_drag_over();
                drag.hover = None;
            }
        }
    }

    /// Drop at absolute position (x, y). Emits one insertion request when
    /// the container under the pointer accepts the dragged element type;
    /// a missing or rejecting container is silently ignored. `snap_grid`
    /// carries the grid size when snapping applies at drop time.
    pub fn drop(
        &mut self,
        x: f64,
        y: f64,
        snap_grid: Option<f64>,
        resolver: &ContainerResolver,
        registry: &dyn ContainerRegistry,
    ) -> Option<MutationRequest> {
        let drag = match std::mem::take(&mut self.state) {
            DragState::External(drag) => drag,
            other => {
                self.state = other;
                return None;
            }
        };
        registry.clear_drag_over();

        let container = resolver.resolve(registry, x, y)?;
        if !container.is_element_allowed(drag.element_type) {
            log::debug!(
                "drop of {:?} rejected by {}",
                drag.element_type,
                container.id()
            );
            return None;
        }

        let (local_x, local_y) = resolver.to_local(x, y);
        let (offset_x, offset_y) = container.offset();
        let mut px = local_x - offset_x;
        let mut py = local_y - offset_y;
        if let Some(grid) = snap_grid {
            px = snap_to_grid(px, grid);
            py = snap_to_grid(py, grid);
        }

        Some(MutationRequest::InsertElement {
            element_type: drag.element_type,
            x: px,
            y: py,
            container: container.id(),
        })
    }
}

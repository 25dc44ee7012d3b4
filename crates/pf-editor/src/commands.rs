//! Mutation descriptors handed to the embedding application's command
//! pipeline.
//!
//! The core never creates or mutates placed elements itself — a completed
//! gesture produces exactly one descriptor, and the command sink's undo and
//! redo semantics are opaque here. Live drag previews travel through the
//! same channel with `committed: false`.

use crate::drag::DragKind;
use pf_core::{ContainerId, ElementType};
use serde::{Deserialize, Serialize};

/// A single mutation produced by a gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MutationRequest {
    /// Insert a new element dropped from the palette, positioned in the
    /// target container's local coordinates.
    InsertElement {
        element_type: ElementType,
        x: f64,
        y: f64,
        container: ContainerId,
    },
    /// Move or resize the current selection. `committed: false` is a live
    /// preview (a zero delta reverts it); `committed: true` is the real
    /// mutation. `destination` is set for committed move gestures only.
    DragSelection {
        dx: f64,
        dy: f64,
        kind: DragKind,
        destination: Option<ContainerId>,
        snapped: bool,
        committed: bool,
    },
}

impl MutationRequest {
    /// Whether this request mutates the document (as opposed to updating a
    /// live preview).
    pub fn is_committing(&self) -> bool {
        match self {
            MutationRequest::InsertElement { .. } => true,
            MutationRequest::DragSelection { committed, .. } => *committed,
        }
    }
}

/// External command executor with opaque undo/redo.
pub trait CommandSink {
    fn execute(&mut self, request: MutationRequest);
}

//! Absolute pointer position → container lookup.
//!
//! Pointer events arrive in page space; registered containers live in the
//! editing surface's local space. The resolver subtracts the surface origin
//! and delegates to the registry. Re-evaluated on every pointer move during
//! a drag — container membership changes as the pointer crosses band
//! boundaries.

use crate::container::{Container, ContainerRegistry};

/// Translates absolute pointer positions into the editing surface's
/// coordinate space before hit testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerResolver {
    origin_x: f64,
    origin_y: f64,
}

impl ContainerResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the surface's page-space origin (e.g. after the panel moves).
    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.origin_x = x;
        self.origin_y = y;
    }

    /// Convert an absolute position to surface-local coordinates.
    pub fn to_local(&self, abs_x: f64, abs_y: f64) -> (f64, f64) {
        (abs_x - self.origin_x, abs_y - self.origin_y)
    }

    /// The container under the absolute position, or `None` when the
    /// position falls outside all registered containers.
    pub fn resolve<'a>(
        &self,
        registry: &'a dyn ContainerRegistry,
        abs_x: f64,
        abs_y: f64,
    ) -> Option<&'a dyn Container> {
        let (x, y) = self.to_local(abs_x, abs_y);
        registry.container_at(x, y)
    }
}

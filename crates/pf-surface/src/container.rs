//! Container capability: anything that can accept dropped or moved elements.
//!
//! Bands and nested grouping elements are interchangeable behind this trait;
//! there is no shared base type. Containers are supplied by the surrounding
//! layout, registered with a [`ContainerRegistry`], and queried by point
//! during drag gestures.

use pf_core::{ContainerId, ElementType};

/// A region that can accept placed elements and reports its own placement
/// rules and origin offset.
///
/// Hover indication is visual state owned by the container, so the methods
/// take `&self`; implementations use interior mutability where needed.
pub trait Container {
    /// Whether `element_type` may be placed in this container.
    fn is_element_allowed(&self, element_type: ElementType) -> bool;

    /// Origin offset of this container in surface-local coordinates.
    fn offset(&self) -> (f64, f64);

    /// Stable identifier.
    fn id(&self) -> ContainerId;

    /// Show the hover-accept indication for a drag of `element_type`.
    fn drag_over(&self, element_type: ElementType);

    /// Clear the hover-accept indication.
    fn clear_drag_over(&self);
}

/// The surrounding application's spatial index of currently registered
/// containers, queryable by surface-local point.
pub trait ContainerRegistry {
    /// Topmost container at a surface-local position, or `None` when the
    /// position falls outside every registered container.
    fn container_at(&self, x: f64, y: f64) -> Option<&dyn Container>;

    /// Look up a container by identifier.
    fn container(&self, id: ContainerId) -> Option<&dyn Container>;

    /// Clear the hover indication on every registered container.
    fn clear_drag_over(&self);
}

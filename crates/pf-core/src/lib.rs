pub mod geometry;
pub mod id;
pub mod model;
pub mod properties;
pub mod snap;

pub use geometry::{DividerLayout, PageGeometry, compute_layout};
pub use id::ContainerId;
pub use model::{Band, Divider, ElementType, Rect, Scale, UnitConverter};
pub use properties::{PageProperties, PropertySource, PropertyValue};
pub use snap::snap_to_grid;

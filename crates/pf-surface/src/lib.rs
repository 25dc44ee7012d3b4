pub mod bands;
pub mod container;
pub mod resolve;
pub mod view;

pub use bands::{BandContainer, BandRegistry};
pub use container::{Container, ContainerRegistry};
pub use resolve::ContainerResolver;
pub use view::{DocumentTab, SurfaceView};

pub mod commands;
pub mod document;
pub mod drag;
pub mod input;
pub mod view_mode;

pub use commands::{CommandSink, MutationRequest};
pub use document::{Document, EditorContext};
pub use drag::{DragController, DragKind, ResizeHandle};
pub use input::Modifiers;
pub use view_mode::ViewModeMachine;

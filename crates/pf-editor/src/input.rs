//! Input abstraction layer.
//!
//! Normalizes the modifier-key state carried by pointer and drop events.
//! Grid snapping is suppressed while Ctrl is held, re-evaluated live on
//! every pointer move during a gesture.

/// Modifier-key state sampled from the current input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
        alt: false,
    };
}

//! Input event types consumed by the editor facade.
//!
//! The host UI extracts these from its native pointer/keyboard events and
//! forwards them; the engine holds no global listeners, so modifier state
//! lives and dies with the editor instance.

/// A pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub screen_x: f64,
    pub screen_y: f64,
}

impl PointerEvent {
    pub fn new(screen_x: f64, screen_y: f64) -> Self {
        Self { screen_x, screen_y }
    }
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Auto-sampling modifier for free draw.
    Shift,
    /// Cancel all in-progress transient state.
    Escape,
}

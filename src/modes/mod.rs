//! Editing mode state machines and their mutual-exclusion coordinator.

mod add_point;
mod free_draw;
mod slice;

pub use add_point::PointAddingMode;
pub use free_draw::{FreeDrawMode, TempPoints};
pub use slice::SliceMode;

use crate::model::SegmentationResult;

/// The editing modes that can own pointer clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Free-draw a new polygon or extend an existing one.
    FreeDraw,
    /// Split a polygon in two along a cut line.
    Slice,
    /// Insert a vertex into an existing edge.
    AddPoint,
}

impl EditorMode {
    /// Display name for logging and UI.
    pub fn name(&self) -> &'static str {
        match self {
            EditorMode::FreeDraw => "free draw",
            EditorMode::Slice => "slice",
            EditorMode::AddPoint => "add point",
        }
    }
}

/// What a mode did with a click.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Click consumed; transient mode state changed, model untouched.
    Consumed,
    /// A structural edit committed: the new model plus a confirmation
    /// message for the notifier.
    Committed {
        model: SegmentationResult,
        message: String,
    },
    /// Operation rejected; `message` says what was wrong. Model untouched.
    Rejected { message: String },
    /// The mode did not handle the click.
    Ignored,
}

/// Coordinator guaranteeing at most one editing mode is active.
///
/// Activating a mode deactivates whichever other mode is active and runs
/// its cleanup, so a stale partial operation can never resume after
/// reactivation.
#[derive(Debug, Default)]
pub struct ModeManager {
    active: Option<EditorMode>,
    pub free_draw: FreeDrawMode,
    pub slice: SliceMode,
    pub add_point: PointAddingMode,
}

impl ModeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active mode, if any.
    pub fn active(&self) -> Option<EditorMode> {
        self.active
    }

    /// Toggle a mode. Returns `true` if the mode is active afterwards.
    pub fn toggle(&mut self, mode: EditorMode) -> bool {
        if self.active == Some(mode) {
            self.cleanup(mode);
            self.active = None;
            log::debug!("🔧 Mode off: {}", mode.name());
            false
        } else {
            if let Some(previous) = self.active {
                self.cleanup(previous);
            }
            self.active = Some(mode);
            log::debug!("🔧 Mode on: {}", mode.name());
            true
        }
    }

    /// Deactivate whichever mode is active, with cleanup.
    pub fn deactivate_all(&mut self) {
        if let Some(mode) = self.active.take() {
            self.cleanup(mode);
            log::debug!("🔧 Mode off: {}", mode.name());
        }
    }

    /// Clear all transient mode state without changing which mode is
    /// active (the Escape key behavior).
    pub fn clear_transient(&mut self) {
        self.free_draw.reset();
        self.slice.reset();
        self.add_point.reset();
    }

    fn cleanup(&mut self, mode: EditorMode) {
        match mode {
            EditorMode::FreeDraw => self.free_draw.reset(),
            EditorMode::Slice => self.slice.reset(),
            EditorMode::AddPoint => self.add_point.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    #[test]
    fn test_at_most_one_active() {
        let mut manager = ModeManager::new();
        assert_eq!(manager.active(), None);

        assert!(manager.toggle(EditorMode::FreeDraw));
        assert_eq!(manager.active(), Some(EditorMode::FreeDraw));

        assert!(manager.toggle(EditorMode::Slice));
        assert_eq!(manager.active(), Some(EditorMode::Slice));

        assert!(manager.toggle(EditorMode::AddPoint));
        assert_eq!(manager.active(), Some(EditorMode::AddPoint));
    }

    #[test]
    fn test_toggle_off_returns_to_none() {
        let mut manager = ModeManager::new();
        manager.toggle(EditorMode::Slice);
        assert!(!manager.toggle(EditorMode::Slice));
        assert_eq!(manager.active(), None);
    }

    #[test]
    fn test_switching_modes_cleans_up_previous() {
        let mut manager = ModeManager::new();
        manager.toggle(EditorMode::FreeDraw);
        manager.free_draw.append(Point::new(1.0, 1.0));
        assert_eq!(manager.free_draw.temp_points().points.len(), 1);

        manager.toggle(EditorMode::Slice);
        assert!(manager.free_draw.temp_points().points.is_empty());
    }

    #[test]
    fn test_clear_transient_keeps_mode_armed() {
        let mut manager = ModeManager::new();
        manager.toggle(EditorMode::FreeDraw);
        manager.free_draw.append(Point::new(1.0, 1.0));

        manager.clear_transient();
        assert_eq!(manager.active(), Some(EditorMode::FreeDraw));
        assert!(manager.free_draw.temp_points().points.is_empty());
    }
}

//! Undo/redo history for the segmentation model.
//!
//! Snapshot-based rather than command-based: the model's immutable-update
//! discipline makes full snapshots safe by construction, since a committed
//! edit never mutates the buffers an earlier snapshot refers to.

use crate::constants::history;
use crate::model::SegmentationResult;

/// Configuration for the history stack.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Maximum number of snapshots to keep.
    pub max_snapshots: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_snapshots: history::MAX_SNAPSHOTS,
        }
    }
}

/// The undo/redo stack of model snapshots.
///
/// `push` records the pre-edit model and clears the redo stack; `undo` and
/// `redo` exchange the live model with the nearest snapshot.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<SegmentationResult>,
    redo_stack: Vec<SegmentationResult>,
    config: HistoryConfig,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration.
    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Record the model state as it was before an edit.
    /// Clears the redo stack (can't redo after a new action).
    pub fn push(&mut self, snapshot: SegmentationResult) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
        while self.undo_stack.len() > self.config.max_snapshots {
            self.undo_stack.remove(0);
        }
        log::debug!("📝 History: {} undo snapshots", self.undo_stack.len());
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Swap the live model with the most recent undo snapshot.
    /// Returns the restored model, or `None` if there is nothing to undo.
    pub fn undo(&mut self, current: &SegmentationResult) -> Option<SegmentationResult> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current.clone());
        log::debug!("⏪ Undo ({} snapshots left)", self.undo_stack.len());
        Some(snapshot)
    }

    /// Swap the live model with the most recent redo snapshot.
    /// Returns the restored model, or `None` if there is nothing to redo.
    pub fn redo(&mut self, current: &SegmentationResult) -> Option<SegmentationResult> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current.clone());
        log::debug!("⏩ Redo ({} snapshots left)", self.redo_stack.len());
        Some(snapshot)
    }

    /// Drop all history (e.g. when a different image is loaded).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        log::debug!("🗑️ History cleared");
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Point, Polygon};

    fn model_with_n_polygons(n: usize) -> SegmentationResult {
        let mut model = SegmentationResult::new(100, 100);
        for i in 0..n {
            let offset = i as f64 * 20.0;
            model = model.with_polygon_added(Polygon::new(vec![
                Point::new(offset, 0.0),
                Point::new(offset + 10.0, 0.0),
                Point::new(offset + 5.0, 10.0),
            ]));
        }
        model
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let before = model_with_n_polygons(1);
        let after = model_with_n_polygons(2);

        let mut history = EditHistory::new();
        history.push(before.clone());
        assert!(history.can_undo());
        assert!(!history.can_redo());

        let restored = history.undo(&after).unwrap();
        assert_eq!(restored, before);
        assert!(history.can_redo());

        let replayed = history.redo(&restored).unwrap();
        assert_eq!(replayed, after);
        assert!(history.can_undo());
    }

    #[test]
    fn test_empty_stacks_return_none() {
        let mut history = EditHistory::new();
        let model = model_with_n_polygons(1);
        assert!(history.undo(&model).is_none());
        assert!(history.redo(&model).is_none());
    }

    #[test]
    fn test_push_clears_redo() {
        let mut history = EditHistory::new();
        let model = model_with_n_polygons(1);
        history.push(model.clone());
        history.undo(&model);
        assert!(history.can_redo());

        history.push(model);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_max_snapshots() {
        let mut history = EditHistory::with_config(HistoryConfig { max_snapshots: 3 });
        for i in 0..5 {
            history.push(model_with_n_polygons(i));
        }
        assert_eq!(history.undo_count(), 3);
    }
}

//! Pointer interaction state.
//!
//! One tagged union owns the gesture state instead of parallel boolean
//! drag flags, so "panning while dragging a vertex" is unrepresentable.

use uuid::Uuid;

use crate::model::Point;

/// Reference to a single vertex of a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexRef {
    pub polygon_id: Uuid,
    pub vertex_index: usize,
}

/// A hovered polygon edge found by the point-adding mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// Index of the edge's first endpoint in the ring.
    pub edge_index: usize,
    /// Projection of the cursor onto the edge.
    pub projected: Point,
    /// Image-space distance from the cursor to the edge.
    pub distance: f64,
}

/// The active pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Canvas pan drag; stores the last screen position seen.
    Panning { last_x: f64, last_y: f64 },
    /// Single-vertex drag.
    DraggingVertex { vertex: VertexRef },
}

impl InteractionState {
    /// Whether any drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        !matches!(self, InteractionState::Idle)
    }
}

//! Interaction constants for the editing engine.
//!
//! This module centralizes all hardcoded values for hit-test radii,
//! sampling thresholds, and other interaction tuning knobs.

/// Hit-test threshold constants.
pub mod hit {
    /// Default vertex hit radius in screen pixels.
    pub const VERTEX_RADIUS_PX: f64 = 12.0;
    /// Distance threshold for closing a free-draw shape by clicking
    /// near its first point (screen pixels).
    pub const CLOSE_RADIUS_PX: f64 = 15.0;
    /// Maximum image-space distance from an edge for the point-adding
    /// mode to treat it as hovered.
    pub const SEGMENT_HOVER_DISTANCE: f64 = 10.0;
    /// Zoom level above which the effective vertex radius is narrowed.
    pub const HIGH_ZOOM: f64 = 4.0;
    /// Radius scale applied above [`HIGH_ZOOM`].
    pub const HIGH_ZOOM_SCALE: f64 = 0.6;
    /// Zoom level below which the effective vertex radius is widened.
    pub const LOW_ZOOM: f64 = 0.5;
    /// Radius scale applied below [`LOW_ZOOM`].
    pub const LOW_ZOOM_SCALE: f64 = 2.0;
}

/// Free-draw sampling constants.
pub mod sampling {
    /// Minimum image-space distance between consecutive auto-sampled
    /// points while the shift modifier is held.
    pub const MIN_AUTO_POINT_DISTANCE: f64 = 20.0;
}

/// Zoom constants.
pub mod zoom {
    /// Maximum zoom level.
    pub const MAX: f64 = 10.0;
    /// Minimum zoom level.
    pub const MIN: f64 = 0.1;
}

/// Polygon action constants.
pub mod actions {
    /// Image-space offset applied to a duplicated polygon so it does
    /// not exactly overlap the original.
    pub const DUPLICATE_OFFSET: f64 = 20.0;
    /// Default tolerance for polygon simplification (image units).
    pub const SIMPLIFY_TOLERANCE: f64 = 1.5;
}

/// History constants.
pub mod history {
    /// Maximum number of model snapshots kept for undo.
    pub const MAX_SNAPSHOTS: usize = 100;
}

/// Minimum number of vertices required for a committed polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

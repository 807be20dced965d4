//! Error types for editing operations.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while applying an edit to the segmentation model.
///
/// Interaction handlers never let these escape the event boundary: every
/// rejected operation is caught, the state is left unchanged, and the
/// message is surfaced through the [`Notifier`](crate::notify::Notifier).
#[derive(Error, Debug)]
pub enum EditError {
    /// Operation referenced a polygon id that no longer exists
    #[error("Polygon not found: {id}")]
    PolygonNotFound {
        /// The stale polygon id
        id: Uuid,
    },

    /// Operation requires a selected polygon but none is selected
    #[error("No polygon selected")]
    NoSelection,

    /// Resulting shape would have fewer points than a valid polygon
    #[error("Need at least {required} points, have {actual}")]
    TooFewPoints {
        /// Minimum number of points required
        required: usize,
        /// Number of points available
        actual: usize,
    },

    /// Cut line does not produce two valid polygons
    #[error("Degenerate cut: {message}")]
    DegenerateCut {
        /// Description of why the cut is degenerate
        message: String,
    },

    /// JSON serialization error when round-tripping the model
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EditError {
    /// Create a too-few-points error against the committed-polygon minimum.
    pub fn too_few_points(actual: usize) -> Self {
        Self::TooFewPoints {
            required: crate::constants::MIN_POLYGON_VERTICES,
            actual,
        }
    }

    /// Create a degenerate cut error with a message.
    pub fn degenerate_cut(message: impl Into<String>) -> Self {
        Self::DegenerateCut {
            message: message.into(),
        }
    }
}

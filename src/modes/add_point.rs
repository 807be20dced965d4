//! Point-adding mode: hover the selected polygon's edges, click to insert
//! a vertex at the projected cursor position.

use uuid::Uuid;

use crate::constants::hit;
use crate::hit_test::find_closest_segment;
use crate::interaction::SegmentHit;
use crate::model::{Point, SegmentationResult};
use crate::modes::ClickOutcome;

/// The point-adding state machine. The hovered segment is recomputed on
/// every pointer move while the mode is active.
#[derive(Debug, Default)]
pub struct PointAddingMode {
    hovered: Option<SegmentHit>,
}

impl PointAddingMode {
    /// The currently hovered edge, for overlay highlighting.
    pub fn hovered_segment(&self) -> Option<SegmentHit> {
        self.hovered
    }

    /// Clear the hovered segment.
    pub fn reset(&mut self) {
        self.hovered = None;
    }

    /// Recompute the nearest edge of the selected polygon under the cursor.
    pub fn handle_move(
        &mut self,
        point: Point,
        model: &SegmentationResult,
        selected: Option<Uuid>,
    ) {
        self.hovered = selected
            .and_then(|id| model.polygon(id))
            .and_then(|polygon| {
                find_closest_segment(&polygon.points, &point, hit::SEGMENT_HOVER_DISTANCE)
            });
    }

    /// Insert a vertex on the hovered edge. A click with no hovered
    /// segment is a no-op.
    pub fn handle_click(
        &mut self,
        model: &SegmentationResult,
        selected: Option<Uuid>,
    ) -> ClickOutcome {
        let Some(hit) = self.hovered else {
            return ClickOutcome::Ignored;
        };
        let Some(id) = selected else {
            return ClickOutcome::Ignored;
        };

        match model.with_point_inserted(id, hit.edge_index + 1, hit.projected) {
            Some(next) => {
                self.hovered = None;
                log::debug!(
                    "✅ Inserted vertex at ({:.1}, {:.1}) on edge {}",
                    hit.projected.x,
                    hit.projected.y,
                    hit.edge_index
                );
                ClickOutcome::Committed {
                    model: next,
                    message: String::from("Point added"),
                }
            }
            None => {
                // Stale selection (polygon removed since the hover).
                self.hovered = None;
                ClickOutcome::Rejected {
                    message: String::from("Polygon no longer exists"),
                }
            }
        }
    }
}

//! Slicing mode: split one polygon into two along a two-click cut line.
//!
//! Both click points snap to the nearest edge of the target polygon so the
//! cut topology is well defined. A successful cut replaces the original
//! with two sibling polygons and the mode stays armed for the next cut.

use uuid::Uuid;

use crate::constants::MIN_POLYGON_VERTICES;
use crate::error::EditError;
use crate::hit_test::find_closest_segment;
use crate::model::{Point, SegmentationResult};
use crate::modes::ClickOutcome;

/// The slicing state machine. `start_point` distinguishes "armed" from
/// "first point set".
#[derive(Debug, Default)]
pub struct SliceMode {
    start_point: Option<Point>,
}

impl SliceMode {
    /// First endpoint of the in-progress cut line, for overlay rendering.
    pub fn start_point(&self) -> Option<Point> {
        self.start_point
    }

    /// Discard the in-progress cut.
    pub fn reset(&mut self) {
        self.start_point = None;
    }

    /// Handle a click in image space.
    pub fn handle_click(
        &mut self,
        point: Point,
        model: &SegmentationResult,
        selected: Option<Uuid>,
    ) -> ClickOutcome {
        let Some(id) = selected else {
            return ClickOutcome::Rejected {
                message: EditError::NoSelection.to_string(),
            };
        };

        let Some(start) = self.start_point else {
            self.start_point = Some(point);
            log::debug!("🔪 Slice start at ({:.1}, {:.1})", point.x, point.y);
            return ClickOutcome::Consumed;
        };

        // Second click: commit or reject, either way the in-progress cut
        // is done and the mode returns to armed.
        self.start_point = None;
        match split_polygon(model, id, &start, &point) {
            Ok(next) => {
                log::debug!("✅ Sliced polygon {id}");
                ClickOutcome::Committed {
                    model: next,
                    message: String::from("Polygon split successfully"),
                }
            }
            Err(err) => ClickOutcome::Rejected {
                message: err.to_string(),
            },
        }
    }
}

/// Split a polygon along the cut line `a` -> `b`.
///
/// The endpoints are projected onto the nearest edges of the ring; the two
/// boundary arcs between the projection points each become one half, with
/// both cut-line endpoints appended so the halves close along the cut.
fn split_polygon(
    model: &SegmentationResult,
    id: Uuid,
    a: &Point,
    b: &Point,
) -> Result<SegmentationResult, EditError> {
    let polygon = model
        .polygon(id)
        .ok_or(EditError::PolygonNotFound { id })?;
    let ring = &polygon.points;

    let hit_a = find_closest_segment(ring, a, f64::INFINITY)
        .ok_or_else(|| EditError::degenerate_cut("polygon has no edges"))?;
    let hit_b = find_closest_segment(ring, b, f64::INFINITY)
        .ok_or_else(|| EditError::degenerate_cut("polygon has no edges"))?;

    if hit_a.edge_index == hit_b.edge_index {
        return Err(EditError::degenerate_cut(
            "both cut points fall on the same edge",
        ));
    }
    if hit_a.projected == hit_b.projected {
        return Err(EditError::degenerate_cut("cut points coincide"));
    }

    // Arc from the edge after `from` up to and including the first endpoint
    // of the edge `to` ends on.
    let n = ring.len();
    let vertices_between = |from: usize, to: usize| {
        let mut points = Vec::new();
        let mut i = (from + 1) % n;
        loop {
            points.push(ring[i]);
            if i == to {
                break;
            }
            i = (i + 1) % n;
        }
        points
    };

    let mut first = vec![hit_a.projected];
    first.extend(vertices_between(hit_a.edge_index, hit_b.edge_index));
    first.push(hit_b.projected);

    let mut second = vec![hit_b.projected];
    second.extend(vertices_between(hit_b.edge_index, hit_a.edge_index));
    second.push(hit_a.projected);

    if first.len() < MIN_POLYGON_VERTICES || second.len() < MIN_POLYGON_VERTICES {
        return Err(EditError::degenerate_cut(
            "a resulting half would have fewer than 3 points",
        ));
    }

    model
        .with_polygon_split(id, first, second)
        .ok_or_else(|| EditError::degenerate_cut("split produced an invalid polygon"))
}

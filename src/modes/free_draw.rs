//! Free-draw mode: draw a new polygon point by point, or extend an
//! existing polygon by bridging two of its vertices with drawn points.
//!
//! The temp-point buffer is the only state. While it carries an anchor
//! (`polygon_id` + `start_index`) the drawn points are spliced into that
//! polygon on commit, replacing the shorter boundary arc between the two
//! anchor vertices; otherwise closing the buffer creates a new polygon.

use uuid::Uuid;

use crate::constants::{MIN_POLYGON_VERTICES, hit, sampling};
use crate::error::EditError;
use crate::geometry::{find_shortest_path, ring_arcs};
use crate::hit_test::is_near_vertex;
use crate::model::{Point, Polygon, SegmentationResult};
use crate::modes::ClickOutcome;

/// In-progress free-draw buffer.
///
/// When `polygon_id`/`start_index`/`end_index` are set, the points are
/// being spliced into an existing polygon between two vertex indices
/// rather than forming a brand-new polygon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TempPoints {
    pub points: Vec<Point>,
    pub polygon_id: Option<Uuid>,
    pub start_index: Option<usize>,
    pub end_index: Option<usize>,
}

impl TempPoints {
    fn clear(&mut self) {
        *self = TempPoints::default();
    }
}

/// The free-draw state machine.
#[derive(Debug, Default)]
pub struct FreeDrawMode {
    temp: TempPoints,
}

impl FreeDrawMode {
    /// The current temp-point buffer, for overlay rendering.
    pub fn temp_points(&self) -> &TempPoints {
        &self.temp
    }

    /// Discard the in-progress buffer.
    pub fn reset(&mut self) {
        self.temp.clear();
    }

    /// Append a point to the buffer.
    pub fn append(&mut self, point: Point) {
        self.temp.points.push(point);
    }

    /// Handle a click in image space.
    pub fn handle_click(
        &mut self,
        point: Point,
        model: &SegmentationResult,
        selected: Option<Uuid>,
        zoom: f64,
    ) -> ClickOutcome {
        if let Some(anchor_id) = self.temp.polygon_id {
            return self.handle_extension_click(point, model, anchor_id, zoom);
        }

        if self.temp.points.is_empty() {
            // Starting on a vertex of the selected polygon anchors an
            // extension instead of a new shape.
            if let Some(polygon) = selected.and_then(|id| model.polygon(id)) {
                if let Some(index) = nearest_vertex(polygon, &point, zoom) {
                    self.temp.polygon_id = Some(polygon.id);
                    self.temp.start_index = Some(index);
                    log::debug!(
                        "✏️ Extension anchored at vertex {} of polygon {}",
                        index,
                        polygon.id
                    );
                    return ClickOutcome::Consumed;
                }
            }
            self.append(point);
            log::debug!("✏️ Started free draw at ({:.1}, {:.1})", point.x, point.y);
            return ClickOutcome::Consumed;
        }

        // A click near the first point is a close attempt, successful or not.
        let first = self.temp.points[0];
        if is_near_vertex(&point, &first, hit::CLOSE_RADIUS_PX, zoom) {
            if self.temp.points.len() < MIN_POLYGON_VERTICES {
                return ClickOutcome::Rejected {
                    message: EditError::too_few_points(self.temp.points.len()).to_string(),
                };
            }
            let polygon = Polygon::new(self.temp.points.clone());
            let id = polygon.id;
            let next = model.with_polygon_added(polygon);
            self.temp.clear();
            log::debug!("✅ Closed new polygon {id}");
            return ClickOutcome::Committed {
                model: next,
                message: String::from("Polygon created"),
            };
        }

        self.append(point);
        log::debug!(
            "✏️ Added point ({:.1}, {:.1}), total: {}",
            point.x,
            point.y,
            self.temp.points.len()
        );
        ClickOutcome::Consumed
    }

    /// Handle a pointer move: auto-sample while the modifier is held.
    ///
    /// Returns `true` if a point was appended. New points are gated by a
    /// minimum distance from the last one so slow mouse movement does not
    /// flood the buffer with near-duplicates.
    pub fn handle_move(&mut self, point: Point, shift_held: bool) -> bool {
        if !shift_held {
            return false;
        }
        let Some(last) = self.temp.points.last() else {
            return false;
        };
        if last.distance_to(&point) < sampling::MIN_AUTO_POINT_DISTANCE {
            return false;
        }
        self.append(point);
        true
    }

    fn handle_extension_click(
        &mut self,
        point: Point,
        model: &SegmentationResult,
        anchor_id: Uuid,
        zoom: f64,
    ) -> ClickOutcome {
        let Some(polygon) = model.polygon(anchor_id) else {
            // Anchor polygon vanished underneath us (undo or delete).
            self.reset();
            return ClickOutcome::Rejected {
                message: String::from("Polygon no longer exists"),
            };
        };
        let start = self
            .temp
            .start_index
            .expect("extension anchor always carries a start index");

        let end_hit = nearest_vertex(polygon, &point, zoom).filter(|&end| end != start);
        if let Some(end) = end_hit {
            if self.temp.points.len() < MIN_POLYGON_VERTICES {
                return ClickOutcome::Rejected {
                    message: EditError::too_few_points(self.temp.points.len()).to_string(),
                };
            }
            self.temp.end_index = Some(end);
            let Some(points) = spliced_ring(&polygon.points, start, end, &self.temp.points) else {
                self.reset();
                return ClickOutcome::Rejected {
                    message: String::from("Cannot reshape between those vertices"),
                };
            };
            let next = model
                .with_polygon_points(anchor_id, points)
                .expect("polygon presence checked above");
            self.temp.clear();
            log::debug!("✅ Spliced outline of polygon {anchor_id}");
            return ClickOutcome::Committed {
                model: next,
                message: String::from("Polygon outline updated"),
            };
        }

        self.append(point);
        ClickOutcome::Consumed
    }
}

/// First vertex of `polygon` within the hit radius of `point`.
fn nearest_vertex(polygon: &Polygon, point: &Point, zoom: f64) -> Option<usize> {
    polygon
        .points
        .iter()
        .position(|vertex| is_near_vertex(point, vertex, hit::VERTEX_RADIUS_PX, zoom))
}

/// Build the ring that results from replacing the shorter boundary arc
/// between `start` and `end` with the bridge points.
fn spliced_ring(ring: &[Point], start: usize, end: usize, bridge: &[Point]) -> Option<Vec<Point>> {
    let path = find_shortest_path(ring, start, end)?;
    let (forward, backward) = ring_arcs(ring.len(), start, end);

    let mut points = Vec::with_capacity(ring.len() - path.replace_indices.len() + bridge.len());
    if path.path == forward {
        // The forward arc is replaced: bridge runs start -> end, then the
        // kept backward walk returns end -> start (start itself already
        // emitted, so its duplicate at the walk's tail is dropped).
        points.push(ring[start]);
        points.extend_from_slice(bridge);
        for &i in &backward[..backward.len() - 1] {
            points.push(ring[i]);
        }
    } else {
        // The backward arc is replaced: keep the forward walk start -> end
        // and return through the bridge in reverse.
        for &i in &forward {
            points.push(ring[i]);
        }
        points.extend(bridge.iter().rev().copied());
    }
    Some(points)
}

//! Polygon and segmentation model types.
//!
//! The segmentation model is owned by the host application and treated as
//! immutable: every edit builds a new [`SegmentationResult`] through the
//! `with_*` helpers instead of mutating shared buffers in place, so history
//! snapshots taken before an edit stay valid.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::MIN_POLYGON_VERTICES;
use crate::model::Point;

/// Whether a polygon outlines a cell (external) or a hole inside one
/// (internal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolygonKind {
    External,
    Internal,
}

impl Default for PolygonKind {
    fn default() -> Self {
        PolygonKind::External
    }
}

/// A closed polygon outline in image coordinates.
///
/// The point list is ordered and defines a closed loop; the first point
/// implicitly connects back to the last. A committed polygon has at least
/// [`MIN_POLYGON_VERTICES`] points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Unique identifier.
    pub id: Uuid,
    /// The vertices of the polygon in order.
    pub points: Vec<Point>,
    /// External outline or internal hole.
    #[serde(rename = "type")]
    pub kind: PolygonKind,
    /// Classification label assigned by the segmentation model or the user.
    pub class: String,
}

impl Polygon {
    /// Create a polygon with a fresh id and default kind/class.
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            kind: PolygonKind::default(),
            class: String::from("spheroid"),
        }
    }

    /// Create a polygon with a fresh id, inheriting kind and class.
    pub fn sibling_of(parent: &Polygon, points: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            kind: parent.kind,
            class: parent.class.clone(),
        }
    }

    /// Check the committed-polygon invariant.
    pub fn is_valid(&self) -> bool {
        self.points.len() >= MIN_POLYGON_VERTICES
    }
}

/// The full editable segmentation model for one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationResult {
    /// Width of the original image in pixels.
    pub image_width: u32,
    /// Height of the original image in pixels.
    pub image_height: u32,
    /// All polygons, in draw order (later entries render on top).
    pub polygons: Vec<Polygon>,
}

impl SegmentationResult {
    /// Create an empty model for an image of the given size.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            polygons: Vec::new(),
        }
    }

    /// Look up a polygon by id.
    pub fn polygon(&self, id: Uuid) -> Option<&Polygon> {
        self.polygons.iter().find(|p| p.id == id)
    }

    /// Index of a polygon by id.
    fn position(&self, id: Uuid) -> Option<usize> {
        self.polygons.iter().position(|p| p.id == id)
    }

    /// New model with a polygon appended.
    pub fn with_polygon_added(&self, polygon: Polygon) -> SegmentationResult {
        let mut polygons = self.polygons.clone();
        polygons.push(polygon);
        SegmentationResult {
            polygons,
            ..self.clone()
        }
    }

    /// New model with the polygon removed. `None` if the id is stale.
    pub fn with_polygon_removed(&self, id: Uuid) -> Option<SegmentationResult> {
        let index = self.position(id)?;
        let mut polygons = self.polygons.clone();
        polygons.remove(index);
        Some(SegmentationResult {
            polygons,
            ..self.clone()
        })
    }

    /// New model with one polygon's point list replaced wholesale.
    pub fn with_polygon_points(&self, id: Uuid, points: Vec<Point>) -> Option<SegmentationResult> {
        let index = self.position(id)?;
        let mut polygons = self.polygons.clone();
        polygons[index] = Polygon {
            points,
            ..polygons[index].clone()
        };
        Some(SegmentationResult {
            polygons,
            ..self.clone()
        })
    }

    /// New model with one vertex moved to a new position.
    pub fn with_point_moved(
        &self,
        id: Uuid,
        vertex_index: usize,
        position: Point,
    ) -> Option<SegmentationResult> {
        let polygon = self.polygon(id)?;
        if vertex_index >= polygon.points.len() {
            return None;
        }
        let mut points = polygon.points.clone();
        points[vertex_index] = position;
        self.with_polygon_points(id, points)
    }

    /// New model with a vertex inserted at the given index.
    pub fn with_point_inserted(
        &self,
        id: Uuid,
        vertex_index: usize,
        position: Point,
    ) -> Option<SegmentationResult> {
        let polygon = self.polygon(id)?;
        if vertex_index > polygon.points.len() {
            return None;
        }
        let mut points = polygon.points.clone();
        points.insert(vertex_index, position);
        self.with_polygon_points(id, points)
    }

    /// New model with a vertex removed. `None` if the id is stale, the
    /// index is out of bounds, or removal would drop the polygon below the
    /// minimum vertex count.
    pub fn with_point_removed(&self, id: Uuid, vertex_index: usize) -> Option<SegmentationResult> {
        let polygon = self.polygon(id)?;
        if vertex_index >= polygon.points.len()
            || polygon.points.len() <= MIN_POLYGON_VERTICES
        {
            return None;
        }
        let mut points = polygon.points.clone();
        points.remove(vertex_index);
        self.with_polygon_points(id, points)
    }

    /// New model with one polygon replaced by two siblings (slicing).
    /// The original id is absent from the result. `None` if the id is
    /// stale or either half is below the minimum vertex count.
    pub fn with_polygon_split(
        &self,
        id: Uuid,
        first: Vec<Point>,
        second: Vec<Point>,
    ) -> Option<SegmentationResult> {
        if first.len() < MIN_POLYGON_VERTICES || second.len() < MIN_POLYGON_VERTICES {
            return None;
        }
        let index = self.position(id)?;
        let parent = &self.polygons[index];
        let mut polygons = self.polygons.clone();
        let halves = [
            Polygon::sibling_of(parent, first),
            Polygon::sibling_of(parent, second),
        ];
        polygons.splice(index..=index, halves);
        Some(SegmentationResult {
            polygons,
            ..self.clone()
        })
    }

    /// Serialize the model to JSON for the persistence collaborator.
    pub fn to_json(&self) -> Result<String, crate::error::EditError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a model from JSON.
    pub fn from_json(json: &str) -> Result<SegmentationResult, crate::error::EditError> {
        Ok(serde_json::from_str(json)?)
    }
}

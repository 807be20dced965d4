//! Data model for the segmentation editor.

mod point;
mod polygon;

pub use point::Point;
pub use polygon::{Polygon, PolygonKind, SegmentationResult};

//! Screen/image coordinate mapping.
//!
//! Every hit test and drag depends on this mapping being an exact inverse
//! pair, so the math is kept in one place and tested in isolation. The pan
//! offset is an image-space translation; a historical defect class is
//! multiplying it by the zoom factor on one side only, which misaligns the
//! cursor and the detected vertex more the further the view is zoomed.

use serde::{Deserialize, Serialize};

use crate::constants::zoom;
use crate::model::Point;

/// Screen-space rectangle of the canvas container (viewport origin and
/// size in screen pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Pan/zoom view transform between screen space and image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Zoom factor, always > 0.
    pub zoom: f64,
    /// Pan translation in image space.
    pub offset: Point,
}

impl ViewTransform {
    /// Create a new transform with the given zoom and offset.
    pub fn new(zoom: f64, offset: Point) -> Self {
        Self { zoom, offset }
    }

    /// Identity transform (zoom=1, no pan).
    pub fn identity() -> Self {
        Self::new(1.0, Point::new(0.0, 0.0))
    }

    /// Map a screen-space position to image space.
    ///
    /// `image = (screen - rect.origin) / zoom - offset`
    pub fn to_image_space(&self, screen_x: f64, screen_y: f64, rect: &ContainerRect) -> Point {
        Point::new(
            (screen_x - rect.left) / self.zoom - self.offset.x,
            (screen_y - rect.top) / self.zoom - self.offset.y,
        )
    }

    /// Map an image-space point back to screen space. Exact inverse of
    /// [`to_image_space`](Self::to_image_space).
    pub fn to_screen_space(&self, point: &Point, rect: &ContainerRect) -> (f64, f64) {
        (
            (point.x + self.offset.x) * self.zoom + rect.left,
            (point.y + self.offset.y) * self.zoom + rect.top,
        )
    }

    /// Convert a screen-space distance to image space.
    pub fn screen_distance_to_image(&self, distance: f64) -> f64 {
        distance / self.zoom
    }

    /// Apply a screen-space pan delta (the canvas drag gesture).
    pub fn pan_by_screen_delta(&self, dx: f64, dy: f64) -> ViewTransform {
        ViewTransform {
            zoom: self.zoom,
            offset: self.offset.translated(dx / self.zoom, dy / self.zoom),
        }
    }

    /// Calculate a zoom-to-cursor transformation.
    ///
    /// Keeps the image point under the cursor fixed while zooming. The new
    /// zoom is clamped to the allowed range.
    pub fn zoom_to_cursor(
        &self,
        new_zoom: f64,
        cursor_x: f64,
        cursor_y: f64,
        rect: &ContainerRect,
    ) -> ViewTransform {
        let new_zoom = new_zoom.clamp(zoom::MIN, zoom::MAX);
        let anchor = self.to_image_space(cursor_x, cursor_y, rect);

        // Solve to_image_space(cursor, new) == anchor for the new offset.
        let offset = Point::new(
            (cursor_x - rect.left) / new_zoom - anchor.x,
            (cursor_y - rect.top) / new_zoom - anchor.y,
        );
        ViewTransform {
            zoom: new_zoom,
            offset,
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

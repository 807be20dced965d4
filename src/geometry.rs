//! Shared geometric primitives.
//!
//! Everything here is pure and operates on image-space coordinates:
//! segment projection, the ray-casting point-in-polygon test, and
//! boundary-arc walks around a closed polygon ring.

use crate::model::Point;

/// Result of projecting a point onto a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// The closest point on the segment.
    pub point: Point,
    /// Distance from the query point to [`point`](Self::point).
    pub distance: f64,
    /// Interpolation parameter clamped to `[0, 1]` (0 at `v`, 1 at `w`).
    pub t: f64,
}

/// Project `p` onto segment `vw`, clamping to the segment endpoints.
///
/// A zero-length segment is treated as its single endpoint (`t = 0`)
/// instead of letting the division produce NaN.
pub fn closest_point_on_segment(p: &Point, v: &Point, w: &Point) -> SegmentProjection {
    let dx = w.x - v.x;
    let dy = w.y - v.y;
    let length_sq = dx * dx + dy * dy;

    if length_sq == 0.0 {
        return SegmentProjection {
            point: *v,
            distance: p.distance_to(v),
            t: 0.0,
        };
    }

    let t = (((p.x - v.x) * dx + (p.y - v.y) * dy) / length_sq).clamp(0.0, 1.0);
    let point = Point::new(v.x + t * dx, v.y + t * dy);
    SegmentProjection {
        point,
        distance: p.distance_to(&point),
        t,
    }
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
/// Falls back to point distance when `a == b`.
pub fn perpendicular_distance(p: &Point, a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        return p.distance_to(a);
    }
    ((dy * p.x - dx * p.y + b.x * a.y - b.y * a.x) / length).abs()
}

/// Point-in-polygon test using the ray casting (even-odd) rule.
///
/// The point list is treated as a closed loop. Rings with fewer than 3
/// points contain nothing.
pub fn point_in_polygon(point: &Point, ring: &[Point]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let vi = &ring[i];
        let vj = &ring[j];
        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// One arc of a closed ring between two vertex indices.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPath {
    /// Vertex indices from `start` to `end` inclusive, along the shorter arc.
    pub path: Vec<usize>,
    /// Interior indices of [`path`](Self::path), i.e. the vertices a splice
    /// along this arc removes.
    pub replace_indices: Vec<usize>,
    /// Cumulative edge length of the arc.
    pub length: f64,
}

/// Indices of both boundary arcs between `i` and `j` on a ring of `len`
/// vertices, each walked in stored point order and inclusive of both
/// endpoints. The first walks `i -> j`, the second `j -> i`.
pub fn ring_arcs(len: usize, i: usize, j: usize) -> (Vec<usize>, Vec<usize>) {
    let walk = |from: usize, to: usize| {
        let mut indices = vec![from];
        let mut k = from;
        while k != to {
            k = (k + 1) % len;
            indices.push(k);
        }
        indices
    };
    (walk(i, j), walk(j, i))
}

fn arc_length(ring: &[Point], indices: &[usize]) -> f64 {
    indices
        .windows(2)
        .map(|w| ring[w[0]].distance_to(&ring[w[1]]))
        .sum()
}

/// Find the shorter boundary arc between two vertex indices of a closed
/// ring.
///
/// Walks the ring in both directions between `start` and `end`, compares
/// cumulative edge lengths, and returns the shorter arc as an index
/// sequence from `start` to `end`. On an exact tie the arc that follows
/// the stored point order wins, so the result is deterministic.
pub fn find_shortest_path(ring: &[Point], start: usize, end: usize) -> Option<BoundaryPath> {
    let len = ring.len();
    if len < 3 || start >= len || end >= len || start == end {
        return None;
    }

    let (forward, backward_rev) = ring_arcs(len, start, end);
    // ring_arcs walks the second arc end -> start; reverse it so both
    // candidates run start -> end.
    let mut backward: Vec<usize> = backward_rev;
    backward.reverse();

    let forward_len = arc_length(ring, &forward);
    let backward_len = arc_length(ring, &backward);

    let (path, length) = if forward_len <= backward_len {
        (forward, forward_len)
    } else {
        (backward, backward_len)
    };
    let replace_indices = path[1..path.len() - 1].to_vec();

    Some(BoundaryPath {
        path,
        replace_indices,
        length,
    })
}

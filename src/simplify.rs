//! Tolerance-based polygon simplification.
//!
//! Ramer-Douglas-Peucker over a closed ring. The ring is split at two
//! anchor vertices (vertex 0 and the vertex farthest from it) so that each
//! half is an open chain the classic recursion applies to; the anchors are
//! always kept, which also guarantees the output never collapses below a
//! valid polygon.

use crate::constants::MIN_POLYGON_VERTICES;
use crate::geometry::perpendicular_distance;
use crate::model::Point;

/// Simplify an open chain, keeping both endpoints.
fn rdp_chain(chain: &[Point], tolerance: f64, out: &mut Vec<Point>) {
    if chain.len() < 3 {
        out.extend_from_slice(&chain[..chain.len().saturating_sub(1)]);
        return;
    }

    let first = &chain[0];
    let last = &chain[chain.len() - 1];
    let mut max_distance = 0.0;
    let mut max_index = 0;
    for (i, p) in chain.iter().enumerate().skip(1).take(chain.len() - 2) {
        let d = perpendicular_distance(p, first, last);
        if d > max_distance {
            max_distance = d;
            max_index = i;
        }
    }

    if max_distance > tolerance {
        rdp_chain(&chain[..=max_index], tolerance, out);
        rdp_chain(&chain[max_index..], tolerance, out);
    } else {
        // Interior points deviate less than the tolerance; keep only the
        // first endpoint (the caller appends the next chain's start).
        out.push(*first);
    }
}

/// Simplify a closed ring within `tolerance`.
///
/// The output preserves point order, starts at the same anchor vertex, and
/// always has at least [`MIN_POLYGON_VERTICES`] points. Rings at or below
/// the minimum are returned unchanged.
pub fn simplify_ring(ring: &[Point], tolerance: f64) -> Vec<Point> {
    if ring.len() <= MIN_POLYGON_VERTICES {
        return ring.to_vec();
    }

    // Second anchor: vertex farthest from vertex 0. Splitting there keeps
    // the ring's two most distant features in the output.
    let (split, _) = ring
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, p)| (i, ring[0].distance_to(p)))
        .fold((1, 0.0), |best, cand| if cand.1 > best.1 { cand } else { best });

    let mut first_half = Vec::new();
    rdp_chain(&ring[..=split], tolerance, &mut first_half);

    // Second chain wraps around back to the start anchor.
    let mut wrapped: Vec<Point> = ring[split..].to_vec();
    wrapped.push(ring[0]);
    let mut second_half = Vec::new();
    rdp_chain(&wrapped, tolerance, &mut second_half);

    let mut result = first_half;
    result.extend(second_half);

    if result.len() < MIN_POLYGON_VERTICES {
        // Over-aggressive tolerance collapsed a half; fall back to the two
        // anchors plus the point farthest from their connecting line.
        let (extra, _) = ring
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 0 && *i != split)
            .map(|(i, p)| (i, perpendicular_distance(p, &ring[0], &ring[split])))
            .fold((0, f64::NEG_INFINITY), |best, cand| {
                if cand.1 > best.1 { cand } else { best }
            });
        let mut indices = [0, split, extra];
        indices.sort_unstable();
        return indices.iter().map(|&i| ring[i]).collect();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Square with redundant midpoints on every edge.
    fn noisy_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.1),
            Point::new(10.0, 0.0),
            Point::new(9.9, 5.0),
            Point::new(10.0, 10.0),
            Point::new(5.0, 10.1),
            Point::new(0.0, 10.0),
            Point::new(0.1, 5.0),
        ]
    }

    #[test]
    fn test_removes_near_collinear_points() {
        let simplified = simplify_ring(&noisy_square(), 0.5);
        assert_eq!(simplified.len(), 4);
        assert_eq!(simplified[0], Point::new(0.0, 0.0));
    }

    #[test]
    fn test_keeps_points_beyond_tolerance() {
        let simplified = simplify_ring(&noisy_square(), 0.05);
        assert_eq!(simplified.len(), 8);
    }

    #[test]
    fn test_never_below_minimum() {
        // Thin sliver that a large tolerance would collapse entirely.
        let sliver = vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.01),
            Point::new(10.0, 0.0),
            Point::new(5.0, -0.01),
        ];
        let simplified = simplify_ring(&sliver, 100.0);
        assert!(simplified.len() >= MIN_POLYGON_VERTICES);
    }

    #[test]
    fn test_minimum_ring_unchanged() {
        let triangle = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        ];
        assert_eq!(simplify_ring(&triangle, 100.0), triangle);
    }

    #[test]
    fn test_deviation_bounded_by_tolerance() {
        let ring = noisy_square();
        let tolerance = 0.5;
        let simplified = simplify_ring(&ring, tolerance);

        // Every dropped vertex stays within tolerance of the simplified
        // boundary.
        for p in &ring {
            if simplified.contains(p) {
                continue;
            }
            let mut min_distance = f64::INFINITY;
            for i in 0..simplified.len() {
                let v = &simplified[i];
                let w = &simplified[(i + 1) % simplified.len()];
                let proj = crate::geometry::closest_point_on_segment(p, v, w);
                min_distance = min_distance.min(proj.distance);
            }
            assert!(min_distance <= tolerance, "vertex {p:?} deviates {min_distance}");
        }
    }
}

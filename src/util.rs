//! Geometry utilities for hit-testing and gesture math.
//!
//! This module provides:
//! - Point-to-point distance and proximity tests
//! - Point-to-segment distance and proximity tests
//!
//! All functions are pure and operate on scene-space coordinates. They are
//! the only geometric predicates the hit-tester uses; the visual stroke
//! outline produced by the renderer plays no part here.

/// Calculates the Euclidean distance between two points.
pub fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
}

/// Checks whether `(px, py)` lies within `threshold` of the point `(x, y)`.
///
/// Used for grabbing element handles (line endpoints, rectangle corners).
/// The threshold is expressed in scene units, so the test is independent of
/// the current zoom level.
pub fn is_near_point(px: f64, py: f64, x: f64, y: f64, threshold: f64) -> bool {
    distance(px, py, x, y) < threshold
}

/// Calculates the shortest distance from `(px, py)` to the segment
/// `(x1, y1)-(x2, y2)`.
///
/// Projects the point onto the infinite line, clamps the projection to the
/// segment, and measures to the clamped point. A degenerate (zero-length)
/// segment falls back to plain point distance.
pub fn segment_distance(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let length_sq = dx * dx + dy * dy;

    if length_sq == 0.0 {
        return distance(px, py, x1, y1);
    }

    let t = (((px - x1) * dx + (py - y1) * dy) / length_sq).clamp(0.0, 1.0);
    distance(px, py, x1 + t * dx, y1 + t * dy)
}

/// Checks whether `(px, py)` lies within `threshold` of the segment
/// `(x1, y1)-(x2, y2)`.
pub fn is_near_segment(
    px: f64,
    py: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    threshold: f64,
) -> bool {
    segment_distance(px, py, x1, y1, x2, y2) < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_axis_aligned_points() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance(2.0, 2.0, 2.0, 2.0), 0.0);
    }

    #[test]
    fn near_point_respects_threshold() {
        assert!(is_near_point(1.0, 1.0, 0.0, 0.0, 5.0));
        assert!(!is_near_point(4.0, 4.0, 0.0, 0.0, 5.0)); // distance ~5.66
    }

    #[test]
    fn segment_distance_perpendicular_case() {
        // Point directly above the middle of a horizontal segment.
        let d = segment_distance(5.0, 3.0, 0.0, 0.0, 10.0, 0.0);
        assert!((d - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        // Point beyond the end of the segment measures to the endpoint.
        let d = segment_distance(14.0, 3.0, 0.0, 0.0, 10.0, 0.0);
        assert!((d - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn segment_distance_handles_degenerate_segment() {
        let d = segment_distance(3.0, 4.0, 0.0, 0.0, 0.0, 0.0);
        assert!((d - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn near_segment_respects_threshold() {
        assert!(is_near_segment(5.0, 0.5, 0.0, 0.0, 10.0, 0.0, 1.0));
        assert!(!is_near_segment(5.0, 1.5, 0.0, 0.0, 10.0, 0.0, 1.0));
    }
}

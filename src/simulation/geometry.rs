//! Route curve construction and position lookup
//!
//! Routes are rendered as piecewise quadratic Bezier curves. For each
//! consecutive waypoint pair the control point is the midpoint of their
//! x-coordinates combined with the start point's y-coordinate, so curves
//! bow horizontally. This asymmetry matches the product's map styling and
//! is intentional.
//!
//! All functions here are pure: the curve is computed once per route and
//! cached, never per animation frame.

use super::types::Point;

/// Evaluate the quadratic Bezier with the horizontal-midpoint control point.
///
/// B(t) = (1-t)^2 * start + 2(1-t)t * control + t^2 * end, where
/// control = ((start.x + end.x) / 2, start.y).
fn bezier_point(start: Point, end: Point, t: f32) -> Point {
    let mid_x = (start.x + end.x) / 2.0;
    let one_minus_t = 1.0 - t;
    Point {
        x: one_minus_t * one_minus_t * start.x + 2.0 * one_minus_t * t * mid_x + t * t * end.x,
        y: one_minus_t * one_minus_t * start.y + 2.0 * one_minus_t * t * start.y + t * t * end.y,
    }
}

/// Sample a dense, ordered coordinate array covering the whole route.
///
/// Each segment gets an equal share of the requested sample count and is
/// sampled at uniform parameter steps, endpoints included. A waypoint list
/// with fewer than 2 points yields an empty array; callers treat that as
/// "no renderable path".
pub fn path_coordinates(waypoints: &[Point], samples: usize) -> Vec<Point> {
    let mut coordinates = Vec::new();

    if waypoints.len() < 2 {
        return coordinates;
    }

    let per_segment = (samples / (waypoints.len() - 1)).max(1);

    for pair in waypoints.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        for j in 0..=per_segment {
            let t = j as f32 / per_segment as f32;
            coordinates.push(bezier_point(start, end, t));
        }
    }

    coordinates
}

/// Build the SVG-style path descriptor for stroke rendering.
///
/// `M x y` to the first waypoint, then one `Q cx cy x y` per segment using
/// the same control point as [`path_coordinates`].
pub fn path_string(waypoints: &[Point]) -> String {
    let mut iter = waypoints.iter();
    let first = match iter.next() {
        Some(p) => p,
        None => return String::new(),
    };

    let mut path = format!("M {} {}", first.x, first.y);
    let mut prev = first;
    for point in iter {
        let mid_x = (prev.x + point.x) / 2.0;
        path.push_str(&format!(" Q {} {} {} {}", mid_x, prev.y, point.x, point.y));
        prev = point;
    }
    path
}

/// Resolve a position from (sampled coordinates, segment, progress).
///
/// Maps the segment index and progress-within-segment (0-100) to an index
/// into the precomputed sample array using each segment's proportional
/// share of the samples, clamped to the valid range. Returns `None` only
/// when the route has no renderable path.
pub fn resolve_position(
    coordinates: &[Point],
    segment_count: usize,
    segment: usize,
    progress: f32,
) -> Option<Point> {
    if coordinates.is_empty() || segment_count == 0 {
        return None;
    }

    let per_segment = coordinates.len() as f32 / segment_count as f32;
    let segment_start = (segment as f32 * per_segment).floor() as usize;
    let segment_end = ((segment + 1) as f32 * per_segment).floor() as usize;
    let segment_len = segment_end.saturating_sub(segment_start).max(1);

    let index = (segment_start as f32 + (progress / 100.0) * segment_len as f32).floor() as usize;
    Some(coordinates[index.min(coordinates.len() - 1)])
}

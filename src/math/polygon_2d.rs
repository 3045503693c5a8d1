use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the normalized direction from `a` to `b`, or `None` for a
/// zero-length segment.
#[must_use]
pub fn segment_direction(a: &Point2, b: &Point2) -> Option<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(d / len)
}

/// Returns the left-pointing normal of a direction vector.
///
/// For a counter-clockwise loop this points into the enclosed region.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Polar angle of a point around the origin, in `(-π, π]`.
#[must_use]
pub fn polar_angle(p: &Point2) -> f64 {
    p.y.atan2(p.x)
}

/// Distance of a point from the origin.
#[must_use]
pub fn polar_radius(p: &Point2) -> f64 {
    p.coords.norm()
}

pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Wraps an angle into `[0, 2π)`.
#[must_use]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(std::f64::consts::TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= std::f64::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn wrap_angle_into_range() {
        assert!((wrap_angle(-PI / 2.0) - 1.5 * PI).abs() < TOLERANCE);
        assert!((wrap_angle(TAU + 0.25) - 0.25).abs() < 1e-12);
        assert!(wrap_angle(-1e-20) < TAU);
        assert!(wrap_angle(0.0).abs() < TOLERANCE);
    }
}

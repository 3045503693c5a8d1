use crate::math::polygon_2d::{polar_radius, signed_area_2d};
use crate::math::{Point2, Point3};

/// A closed 2D outline, counter-clockwise around the origin.
///
/// The closing edge from the last point back to the first is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Loop2D {
    points: Vec<Point2>,
}

impl Loop2D {
    /// Wraps an ordered point list as a loop.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// The loop's points in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the loop has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rotates every point about the origin by `angle` radians.
    #[must_use]
    pub fn rotated(&self, angle: f64) -> Self {
        if angle == 0.0 {
            return self.clone();
        }
        let (sin, cos) = angle.sin_cos();
        Self {
            points: self
                .points
                .iter()
                .map(|p| Point2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos))
                .collect(),
        }
    }

    /// Smallest distance of any point from the origin.
    #[must_use]
    pub fn min_radius(&self) -> f64 {
        self.points
            .iter()
            .map(polar_radius)
            .fold(f64::INFINITY, f64::min)
    }

    /// Largest distance of any point from the origin.
    #[must_use]
    pub fn max_radius(&self) -> f64 {
        self.points.iter().map(polar_radius).fold(0.0, f64::max)
    }

    /// Signed area (positive for counter-clockwise loops).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Returns `true` if every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
    }

    /// Places the loop at height `z`.
    #[must_use]
    pub fn at_height(self, z: f64) -> Slice {
        Slice { z, outline: self }
    }
}

/// A loop embedded at a fixed height, with any rotation already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Height of the slice along the Z axis.
    pub z: f64,
    /// The outline at that height.
    pub outline: Loop2D,
}

impl Slice {
    /// The outline's points lifted into 3D.
    #[must_use]
    pub fn points_3d(&self) -> Vec<Point3> {
        self.outline
            .points()
            .iter()
            .map(|p| Point3::new(p.x, p.y, self.z))
            .collect()
    }
}

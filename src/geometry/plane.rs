use crate::math::{Point3, Vector3, TOLERANCE};

/// An oriented infinite plane `normal · p = offset`.
///
/// The normal is unit length and points to the plane's front side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3,
    offset: f64,
}

impl Plane {
    /// Creates a plane from a normal direction and a point lying on it.
    ///
    /// Returns `None` if the normal is zero-length.
    #[must_use]
    pub fn from_normal(normal: Vector3, point: &Point3) -> Option<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return None;
        }
        let normal = normal / len;
        Some(Self {
            normal,
            offset: normal.dot(&point.coords),
        })
    }

    /// Fits the supporting plane of a polygon using Newell's method.
    ///
    /// The normal follows the right-hand rule over the vertex order.
    /// Returns `None` for polygons with fewer than three vertices or
    /// (near) zero area.
    #[must_use]
    pub fn from_polygon(points: &[Point3]) -> Option<Self> {
        let n = points.len();
        if n < 3 {
            return None;
        }
        let mut normal = Vector3::zeros();
        let mut centroid = Vector3::zeros();
        for i in 0..n {
            let curr = &points[i];
            let next = &points[(i + 1) % n];
            normal.x += (curr.y - next.y) * (curr.z + next.z);
            normal.y += (curr.z - next.z) * (curr.x + next.x);
            normal.z += (curr.x - next.x) * (curr.y + next.y);
            centroid += curr.coords;
        }
        #[allow(clippy::cast_precision_loss)]
        let centroid = Point3::from(centroid / n as f64);
        Self::from_normal(normal, &centroid)
    }

    /// The unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Signed distance of the plane from the origin along its normal.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Signed distance from the plane to `p` (positive on the front side).
    #[must_use]
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        self.normal.dot(&p.coords) - self.offset
    }

    /// Returns the same plane facing the opposite way.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }

    /// Returns the plane moved by `displacement`.
    #[must_use]
    pub fn translated(&self, displacement: &Vector3) -> Self {
        Self {
            normal: self.normal,
            offset: self.offset + self.normal.dot(displacement),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn newell_plane_of_ccw_square_faces_up() {
        let plane = Plane::from_polygon(&[
            p(0.0, 0.0, 2.0),
            p(1.0, 0.0, 2.0),
            p(1.0, 1.0, 2.0),
            p(0.0, 1.0, 2.0),
        ])
        .unwrap();
        assert_relative_eq!(plane.normal().z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(plane.offset(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(plane.signed_distance(&p(0.3, 0.3, 5.0)), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_polygon_has_no_plane() {
        assert!(Plane::from_polygon(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)])
            .is_none());
        assert!(Plane::from_polygon(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]).is_none());
    }

    #[test]
    fn flipped_and_translated() {
        let plane = Plane::from_normal(Vector3::z(), &p(0.0, 0.0, 1.0)).unwrap();
        let flipped = plane.flipped();
        assert_relative_eq!(flipped.signed_distance(&p(0.0, 0.0, 3.0)), -2.0, epsilon = 1e-12);
        let moved = plane.translated(&Vector3::new(5.0, 0.0, 2.0));
        assert_relative_eq!(moved.offset(), 3.0, epsilon = 1e-12);
    }
}

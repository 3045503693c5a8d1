use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{Face, Solid};

use super::make_cylinder::circle_points;

/// Creates a Z-aligned annular ring: a cylinder with a coaxial bore.
///
/// Equivalent to subtracting an inner cylinder from an outer one with the
/// same segment count, built directly so no boolean pass is needed.
pub struct MakeRing {
    base_center: Point3,
    outer_radius: f64,
    inner_radius: f64,
    height: f64,
    segments: usize,
}

impl MakeRing {
    /// Creates a new `MakeRing` operation standing on `base_center`.
    #[must_use]
    pub fn new(
        base_center: Point3,
        outer_radius: f64,
        inner_radius: f64,
        height: f64,
        segments: usize,
    ) -> Self {
        Self {
            base_center,
            outer_radius,
            inner_radius,
            height,
            segments,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < inner_radius < outer_radius`, the height
    /// is positive and there are at least three segments.
    pub fn execute(&self) -> Result<Solid> {
        if self.inner_radius < TOLERANCE || self.outer_radius - self.inner_radius < TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "ring radii must satisfy 0 < inner < outer, got {} and {}",
                self.inner_radius, self.outer_radius
            ))
            .into());
        }
        if self.height < TOLERANCE || self.segments < 3 {
            return Err(OperationError::InvalidInput(
                "ring needs a positive height and at least 3 segments".into(),
            )
            .into());
        }

        let lift = |pts: &[Point3]| -> Vec<Point3> {
            pts.iter()
                .map(|p| Point3::new(p.x, p.y, p.z + self.height))
                .collect()
        };
        let outer_bottom = circle_points(&self.base_center, self.outer_radius, self.segments);
        let inner_bottom = circle_points(&self.base_center, self.inner_radius, self.segments);
        let outer_top = lift(&outer_bottom);
        let inner_top = lift(&inner_bottom);

        let n = self.segments;
        let mut faces = Vec::with_capacity(4 * n);
        for i in 0..n {
            let j = (i + 1) % n;
            faces.push(Face::new(vec![outer_bottom[i], outer_bottom[j], outer_top[j], outer_top[i]]));
            faces.push(Face::new(vec![inner_bottom[j], inner_bottom[i], inner_top[i], inner_top[j]]));
            faces.push(Face::new(vec![outer_top[i], outer_top[j], inner_top[j], inner_top[i]]));
            faces.push(Face::new(vec![
                outer_bottom[j],
                outer_bottom[i],
                inner_bottom[i],
                inner_bottom[j],
            ]));
        }
        let faces = faces
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| OperationError::Failed("degenerate ring face".into()))?;
        Ok(Solid::new(faces))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::{IsValid, Volume};

    fn origin() -> Point3 {
        Point3::origin()
    }

    #[test]
    fn ring_is_watertight() {
        let ring = MakeRing::new(origin(), 10.0, 8.0, 4.0, 32).execute().unwrap();
        assert_eq!(ring.face_count(), 128);
        assert!(IsValid::new(&ring).execute());
    }

    #[test]
    fn ring_volume_is_annulus_times_height() {
        let n = 512;
        let ring = MakeRing::new(origin(), 10.0, 8.0, 4.0, n).execute().unwrap();
        let expected = std::f64::consts::PI * (100.0 - 64.0) * 4.0;
        let volume = Volume::new(&ring).execute();
        assert!((volume - expected).abs() / expected < 1e-3);
    }

    #[test]
    fn inverted_radii_fail() {
        assert!(MakeRing::new(origin(), 5.0, 6.0, 1.0, 16).execute().is_err());
        assert!(MakeRing::new(origin(), 5.0, 0.0, 1.0, 16).execute().is_err());
    }
}

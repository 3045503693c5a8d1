use std::f64::consts::TAU;

use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{Face, Solid};

/// Creates a Z-aligned cylinder approximated by a regular prism.
///
/// Vertices sit on the true radius at angles `2πi / segments`.
pub struct MakeCylinder {
    base_center: Point3,
    radius: f64,
    height: f64,
    segments: usize,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation standing on `base_center`.
    #[must_use]
    pub fn new(base_center: Point3, radius: f64, height: f64, segments: usize) -> Self {
        Self {
            base_center,
            radius,
            height,
            segments,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or height is not positive, or there
    /// are fewer than three segments.
    pub fn execute(&self) -> Result<Solid> {
        if self.radius < TOLERANCE {
            return Err(
                OperationError::InvalidInput("cylinder radius must be positive".into()).into(),
            );
        }
        if self.height < TOLERANCE {
            return Err(
                OperationError::InvalidInput("cylinder height must be positive".into()).into(),
            );
        }
        if self.segments < 3 {
            return Err(
                OperationError::InvalidInput("cylinder needs at least 3 segments".into()).into(),
            );
        }

        let bottom = circle_points(&self.base_center, self.radius, self.segments);
        let top: Vec<Point3> = bottom
            .iter()
            .map(|p| Point3::new(p.x, p.y, p.z + self.height))
            .collect();

        let n = self.segments;
        let mut faces = Vec::with_capacity(n + 2);
        faces.push(Face::new(bottom.iter().rev().copied().collect()));
        faces.push(Face::new(top.clone()));
        for i in 0..n {
            let j = (i + 1) % n;
            faces.push(Face::new(vec![bottom[i], bottom[j], top[j], top[i]]));
        }
        let faces = faces
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| OperationError::Failed("degenerate cylinder face".into()))?;
        Ok(Solid::new(faces))
    }
}

/// Points on a horizontal circle, counter-clockwise from `+x`.
pub(crate) fn circle_points(center: &Point3, radius: f64, segments: usize) -> Vec<Point3> {
    (0..segments)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let theta = TAU * i as f64 / segments as f64;
            Point3::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
                center.z,
            )
        })
        .collect()
}

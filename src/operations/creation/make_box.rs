use crate::error::{OperationError, Result};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{Face, Solid};

/// Creates an axis-aligned box solid from two corner points.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Executes the operation, returning a six-faced solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the box has no extent along some axis.
    pub fn execute(&self) -> Result<Solid> {
        let lo = self.min_corner.inf(&self.max_corner);
        let hi = self.min_corner.sup(&self.max_corner);
        let extent = hi - lo;
        if extent.min() < TOLERANCE {
            return Err(OperationError::InvalidInput("box must have positive extent".into()).into());
        }

        let (x0, y0, z0) = (lo.x, lo.y, lo.z);
        let (x1, y1, z1) = (hi.x, hi.y, hi.z);
        let p = Point3::new;
        let quads = [
            [p(x0, y0, z0), p(x0, y1, z0), p(x1, y1, z0), p(x1, y0, z0)],
            [p(x0, y0, z1), p(x1, y0, z1), p(x1, y1, z1), p(x0, y1, z1)],
            [p(x0, y0, z0), p(x1, y0, z0), p(x1, y0, z1), p(x0, y0, z1)],
            [p(x0, y1, z0), p(x0, y1, z1), p(x1, y1, z1), p(x1, y1, z0)],
            [p(x0, y0, z0), p(x0, y0, z1), p(x0, y1, z1), p(x0, y1, z0)],
            [p(x1, y0, z0), p(x1, y1, z0), p(x1, y1, z1), p(x1, y0, z1)],
        ];
        let faces = quads
            .into_iter()
            .map(|quad| Face::new(quad.to_vec()))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| OperationError::Failed("degenerate box face".into()))?;
        Ok(Solid::new(faces))
    }
}

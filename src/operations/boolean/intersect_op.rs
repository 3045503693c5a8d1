use crate::error::Result;
use crate::topology::Solid;

use super::engine::{boolean_execute, BooleanOp};

/// Computes the boolean intersection of two solids.
pub struct Intersect {
    solid_a: Solid,
    solid_b: Solid,
}

impl Intersect {
    /// Creates a new `Intersect` operation.
    #[must_use]
    pub fn new(solid_a: Solid, solid_b: Solid) -> Self {
        Self { solid_a, solid_b }
    }

    /// Executes the intersection.
    ///
    /// # Errors
    ///
    /// Returns an error if either solid has a non-finite vertex.
    pub fn execute(self) -> Result<Solid> {
        boolean_execute(self.solid_a, self.solid_b, BooleanOp::Intersect)
    }
}

use crate::error::Result;
use crate::topology::Solid;

use super::engine::{boolean_execute, BooleanOp};

/// Computes the boolean difference `A - B` of two solids.
pub struct Subtract {
    solid_a: Solid,
    solid_b: Solid,
}

impl Subtract {
    /// Creates a new `Subtract` operation removing `solid_b` from `solid_a`.
    #[must_use]
    pub fn new(solid_a: Solid, solid_b: Solid) -> Self {
        Self { solid_a, solid_b }
    }

    /// Executes the subtraction.
    ///
    /// # Errors
    ///
    /// Returns an error if either solid has a non-finite vertex.
    pub fn execute(self) -> Result<Solid> {
        boolean_execute(self.solid_a, self.solid_b, BooleanOp::Subtract)
    }
}

use crate::error::Result;
use crate::topology::Solid;

use super::engine::{boolean_execute, BooleanOp};

/// Computes the boolean union of two solids.
pub struct Union {
    solid_a: Solid,
    solid_b: Solid,
}

impl Union {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(solid_a: Solid, solid_b: Solid) -> Self {
        Self { solid_a, solid_b }
    }

    /// Executes the union.
    ///
    /// # Errors
    ///
    /// Returns an error if either solid has a non-finite vertex.
    pub fn execute(self) -> Result<Solid> {
        boolean_execute(self.solid_a, self.solid_b, BooleanOp::Union)
    }
}

//! Serialization of finished solids into printable file formats.

mod stl;

pub use stl::BinaryStl;

use crate::error::Result;
use crate::topology::Solid;

/// Turns a solid into the bytes of a file format.
///
/// Implementations must be `Send + Sync` so one serializer can be shared by
/// concurrent export calls.
pub trait SolidSerializer: Send + Sync {
    /// Serializes `solid`.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid cannot be represented in the format.
    fn serialize(&self, solid: &Solid) -> Result<Vec<u8>>;
}

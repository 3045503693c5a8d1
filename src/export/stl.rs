use std::io::Write;

use crate::error::{ExportError, Result};
use crate::tessellation::{TessellateSolid, TriangleBuffer};
use crate::topology::Solid;

use super::SolidSerializer;

/// Size of the free-form header.
const HEADER_LEN: usize = 80;

/// Size of one facet: normal, three corners and the attribute word.
const FACET_LEN: usize = 50;

const HEADER_TEXT: &[u8] = b"vesselgen binary STL";

/// Binary STL writer.
///
/// Layout: an 80-byte header, the triangle count as a little-endian `u32`,
/// then one 50-byte facet per triangle holding the flat normal and the
/// three corners as little-endian `f32`s followed by a zero attribute word.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryStl;

impl BinaryStl {
    /// Creates a new binary STL writer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Writes a tessellated solid to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::TooManyTriangles`] if the count does not fit
    /// in a `u32`, or [`ExportError::Io`] if the writer fails.
    pub fn write<W: Write>(&self, buffer: &TriangleBuffer, writer: &mut W) -> Result<()> {
        let triangles = buffer.triangle_count();
        let count =
            u32::try_from(triangles).map_err(|_| ExportError::TooManyTriangles(triangles))?;

        let mut header = [0u8; HEADER_LEN];
        header[..HEADER_TEXT.len()].copy_from_slice(HEADER_TEXT);
        writer.write_all(&header).map_err(ExportError::from)?;
        writer
            .write_all(&count.to_le_bytes())
            .map_err(ExportError::from)?;

        let mut facet = Vec::with_capacity(FACET_LEN);
        for (corners, normals) in buffer.positions.chunks_exact(9).zip(buffer.normals.chunks_exact(9)) {
            facet.clear();
            for c in &normals[..3] {
                facet.extend_from_slice(&c.to_le_bytes());
            }
            for c in corners {
                facet.extend_from_slice(&c.to_le_bytes());
            }
            facet.extend_from_slice(&0u16.to_le_bytes());
            writer.write_all(&facet).map_err(ExportError::from)?;
        }
        Ok(())
    }
}

impl SolidSerializer for BinaryStl {
    fn serialize(&self, solid: &Solid) -> Result<Vec<u8>> {
        let buffer = TessellateSolid::new(solid).execute();
        let mut bytes = Vec::with_capacity(HEADER_LEN + 4 + FACET_LEN * buffer.triangle_count());
        self.write(&buffer, &mut bytes)?;
        Ok(bytes)
    }
}

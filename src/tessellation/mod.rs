mod cap;
mod tessellate_solid;

pub use cap::triangulate_loop;
pub use tessellate_solid::TessellateSolid;

/// Flat-shaded triangle soup ready for rendering or export.
///
/// Every triangle owns its three vertices; `indices` is simply
/// `0, 1, 2, ...` so the buffer can be uploaded as indexed geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleBuffer {
    /// Vertex positions, three floats per vertex.
    pub positions: Vec<f32>,
    /// Per-vertex normals, three floats per vertex.
    pub normals: Vec<f32>,
    /// Sequential triangle indices, three per triangle.
    pub indices: Vec<u32>,
}

impl TriangleBuffer {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns `true` if the buffer holds no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns `true` if every position and normal is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.positions.iter().chain(&self.normals).all(|v| v.is_finite())
    }
}

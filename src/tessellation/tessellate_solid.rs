use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::Solid;

use super::TriangleBuffer;

/// Normal used for triangles too thin to have one.
const FALLBACK_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];

/// Converts a solid into a flat-shaded [`TriangleBuffer`].
///
/// Each `n`-gon is fanned from its first vertex into `n - 2` triangles. The
/// buffers are sized in a counting pass before the fill pass, so nothing
/// reallocates.
pub struct TessellateSolid<'a> {
    solid: &'a Solid,
}

impl<'a> TessellateSolid<'a> {
    /// Creates a new `TessellateSolid` operation.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the conversion.
    #[must_use]
    pub fn execute(&self) -> TriangleBuffer {
        let triangles = self.solid.triangle_count();
        let mut buffer = TriangleBuffer {
            positions: Vec::with_capacity(triangles * 9),
            normals: Vec::with_capacity(triangles * 9),
            indices: Vec::with_capacity(triangles * 3),
        };

        for face in self.solid.faces() {
            let vertices = face.vertices();
            for i in 1..vertices.len().saturating_sub(1) {
                push_triangle(&mut buffer, [&vertices[0], &vertices[i], &vertices[i + 1]]);
            }
        }
        buffer
    }
}

#[allow(clippy::cast_possible_truncation)]
fn push_triangle(buffer: &mut TriangleBuffer, corners: [&Point3; 3]) {
    let normal = flat_normal(corners);
    for corner in corners {
        buffer
            .positions
            .extend([corner.x as f32, corner.y as f32, corner.z as f32]);
        buffer.normals.extend(normal);
        buffer.indices.push(buffer.indices.len() as u32);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn flat_normal([a, b, c]: [&Point3; 3]) -> [f32; 3] {
    let n: Vector3 = (b - a).cross(&(c - a));
    let len = n.norm();
    if len < TOLERANCE || !len.is_finite() {
        return FALLBACK_NORMAL;
    }
    let n = n / len;
    [n.x as f32, n.y as f32, n.z as f32]
}

impl From<&Solid> for TriangleBuffer {
    fn from(solid: &Solid) -> Self {
        TessellateSolid::new(solid).execute()
    }
}

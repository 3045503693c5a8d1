use std::collections::HashMap;

use crate::math::Point3;
use crate::topology::Solid;

type VertexKey = [u64; 3];

/// Checks that a solid is a closed, consistently oriented surface.
///
/// Every directed edge `a → b` of every face must be matched by exactly one
/// `b → a` from another face, comparing vertices bit-for-bit. Faces need at
/// least three finite vertices.
pub struct IsValid<'a> {
    solid: &'a Solid,
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the validation, returning `true` if the solid is watertight.
    #[must_use]
    pub fn execute(&self) -> bool {
        if self.solid.is_empty() {
            return false;
        }
        let mut balance: HashMap<(VertexKey, VertexKey), i32> = HashMap::new();
        for face in self.solid.faces() {
            let vertices = face.vertices();
            if vertices.len() < 3 || vertices.iter().any(|v| !v.coords.iter().all(|c| c.is_finite())) {
                return false;
            }
            for (i, a) in vertices.iter().enumerate() {
                let b = &vertices[(i + 1) % vertices.len()];
                let (ka, kb) = (key(a), key(b));
                if ka == kb {
                    return false;
                }
                if ka < kb {
                    *balance.entry((ka, kb)).or_insert(0) += 1;
                } else {
                    *balance.entry((kb, ka)).or_insert(0) -= 1;
                }
            }
        }
        balance.values().all(|&n| n == 0)
    }
}

fn key(p: &Point3) -> VertexKey {
    // Normalise -0.0 so mirrored zero coordinates compare equal.
    [p.x + 0.0, p.y + 0.0, p.z + 0.0].map(f64::to_bits)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeBox;
    use crate::topology::Face;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn cube_is_valid() {
        let cube = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0)).execute().unwrap();
        assert!(IsValid::new(&cube).execute());
    }

    #[test]
    fn missing_face_is_invalid() {
        let cube = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0)).execute().unwrap();
        let mut faces = cube.into_faces();
        faces.pop();
        assert!(!IsValid::new(&Solid::new(faces)).execute());
    }

    #[test]
    fn flipped_face_is_invalid() {
        let cube = MakeBox::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0)).execute().unwrap();
        let mut faces: Vec<Face> = cube.into_faces();
        faces[2].flip();
        assert!(!IsValid::new(&Solid::new(faces)).execute());
    }

    #[test]
    fn empty_solid_is_invalid() {
        assert!(!IsValid::new(&Solid::default()).execute());
    }
}

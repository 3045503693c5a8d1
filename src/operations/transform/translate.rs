use crate::math::Vector3;
use crate::topology::Solid;

/// Translates a solid by a displacement vector.
pub struct Translate {
    solid: Solid,
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(solid: Solid, displacement: Vector3) -> Self {
        Self {
            solid,
            displacement,
        }
    }

    /// Executes the translation, returning the moved solid.
    #[must_use]
    pub fn execute(self) -> Solid {
        if self.displacement == Vector3::zeros() {
            return self.solid;
        }
        Solid::new(
            self.solid
                .faces()
                .iter()
                .map(|face| face.translated(&self.displacement))
                .collect(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use crate::operations::query::{BoundingBox, IsValid, Volume};

    #[test]
    fn translate_moves_box_and_planes() {
        let cube = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute()
            .unwrap();
        let moved = Translate::new(cube, Vector3::new(0.0, 0.0, 10.0)).execute();
        let aabb = BoundingBox::new(&moved).execute().unwrap();
        assert!((aabb.min.z - 10.0).abs() < 1e-12);
        assert!((aabb.max.z - 11.0).abs() < 1e-12);
        for face in moved.faces() {
            for v in face.vertices() {
                assert!(face.plane().signed_distance(v).abs() < 1e-9);
            }
        }
        assert!(IsValid::new(&moved).execute());
        assert!((Volume::new(&moved).execute() - 1.0).abs() < 1e-9);
    }
}

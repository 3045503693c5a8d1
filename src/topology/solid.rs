use super::face::Face;

/// A closed boundary representation: the planar faces enclosing a volume.
///
/// Solids built by the lofter, the primitives and the boolean operations are
/// watertight: every edge is shared by exactly two faces that traverse it in
/// opposite directions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    faces: Vec<Face>,
}

impl Solid {
    /// Creates a solid from its faces.
    #[must_use]
    pub fn new(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    /// The bounding faces.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Consumes the solid, returning its faces.
    #[must_use]
    pub fn into_faces(self) -> Vec<Face> {
        self.faces
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the solid has no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Number of triangles a fan triangulation of every face produces.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.faces
            .iter()
            .map(|f| f.vertices().len().saturating_sub(2))
            .sum()
    }
}

use crate::geometry::Plane;
use crate::math::{Point3, Vector3};

/// A planar polygon bounding part of a solid.
///
/// Vertices are ordered counter-clockwise when viewed from outside the
/// solid, so the plane normal points outward.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    vertices: Vec<Point3>,
    plane: Plane,
}

impl Face {
    /// Creates a face, fitting its plane from the vertices.
    ///
    /// Returns `None` for fewer than three vertices or zero area.
    #[must_use]
    pub fn new(vertices: Vec<Point3>) -> Option<Self> {
        let plane = Plane::from_polygon(&vertices)?;
        Some(Self { vertices, plane })
    }

    /// Creates a face lying on a known plane.
    ///
    /// Used for fragments split off a parent face, which keep the parent's
    /// plane rather than refitting it from rounded vertices.
    #[must_use]
    pub fn with_plane(vertices: Vec<Point3>, plane: Plane) -> Self {
        Self { vertices, plane }
    }

    /// The face's vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// The supporting plane.
    #[must_use]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Outward unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        self.plane.normal()
    }

    /// Reverses the winding and flips the plane.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane = self.plane.flipped();
    }

    /// Returns the face moved by `displacement`.
    #[must_use]
    pub fn translated(&self, displacement: &Vector3) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| v + displacement).collect(),
            plane: self.plane.translated(displacement),
        }
    }
}

use crate::math::Point3;
use crate::topology::{Face, Solid};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Smallest box containing every point, or `None` for no points.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |acc, p| Self {
            min: acc.min.inf(p),
            max: acc.max.sup(p),
        }))
    }

    /// Bounding box of a single face.
    #[must_use]
    pub fn of_face(face: &Face) -> Option<Self> {
        Self::from_points(face.vertices())
    }

    /// Returns `true` if the boxes overlap once both are grown by `margin`.
    #[must_use]
    pub fn overlaps(&self, other: &Self, margin: f64) -> bool {
        (0..3).all(|i| self.min[i] - margin <= other.max[i] && other.min[i] - margin <= self.max[i])
    }

    /// Extent along each axis.
    #[must_use]
    pub fn size(&self) -> crate::math::Vector3 {
        self.max - self.min
    }
}

/// Computes the axis-aligned bounding box of a solid.
pub struct BoundingBox<'a> {
    solid: &'a Solid,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query; `None` for a solid without faces.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        Aabb::from_points(self.solid.faces().iter().flat_map(Face::vertices))
    }
}

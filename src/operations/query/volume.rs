use crate::topology::Solid;

/// Computes the enclosed volume of a solid.
///
/// Sums the signed tetrahedra `(1/6) · v0 · (v1 × v2)` over a fan
/// triangulation of every face. Positive for outward-oriented solids; the
/// result is only meaningful for closed solids.
pub struct Volume<'a> {
    solid: &'a Solid,
}

impl<'a> Volume<'a> {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the signed volume.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let mut six_volume = 0.0;
        for face in self.solid.faces() {
            let v = face.vertices();
            for i in 1..v.len().saturating_sub(1) {
                six_volume += v[0].coords.dot(&v[i].coords.cross(&v[i + 1].coords));
            }
        }
        six_volume / 6.0
    }
}

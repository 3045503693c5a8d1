use crate::geometry::CrossSectionLibrary;
use crate::operations::shaping::Loft;
use crate::params::LampParameters;

/// Radial thickness of both connection lips, in millimetres.
pub const LIP_WALL: f64 = 2.0;

/// Radial clearance between the shade lip and the base lip, in millimetres.
pub const LIP_TOLERANCE: f64 = 0.3;

/// Smallest base lip outer radius: room for both lips, the gap and a bore.
const MIN_BASE_LIP_RADIUS: f64 = 2.0 * LIP_WALL + LIP_TOLERANCE + 1.0;

/// Radii and height of the nested connection lips of a lamp.
///
/// The base carries the outer lip on its top plate. The shade carries the
/// inner lip, which drops into the base lip with [`LIP_TOLERANCE`] of play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LipFit {
    pub base_outer: f64,
    pub base_inner: f64,
    pub shade_outer: f64,
    pub shade_inner: f64,
    pub height: f64,
}

impl LipFit {
    /// Derives the lip geometry from the base's top outline.
    ///
    /// The base lip sits one wall thickness inside the narrowest point of
    /// the top outline, so it stays on the top plate for every family.
    #[must_use]
    pub fn new(library: &CrossSectionLibrary, lamp: &LampParameters) -> Self {
        let top = Loft::new(&lamp.base).outline_at(library, 1.0);
        let base_outer = (top.min_radius() - lamp.base.wall_thickness).max(MIN_BASE_LIP_RADIUS);
        let base_inner = base_outer - LIP_WALL;
        let shade_outer = base_inner - LIP_TOLERANCE;
        Self {
            base_outer,
            base_inner,
            shade_outer,
            shade_inner: shade_outer - LIP_WALL,
            height: lamp.connection.lip_height(),
        }
    }
}

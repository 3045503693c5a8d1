use tracing::{debug, instrument};

use crate::error::Result;
use crate::geometry::CrossSectionLibrary;
use crate::math::Vector3;
use crate::operations::boolean::Subtract;
use crate::operations::shaping::Loft;
use crate::operations::transform::Translate;
use crate::params::ShapeParameters;
use crate::topology::Solid;

use super::CUT_CLEARANCE;

/// Builds a vase: the outer shell hollowed by an inset inner loft.
///
/// The inner loft is raised by the base thickness, leaving a solid floor,
/// and runs past the rim so the top is open.
pub struct MakeVase<'a> {
    params: &'a ShapeParameters,
}

impl<'a> MakeVase<'a> {
    /// Creates a new `MakeVase` operation.
    #[must_use]
    pub fn new(params: &'a ShapeParameters) -> Self {
        Self { params }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if either loft produces non-finite geometry.
    #[instrument(skip_all, fields(height = self.params.height, segments = self.params.segments()))]
    pub fn execute(&self, library: &CrossSectionLibrary) -> Result<Solid> {
        let p = self.params;
        let outer = Loft::new(p).execute(library)?;
        let inner = Loft::new(p)
            .with_wall_inset(p.wall_thickness)
            .with_skip_modulation(p.smooth_inner_wall)
            .with_extension(0.0, CUT_CLEARANCE)
            .execute(library)?;
        let inner = Translate::new(inner, Vector3::new(0.0, 0.0, p.base_thickness)).execute();

        let vase = Subtract::new(outer, inner).execute()?;
        debug!(faces = vase.face_count(), "vase assembled");
        Ok(vase)
    }
}

use tracing::{debug, instrument};

use crate::error::Result;
use crate::geometry::CrossSectionLibrary;
use crate::math::Point3;
use crate::operations::boolean::{Subtract, Union};
use crate::operations::creation::MakeRing;
use crate::operations::shaping::Loft;
use crate::params::LampParameters;
use crate::topology::Solid;

use super::{LipFit, CUT_CLEARANCE, LIP_EMBED, LIP_WALL};

/// Builds a lamp shade: an open tube with a lip hanging below it.
///
/// The inner loft runs past both ends of the outer one, so the shell is open
/// at the top and bottom. The lip nests inside the base lip. When the lip is
/// narrower than the shade opening, a flat flange at the bottom of the shade
/// bridges from the lip out into the wall.
pub struct MakeLampShade<'a> {
    lamp: &'a LampParameters,
}

impl<'a> MakeLampShade<'a> {
    /// Creates a new `MakeLampShade` operation.
    #[must_use]
    pub fn new(lamp: &'a LampParameters) -> Self {
        Self { lamp }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if a loft produces non-finite geometry or the lip
    /// radii collapse.
    #[instrument(skip_all, fields(height = self.lamp.shade.height))]
    pub fn execute(&self, library: &CrossSectionLibrary) -> Result<Solid> {
        let p = &self.lamp.shade;
        let segments = p.segments();
        let fit = LipFit::new(library, self.lamp);

        let outer = Loft::new(p).execute(library)?;
        let inner = Loft::new(p)
            .with_wall_inset(p.wall_thickness)
            .with_skip_modulation(p.smooth_inner_wall)
            .with_extension(CUT_CLEARANCE, CUT_CLEARANCE)
            .execute(library)?;
        let mut shade = Subtract::new(outer, inner).execute()?;

        let lip = MakeRing::new(
            Point3::new(0.0, 0.0, -fit.height),
            fit.shade_outer,
            fit.shade_inner,
            fit.height + LIP_EMBED,
            segments,
        )
        .execute()?;
        shade = Union::new(shade, lip).execute()?;

        // Reach halfway into the wall at its narrowest point.
        let opening = Loft::new(p).outline_at(library, 0.0).min_radius();
        let flange_outer = opening - p.wall_thickness * 0.5;
        let flange_inner = fit.shade_inner + LIP_WALL * 0.5;
        if fit.shade_outer < opening - p.wall_thickness && flange_outer > flange_inner {
            let flange = MakeRing::new(
                Point3::origin(),
                flange_outer,
                flange_inner,
                LIP_WALL,
                segments,
            )
            .execute()?;
            shade = Union::new(shade, flange).execute()?;
            debug!(flange_outer, flange_inner, "added lip flange");
        }

        debug!(faces = shade.face_count(), "lamp shade assembled");
        Ok(shade)
    }
}

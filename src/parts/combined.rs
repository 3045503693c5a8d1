use tracing::{debug, instrument};

use crate::error::Result;
use crate::geometry::CrossSectionLibrary;
use crate::math::Vector3;
use crate::operations::boolean::Union;
use crate::operations::transform::Translate;
use crate::params::LampParameters;
use crate::topology::Solid;

use super::{MakeLampBase, MakeLampShade};

/// Builds the assembled lamp for previewing: the shade resting on the base.
///
/// The shade is lifted by the base height plus the lip height, so the bottom
/// of its lip sits on the base's top plate inside the base lip.
pub struct MakeLampAssembly<'a> {
    lamp: &'a LampParameters,
}

impl<'a> MakeLampAssembly<'a> {
    /// Creates a new `MakeLampAssembly` operation.
    #[must_use]
    pub fn new(lamp: &'a LampParameters) -> Self {
        Self { lamp }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if either part fails to build.
    #[instrument(skip_all)]
    pub fn execute(&self, library: &CrossSectionLibrary) -> Result<Solid> {
        let base = MakeLampBase::new(self.lamp).execute(library)?;
        let shade = MakeLampShade::new(self.lamp).execute(library)?;
        let lift = self.lamp.base.height + self.lamp.connection.lip_height();
        let shade = Translate::new(shade, Vector3::new(0.0, 0.0, lift)).execute();
        let lamp = Union::new(base, shade).execute()?;
        debug!(lift, faces = lamp.face_count(), "lamp assembled");
        Ok(lamp)
    }
}

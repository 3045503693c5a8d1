use tracing::{debug, instrument};

use crate::error::Result;
use crate::geometry::CrossSectionLibrary;
use crate::math::Point3;
use crate::operations::boolean::{Subtract, Union};
use crate::operations::creation::{MakeBox, MakeCylinder, MakeRing};
use crate::operations::shaping::Loft;
use crate::params::LampParameters;
use crate::topology::Solid;

use super::{LipFit, CUT_CLEARANCE, LIP_EMBED};

/// Thinnest floor and top plate the base is built with, in millimetres.
const MIN_PLATE: f64 = 1.0;

/// Shortest hollow worth cutting between the floor and the top plate.
const MIN_CAVITY_HEIGHT: f64 = 1.0;

/// The socket hole may use at most this share of the lip's inner radius.
const SOCKET_RADIUS_LIMIT: f64 = 0.9;

/// How far the wire groove runs past the widest point of the foot.
const GROOVE_OVERRUN: f64 = 5.0;

/// The groove never cuts deeper than this share of the floor.
const GROOVE_DEPTH_LIMIT: f64 = 0.6;

/// Builds a lamp base.
///
/// The outer shell is hollowed between a floor and a top plate, both of
/// base thickness. The socket cavity is cut down through the top plate, an
/// optional wire bore and underside groove are cut through the floor, and
/// the connection lip is added on top.
pub struct MakeLampBase<'a> {
    lamp: &'a LampParameters,
}

impl<'a> MakeLampBase<'a> {
    /// Creates a new `MakeLampBase` operation.
    #[must_use]
    pub fn new(lamp: &'a LampParameters) -> Self {
        Self { lamp }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if a loft produces non-finite geometry or a cutter
    /// ends up with a non-positive dimension.
    #[instrument(skip_all, fields(socket = self.lamp.socket.name(), wire = self.lamp.wire_channel))]
    pub fn execute(&self, library: &CrossSectionLibrary) -> Result<Solid> {
        let lamp = self.lamp;
        let p = &lamp.base;
        let height = p.height;
        let plate = p.base_thickness.max(MIN_PLATE);
        let segments = p.segments();
        let fit = LipFit::new(library, lamp);

        let mut base = Loft::new(p).execute(library)?;
        if height > 2.0 * plate + MIN_CAVITY_HEIGHT {
            let cavity = Loft::new(p)
                .with_wall_inset(p.wall_thickness)
                .with_skip_modulation(p.smooth_inner_wall)
                .with_t_range(plate / height, (height - plate) / height)
                .execute(library)?;
            base = Subtract::new(base, cavity).execute()?;
        }

        let socket = lamp.socket.geometry();
        let socket_radius =
            (socket.mount_hole_diameter * 0.5).min(fit.base_inner * SOCKET_RADIUS_LIMIT);
        let socket_depth = socket.collar_height.min(height - 2.0 * plate).max(plate);
        let socket_hole = MakeCylinder::new(
            Point3::new(0.0, 0.0, height - socket_depth),
            socket_radius,
            socket_depth + CUT_CLEARANCE,
            segments,
        )
        .execute()?;
        base = Subtract::new(base, socket_hole).execute()?;

        if lamp.wire_channel {
            let bore_radius = socket.wire_bore_diameter * 0.5;
            let bore = MakeCylinder::new(
                Point3::new(0.0, 0.0, -CUT_CLEARANCE),
                bore_radius,
                plate + 2.0 * CUT_CLEARANCE,
                segments,
            )
            .execute()?;
            base = Subtract::new(base, bore).execute()?;

            let reach = Loft::new(p).outline_at(library, 0.0).max_radius() + GROOVE_OVERRUN;
            let depth = bore_radius.min(plate * GROOVE_DEPTH_LIMIT);
            let groove = MakeBox::new(
                Point3::new(0.0, -bore_radius, -CUT_CLEARANCE),
                Point3::new(reach, bore_radius, depth),
            )
            .execute()?;
            base = Subtract::new(base, groove).execute()?;
        }

        let lip = MakeRing::new(
            Point3::new(0.0, 0.0, height - LIP_EMBED),
            fit.base_outer,
            fit.base_inner,
            fit.height + LIP_EMBED,
            segments,
        )
        .execute()?;
        let base = Union::new(base, lip).execute()?;
        debug!(faces = base.face_count(), "lamp base assembled");
        Ok(base)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::{BoundingBox, IsValid, Volume};
    use crate::params::ConnectionType;
    use crate::parts::fixtures::small_lamp;
    use crate::tessellation::TessellateSolid;
    use approx::assert_relative_eq;

    #[test]
    fn lip_stands_on_top_plate() {
        let lib = CrossSectionLibrary::new();
        let lamp = small_lamp();
        let base = MakeLampBase::new(&lamp).execute(&lib).unwrap();
        let aabb = BoundingBox::new(&base).execute().unwrap();
        assert_relative_eq!(aabb.min.z, 0.0, epsilon = 1e-9);
        assert_relative_eq!(aabb.max.z, 16.0 + 8.0, epsilon = 1e-9);
    }

    #[test]
    fn gravity_sit_lip_is_lower() {
        let lib = CrossSectionLibrary::new();
        let lamp = LampParameters {
            connection: ConnectionType::GravitySit,
            ..small_lamp()
        };
        let base = MakeLampBase::new(&lamp).execute(&lib).unwrap();
        let aabb = BoundingBox::new(&base).execute().unwrap();
        assert_relative_eq!(aabb.max.z, 16.0 + 4.0, epsilon = 1e-9);
    }

    #[test]
    fn base_is_hollow() {
        let lib = CrossSectionLibrary::new();
        let lamp = small_lamp();
        let shell = Volume::new(&Loft::new(&lamp.base).execute(&lib).unwrap()).execute();
        let base = MakeLampBase::new(&lamp).execute(&lib).unwrap();
        let volume = Volume::new(&base).execute();
        assert!(volume > 0.0);
        assert!(volume < shell);
        assert!(IsValid::new(&base).execute());
    }

    #[test]
    fn wire_channel_removes_material() {
        let lib = CrossSectionLibrary::new();
        let with_wire = small_lamp();
        let without_wire = LampParameters {
            wire_channel: false,
            ..small_lamp()
        };
        let a = MakeLampBase::new(&with_wire).execute(&lib).unwrap();
        let b = MakeLampBase::new(&without_wire).execute(&lib).unwrap();
        assert_ne!(
            TessellateSolid::new(&a).execute().triangle_count(),
            TessellateSolid::new(&b).execute().triangle_count()
        );
        assert!(Volume::new(&a).execute() < Volume::new(&b).execute());
        assert!(IsValid::new(&a).execute());
        assert!(IsValid::new(&b).execute());
    }

    #[test]
    fn short_base_skips_the_cavity() {
        let lib = CrossSectionLibrary::new();
        let mut lamp = small_lamp();
        lamp.base.height = 6.0;
        let base = MakeLampBase::new(&lamp).execute(&lib).unwrap();
        assert!(Volume::new(&base).execute() > 0.0);
    }
}

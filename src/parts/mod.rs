//! Printable parts assembled from lofted shells and primitive cutters.
//!
//! Each part is an operation struct over borrowed parameters. Nothing is
//! shared between parts except the [`CrossSectionLibrary`] passed to
//! `execute`, which is read-only.
//!
//! [`CrossSectionLibrary`]: crate::geometry::CrossSectionLibrary

mod combined;
mod lamp_base;
mod lamp_shade;
mod lip;
mod vase;

pub use combined::MakeLampAssembly;
pub use lamp_base::MakeLampBase;
pub use lamp_shade::MakeLampShade;
pub use lip::{LipFit, LIP_TOLERANCE, LIP_WALL};
pub use vase::MakeVase;

/// Depth a ring is sunk into the body it is unioned with, in millimetres.
///
/// Keeps ring end caps off the body's faces so the union never has to
/// resolve coplanar contact.
pub(crate) const LIP_EMBED: f64 = 0.5;

/// How far cutters reach past the face they open, in millimetres.
pub(crate) const CUT_CLEARANCE: f64 = 1.0;

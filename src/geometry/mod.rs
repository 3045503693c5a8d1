pub mod cross_section;
mod loop_2d;
mod plane;
pub mod profile;

pub use cross_section::{CrossSection, CrossSectionLibrary};
pub use loop_2d::{Loop2D, Slice};
pub use plane::Plane;

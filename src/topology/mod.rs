mod face;
mod solid;

pub use face::Face;
pub use solid::Solid;

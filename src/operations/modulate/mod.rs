//! Surface decoration applied to a cross-section loop.

mod fin;
mod ridge;

pub use fin::{fin_loop, Fins};
pub use ridge::{modulate, ridge_wave};

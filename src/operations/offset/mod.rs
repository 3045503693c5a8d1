mod inward_offset_2d;
mod slope;

pub use inward_offset_2d::InwardOffset2D;
pub use slope::slope_compensated_inset;

/// Smallest radius an inset wall may shrink to, in millimetres.
pub const MIN_INNER_RADIUS: f64 = 0.5;

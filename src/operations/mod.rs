pub mod boolean;
pub mod creation;
pub mod modulate;
pub mod offset;
pub mod query;
pub mod shaping;
pub mod transform;

mod bsp;
mod engine;
mod intersect_op;
mod stitch;
mod subtract;
mod union;

pub use engine::BooleanOp;
pub use intersect_op::Intersect;
pub use subtract::Subtract;
pub use union::Union;

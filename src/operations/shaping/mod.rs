mod loft;

pub use loft::Loft;

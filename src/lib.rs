//! Deterministic parametric generator for lofted vases and lamp parts.
//!
//! A [`ShapeParameters`] value describes one decorative shell. The shell is
//! lofted through horizontal slices of a cross-section outline, hollowed
//! and cut with BSP booleans, and turned into a flat-shaded
//! [`TriangleBuffer`] for preview or serialized for printing.
//!
//! ```no_run
//! use vesselgen::{BinaryStl, GenerationRequest, Generator, ShapeParameters};
//!
//! let generator = Generator::new();
//! let request = GenerationRequest::Vase(ShapeParameters::default());
//! let mesh = generator.preview(&request)?;
//! let stl = generator.export(&request, 256, &BinaryStl::new())?;
//! # Ok::<(), vesselgen::VesselError>(())
//! ```

pub mod error;
pub mod export;
pub mod generate;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod params;
pub mod parts;
pub mod tessellation;
pub mod topology;

pub use error::{Result, VesselError};
pub use export::{BinaryStl, SolidSerializer};
pub use generate::{GenerationRequest, Generator, LampPart};
pub use geometry::CrossSectionLibrary;
pub use params::{LampParameters, ShapeParameters};
pub use tessellation::TriangleBuffer;
pub use topology::Solid;

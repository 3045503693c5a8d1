//! Request-level entry points: preview meshes and export files.
//!
//! A [`Generator`] owns the cross-section library and nothing else, so it
//! can be shared by reference between threads. Every call builds its solid
//! from scratch; preview and export never share intermediate results.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::Result;
use crate::export::SolidSerializer;
use crate::geometry::CrossSectionLibrary;
use crate::params::{lenient_enum, LampParameters, ShapeParameters};
use crate::parts::{MakeLampAssembly, MakeLampBase, MakeLampShade, MakeVase};
use crate::tessellation::{TessellateSolid, TriangleBuffer};
use crate::topology::Solid;

/// Lowest resolution an export is ever generated at.
pub const EXPORT_MIN_RESOLUTION: usize = 128;

lenient_enum! {
    /// Which part of a lamp to build.
    pub enum LampPart (fallback = Combined) {
        Base => "base",
        Shade => "shade",
        Combined => "combined",
    }
}

/// What to generate.
///
/// In JSON the variant is named by a `"kind"` field: a vase carries its
/// shape parameters inline, a lamp carries `parameters` and `part`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GenerationRequest {
    Vase(ShapeParameters),
    Lamp {
        #[serde(default)]
        parameters: LampParameters,
        #[serde(default)]
        part: LampPart,
    },
}

impl GenerationRequest {
    /// Parses a request from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::VesselError::Config`] on malformed JSON or an
    /// unknown `kind`.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns a copy with every shell clamped to supported values.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        match self {
            Self::Vase(params) => Self::Vase(params.sanitized()),
            Self::Lamp { parameters, part } => Self::Lamp {
                parameters: parameters.sanitized(),
                part: *part,
            },
        }
    }

    /// Returns a copy with every shell at the given resolution.
    #[must_use]
    pub fn with_resolution(&self, resolution: usize) -> Self {
        match self {
            Self::Vase(params) => Self::Vase(params.with_resolution(resolution)),
            Self::Lamp { parameters, part } => Self::Lamp {
                parameters: parameters.with_resolution(resolution),
                part: *part,
            },
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Vase(_) => "vase",
            Self::Lamp { part, .. } => part.name(),
        }
    }
}

/// Builds solids, preview meshes and export files from requests.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    library: CrossSectionLibrary,
}

impl Generator {
    /// Creates a generator with a freshly built cross-section library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the solid a request describes, after sanitizing it.
    ///
    /// # Errors
    ///
    /// Returns an error if part assembly fails.
    #[instrument(skip_all, fields(part = request.label()))]
    pub fn solid(&self, request: &GenerationRequest) -> Result<Solid> {
        let lib = &self.library;
        match request.sanitized() {
            GenerationRequest::Vase(params) => MakeVase::new(&params).execute(lib),
            GenerationRequest::Lamp { parameters, part } => match part {
                LampPart::Base => MakeLampBase::new(&parameters).execute(lib),
                LampPart::Shade => MakeLampShade::new(&parameters).execute(lib),
                LampPart::Combined => MakeLampAssembly::new(&parameters).execute(lib),
            },
        }
    }

    /// Builds a flat-shaded preview mesh at the request's own resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if part assembly fails.
    pub fn preview(&self, request: &GenerationRequest) -> Result<TriangleBuffer> {
        let solid = self.solid(request)?;
        let buffer = TessellateSolid::new(&solid).execute();
        info!(triangles = buffer.triangle_count(), "preview ready");
        Ok(buffer)
    }

    /// Regenerates the request for printing and serializes it.
    ///
    /// The solid is rebuilt at `max(requested_resolution, 128)` segments,
    /// whatever resolution the request itself carries.
    ///
    /// # Errors
    ///
    /// Returns an error if part assembly or serialization fails.
    #[instrument(skip(self, request, serializer))]
    pub fn export(
        &self,
        request: &GenerationRequest,
        requested_resolution: usize,
        serializer: &dyn SolidSerializer,
    ) -> Result<Vec<u8>> {
        let resolution = requested_resolution.max(EXPORT_MIN_RESOLUTION);
        let solid = self.solid(&request.with_resolution(resolution))?;
        let bytes = serializer.serialize(&solid)?;
        info!(resolution, bytes = bytes.len(), "export ready");
        Ok(bytes)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::params::{ConnectionType, SocketType};
    use crate::parts::fixtures::{small_lamp, small_vase};

    #[test]
    fn generator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Generator>();
        assert_send_sync::<GenerationRequest>();
    }

    #[test]
    fn request_json_is_tagged() {
        let request = GenerationRequest::from_json(
            r#"{"kind": "lamp", "part": "shade", "parameters": {"socket": "GU10"}}"#,
        )
        .unwrap();
        let GenerationRequest::Lamp { parameters, part } = &request else {
            panic!("expected a lamp request");
        };
        assert_eq!(*part, LampPart::Shade);
        assert_eq!(parameters.socket, SocketType::Gu10);
        assert_eq!(parameters.connection, ConnectionType::FrictionFit);

        let vase = GenerationRequest::from_json(r#"{"kind": "vase", "height": 40}"#).unwrap();
        let GenerationRequest::Vase(params) = vase else {
            panic!("expected a vase request");
        };
        assert!((params.height - 40.0).abs() < f64::EPSILON);

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(GenerationRequest::from_json(&json).unwrap(), request);
    }

    #[test]
    fn unknown_kind_is_config_error() {
        let err = GenerationRequest::from_json(r#"{"kind": "teapot"}"#).unwrap_err();
        assert!(matches!(err, crate::VesselError::Config(_)));
    }

    #[test]
    fn unknown_part_falls_back_to_combined() {
        assert_eq!(LampPart::from_name("everything"), LampPart::Combined);
    }

    #[test]
    fn with_resolution_reaches_every_shell() {
        let request = GenerationRequest::Lamp {
            parameters: small_lamp(),
            part: LampPart::Base,
        }
        .with_resolution(200);
        let GenerationRequest::Lamp { parameters, .. } = request else {
            panic!("expected a lamp request");
        };
        assert_eq!(parameters.base.segments(), 200);
        assert_eq!(parameters.shade.segments(), 200);
    }

    #[test]
    fn preview_sanitizes_the_request() {
        let generator = Generator::new();
        let request = GenerationRequest::Vase(ShapeParameters {
            resolution: -3,
            wall_thickness: f64::NAN,
            ..small_vase()
        });
        let buffer = generator.preview(&request).unwrap();
        assert!(!buffer.is_empty());
        assert!(buffer.is_finite());
    }
}

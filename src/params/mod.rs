//! Shape parameters as received from the UI layer.
//!
//! Every selector parses leniently: unknown names fall back to a sane
//! default instead of failing the request, and [`ShapeParameters::sanitized`]
//! clamps numeric fields into the ranges the generator supports.

mod lamp;

pub use lamp::{ConnectionType, LampParameters, SocketGeometry, SocketType};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Minimum number of segments around a loop.
pub const MIN_RESOLUTION: usize = 8;

/// Maximum number of segments around a loop.
pub const MAX_RESOLUTION: usize = 1024;

/// Declares a string-backed selector enum with a fallback variant.
///
/// Names compare case-insensitively and ignore `-`, `_` and spaces, so
/// `"easeInOut"`, `"ease-in-out"` and `"EASE_IN_OUT"` are the same.
macro_rules! lenient_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident (fallback = $fallback:ident) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Parses a selector name, falling back to the default variant.
            #[must_use]
            pub fn from_name(name: &str) -> Self {
                let wanted = $crate::params::normalize_name(name);
                $(
                    if wanted == $crate::params::normalize_name($label) {
                        return Self::$variant;
                    }
                )+
                Self::$fallback
            }

            /// Canonical name of the selector.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$fallback
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self::from_name(&name)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.name().to_owned()
            }
        }
    };
}

pub(crate) use lenient_enum;

pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

lenient_enum! {
    /// Outline family of the cross-section.
    pub enum CrossSectionKind (fallback = Unknown) {
        Circle => "circle",
        Oval => "oval",
        Squircle => "squircle",
        Superellipse => "superellipse",
        Heart => "heart",
        Teardrop => "teardrop",
        Petal => "petal",
        Leaf => "leaf",
        Polygon => "polygon",
        Star => "star",
        Gear => "gear",
        Flower => "flower",
        /// Unrecognised family name; rendered as a circle.
        Unknown => "unknown",
    }
}

lenient_enum! {
    /// How accumulated twist is distributed over the height.
    pub enum TwistEasing (fallback = Linear) {
        Linear => "linear",
        EaseIn => "easeIn",
        EaseOut => "easeOut",
        EaseInOut => "easeInOut",
    }
}

lenient_enum! {
    /// Rotation sense of the twist, viewed from above.
    pub enum TwistDirection (fallback = CounterClockwise) {
        CounterClockwise => "counterClockwise",
        Clockwise => "clockwise",
    }
}

lenient_enum! {
    /// How the taper progresses from bottom to top.
    pub enum ProfileShape (fallback = Tapered) {
        Tapered => "tapered",
        Flared => "flared",
        Rounded => "rounded",
    }
}

lenient_enum! {
    /// Wave shape of ridge modulation.
    pub enum RidgeProfile (fallback = Round) {
        Round => "round",
        Sharp => "sharp",
        Flat => "flat",
    }
}

lenient_enum! {
    /// Surface decoration applied to the outer wall.
    pub enum SurfaceStyle (fallback = Smooth) {
        Smooth => "smooth",
        Ridged => "ridged",
        Finned => "finned",
    }
}

impl TwistDirection {
    /// `+1.0` for counter-clockwise, `-1.0` for clockwise.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::CounterClockwise => 1.0,
            Self::Clockwise => -1.0,
        }
    }
}

/// Immutable description of one decorative shell.
///
/// Lengths are in millimetres, angles in degrees. Integer counts are signed
/// so that out-of-range UI values survive deserialization and get clamped by
/// [`ShapeParameters::sanitized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeParameters {
    pub height: f64,
    pub base_diameter: f64,
    pub wall_thickness: f64,
    /// Floor thickness under the inner cavity.
    pub base_thickness: f64,
    /// Top radius as a fraction of the base radius.
    pub taper: f64,
    pub profile_shape: ProfileShape,
    /// Signed bulge (+) / pinch (-) coefficient in `[-1, 1]`.
    pub profile_curve: f64,
    pub twist_angle: f64,
    pub twist_direction: TwistDirection,
    pub twist_easing: TwistEasing,
    pub style: SurfaceStyle,
    pub ridge_count: i32,
    pub ridge_depth: f64,
    pub ridge_profile: RidgeProfile,
    pub fin_count: i32,
    pub fin_height: f64,
    /// Angular width of each fin, in degrees.
    pub fin_width: f64,
    pub cross_section: CrossSectionKind,
    /// Minor/major axis ratio for ovals.
    pub oval_ratio: f64,
    pub polygon_sides: i32,
    pub star_points: i32,
    pub star_inner_ratio: f64,
    pub superellipse_exponent: f64,
    pub gear_teeth: i32,
    pub flower_petals: i32,
    /// Segments around each slice.
    pub resolution: i32,
    /// Build the inner wall from the unmodulated outline.
    pub smooth_inner_wall: bool,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            height: 150.0,
            base_diameter: 80.0,
            wall_thickness: 1.6,
            base_thickness: 2.0,
            taper: 0.85,
            profile_shape: ProfileShape::Tapered,
            profile_curve: 0.0,
            twist_angle: 0.0,
            twist_direction: TwistDirection::CounterClockwise,
            twist_easing: TwistEasing::Linear,
            style: SurfaceStyle::Smooth,
            ridge_count: 12,
            ridge_depth: 2.0,
            ridge_profile: RidgeProfile::Round,
            fin_count: 6,
            fin_height: 6.0,
            fin_width: 12.0,
            cross_section: CrossSectionKind::Circle,
            oval_ratio: 0.7,
            polygon_sides: 6,
            star_points: 5,
            star_inner_ratio: 0.6,
            superellipse_exponent: 2.5,
            gear_teeth: 12,
            flower_petals: 6,
            resolution: 128,
            smooth_inner_wall: true,
        }
    }
}

impl ShapeParameters {
    /// Parses parameters from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::VesselError::Config`] if the text is not valid JSON
    /// or a field has the wrong type.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the parameters to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::VesselError::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Base radius (half the base diameter).
    #[must_use]
    pub fn base_radius(&self) -> f64 {
        self.base_diameter * 0.5
    }

    /// Segments around each slice, clamped to the supported range.
    #[must_use]
    pub fn segments(&self) -> usize {
        usize::try_from(self.resolution)
            .unwrap_or(0)
            .clamp(MIN_RESOLUTION, MAX_RESOLUTION)
    }

    /// Returns a copy with the given resolution.
    #[must_use]
    pub fn with_resolution(&self, resolution: usize) -> Self {
        Self {
            resolution: i32::try_from(resolution).unwrap_or(i32::MAX),
            ..self.clone()
        }
    }

    /// Returns a copy with every field clamped to a supported value.
    ///
    /// Non-finite numbers are replaced by their defaults; everything else is
    /// moved to the nearest supported value. Selectors are already lenient.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let d = Self::default();
        let height = finite_or(self.height, d.height).max(1.0);
        let base_diameter = finite_or(self.base_diameter, d.base_diameter).max(2.0);
        let base_radius = base_diameter * 0.5;
        Self {
            height,
            base_diameter,
            wall_thickness: finite_or(self.wall_thickness, d.wall_thickness)
                .clamp(0.2, base_radius),
            base_thickness: finite_or(self.base_thickness, d.base_thickness)
                .clamp(0.0, height * 0.45),
            taper: finite_or(self.taper, d.taper).clamp(0.05, 5.0),
            profile_shape: self.profile_shape,
            profile_curve: finite_or(self.profile_curve, d.profile_curve).clamp(-1.0, 1.0),
            twist_angle: finite_or(self.twist_angle, d.twist_angle).clamp(-3600.0, 3600.0),
            twist_direction: self.twist_direction,
            twist_easing: self.twist_easing,
            style: self.style,
            ridge_count: self.ridge_count.clamp(0, 256),
            ridge_depth: finite_or(self.ridge_depth, d.ridge_depth).clamp(0.0, base_radius),
            ridge_profile: self.ridge_profile,
            fin_count: self.fin_count.clamp(0, 128),
            fin_height: finite_or(self.fin_height, d.fin_height).clamp(0.0, base_diameter),
            fin_width: finite_or(self.fin_width, d.fin_width).clamp(0.5, 180.0),
            cross_section: self.cross_section,
            oval_ratio: finite_or(self.oval_ratio, d.oval_ratio).clamp(0.1, 1.0),
            polygon_sides: self.polygon_sides.clamp(3, 64),
            star_points: self.star_points.clamp(3, 64),
            star_inner_ratio: finite_or(self.star_inner_ratio, d.star_inner_ratio)
                .clamp(0.05, 0.95),
            superellipse_exponent: finite_or(self.superellipse_exponent, d.superellipse_exponent)
                .clamp(0.5, 20.0),
            gear_teeth: self.gear_teeth.clamp(1, 128),
            flower_petals: self.flower_petals.clamp(1, 64),
            resolution: self.resolution.clamp(
                i32::try_from(MIN_RESOLUTION).unwrap_or(8),
                i32::try_from(MAX_RESOLUTION).unwrap_or(1024),
            ),
            smooth_inner_wall: self.smooth_inner_wall,
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Converts a clamped, non-negative `i32` count to `usize`.
pub(crate) fn count(value: i32) -> usize {
    usize::try_from(value.max(0)).unwrap_or(0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn selector_names_are_lenient() {
        assert_eq!(TwistEasing::from_name("ease-in-out"), TwistEasing::EaseInOut);
        assert_eq!(TwistEasing::from_name("EASE_IN"), TwistEasing::EaseIn);
        assert_eq!(TwistEasing::from_name("bouncy"), TwistEasing::Linear);
        assert_eq!(CrossSectionKind::from_name("Star"), CrossSectionKind::Star);
        assert_eq!(CrossSectionKind::from_name("blob"), CrossSectionKind::Unknown);
        assert_eq!(ProfileShape::from_name("hourglass"), ProfileShape::Tapered);
        assert_eq!(RidgeProfile::from_name("wavy"), RidgeProfile::Round);
    }

    #[test]
    fn json_round_trip_uses_camel_case() {
        let params = ShapeParameters {
            twist_easing: TwistEasing::EaseOut,
            cross_section: CrossSectionKind::Gear,
            ..ShapeParameters::default()
        };
        let json = params.to_json().unwrap();
        assert!(json.contains("\"twistEasing\":\"easeOut\""));
        assert!(json.contains("\"crossSection\":\"gear\""));
        assert_eq!(ShapeParameters::from_json(&json).unwrap(), params);
    }

    #[test]
    fn json_missing_fields_and_unknown_names_fall_back() {
        let params = ShapeParameters::from_json(
            r#"{"height": 90, "crossSection": "hexagram", "twistEasing": "spring"}"#,
        )
        .unwrap();
        assert!((params.height - 90.0).abs() < f64::EPSILON);
        assert_eq!(params.cross_section, CrossSectionKind::Unknown);
        assert_eq!(params.twist_easing, TwistEasing::Linear);
        assert!((params.base_diameter - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = ShapeParameters::from_json("{ height: ").unwrap_err();
        assert!(matches!(err, crate::VesselError::Config(_)));
    }

    #[test]
    fn sanitized_clamps_out_of_range_values() {
        let params = ShapeParameters {
            resolution: -5,
            polygon_sides: 1,
            star_inner_ratio: 3.0,
            ridge_count: -2,
            wall_thickness: f64::NAN,
            height: -10.0,
            ..ShapeParameters::default()
        }
        .sanitized();
        assert_eq!(params.segments(), MIN_RESOLUTION);
        assert_eq!(params.polygon_sides, 3);
        assert!((params.star_inner_ratio - 0.95).abs() < f64::EPSILON);
        assert_eq!(params.ridge_count, 0);
        assert!((params.wall_thickness - 1.6).abs() < f64::EPSILON);
        assert!((params.height - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn segments_clamps_without_sanitizing() {
        let params = ShapeParameters {
            resolution: 0,
            ..ShapeParameters::default()
        };
        assert_eq!(params.segments(), MIN_RESOLUTION);
        assert_eq!(params.with_resolution(200).segments(), 200);
    }
}

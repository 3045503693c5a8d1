use serde::{Deserialize, Serialize};

use super::{lenient_enum, ShapeParameters};
use crate::error::Result;

/// Lip height of a friction-fit connection, in millimetres.
const FRICTION_FIT_LIP_HEIGHT: f64 = 8.0;

lenient_enum! {
    /// Lamp socket standard.
    pub enum SocketType (fallback = E27) {
        E12 => "E12",
        E14 => "E14",
        E26 => "E26",
        E27 => "E27",
        Gu10 => "GU10",
    }
}

lenient_enum! {
    /// How the shade sits on the base.
    pub enum ConnectionType (fallback = FrictionFit) {
        FrictionFit => "frictionFit",
        GravitySit => "gravitySit",
    }
}

/// Fixed socket dimensions, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocketGeometry {
    pub thread_diameter: f64,
    /// Diameter of the hole the socket body mounts through.
    pub mount_hole_diameter: f64,
    /// Depth of the socket cavity below the top of the base.
    pub collar_height: f64,
    pub wire_bore_diameter: f64,
}

impl SocketType {
    /// Looks up the socket dimensions.
    #[must_use]
    pub fn geometry(self) -> SocketGeometry {
        let (thread_diameter, mount_hole_diameter, collar_height, wire_bore_diameter) = match self
        {
            Self::E12 => (12.0, 20.0, 25.0, 6.0),
            Self::E14 => (14.0, 28.0, 30.0, 6.0),
            Self::E26 => (26.0, 40.0, 40.0, 8.0),
            Self::E27 => (27.0, 42.0, 40.0, 8.0),
            Self::Gu10 => (35.0, 35.0, 20.0, 6.0),
        };
        SocketGeometry {
            thread_diameter,
            mount_hole_diameter,
            collar_height,
            wire_bore_diameter,
        }
    }
}

impl ConnectionType {
    /// Height of the connection lip; a gravity-sit lip is half as tall.
    #[must_use]
    pub fn lip_height(self) -> f64 {
        match self {
            Self::FrictionFit => FRICTION_FIT_LIP_HEIGHT,
            Self::GravitySit => FRICTION_FIT_LIP_HEIGHT * 0.5,
        }
    }
}

/// A matched lamp base and shade plus their fitting selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LampParameters {
    pub base: ShapeParameters,
    pub shade: ShapeParameters,
    pub socket: SocketType,
    pub connection: ConnectionType,
    pub wire_channel: bool,
}

impl Default for LampParameters {
    fn default() -> Self {
        Self {
            base: ShapeParameters {
                height: 120.0,
                base_diameter: 110.0,
                wall_thickness: 2.4,
                base_thickness: 3.0,
                taper: 0.7,
                ..ShapeParameters::default()
            },
            shade: ShapeParameters {
                height: 160.0,
                base_diameter: 90.0,
                wall_thickness: 1.2,
                taper: 1.6,
                ..ShapeParameters::default()
            },
            socket: SocketType::E27,
            connection: ConnectionType::FrictionFit,
            wire_channel: true,
        }
    }
}

impl LampParameters {
    /// Parses lamp parameters from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::VesselError::Config`] on malformed JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns a copy with both shells clamped to supported values.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            base: self.base.sanitized(),
            shade: self.shade.sanitized(),
            ..self.clone()
        }
    }

    /// Returns a copy with both shells at the given resolution.
    #[must_use]
    pub fn with_resolution(&self, resolution: usize) -> Self {
        Self {
            base: self.base.with_resolution(resolution),
            shade: self.shade.with_resolution(resolution),
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn gravity_sit_lip_is_half_height() {
        let friction = ConnectionType::FrictionFit.lip_height();
        let gravity = ConnectionType::GravitySit.lip_height();
        assert!((gravity * 2.0 - friction).abs() < f64::EPSILON);
    }

    #[test]
    fn socket_lookup_and_fallback() {
        assert_eq!(SocketType::from_name("gu10"), SocketType::Gu10);
        assert_eq!(SocketType::from_name("B22"), SocketType::E27);
        let e14 = SocketType::E14.geometry();
        assert!((e14.thread_diameter - 14.0).abs() < f64::EPSILON);
        assert!(e14.mount_hole_diameter > e14.thread_diameter);
    }

    #[test]
    fn lamp_json_with_partial_shells() {
        let lamp = LampParameters::from_json(
            r#"{"socket": "E14", "connection": "gravity-sit", "base": {"height": 80}}"#,
        )
        .unwrap();
        assert_eq!(lamp.socket, SocketType::E14);
        assert_eq!(lamp.connection, ConnectionType::GravitySit);
        assert!((lamp.base.height - 80.0).abs() < f64::EPSILON);
        // Fields omitted inside a nested shell use the plain shell defaults.
        assert!((lamp.base.base_diameter - 80.0).abs() < f64::EPSILON);
        assert!(lamp.wire_channel);
    }
}

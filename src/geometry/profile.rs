//! Height-dependent scaling and twist easing.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::params::{ProfileShape, TwistEasing};

/// Amplitude of the sinusoidal bulge at `curve = 1`.
const BULGE_AMPLITUDE: f64 = 0.4;

/// Straight-line taper from `1` at the bottom to `taper` at the top.
#[must_use]
pub fn linear_taper(t: f64, taper: f64) -> f64 {
    1.0 + (taper - 1.0) * t
}

/// Scale of the cross-section at normalised height `t`.
///
/// `curve > 0` bulges the middle outwards, `curve < 0` pinches it. The
/// bulge vanishes at both ends so the scale there is the plain taper.
#[must_use]
pub fn profile_scale(curve: f64, t: f64, taper: f64) -> f64 {
    linear_taper(t, taper) * bulge(curve, t)
}

fn bulge(curve: f64, t: f64) -> f64 {
    1.0 + curve * (PI * t).sin() * BULGE_AMPLITUDE
}

impl ProfileShape {
    /// Scale at normalised height `t` for this taper progression.
    ///
    /// Every shape agrees with [`profile_scale`] at `t = 0` and `t = 1`.
    #[must_use]
    pub fn scale(self, curve: f64, t: f64, taper: f64) -> f64 {
        let progress = match self {
            Self::Tapered => t,
            Self::Flared => t * t,
            Self::Rounded => (FRAC_PI_2 * t).sin(),
        };
        linear_taper(progress, taper) * bulge(curve, t)
    }
}

impl TwistEasing {
    /// Fraction of the total twist reached at normalised height `t`.
    ///
    /// `t` is clamped to `[0, 1]`; the result is monotonic with
    /// `0 ↦ 0` and `1 ↦ 1`.
    #[must_use]
    pub fn progress(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

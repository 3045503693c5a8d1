use std::f64::consts::TAU;

use crate::geometry::{CrossSection, CrossSectionLibrary, Loop2D};
use crate::math::Point2;
use crate::params::MIN_RESOLUTION;

/// Fraction of the gap between fin centres a fin may occupy.
const MAX_WIDTH_FRACTION: f64 = 0.9;

/// Angular offsets of a fin's control points, as fractions of its width.
const FIN_OFFSETS: [f64; 5] = [-0.5, -0.3, 0.0, 0.3, 0.5];

/// Heights of a fin's control points, as fractions of the fin height.
const FIN_HEIGHTS: [f64; 5] = [0.0, 0.2, 1.0, 0.2, 0.0];

/// Fins projecting from a body outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fins {
    pub count: usize,
    /// Radial height above the body, in millimetres.
    pub height: f64,
    /// Angular width of each fin, in degrees.
    pub width_deg: f64,
}

/// Builds a body outline with evenly spaced fins.
///
/// Fin `k` is centred at `k · 2π / count`. Between two fins,
/// `arc_samples_per_gap` points follow the body outline. The loop has
/// `count · (5 + arc_samples_per_gap)` points in strictly increasing angle.
/// Without fins the plain body outline is sampled instead.
#[must_use]
pub fn fin_loop(
    library: &CrossSectionLibrary,
    section: &CrossSection,
    base_radius: f64,
    fins: &Fins,
    arc_samples_per_gap: usize,
) -> Loop2D {
    if fins.count == 0 || fins.height <= 0.0 {
        return library.sampled_outline(
            section,
            base_radius,
            arc_samples_per_gap.max(MIN_RESOLUTION),
        );
    }

    #[allow(clippy::cast_precision_loss)]
    let gap = TAU / fins.count as f64;
    let width = fins.width_deg.to_radians().clamp(0.0, gap * MAX_WIDTH_FRACTION);
    let at = |angle: f64, lift: f64| {
        let r = library.radius_at_angle(section, angle, base_radius) + lift;
        Point2::new(r * angle.cos(), r * angle.sin())
    };

    let mut points = Vec::with_capacity(fins.count * (FIN_OFFSETS.len() + arc_samples_per_gap));
    for k in 0..fins.count {
        #[allow(clippy::cast_precision_loss)]
        let centre = k as f64 * gap;
        for (offset, height) in FIN_OFFSETS.iter().zip(FIN_HEIGHTS) {
            points.push(at(centre + offset * width, height * fins.height));
        }

        let arc_start = centre + 0.5 * width;
        let arc_end = centre + gap - 0.5 * width;
        for j in 0..arc_samples_per_gap {
            #[allow(clippy::cast_precision_loss)]
            let f = (j + 1) as f64 / (arc_samples_per_gap + 1) as f64;
            points.push(at(arc_start + (arc_end - arc_start) * f, 0.0));
        }
    }
    Loop2D::new(points)
}

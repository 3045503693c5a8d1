use std::borrow::Cow;
use std::f64::consts::PI;

use crate::geometry::Loop2D;
use crate::math::polygon_2d::{polar_angle, polar_radius};
use crate::math::{Point2, TOLERANCE};
use crate::params::RidgeProfile;

/// Periodic ridge wave in `[0, 1]` with period `2π`, peaking at `x = 0`.
#[must_use]
pub fn ridge_wave(profile: RidgeProfile, x: f64) -> f64 {
    match profile {
        RidgeProfile::Round => (x.cos() + 1.0) * 0.5,
        RidgeProfile::Sharp => ((x / PI).rem_euclid(2.0) - 1.0).abs(),
        RidgeProfile::Flat => ((3.0 * x.sin()).tanh() + 1.0) * 0.5,
    }
}

/// Pushes each point of `outline` radially outward by
/// `depth * ridge_wave(profile, count * θ)`.
///
/// Ridges only ever add radius. With `count == 0` or `depth <= 0` the input
/// loop is returned borrowed and unchanged. Points at the origin have no
/// direction and are left where they are.
#[must_use]
pub fn modulate(
    outline: &Loop2D,
    count: usize,
    depth: f64,
    profile: RidgeProfile,
) -> Cow<'_, Loop2D> {
    if count == 0 || depth <= 0.0 {
        return Cow::Borrowed(outline);
    }
    #[allow(clippy::cast_precision_loss)]
    let frequency = count as f64;
    let points = outline
        .points()
        .iter()
        .map(|p| {
            let r = polar_radius(p);
            if r < TOLERANCE {
                return *p;
            }
            let extra = depth * ridge_wave(profile, frequency * polar_angle(p));
            Point2::from(p.coords * ((r + extra) / r))
        })
        .collect();
    Cow::Owned(Loop2D::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CrossSection, CrossSectionLibrary};
    use approx::assert_relative_eq;

    fn circle(segments: usize) -> Loop2D {
        CrossSectionLibrary::new().outline(&CrossSection::Circle, 20.0, segments)
    }

    #[test]
    fn zero_count_or_depth_borrows_input() {
        let lp = circle(32);
        assert!(matches!(modulate(&lp, 0, 2.0, RidgeProfile::Round), Cow::Borrowed(_)));
        assert!(matches!(modulate(&lp, 6, 0.0, RidgeProfile::Sharp), Cow::Borrowed(_)));
        assert!(matches!(modulate(&lp, 6, -1.0, RidgeProfile::Flat), Cow::Borrowed(_)));
        assert_eq!(*modulate(&lp, 0, 2.0, RidgeProfile::Round), lp);
    }

    #[test]
    fn round_ridges_have_count_maxima() {
        let lp = circle(720);
        for count in [3, 8, 12] {
            let ridged = modulate(&lp, count, 2.0, RidgeProfile::Round);
            let radii: Vec<f64> = ridged.points().iter().map(polar_radius).collect();
            let n = radii.len();
            let maxima = (0..n)
                .filter(|&i| {
                    let prev = radii[(i + n - 1) % n];
                    let next = radii[(i + 1) % n];
                    radii[i] > prev && radii[i] >= next
                })
                .count();
            assert_eq!(maxima, count);
        }
    }

    #[test]
    fn ridges_only_add_radius() {
        let lp = circle(256);
        for profile in [RidgeProfile::Round, RidgeProfile::Sharp, RidgeProfile::Flat] {
            let ridged = modulate(&lp, 7, 3.0, profile);
            for p in ridged.points() {
                let r = polar_radius(p);
                assert!(r >= 20.0 - 1e-9 && r <= 23.0 + 1e-9, "{profile:?}: {r}");
            }
        }
    }

    #[test]
    fn wave_shapes() {
        assert_relative_eq!(ridge_wave(RidgeProfile::Round, 0.0), 1.0);
        assert_relative_eq!(ridge_wave(RidgeProfile::Round, PI), 0.0, epsilon = 1e-12);
        assert_relative_eq!(ridge_wave(RidgeProfile::Sharp, 0.0), 1.0);
        assert_relative_eq!(ridge_wave(RidgeProfile::Sharp, PI), 0.0, epsilon = 1e-12);
        assert_relative_eq!(ridge_wave(RidgeProfile::Sharp, -PI / 2.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(ridge_wave(RidgeProfile::Flat, 0.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn origin_point_is_untouched() {
        let lp = Loop2D::new(vec![Point2::origin(), Point2::new(5.0, 0.0), Point2::new(0.0, 5.0)]);
        let ridged = modulate(&lp, 4, 1.0, RidgeProfile::Round);
        assert_eq!(ridged.points()[0], Point2::origin());
        assert_relative_eq!(ridged.points()[1].x, 6.0, epsilon = 1e-12);
    }
}

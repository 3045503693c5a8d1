use crate::params::ShapeParameters;

/// Step in normalised height used for the finite difference.
const SLOPE_STEP: f64 = 0.01;

/// Horizontal inset that keeps the wall `inset` thick measured normal to a
/// sloped wall: `inset · sqrt(1 + (dR/dH)²)`.
///
/// `dR/dH` is a central difference of the profile radius at normalised height
/// `t`, one-sided at the ends.
#[must_use]
pub fn slope_compensated_inset(params: &ShapeParameters, inset: f64, t: f64) -> f64 {
    if params.height <= 0.0 {
        return inset;
    }
    let radius = |t: f64| {
        params.base_radius()
            * params
                .profile_shape
                .scale(params.profile_curve, t, params.taper)
    };
    let (lo, hi) = if t - SLOPE_STEP < 0.0 {
        (t, t + SLOPE_STEP)
    } else if t + SLOPE_STEP > 1.0 {
        (t - SLOPE_STEP, t)
    } else {
        (t - SLOPE_STEP, t + SLOPE_STEP)
    };
    let slope = (radius(hi) - radius(lo)) / ((hi - lo) * params.height);
    inset * slope.mul_add(slope, 1.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cylinder_needs_no_compensation() {
        let params = ShapeParameters {
            taper: 1.0,
            profile_curve: 0.0,
            ..ShapeParameters::default()
        };
        for t in [0.0, 0.3, 1.0] {
            assert_relative_eq!(slope_compensated_inset(&params, 2.0, t), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn cone_compensation_matches_slope() {
        // Radius 50 → 25 over 100 mm: slope 0.25 everywhere.
        let params = ShapeParameters {
            height: 100.0,
            base_diameter: 100.0,
            taper: 0.5,
            profile_curve: 0.0,
            ..ShapeParameters::default()
        };
        let expected = 2.0 * (1.0_f64 + 0.0625).sqrt();
        for t in [0.0, 0.5, 1.0] {
            assert_relative_eq!(
                slope_compensated_inset(&params, 2.0, t),
                expected,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn compensation_never_shrinks_inset() {
        let params = ShapeParameters {
            profile_curve: 0.9,
            taper: 1.7,
            ..ShapeParameters::default()
        };
        for i in 0..=20 {
            let t = f64::from(i) / 20.0;
            assert!(slope_compensated_inset(&params, 1.5, t) >= 1.5);
        }
    }
}

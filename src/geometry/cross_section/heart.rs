use std::f64::consts::TAU;

use crate::math::wrap_angle;

/// Number of uniformly spaced angles in the lookup table.
pub const HEART_TABLE_SIZE: usize = 360;

/// Parametric samples taken along the heart curve before resampling.
const CURVE_SAMPLES: usize = 2048;

/// Polar radius lookup table for the heart outline.
///
/// The heart curve has no closed-form polar radius, so the parametric curve
/// is sampled densely, sorted by polar angle and resampled at
/// [`HEART_TABLE_SIZE`] uniform angles. Radii are normalised so the largest
/// is `1.0`.
#[derive(Debug, Clone)]
pub struct HeartTable {
    radii: Vec<f64>,
}

impl HeartTable {
    /// Builds the table. Called once per [`super::CrossSectionLibrary`].
    #[must_use]
    pub fn build() -> Self {
        let raw: Vec<(f64, f64)> = (0..CURVE_SAMPLES)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = TAU * i as f64 / CURVE_SAMPLES as f64;
                let x = 16.0 * t.sin().powi(3);
                let y = 13.0 * t.cos()
                    - 5.0 * (2.0 * t).cos()
                    - 2.0 * (3.0 * t).cos()
                    - (4.0 * t).cos();
                (x, y)
            })
            .collect();

        // Centre the curve vertically so the origin sits inside both lobes.
        let (y_min, y_max) = raw
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            });
        let y_mid = 0.5 * (y_min + y_max);

        let mut polar: Vec<(f64, f64)> = raw
            .iter()
            .map(|&(x, y)| {
                let y = y - y_mid;
                (wrap_angle(y.atan2(x)), x.hypot(y))
            })
            .collect();
        polar.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut radii: Vec<f64> = (0..HEART_TABLE_SIZE)
            .map(|k| {
                #[allow(clippy::cast_precision_loss)]
                let angle = TAU * k as f64 / HEART_TABLE_SIZE as f64;
                interpolate_sorted(&polar, angle)
            })
            .collect();

        let max = radii.iter().copied().fold(0.0, f64::max);
        if max > 0.0 {
            for r in &mut radii {
                *r /= max;
            }
        }
        Self { radii }
    }

    /// Normalised radius at `angle`, linearly interpolated between entries.
    #[must_use]
    pub fn radius(&self, angle: f64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let pos = wrap_angle(angle) / TAU * HEART_TABLE_SIZE as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let i0 = (pos.floor() as usize) % HEART_TABLE_SIZE;
        let i1 = (i0 + 1) % HEART_TABLE_SIZE;
        let frac = pos - pos.floor();
        self.radii[i0] + (self.radii[i1] - self.radii[i0]) * frac
    }

    /// The raw table entries.
    #[must_use]
    pub fn entries(&self) -> &[f64] {
        &self.radii
    }
}

/// Interpolates an angle-sorted `(angle, radius)` list at `angle`, wrapping
/// around the `0 / 2π` seam.
fn interpolate_sorted(samples: &[(f64, f64)], angle: f64) -> f64 {
    let n = samples.len();
    let idx = samples.partition_point(|s| s.0 < angle);
    let (a0, r0) = if idx == 0 {
        let last = samples[n - 1];
        (last.0 - TAU, last.1)
    } else {
        samples[idx - 1]
    };
    let (a1, r1) = if idx == n {
        let first = samples[0];
        (first.0 + TAU, first.1)
    } else {
        samples[idx]
    };
    let span = a1 - a0;
    if span.abs() < f64::EPSILON {
        return r0;
    }
    r0 + (r1 - r0) * (angle - a0) / span
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn table_is_normalised_and_positive() {
        let table = HeartTable::build();
        assert_eq!(table.entries().len(), HEART_TABLE_SIZE);
        let max = table.entries().iter().copied().fold(0.0, f64::max);
        assert!((max - 1.0).abs() < 1e-12);
        assert!(table.entries().iter().all(|&r| r > 0.05 && r.is_finite()));
    }

    #[test]
    fn notch_is_shallower_than_tip() {
        let table = HeartTable::build();
        // The notch sits on +y, the tip on -y.
        assert!(table.radius(FRAC_PI_2) < table.radius(-FRAC_PI_2));
    }

    #[test]
    fn lookup_interpolates_and_wraps() {
        let table = HeartTable::build();
        let step = TAU / 360.0;
        let mid = table.radius(step * 10.5);
        let lo = table.entries()[10];
        let hi = table.entries()[11];
        assert!((mid - 0.5 * (lo + hi)).abs() < 1e-12);
        assert!((table.radius(TAU + step * 3.0) - table.entries()[3]).abs() < 1e-9);
    }
}

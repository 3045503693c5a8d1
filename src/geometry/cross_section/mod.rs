//! Closed outline families for vessel cross-sections.

mod heart;

pub use heart::{HeartTable, HEART_TABLE_SIZE};

use std::f64::consts::{PI, TAU};

use crate::geometry::Loop2D;
use crate::math::{wrap_angle, Point2, TOLERANCE};
use crate::params::{count, CrossSectionKind, ShapeParameters};

/// Superellipse exponent used by the squircle family.
pub const SQUIRCLE_EXPONENT: f64 = 4.0;

/// An outline family together with its own sub-parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrossSection {
    Circle,
    /// Ellipse with the major axis along X; `ratio` is minor/major.
    Oval { ratio: f64 },
    Squircle,
    Superellipse { exponent: f64 },
    Heart,
    Teardrop,
    Petal,
    Leaf,
    /// Regular polygon with its corners on the base radius.
    Polygon { sides: usize },
    /// Star alternating between the base radius and `inner_ratio` of it.
    Star { points: usize, inner_ratio: f64 },
    Gear { teeth: usize },
    Flower { petals: usize },
}

impl CrossSection {
    /// Selects the family named by the parameters.
    ///
    /// Unknown family names render as a circle.
    #[must_use]
    pub fn from_parameters(params: &ShapeParameters) -> Self {
        match params.cross_section {
            CrossSectionKind::Circle => Self::Circle,
            CrossSectionKind::Oval => Self::Oval {
                ratio: params.oval_ratio,
            },
            CrossSectionKind::Squircle => Self::Squircle,
            CrossSectionKind::Superellipse => Self::Superellipse {
                exponent: params.superellipse_exponent,
            },
            CrossSectionKind::Heart => Self::Heart,
            CrossSectionKind::Teardrop => Self::Teardrop,
            CrossSectionKind::Petal => Self::Petal,
            CrossSectionKind::Leaf => Self::Leaf,
            CrossSectionKind::Polygon => Self::Polygon {
                sides: count(params.polygon_sides).max(3),
            },
            CrossSectionKind::Star => Self::Star {
                points: count(params.star_points).max(3),
                inner_ratio: params.star_inner_ratio,
            },
            CrossSectionKind::Gear => Self::Gear {
                teeth: count(params.gear_teeth).max(1),
            },
            CrossSectionKind::Flower => Self::Flower {
                petals: count(params.flower_petals).max(1),
            },
            CrossSectionKind::Unknown => Self::Circle,
        }
    }
}

/// Evaluates outline families.
///
/// Owns the heart lookup table, which is built once when the library is
/// created and shared by every evaluation that uses it.
#[derive(Debug, Clone)]
pub struct CrossSectionLibrary {
    heart: HeartTable,
}

impl Default for CrossSectionLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossSectionLibrary {
    /// Creates a library, building the heart table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heart: HeartTable::build(),
        }
    }

    /// Outline radius at `angle` for a family of base radius `radius`.
    ///
    /// Defined for every angle; angles outside `[0, 2π)` are wrapped.
    #[must_use]
    pub fn radius_at_angle(&self, section: &CrossSection, angle: f64, radius: f64) -> f64 {
        let theta = wrap_angle(angle);
        match *section {
            CrossSection::Circle => radius,
            CrossSection::Oval { ratio } => {
                let b = ratio;
                radius * b / ((b * theta.cos()).powi(2) + theta.sin().powi(2)).sqrt()
            }
            CrossSection::Squircle => superellipse_radius(theta, radius, SQUIRCLE_EXPONENT),
            CrossSection::Superellipse { exponent } => {
                superellipse_radius(theta, radius, exponent)
            }
            CrossSection::Heart => radius * self.heart.radius(theta),
            CrossSection::Teardrop => radius * (0.7 + 0.45 * ((1.0 + theta.cos()) * 0.5).powi(3)),
            CrossSection::Petal => radius * (0.75 + 0.25 * theta.cos().powi(2)),
            CrossSection::Leaf => radius * (0.6 + 0.4 * theta.cos().abs().powf(1.5)),
            CrossSection::Polygon { sides } => polygon_radius(theta, radius, sides),
            CrossSection::Star {
                points,
                inner_ratio,
            } => star_radius(theta, radius, points, inner_ratio),
            CrossSection::Gear { teeth } => {
                #[allow(clippy::cast_precision_loss)]
                let x = teeth as f64 * theta;
                radius * (1.0 + 0.15 * (4.0 * x.sin()).tanh())
            }
            CrossSection::Flower { petals } => {
                #[allow(clippy::cast_precision_loss)]
                let x = petals as f64 * theta;
                radius * (1.0 + 0.3 * x.cos())
            }
        }
    }

    /// Closed counter-clockwise outline of a family.
    ///
    /// Polygons emit exactly their corners and stars their alternating outer
    /// and inner corners (even indices outer); every other family is sampled
    /// at `segments` uniformly spaced angles starting at zero.
    #[must_use]
    pub fn outline(&self, section: &CrossSection, radius: f64, segments: usize) -> Loop2D {
        match *section {
            CrossSection::Polygon { sides } => corner_loop(sides, |_| radius),
            CrossSection::Star {
                points,
                inner_ratio,
            } => corner_loop(points * 2, |k| {
                if k % 2 == 0 {
                    radius
                } else {
                    radius * inner_ratio
                }
            }),
            _ => self.sampled_outline(section, radius, segments),
        }
    }

    /// Outline sampled at `segments` uniform angles, for any family.
    #[must_use]
    pub fn sampled_outline(&self, section: &CrossSection, radius: f64, segments: usize) -> Loop2D {
        let segments = segments.max(3);
        let points = (0..segments)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let theta = TAU * i as f64 / segments as f64;
                let r = self.radius_at_angle(section, theta, radius);
                Point2::new(r * theta.cos(), r * theta.sin())
            })
            .collect();
        Loop2D::new(points)
    }
}

/// `R / (|cos θ|^n + |sin θ|^n)^(1/n)`, falling back to `R` when the
/// denominator degenerates.
fn superellipse_radius(theta: f64, radius: f64, exponent: f64) -> f64 {
    let denom = theta.cos().abs().powf(exponent) + theta.sin().abs().powf(exponent);
    if denom < TOLERANCE || !denom.is_finite() {
        return radius;
    }
    let r = radius / denom.powf(1.0 / exponent);
    if r.is_finite() {
        r
    } else {
        radius
    }
}

/// Radius of a regular polygon with corners on `radius`.
///
/// The angle is reflected into one sector so the formula only handles the
/// half-sector on either side of the edge midpoint.
fn polygon_radius(theta: f64, radius: f64, sides: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let n = sides.max(3) as f64;
    let sector = TAU / n;
    let phi = theta.rem_euclid(sector) - sector * 0.5;
    radius * (PI / n).cos() / phi.cos()
}

/// Piecewise-linear radius between alternating outer and inner corners.
fn star_radius(theta: f64, radius: f64, points: usize, inner_ratio: f64) -> f64 {
    let corners = points.max(3) * 2;
    #[allow(clippy::cast_precision_loss)]
    let step = TAU / corners as f64;
    let pos = theta / step;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let idx = (pos.floor() as usize) % corners;
    let frac = pos - pos.floor();
    let corner_radius = |k: usize| {
        if k % 2 == 0 {
            radius
        } else {
            radius * inner_ratio
        }
    };
    let r0 = corner_radius(idx);
    let r1 = corner_radius((idx + 1) % corners);
    r0 + (r1 - r0) * frac
}

fn corner_loop(corners: usize, radius_of: impl Fn(usize) -> f64) -> Loop2D {
    let points = (0..corners)
        .map(|k| {
            #[allow(clippy::cast_precision_loss)]
            let theta = TAU * k as f64 / corners as f64;
            let r = radius_of(k);
            Point2::new(r * theta.cos(), r * theta.sin())
        })
        .collect();
    Loop2D::new(points)
}

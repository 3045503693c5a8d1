use tracing::{debug, instrument};

use crate::error::Result;
use crate::geometry::{CrossSection, CrossSectionLibrary, Loop2D, Slice};
use crate::math::Point3;
use crate::operations::modulate::{fin_loop, modulate, Fins};
use crate::operations::offset::{slope_compensated_inset, InwardOffset2D, MIN_INNER_RADIUS};
use crate::params::{count, ShapeParameters, SurfaceStyle};
use crate::tessellation::triangulate_loop;
use crate::topology::{Face, Solid};

/// Fewest slices a loft is ever cut into.
const MIN_SLICES: usize = 16;

/// Target slice spacing along the height, in millimetres.
const SLICE_SPACING: f64 = 2.0;

/// Largest twist step between neighbouring slices, in degrees.
const MAX_TWIST_STEP: f64 = 10.0;

/// Fewest body samples between two fins.
const MIN_ARC_SAMPLES: usize = 2;

/// Lofts a shape description into a closed solid.
///
/// The shape is cut into horizontal slices. Each slice outline is scaled by
/// the profile, decorated with ridges or fins, optionally inset to form an
/// inner wall, and rotated by the eased twist. Consecutive slices are joined
/// by triangle strips and the ends are closed with triangulated caps.
///
/// Every slice has the same number of points, so side triangles join
/// index-aligned points and the solid is watertight.
#[derive(Debug, Clone)]
pub struct Loft<'a> {
    params: &'a ShapeParameters,
    wall_inset: f64,
    skip_modulation: bool,
    t_range: (f64, f64),
    extension: (f64, f64),
}

impl<'a> Loft<'a> {
    /// Creates a new `Loft` of the outer surface described by `params`.
    #[must_use]
    pub fn new(params: &'a ShapeParameters) -> Self {
        Self {
            params,
            wall_inset: 0.0,
            skip_modulation: false,
            t_range: (0.0, 1.0),
            extension: (0.0, 0.0),
        }
    }

    /// Insets every slice by `inset` (slope compensated) to loft an inner wall.
    #[must_use]
    pub fn with_wall_inset(mut self, inset: f64) -> Self {
        self.wall_inset = inset;
        self
    }

    /// Lofts the undecorated outline, ignoring ridges and fins.
    #[must_use]
    pub fn with_skip_modulation(mut self, skip: bool) -> Self {
        self.skip_modulation = skip;
        self
    }

    /// Restricts the loft to normalised heights `t0..=t1`.
    #[must_use]
    pub fn with_t_range(mut self, t0: f64, t1: f64) -> Self {
        let t0 = t0.clamp(0.0, 1.0);
        self.t_range = (t0, t1.clamp(t0, 1.0));
        self
    }

    /// Continues the first and last slices straight down by `below` and
    /// straight up by `above` millimetres.
    #[must_use]
    pub fn with_extension(mut self, below: f64, above: f64) -> Self {
        self.extension = (below.max(0.0), above.max(0.0));
        self
    }

    /// Number of slice intervals over the full height:
    /// `max(ceil(H / 2), ceil(|twist| / 10), 16)`.
    #[must_use]
    pub fn slice_count(&self) -> usize {
        let by_height = ceil_to_usize(self.params.height / SLICE_SPACING);
        let by_twist = ceil_to_usize(self.params.twist_angle.abs() / MAX_TWIST_STEP);
        by_height.max(by_twist).max(MIN_SLICES)
    }

    /// Slice outline at normalised height `t`, with twist applied.
    #[must_use]
    pub fn outline_at(&self, library: &CrossSectionLibrary, t: f64) -> Loop2D {
        let p = self.params;
        let section = CrossSection::from_parameters(p);
        let scale = p.profile_shape.scale(p.profile_curve, t, p.taper);
        let radius = p.base_radius() * scale;
        let segments = p.segments();
        let decorate = !self.skip_modulation;

        let ridge_count = count(p.ridge_count);
        let fin_count = count(p.fin_count);
        let ridged =
            decorate && p.style == SurfaceStyle::Ridged && ridge_count > 0 && p.ridge_depth > 0.0;
        let finned =
            decorate && p.style == SurfaceStyle::Finned && fin_count > 0 && p.fin_height > 0.0;

        let outline = if finned {
            let fins = Fins {
                count: fin_count,
                height: p.fin_height * scale,
                width_deg: p.fin_width,
            };
            let arc_samples = (segments / fin_count)
                .saturating_sub(5)
                .max(MIN_ARC_SAMPLES);
            fin_loop(library, &section, radius, &fins, arc_samples)
        } else if ridged {
            let body = library.sampled_outline(&section, radius, segments);
            modulate(&body, ridge_count, p.ridge_depth * scale, p.ridge_profile).into_owned()
        } else {
            library.outline(&section, radius, segments)
        };

        let outline = if self.wall_inset > 0.0 {
            let inset = slope_compensated_inset(p, self.wall_inset, t);
            InwardOffset2D::new(&outline, inset)
                .with_min_radius(MIN_INNER_RADIUS)
                .execute()
        } else {
            outline
        };

        let twist = p.twist_angle.to_radians()
            * p.twist_direction.sign()
            * p.twist_easing.progress(t);
        outline.rotated(twist)
    }

    /// All slices of the loft from bottom to top, extensions included.
    #[must_use]
    pub fn slices(&self, library: &CrossSectionLibrary) -> Vec<Slice> {
        let (t0, t1) = self.t_range;
        #[allow(clippy::cast_precision_loss)]
        let full = self.slice_count() as f64;
        let intervals = ceil_to_usize(full * (t1 - t0)).max(1);
        let height = self.params.height;

        let mut slices = Vec::with_capacity(intervals + 3);
        for i in 0..=intervals {
            #[allow(clippy::cast_precision_loss)]
            let t = t0 + (t1 - t0) * (i as f64 / intervals as f64);
            slices.push(self.outline_at(library, t).at_height(t * height));
        }

        let (below, above) = self.extension;
        if below > 0.0 {
            if let Some(first) = slices.first() {
                let extended = first.outline.clone().at_height(first.z - below);
                slices.insert(0, extended);
            }
        }
        if above > 0.0 {
            if let Some(last) = slices.last() {
                let extended = last.outline.clone().at_height(last.z + above);
                slices.push(extended);
            }
        }
        slices
    }

    /// Executes the loft.
    ///
    /// # Errors
    ///
    /// Returns an error if a cap cannot be triangulated, which only happens
    /// for non-finite outlines.
    #[instrument(skip(self, library), fields(inset = self.wall_inset))]
    pub fn execute(&self, library: &CrossSectionLibrary) -> Result<Solid> {
        let slices = self.slices(library);
        let solid = stitch(&slices)?;
        debug!(
            slices = slices.len(),
            faces = solid.face_count(),
            "lofted shell"
        );
        Ok(solid)
    }
}

/// Joins slices into a closed solid: side strips plus bottom and top caps.
fn stitch(slices: &[Slice]) -> Result<Solid> {
    let rings: Vec<Vec<Point3>> = slices.iter().map(Slice::points_3d).collect();
    let (Some(first), Some(last)) = (slices.first(), slices.last()) else {
        return Ok(Solid::default());
    };
    let n = first.outline.len();

    let mut faces = Vec::with_capacity(2 * n * rings.len());
    for pair in rings.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        for i in 0..n {
            let j = (i + 1) % n;
            faces.extend(Face::new(vec![lower[i], lower[j], upper[j]]));
            faces.extend(Face::new(vec![lower[i], upper[j], upper[i]]));
        }
    }

    let (bottom, top) = (&rings[0], &rings[rings.len() - 1]);
    for [a, b, c] in triangulate_loop(first.outline.points())? {
        faces.extend(Face::new(vec![bottom[a], bottom[c], bottom[b]]));
    }
    for [a, b, c] in triangulate_loop(last.outline.points())? {
        faces.extend(Face::new(vec![top[a], top[b], top[c]]));
    }
    Ok(Solid::new(faces))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_to_usize(value: f64) -> usize {
    if value.is_finite() && value > 0.0 {
        value.ceil() as usize
    } else {
        0
    }
}

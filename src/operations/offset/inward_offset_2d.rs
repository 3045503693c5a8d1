use crate::geometry::Loop2D;
use crate::math::polygon_2d::{left_normal, polar_radius, segment_direction};
use crate::math::{Point2, Vector2, TOLERANCE};

/// When the half-angle cosine at a vertex drops to this, the miter is capped.
const MITER_CAP_COS: f64 = 0.25;

/// Miter cap as a multiple of the offset distance.
const MITER_CAP: f64 = 2.0;

/// Offsets a counter-clockwise loop inward with per-vertex miter joins.
///
/// The result has exactly as many points as the input, so rings offset this
/// way stay index-aligned with the unoffset ring. Corners sharp enough that
/// the miter would shoot far past the wall move by twice the offset instead.
/// Every result point is kept at least `min_radius` from the origin, and a
/// point pushed through the origin is pulled back to the floor on its
/// original side.
#[derive(Debug)]
pub struct InwardOffset2D<'a> {
    outline: &'a Loop2D,
    distance: f64,
    min_radius: f64,
}

impl<'a> InwardOffset2D<'a> {
    /// Creates a new inward offset of `outline` by `distance`.
    #[must_use]
    pub fn new(outline: &'a Loop2D, distance: f64) -> Self {
        Self {
            outline,
            distance,
            min_radius: 0.0,
        }
    }

    /// Sets the radius floor applied to every offset point.
    #[must_use]
    pub fn with_min_radius(mut self, min_radius: f64) -> Self {
        self.min_radius = min_radius;
        self
    }

    /// Executes the offset.
    ///
    /// A non-positive distance leaves every point in place apart from the
    /// radius floor.
    #[must_use]
    pub fn execute(&self) -> Loop2D {
        let points = self.outline.points();
        let n = points.len();
        if n < 3 {
            return self.outline.clone();
        }
        if self.distance <= 0.0 {
            return Loop2D::new(points.iter().map(|p| self.clamp_radius(*p, p)).collect());
        }

        let result = (0..n)
            .map(|i| {
                let prev = &points[(i + n - 1) % n];
                let curr = &points[i];
                let next = &points[(i + 1) % n];
                let moved = curr + self.miter(prev, curr, next);
                self.clamp_radius(moved, curr)
            })
            .collect();
        Loop2D::new(result)
    }

    fn miter(&self, prev: &Point2, curr: &Point2, next: &Point2) -> Vector2 {
        let n_prev = segment_direction(prev, curr).map(left_normal);
        let n_next = segment_direction(curr, next).map(left_normal);
        let (n_prev, n_next) = match (n_prev, n_next) {
            (Some(a), Some(b)) => (a, b),
            (Some(a), None) | (None, Some(a)) => return a * self.distance,
            (None, None) => return Vector2::zeros(),
        };

        let sum = n_prev + n_next;
        let len = sum.norm();
        if len < TOLERANCE {
            // Normals cancel on a hairpin; move along either by the cap.
            return n_prev * (self.distance * MITER_CAP);
        }
        let avg = sum / len;
        let cos_half = n_prev.dot(&avg);
        let reach = if cos_half <= MITER_CAP_COS {
            self.distance * MITER_CAP
        } else {
            self.distance / cos_half
        };
        avg * reach
    }

    fn clamp_radius(&self, moved: Point2, original: &Point2) -> Point2 {
        let r = polar_radius(&moved);
        let crossed = moved.coords.dot(&original.coords) < 0.0;
        if r >= self.min_radius && !crossed {
            return moved;
        }
        let dir = if r > TOLERANCE && !crossed {
            moved.coords / r
        } else {
            let r0 = polar_radius(original);
            if r0 <= TOLERANCE {
                return Point2::new(self.min_radius, 0.0);
            }
            original.coords / r0
        };
        Point2::from(dir * self.min_radius)
    }
}

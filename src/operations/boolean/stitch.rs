//! Closing the seams left by BSP clipping.
//!
//! Neighbouring fragments are cut by different planes, so one corner can come
//! out with slightly different coordinates on each side, and a vertex made by
//! splitting one face can land in the middle of its neighbour's edge. Welding
//! snaps near-equal vertices to a single position; stitching then inserts
//! every vertex lying on an edge into that edge, so each edge of the result is
//! traversed once in each direction.

use std::collections::HashMap;

use crate::geometry::Plane;
use crate::math::{Point3, Vector3};
use crate::topology::Face;

use super::bsp::PLANE_EPSILON;

/// Vertices closer than this are merged, and a vertex closer than this to an
/// edge is inserted into it.
pub(crate) const WELD_TOLERANCE: f64 = PLANE_EPSILON;

type Cell = (i64, i64, i64);

/// Welds the vertices of `faces` and splits every edge at the vertices lying
/// on it.
///
/// Faces that collapse below three distinct vertices are dropped. Surviving
/// faces keep their planes.
pub(crate) fn stitch(faces: Vec<Face>) -> Vec<Face> {
    let mut welder = Welder::new(WELD_TOLERANCE);
    let loops: Vec<(Vec<usize>, Plane)> = faces
        .iter()
        .filter_map(|face| {
            let mut ids: Vec<usize> = Vec::with_capacity(face.vertices().len());
            for vertex in face.vertices() {
                let id = welder.insert(vertex);
                if ids.last() != Some(&id) {
                    ids.push(id);
                }
            }
            while ids.len() > 1 && ids.first() == ids.last() {
                ids.pop();
            }
            (ids.len() >= 3).then(|| (ids, *face.plane()))
        })
        .collect();

    let points = welder.points;
    let Some(cell_size) = mean_edge_length(&points, &loops) else {
        return Vec::new();
    };
    let grid = PointGrid::new(&points, cell_size.max(4.0 * WELD_TOLERANCE));

    loops
        .into_iter()
        .map(|(ids, plane)| {
            let mut vertices = Vec::with_capacity(ids.len());
            for (k, &a) in ids.iter().enumerate() {
                let b = ids[(k + 1) % ids.len()];
                vertices.push(points[a]);
                vertices.extend(grid.on_segment(a, b).into_iter().map(|i| points[i]));
            }
            Face::with_plane(vertices, plane)
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn mean_edge_length(points: &[Point3], loops: &[(Vec<usize>, Plane)]) -> Option<f64> {
    let (total, count) = loops
        .iter()
        .flat_map(|(ids, _)| {
            ids.iter()
                .zip(ids.iter().cycle().skip(1))
                .map(|(&a, &b)| (points[b] - points[a]).norm())
        })
        .fold((0.0, 0_usize), |(sum, n), len| (sum + len, n + 1));
    (count > 0).then(|| total / count as f64)
}

#[allow(clippy::cast_possible_truncation)]
fn cell_of(p: &Point3, size: f64) -> Cell {
    (
        (p.x / size).floor() as i64,
        (p.y / size).floor() as i64,
        (p.z / size).floor() as i64,
    )
}

/// Assigns each distinct position an index, merging positions within the
/// tolerance of one already seen.
struct Welder {
    tolerance: f64,
    cells: HashMap<Cell, Vec<usize>>,
    points: Vec<Point3>,
}

impl Welder {
    fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            cells: HashMap::new(),
            points: Vec::new(),
        }
    }

    fn insert(&mut self, p: &Point3) -> usize {
        let cell = cell_of(p, self.tolerance);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(ids) = self.cells.get(&(cell.0 + dx, cell.1 + dy, cell.2 + dz)) else {
                        continue;
                    };
                    if let Some(&id) = ids
                        .iter()
                        .find(|&&id| (self.points[id] - *p).norm() <= self.tolerance)
                    {
                        return id;
                    }
                }
            }
        }
        let id = self.points.len();
        self.points.push(*p);
        self.cells.entry(cell).or_default().push(id);
        id
    }
}

/// Uniform grid over welded points for finding the ones lying on an edge.
struct PointGrid<'a> {
    points: &'a [Point3],
    size: f64,
    cells: HashMap<Cell, Vec<usize>>,
}

impl<'a> PointGrid<'a> {
    fn new(points: &'a [Point3], size: f64) -> Self {
        let mut cells: HashMap<Cell, Vec<usize>> = HashMap::new();
        for (id, p) in points.iter().enumerate() {
            cells.entry(cell_of(p, size)).or_default().push(id);
        }
        Self {
            points,
            size,
            cells,
        }
    }

    /// Points strictly between `a` and `b` within the tolerance of the
    /// segment, ordered from `a` to `b`.
    fn on_segment(&self, a: usize, b: usize) -> Vec<usize> {
        let (pa, pb) = (self.points[a], self.points[b]);
        let d = pb - pa;
        let len2 = d.norm_squared();
        let tol2 = WELD_TOLERANCE * WELD_TOLERANCE;
        if len2 <= tol2 {
            return Vec::new();
        }

        let pad = Vector3::repeat(WELD_TOLERANCE);
        let lo = cell_of(&(pa.inf(&pb) - pad), self.size);
        let hi = cell_of(&(pa.sup(&pb) + pad), self.size);

        let mut hits: Vec<(f64, usize)> = Vec::new();
        for x in lo.0..=hi.0 {
            for y in lo.1..=hi.1 {
                for z in lo.2..=hi.2 {
                    let Some(ids) = self.cells.get(&(x, y, z)) else {
                        continue;
                    };
                    for &id in ids {
                        if id == a || id == b {
                            continue;
                        }
                        let q = self.points[id];
                        let t = (q - pa).dot(&d) / len2;
                        if t <= 0.0 || t >= 1.0 {
                            continue;
                        }
                        if (q - (pa + d * t)).norm_squared() <= tol2 {
                            hits.push((t, id));
                        }
                    }
                }
            }
        }
        hits.sort_by(|l, r| l.0.total_cmp(&r.0).then(l.1.cmp(&r.1)));
        hits.into_iter().map(|(_, id)| id).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::IsValid;
    use crate::topology::Solid;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn quad(a: Point3, b: Point3, c: Point3, d: Point3) -> Face {
        Face::new(vec![a, b, c, d]).unwrap()
    }

    // ── Welding ──

    #[test]
    fn near_equal_corners_are_merged() {
        let a = Face::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)]).unwrap();
        let b = Face::new(vec![p(1.0 + 1e-9, 0.0, 0.0), p(0.0, -1e-9, 0.0), p(0.0, 0.0, -1.0)]).unwrap();
        let out = stitch(vec![a, b]);
        assert_eq!(out[1].vertices()[0], out[0].vertices()[1]);
        assert_eq!(out[1].vertices()[1], out[0].vertices()[0]);
    }

    #[test]
    fn collapsed_face_is_dropped() {
        let sliver = Face::with_plane(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1e-7, 0.0)],
            *Face::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)])
                .unwrap()
                .plane(),
        );
        assert!(stitch(vec![sliver]).is_empty());
    }

    // ── T-junctions ──

    #[test]
    fn vertex_on_neighbouring_edge_is_inserted() {
        // One big square beside two half squares: the halves meet at (1, 1)
        // on the big square's right edge.
        let big = quad(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 2.0, 0.0), p(0.0, 2.0, 0.0));
        let lower = quad(p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(2.0, 1.0, 0.0), p(1.0, 1.0, 0.0));
        let out = stitch(vec![big, lower]);
        assert_eq!(
            out[0].vertices(),
            &[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 2.0, 0.0), p(0.0, 2.0, 0.0)]
        );
        assert_eq!(out[1].vertices().len(), 4);
    }

    #[test]
    fn inserted_vertices_follow_edge_direction() {
        let edge = Face::new(vec![p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(0.0, 4.0, 0.0)]).unwrap();
        let marks = Face::new(vec![p(3.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, -1.0, 0.0)]).unwrap();
        let out = stitch(vec![edge, marks]);
        let xs: Vec<f64> = out[0].vertices()[..4].iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 3.0, 4.0]);
    }

    #[test]
    fn split_cube_side_becomes_watertight() {
        // A unit cube whose +x side is cut into two halves, leaving
        // T-junctions on the top and bottom faces.
        let c = |x, y, z| p(x, y, z);
        let faces = vec![
            quad(c(0.0, 0.0, 0.0), c(0.0, 1.0, 0.0), c(1.0, 1.0, 0.0), c(1.0, 0.0, 0.0)),
            quad(c(0.0, 0.0, 1.0), c(1.0, 0.0, 1.0), c(1.0, 1.0, 1.0), c(0.0, 1.0, 1.0)),
            quad(c(0.0, 0.0, 0.0), c(1.0, 0.0, 0.0), c(1.0, 0.0, 1.0), c(0.0, 0.0, 1.0)),
            quad(c(0.0, 1.0, 0.0), c(0.0, 1.0, 1.0), c(1.0, 1.0, 1.0), c(1.0, 1.0, 0.0)),
            quad(c(0.0, 0.0, 0.0), c(0.0, 0.0, 1.0), c(0.0, 1.0, 1.0), c(0.0, 1.0, 0.0)),
            quad(c(1.0, 0.0, 0.0), c(1.0, 0.5, 0.0), c(1.0, 0.5, 1.0), c(1.0, 0.0, 1.0)),
            quad(c(1.0, 0.5, 0.0), c(1.0, 1.0, 0.0), c(1.0, 1.0, 1.0), c(1.0, 0.5, 1.0)),
        ];
        assert!(!IsValid::new(&Solid::new(faces.clone())).execute());
        assert!(IsValid::new(&Solid::new(stitch(faces))).execute());
    }

    #[test]
    fn nothing_in_nothing_out() {
        assert!(stitch(Vec::new()).is_empty());
    }
}

use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, FixedVertexHandle, InnerTag};
use spade::{ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::error::{GeometryError, Result, TessellationError};
use crate::math::Point2;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates the interior of a simple closed loop.
///
/// Returns index triples into `points`, counter-clockwise in the loop's
/// plane. No points are added, so a cap built from these triangles shares
/// its rim vertices exactly with whatever it closes off. Duplicate points
/// collapse onto their first occurrence.
///
/// # Errors
///
/// Returns an error if the loop has fewer than three points, a coordinate
/// is non-finite, or the triangulation rejects a point.
pub fn triangulate_loop(points: &[Point2]) -> Result<Vec<[usize; 3]>> {
    if points.len() < 3 {
        return Err(TessellationError::Failed("cap loop needs at least 3 points".into()).into());
    }
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(GeometryError::NonFinite("cap outline").into());
    }

    let mut cdt = Cdt::new();
    let mut index_of: HashMap<FixedVertexHandle, usize> = HashMap::with_capacity(points.len());
    let mut handles = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let handle = cdt
            .insert(SpadePoint2::new(p.x, p.y))
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        index_of.entry(handle).or_insert(i);
        handles.push(handle);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from != to && cdt.can_add_constraint(from, to) {
            cdt.add_constraint(from, to);
        }
    }

    let interior = classify_interior_faces(&cdt);
    let mut triangles = Vec::new();
    for face in cdt.inner_faces() {
        if !interior.contains(&face.fix().index()) {
            continue;
        }
        let [a, b, c] = face.vertices().map(|v| index_of.get(&v.fix()).copied());
        let (Some(a), Some(b), Some(c)) = (a, b, c) else {
            continue;
        };
        let (pa, pb, pc) = (&points[a], &points[b], &points[c]);
        let cross = (pb - pa).perp(&(pc - pa));
        if cross > 0.0 {
            triangles.push([a, b, c]);
        } else if cross < 0.0 {
            triangles.push([a, c, b]);
        }
    }
    Ok(triangles)
}

/// Marks the inner faces enclosed by the constraint loop.
///
/// Flood-fills outward from the convex hull; crossing a constraint edge
/// toggles parity and odd-parity faces are interior.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_of: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer = cdt.outer_face().fix();
    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer {
            continue;
        }
        if let Some(inner) = edge.rev().face().as_inner() {
            let idx = inner.fix().index();
            if depth_of.contains_key(&idx) {
                continue;
            }
            let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_of.insert(idx, depth);
            if depth % 2 == 1 {
                interior.insert(idx);
            }
            queue.push_back((inner.fix(), depth));
        }
    }

    while let Some((fix, depth)) = queue.pop_front() {
        for edge in cdt.face(fix).adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let idx = neighbor.fix().index();
            if depth_of.contains_key(&idx) {
                continue;
            }
            let next = depth + u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_of.insert(idx, next);
            if next % 2 == 1 {
                interior.insert(idx);
            }
            queue.push_back((neighbor.fix(), next));
        }
    }

    interior
}

//! Binary space partitioning of polygons for boolean clipping.
//!
//! Nodes live in a [`SlotMap`] arena and refer to their children by key, and
//! every walk over the tree uses an explicit stack. A convex solid with `n`
//! faces produces a tree about `n` deep, far beyond what recursion survives.

use slotmap::SlotMap;

use crate::geometry::Plane;
use crate::math::Point3;
use crate::operations::query::Aabb;
use crate::topology::Face;

/// Distance within which a vertex counts as lying on a splitting plane.
pub(crate) const PLANE_EPSILON: f64 = 1e-5;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = FRONT | BACK;

slotmap::new_key_type! {
    struct NodeId;
}

#[derive(Debug, Default)]
struct Node {
    plane: Option<Plane>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    faces: Vec<Face>,
}

/// Where a face ends up relative to a splitting plane.
enum Split {
    CoplanarFront(Face),
    CoplanarBack(Face),
    Front(Face),
    Back(Face),
    Spanning {
        front: Option<Face>,
        back: Option<Face>,
    },
}

/// A BSP tree over the faces of one solid.
///
/// Space behind every plane on a path down the tree is inside the solid.
/// Inverting the tree swaps inside and outside.
#[derive(Debug)]
pub(crate) struct BspTree {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    bounds: Option<Aabb>,
    inverted: bool,
}

impl BspTree {
    /// Builds a tree from the faces of a closed solid.
    pub(crate) fn new(faces: Vec<Face>) -> Self {
        let bounds = Aabb::from_points(faces.iter().flat_map(Face::vertices));
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::default());
        let mut tree = Self {
            nodes,
            root,
            bounds,
            inverted: false,
        };
        tree.build(faces);
        tree
    }

    /// Swaps solid and empty space.
    pub(crate) fn invert(&mut self) {
        for node in self.nodes.values_mut() {
            for face in &mut node.faces {
                face.flip();
            }
            node.plane = node.plane.map(|plane| plane.flipped());
            std::mem::swap(&mut node.front, &mut node.back);
        }
        self.inverted = !self.inverted;
    }

    /// Removes the parts of `faces` that lie inside this tree's solid.
    pub(crate) fn clip_faces(&self, faces: Vec<Face>) -> Vec<Face> {
        let mut kept = Vec::new();
        let mut stack = vec![(self.root, faces)];
        while let Some((id, faces)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            let Some(plane) = node.plane else {
                kept.extend(faces);
                continue;
            };

            let mut front = Vec::new();
            let mut back = Vec::new();
            for face in faces {
                match split_face(&plane, face) {
                    Split::CoplanarFront(f) | Split::Front(f) => front.push(f),
                    Split::CoplanarBack(f) | Split::Back(f) => back.push(f),
                    Split::Spanning { front: f, back: b } => {
                        front.extend(f);
                        back.extend(b);
                    }
                }
            }

            match node.front {
                Some(child) if !front.is_empty() => stack.push((child, front)),
                Some(_) => {}
                None => kept.extend(front),
            }
            // Without a back child, whatever falls behind the plane is inside.
            if let Some(child) = node.back {
                if !back.is_empty() {
                    stack.push((child, back));
                }
            }
        }
        kept
    }

    /// Removes every part of this tree's faces that lies inside `other`.
    ///
    /// Faces whose bounding box misses `other` entirely cannot be cut by it:
    /// they are kept whole, or dropped whole when `other` is inverted and so
    /// covers all space outside its original solid.
    pub(crate) fn clip_to(&mut self, other: &Self) {
        let reach = other.bounds;
        for node in self.nodes.values_mut() {
            let faces = std::mem::take(&mut node.faces);
            let (near, far): (Vec<Face>, Vec<Face>) = match reach {
                Some(bounds) => faces.into_iter().partition(|face| {
                    Aabb::of_face(face).is_some_and(|b| b.overlaps(&bounds, PLANE_EPSILON))
                }),
                None => (faces, Vec::new()),
            };
            let mut clipped = other.clip_faces(near);
            if !other.inverted {
                clipped.extend(far);
            }
            node.faces = clipped;
        }
    }

    /// Every face in the tree, in depth-first order.
    pub(crate) fn all_faces(&self) -> Vec<Face> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            out.extend(node.faces.iter().cloned());
            stack.extend(node.back);
            stack.extend(node.front);
        }
        out
    }

    /// Inserts faces into the tree, splitting them by the existing planes.
    pub(crate) fn build(&mut self, faces: Vec<Face>) {
        let mut stack = vec![(self.root, faces)];
        while let Some((id, faces)) = stack.pop() {
            if faces.is_empty() {
                continue;
            }
            let Some(node) = self.nodes.get_mut(id) else {
                continue;
            };
            let plane = *node.plane.get_or_insert(*faces[0].plane());

            let mut front = Vec::new();
            let mut back = Vec::new();
            for face in faces {
                match split_face(&plane, face) {
                    Split::CoplanarFront(f) | Split::CoplanarBack(f) => node.faces.push(f),
                    Split::Front(f) => front.push(f),
                    Split::Back(f) => back.push(f),
                    Split::Spanning { front: f, back: b } => {
                        front.extend(f);
                        back.extend(b);
                    }
                }
            }

            let (front_child, back_child) = (node.front, node.back);
            if !front.is_empty() {
                let child = front_child.unwrap_or_else(|| self.add_child(id, true));
                stack.push((child, front));
            }
            if !back.is_empty() {
                let child = back_child.unwrap_or_else(|| self.add_child(id, false));
                stack.push((child, back));
            }
        }
    }

    fn add_child(&mut self, parent: NodeId, front: bool) -> NodeId {
        let child = self.nodes.insert(Node::default());
        if let Some(node) = self.nodes.get_mut(parent) {
            if front {
                node.front = Some(child);
            } else {
                node.back = Some(child);
            }
        }
        child
    }
}

/// Classifies `face` against `plane`, cutting it in two if it spans it.
///
/// Coplanar faces are sorted by whether they face the same way as the plane.
/// Fragments keep the parent face's plane.
fn split_face(plane: &Plane, face: Face) -> Split {
    let distances: Vec<f64> = face
        .vertices()
        .iter()
        .map(|v| plane.signed_distance(v))
        .collect();
    let sides: Vec<u8> = distances.iter().map(|&d| side_of(d)).collect();
    let kind = sides.iter().fold(COPLANAR, |acc, &s| acc | s);

    match kind {
        COPLANAR => {
            if plane.normal().dot(face.normal()) > 0.0 {
                Split::CoplanarFront(face)
            } else {
                Split::CoplanarBack(face)
            }
        }
        FRONT => Split::Front(face),
        BACK => Split::Back(face),
        _ => {
            let vertices = face.vertices();
            let n = vertices.len();
            let mut front: Vec<Point3> = Vec::with_capacity(n + 1);
            let mut back: Vec<Point3> = Vec::with_capacity(n + 1);
            for i in 0..n {
                let j = (i + 1) % n;
                let (si, sj) = (sides[i], sides[j]);
                let vi = vertices[i];
                if si != BACK {
                    front.push(vi);
                }
                if si != FRONT {
                    back.push(vi);
                }
                if si | sj == SPANNING {
                    let t = distances[i] / (distances[i] - distances[j]);
                    let v = vi + (vertices[j] - vi) * t;
                    front.push(v);
                    back.push(v);
                }
            }
            let parent = *face.plane();
            let fragment = |pts: Vec<Point3>| (pts.len() >= 3).then(|| Face::with_plane(pts, parent));
            Split::Spanning {
                front: fragment(front),
                back: fragment(back),
            }
        }
    }
}

fn side_of(distance: f64) -> u8 {
    if distance < -PLANE_EPSILON {
        BACK
    } else if distance > PLANE_EPSILON {
        FRONT
    } else {
        COPLANAR
    }
}

use tracing::{debug, instrument};

use crate::error::{GeometryError, Result};
use crate::operations::query::BoundingBox;
use crate::topology::Solid;

use super::bsp::{BspTree, PLANE_EPSILON};
use super::stitch::stitch;

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Subtract,
    Intersect,
}

/// Executes a boolean operation on two solids.
///
/// Solids whose bounding boxes do not touch are combined without building
/// any trees. Otherwise both solids become BSP trees and are clipped against
/// each other in the order the operation needs, and the fragments are welded
/// and stitched back into a closed surface.
#[instrument(skip(a, b), fields(a_faces = a.face_count(), b_faces = b.face_count()))]
pub(crate) fn boolean_execute(a: Solid, b: Solid, op: BooleanOp) -> Result<Solid> {
    for solid in [&a, &b] {
        let finite = solid
            .faces()
            .iter()
            .flat_map(|f| f.vertices())
            .all(|v| v.coords.iter().all(|c| c.is_finite()));
        if !finite {
            return Err(GeometryError::NonFinite("boolean operand").into());
        }
    }

    let overlapping = match (BoundingBox::new(&a).execute(), BoundingBox::new(&b).execute()) {
        (Some(box_a), Some(box_b)) => box_a.overlaps(&box_b, PLANE_EPSILON),
        _ => false,
    };
    if !overlapping {
        debug!(?op, "operands are disjoint");
        return Ok(combine_disjoint(a, b, op));
    }

    let mut ta = BspTree::new(a.into_faces());
    let mut tb = BspTree::new(b.into_faces());
    match op {
        BooleanOp::Union => {
            ta.clip_to(&tb);
            tb.clip_to(&ta);
            tb.invert();
            tb.clip_to(&ta);
            tb.invert();
            ta.build(tb.all_faces());
        }
        BooleanOp::Subtract => {
            ta.invert();
            ta.clip_to(&tb);
            tb.clip_to(&ta);
            tb.invert();
            tb.clip_to(&ta);
            tb.invert();
            ta.build(tb.all_faces());
            ta.invert();
        }
        BooleanOp::Intersect => {
            ta.invert();
            tb.clip_to(&ta);
            tb.invert();
            ta.clip_to(&tb);
            tb.clip_to(&ta);
            ta.build(tb.all_faces());
            ta.invert();
        }
    }

    let result = Solid::new(stitch(ta.all_faces()));
    debug!(?op, faces = result.face_count(), "boolean complete");
    Ok(result)
}

fn combine_disjoint(a: Solid, b: Solid, op: BooleanOp) -> Solid {
    match op {
        BooleanOp::Union => {
            let mut faces = a.into_faces();
            faces.extend(b.into_faces());
            Solid::new(faces)
        }
        BooleanOp::Subtract => a,
        BooleanOp::Intersect => Solid::default(),
    }
}

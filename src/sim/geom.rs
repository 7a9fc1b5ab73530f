//! Geometry and collision kernel
//!
//! The three primitives everything else is built on: even-odd point-in-polygon,
//! vertex-sampling polygon overlap, and parametric segment intersection. All of
//! them treat degenerate numeric input as "no hit" rather than an error.

use glam::Vec2;

/// Near-parallel guard for the segment intersection denominator
const PARALLEL_EPS: f32 = 1e-4;

/// Even-odd winding test: is `p` inside the polygon?
///
/// Works for any simple polygon with 3+ vertices, clockwise or
/// counter-clockwise. Counts crossings of a horizontal ray from `p`.
/// Degenerate input with fewer than three vertices contains nothing.
pub fn point_in_polygon(verts: &[Vec2], p: Vec2) -> bool {
    if verts.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = verts.len() - 1;
    for i in 0..verts.len() {
        let (vi, vj) = (verts[i], verts[j]);
        if (vi.y > p.y) != (vj.y > p.y)
            && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// True if any vertex of `other` lies inside `container`.
///
/// This is a one-directional point-sampling approximation, not an exact
/// polygon intersection: thin polygons that cross without a vertex landing
/// inside the other are missed. Callers wanting symmetric overlap use
/// [`polys_overlap`], which checks both directions.
pub fn contains_any_vertex(container: &[Vec2], other: &[Vec2]) -> bool {
    other.iter().any(|&v| point_in_polygon(container, v))
}

/// Symmetric vertex-sampling overlap test
pub fn polys_overlap(a: &[Vec2], b: &[Vec2]) -> bool {
    contains_any_vertex(a, b) || contains_any_vertex(b, a)
}

/// Parametric line-line intersection between segment `p1->p2` and the ray
/// segment `origin->end`.
///
/// Returns `(t, u)` where `t` parameterizes `p1->p2` and `u` parameterizes
/// `origin->end`; a true crossing requires both to lie strictly in (0, 1).
/// Returns `None` when the segments are near-parallel (denominator within
/// ±1e-4 of zero).
pub fn segment_params(p1: Vec2, p2: Vec2, origin: Vec2, end: Vec2) -> Option<(f32, f32)> {
    let denom = (p1.x - p2.x) * (origin.y - end.y) - (p1.y - p2.y) * (origin.x - end.x);
    if denom.abs() < PARALLEL_EPS {
        return None;
    }
    let t = ((p1.x - origin.x) * (origin.y - end.y) - (p1.y - origin.y) * (origin.x - end.x))
        / denom;
    let u = -((p1.x - p2.x) * (p1.y - origin.y) - (p1.y - p2.y) * (p1.x - origin.x)) / denom;
    Some((t, u))
}

/// Crossing point of segment `p1->p2` with the ray segment `origin->end`,
/// or `None` when they do not strictly cross.
pub fn segment_hit(p1: Vec2, p2: Vec2, origin: Vec2, end: Vec2) -> Option<Vec2> {
    let (t, u) = segment_params(p1, p2, origin, end)?;
    if t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0 {
        Some(p1 + (p2 - p1) * t)
    } else {
        None
    }
}

//! Oriented polygon value type
//!
//! Every entity hitbox is a closed planar shape whose world-space vertices are
//! recomputed from position + heading + a fixed local shape. The variant set
//! is closed (rectangle, triangle, octagon), so no trait objects: one enum and
//! one rebuild routine cover every entity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom;

/// Tail vertices of the triangle sit at heading ± this offset
const TRIANGLE_TAIL_ANGLE: f32 = 11.0 * std::f32::consts::PI / 12.0;

/// Fixed local shape of an oriented polygon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis pair centered on the position, rotated by the heading
    Rectangle { width: f32, height: f32 },
    /// Nose vertex along the heading, two tail vertices swept back
    Triangle { nose: f32, tail: f32 },
    /// Regular octagon; vertices do not rotate with the heading
    Octagon { radius: f32 },
}

impl Shape {
    fn vertex_count(&self) -> usize {
        match self {
            Shape::Rectangle { .. } => 4,
            Shape::Triangle { .. } => 3,
            Shape::Octagon { .. } => 8,
        }
    }
}

/// A polygon hitbox positioned and oriented in the arena
///
/// Invariant: `verts` always reflects the current `pos`/`heading`; movement
/// code calls [`OrientedPoly::rebuild`] before the frame ends so stale
/// vertices are never read across a frame boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrientedPoly {
    pub pos: Vec2,
    /// Heading in radians; wrapping policy is owned by the mover, not here
    pub heading: f32,
    pub shape: Shape,
    verts: Vec<Vec2>,
}

impl OrientedPoly {
    pub fn new(pos: Vec2, heading: f32, shape: Shape) -> Self {
        let mut poly = Self {
            pos,
            heading,
            shape,
            verts: vec![Vec2::ZERO; shape.vertex_count()],
        };
        poly.rebuild();
        poly
    }

    /// Recompute world-space vertices from the current position and heading
    pub fn rebuild(&mut self) {
        let (pos, heading) = (self.pos, self.heading);
        match self.shape {
            Shape::Rectangle { width, height } => {
                let (sin, cos) = heading.sin_cos();
                let half_w = Vec2::new(cos, sin) * (width / 2.0);
                let half_h = Vec2::new(-sin, cos) * (height / 2.0);
                self.verts[0] = pos + half_w + half_h;
                self.verts[1] = pos - half_w + half_h;
                self.verts[2] = pos - half_w - half_h;
                self.verts[3] = pos + half_w - half_h;
            }
            Shape::Triangle { nose, tail } => {
                let at = |a: f32, len: f32| pos + Vec2::new(a.cos(), a.sin()) * len;
                self.verts[0] = at(heading, nose);
                self.verts[1] = at(heading - TRIANGLE_TAIL_ANGLE, tail);
                self.verts[2] = at(heading + TRIANGLE_TAIL_ANGLE, tail);
            }
            Shape::Octagon { radius } => {
                for (k, v) in self.verts.iter_mut().enumerate() {
                    let a = k as f32 * std::f32::consts::FRAC_PI_4;
                    *v = pos + Vec2::new(a.cos(), a.sin()) * radius;
                }
            }
        }
    }

    /// Current world-space vertices
    pub fn verts(&self) -> &[Vec2] {
        &self.verts
    }

    /// Iterate polygon edges as (start, end) vertex pairs
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.verts.len();
        (0..n).map(move |i| (self.verts[(i + n - 1) % n], self.verts[i]))
    }

    /// Even-odd containment against the current vertices
    pub fn contains(&self, p: Vec2) -> bool {
        geom::point_in_polygon(&self.verts, p)
    }

    /// Symmetric vertex-sampling overlap with another polygon
    pub fn overlaps(&self, other: &OrientedPoly) -> bool {
        geom::polys_overlap(&self.verts, &other.verts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rectangle_tracks_position_and_heading() {
        let mut poly = OrientedPoly::new(
            Vec2::new(100.0, 100.0),
            0.0,
            Shape::Rectangle { width: 10.0, height: 40.0 },
        );
        // Heading 0: width along x, height along y
        assert!(poly.contains(Vec2::new(104.0, 119.0)));
        assert!(!poly.contains(Vec2::new(110.0, 100.0)));

        // Quarter turn swaps the extents
        poly.heading = FRAC_PI_2;
        poly.rebuild();
        assert!(poly.contains(Vec2::new(119.0, 100.0)));
        assert!(!poly.contains(Vec2::new(100.0, 110.0)));
    }

    #[test]
    fn test_triangle_nose_points_along_heading() {
        let poly = OrientedPoly::new(
            Vec2::ZERO,
            0.0,
            Shape::Triangle { nose: 35.0, tail: 30.0 },
        );
        let nose = poly.verts()[0];
        assert!((nose - Vec2::new(35.0, 0.0)).length() < 1e-4);
        // Tail vertices are behind the position
        assert!(poly.verts()[1].x < 0.0);
        assert!(poly.verts()[2].x < 0.0);
    }

    #[test]
    fn test_octagon_ignores_heading() {
        let a = OrientedPoly::new(Vec2::new(50.0, 50.0), 0.0, Shape::Octagon { radius: 30.0 });
        let b = OrientedPoly::new(Vec2::new(50.0, 50.0), 2.5, Shape::Octagon { radius: 30.0 });
        for (va, vb) in a.verts().iter().zip(b.verts()) {
            assert!((*va - *vb).length() < 1e-6);
        }
    }

    #[test]
    fn test_edges_close_the_loop() {
        let poly = OrientedPoly::new(Vec2::ZERO, 0.0, Shape::Octagon { radius: 30.0 });
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 8);
        // Every vertex appears once as a start and once as an end
        for (i, &(_, end)) in edges.iter().enumerate() {
            assert!((end - poly.verts()[i]).length() < 1e-6);
        }
    }

    #[test]
    fn test_overlap_both_directions() {
        // Small rectangle fully inside a large octagon: only one direction of
        // the vertex-sampling test fires, the symmetric wrapper must catch it.
        let big = OrientedPoly::new(Vec2::ZERO, 0.0, Shape::Octagon { radius: 30.0 });
        let small = OrientedPoly::new(
            Vec2::new(2.0, 2.0),
            0.3,
            Shape::Rectangle { width: 4.0, height: 4.0 },
        );
        assert!(big.overlaps(&small));
        assert!(small.overlaps(&big));
    }
}

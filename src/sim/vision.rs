//! Ray-casting visibility engine
//!
//! A fixed fan of 1024 rays anchored at the wolf every frame. Rays inside the
//! forward field-of-view cone reach far; peripheral rays are truncated short.
//! Each ray keeps its nearest crossing against every tree edge and every
//! player edge - bare trees still occlude - and the sweep reports whether any
//! ray landed on the player. Visibility is per-frame only, never sticky.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::segment_hit;
use super::poly::OrientedPoly;
use super::state::Tree;
use crate::consts::*;
use crate::{angle_gap, heading_vec};

/// One vision ray
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ray {
    /// Fixed absolute angle; the fan does not rotate with the wolf
    angle: f32,
    origin: Vec2,
    /// Direction scaled to the ray's current reach
    dir: Vec2,
    /// Nearest crossing this frame, `None` when the ray ran its full length
    hit: Option<Vec2>,
}

impl Ray {
    /// Build the full evenly spaced fan for a wolf at `origin`
    pub fn fan(origin: Vec2, heading: f32) -> Vec<Ray> {
        (0..RAY_COUNT)
            .map(|i| {
                let angle = i as f32 * std::f32::consts::TAU / RAY_COUNT as f32;
                Ray {
                    angle,
                    origin,
                    dir: heading_vec(angle) * reach(angle, heading),
                    hit: None,
                }
            })
            .collect()
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Where the renderer should stop drawing this ray: the collision point,
    /// or the full reach when nothing was crossed
    pub fn endpoint(&self) -> Vec2 {
        self.hit.unwrap_or(self.origin + self.dir)
    }

    pub fn hit(&self) -> Option<Vec2> {
        self.hit
    }
}

/// Result of one ray sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting {
    pub player_visible: bool,
    /// Player position at the moment of sighting
    pub last_seen: Option<Vec2>,
}

/// Reach of a ray at `angle` for a wolf facing `heading`
fn reach(angle: f32, heading: f32) -> f32 {
    if angle_gap(angle, heading) <= VISION_CONE_HALF {
        RAY_REACH_LONG
    } else {
        RAY_REACH_SHORT
    }
}

/// Recompute every ray from the wolf's current position and heading, then
/// cast against all tree polygons and the player polygon.
///
/// The visibility verdict is recomputed from scratch: a frame where no ray's
/// nearest hit lies on the player reports not-visible regardless of history.
pub fn sweep(
    rays: &mut [Ray],
    wolf_pos: Vec2,
    wolf_heading: f32,
    trees: &[Tree],
    player: &OrientedPoly,
) -> Sighting {
    let mut sighting = Sighting { player_visible: false, last_seen: None };

    for ray in rays.iter_mut() {
        ray.origin = wolf_pos;
        ray.dir = heading_vec(ray.angle) * reach(ray.angle, wolf_heading);
        let end = ray.origin + ray.dir;

        let mut nearest: Option<(f32, Vec2, bool)> = None;
        let mut consider = |pt: Vec2, on_player: bool| {
            let d2 = ray.origin.distance_squared(pt);
            if nearest.is_none_or(|(best, _, _)| d2 <= best) {
                nearest = Some((d2, pt, on_player));
            }
        };

        for tree in trees {
            for (a, b) in tree.poly.edges() {
                if let Some(pt) = segment_hit(a, b, ray.origin, end) {
                    consider(pt, false);
                }
            }
        }
        for (a, b) in player.edges() {
            if let Some(pt) = segment_hit(a, b, ray.origin, end) {
                consider(pt, true);
            }
        }

        match nearest {
            Some((_, pt, on_player)) => {
                ray.hit = Some(pt);
                if on_player {
                    sighting.player_visible = true;
                    sighting.last_seen = Some(player.pos);
                }
            }
            None => ray.hit = None,
        }
    }

    sighting
}

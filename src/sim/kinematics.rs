//! Shared moving-entity kinematics
//!
//! Player and wolf move under the same model - turn, thrust, friction, speed
//! clamp, integrate, arena clamp - and differ only in their tuning constants.
//! The update is a free function over the oriented-polygon type plus a tuning
//! struct; no dispatch, the entity set is closed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::poly::OrientedPoly;
use crate::{heading_vec, wrap_angle};

/// Per-entity movement constants
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MotionTuning {
    pub max_speed: f32,
    pub acceleration: f32,
    /// Reverse thrust; zero disables the reverse input entirely (wolf)
    pub reverse_deceleration: f32,
    pub friction: f32,
    pub rotation_speed: f32,
    /// Wrap heading into [0, 2π) after rotation (wolf only; the player's
    /// heading accumulates unwrapped, matching the original asymmetry)
    pub wrap_heading: bool,
}

/// Per-frame movement intent, written by input handling or the behavior
/// controller and consumed once by [`step`]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Steering {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub reverse: bool,
}

/// Advance one mover by `dt`: rotate, thrust, apply friction, clamp speed,
/// integrate, clamp to the arena rectangle, and rebuild the hitbox vertices.
pub fn step(
    poly: &mut OrientedPoly,
    vel: &mut Vec2,
    steer: &Steering,
    tuning: &MotionTuning,
    dt: f32,
    arena: Vec2,
) {
    // Turn flags are mutually exclusive per frame; left wins a conflict
    if steer.left {
        poly.heading += tuning.rotation_speed * dt;
    } else if steer.right {
        poly.heading -= tuning.rotation_speed * dt;
    }
    if tuning.wrap_heading {
        poly.heading = wrap_angle(poly.heading);
    }

    if steer.forward {
        *vel += heading_vec(poly.heading) * tuning.acceleration * dt;
    } else if steer.reverse && tuning.reverse_deceleration > 0.0 {
        *vel -= heading_vec(poly.heading) * tuning.reverse_deceleration * dt;
    }

    // Friction along the unit velocity; snap to rest when the frame's
    // friction impulse exceeds the remaining speed, so coasting entities
    // settle instead of jittering around zero
    let speed = vel.length();
    if speed > 0.0 {
        let impulse = tuning.friction * dt;
        if impulse >= speed {
            *vel = Vec2::ZERO;
        } else {
            *vel -= (*vel / speed) * impulse;
        }
    }

    let speed = vel.length();
    if speed > tuning.max_speed {
        *vel = (*vel / speed) * tuning.max_speed;
    }

    poly.pos += *vel * dt;
    poly.pos = poly.pos.clamp(Vec2::ZERO, arena);
    poly.rebuild();
}

//! Wolf behavior controller
//!
//! Two states, PATROL and CHASE, as a tagged union on the wolf. The
//! controller runs once per frame before the wolf's kinematics step: it reads
//! the previous sweep's visibility verdict and writes steering flags that the
//! same frame's movement update consumes. Steering is pure proportional -
//! turn toward the goal, thrust when roughly aligned - with no overshoot
//! correction.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::kinematics::Steering;
use super::state::{Wolf, WolfBehavior};
use crate::consts::*;
use crate::heading_vec;

/// Decide the wolf's steering for this frame, possibly transitioning its
/// behavior first.
///
/// Chase reverts to patrol on the very tick visibility is lost; that tick the
/// wolf coasts (no steering) and patrolling resumes on the next frame.
pub fn decide(wolf: &mut Wolf, player_visible: bool, arena: Vec2, rng: &mut Pcg32) -> Steering {
    match wolf.behavior {
        WolfBehavior::Patrol { target } => {
            let target = match target {
                Some(t) if !arrived(wolf.poly.pos, t) => t,
                _ => {
                    let fresh = Vec2::new(
                        rng.random_range(0.0..arena.x),
                        rng.random_range(0.0..arena.y),
                    );
                    log::trace!("patrol target {:.0},{:.0}", fresh.x, fresh.y);
                    wolf.behavior = WolfBehavior::Patrol { target: Some(fresh) };
                    fresh
                }
            };
            steer_toward(&wolf.poly.pos, wolf.poly.heading, target, PATROL_FORWARD_CONE)
        }
        WolfBehavior::Chase { last_seen } => {
            if !player_visible {
                log::debug!("lost sight, back to patrol");
                wolf.behavior = WolfBehavior::Patrol { target: None };
                return Steering::default();
            }
            steer_toward(&wolf.poly.pos, wolf.poly.heading, last_seen, CHASE_FORWARD_CONE)
        }
    }
}

/// Within the patrol arrival tolerance on both axes
fn arrived(pos: Vec2, target: Vec2) -> bool {
    (pos.x - target.x).abs() < PATROL_TARGET_TOLERANCE
        && (pos.y - target.y).abs() < PATROL_TARGET_TOLERANCE
}

/// Proportional steering: turn toward the goal, thrust when the heading
/// error is inside the forward cone
fn steer_toward(pos: &Vec2, heading: f32, goal: Vec2, forward_cone: f32) -> Steering {
    let err = heading_vec(heading).angle_to(goal - *pos);
    Steering {
        left: err > 0.0,
        right: err <= 0.0,
        forward: err.abs() < forward_cone,
        reverse: false,
    }
}

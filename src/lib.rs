//! Orchard Prowl - a 2D stealth-chase game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, kinematics, vision, behavior,
//!   session state)
//!
//! The crate is engine-agnostic: a renderer drives `sim::tick` once per frame
//! with an input snapshot and a delta-time, then reads back entity polygons
//! and vision rays through plain accessors. No drawing API appears here.

pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (hard boundary, entities are clamped inside)
    pub const ARENA_WIDTH: f32 = 1100.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Frames with a larger delta are dropped entirely (stall/resume guard)
    pub const MAX_FRAME_DT: f32 = 0.7;

    /// Player tuning
    pub const PLAYER_START_X: f32 = 12.0;
    pub const PLAYER_START_Y: f32 = 12.0;
    pub const PLAYER_START_HEADING: f32 = 1.0462;
    pub const PLAYER_WIDTH: f32 = 9.0;
    pub const PLAYER_HEIGHT: f32 = 41.0;
    pub const PLAYER_MAX_SPEED: f32 = 250.0;
    pub const PLAYER_ACCELERATION: f32 = 240.0;
    pub const PLAYER_DECELERATION: f32 = 210.0;
    pub const PLAYER_FRICTION: f32 = 170.0;
    pub const PLAYER_ROTATION_SPEED: f32 = 4.0;

    /// Hunger: full value, and time-units between decrements
    pub const HUNGER_FULL: u8 = 5;
    pub const HUNGER_INTERVAL: f32 = 2.0;

    /// Wolf tuning
    pub const WOLF_NOSE_LEN: f32 = 35.0;
    pub const WOLF_TAIL_LEN: f32 = 30.0;
    pub const WOLF_MAX_SPEED: f32 = 400.0;
    pub const WOLF_ACCELERATION: f32 = 260.0;
    pub const WOLF_FRICTION: f32 = 150.0;
    pub const WOLF_ROTATION_SPEED: f32 = 1.9;

    /// Patrol steering: target reached tolerance (per axis) and forward cone
    pub const PATROL_TARGET_TOLERANCE: f32 = 15.0;
    pub const PATROL_FORWARD_CONE: f32 = 0.12;
    /// Chase uses a wider cone so the wolf keeps thrusting mid-turn
    pub const CHASE_FORWARD_CONE: f32 = 0.85;

    /// Tree tuning
    pub const TREE_RADIUS: f32 = 30.0;
    pub const TREE_REGROW_TIME: f32 = 18.0;
    /// Harvesting while more than this many trees exist wins the session
    pub const WIN_TREE_COUNT: usize = 250;

    /// Vision tuning
    pub const RAY_COUNT: usize = 1024;
    /// Half-angle of the forward field-of-view cone
    pub const VISION_CONE_HALF: f32 = std::f32::consts::FRAC_PI_3;
    /// Ray reach inside the forward cone
    pub const RAY_REACH_LONG: f32 = 516.0;
    /// Peripheral ray reach outside the cone
    pub const RAY_REACH_SHORT: f32 = 128.0;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}

/// Unit vector pointing along a heading angle
#[inline]
pub fn heading_vec(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

/// Smallest absolute angular distance between two angles, in [0, π]
#[inline]
pub fn angle_gap(a: f32, b: f32) -> f32 {
    let d = wrap_angle(a - b);
    d.min(std::f32::consts::TAU - d)
}

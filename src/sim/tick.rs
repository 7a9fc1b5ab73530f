//! Per-frame session update
//!
//! One call advances the whole simulation in a fixed order: player movement
//! and hunger, tree regrowth, wolf behavior + movement, ray sweep, collision
//! checks, outcome transition. The caller supplies an input snapshot and a
//! delta-time; nothing else reaches into the simulation mid-frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::behavior;
use super::kinematics::{self, Steering};
use super::state::{GameState, Player, SessionPhase, Tree, Wolf, WolfBehavior};
use super::vision;
use crate::consts::*;

/// Input snapshot for a single frame (deterministic)
///
/// Edge detection (held vs. just-pressed) is the caller's concern;
/// `toggle_debug` and `restart` are expected to be just-pressed edges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Flip the wireframe/sightline overlay flag
    pub toggle_debug: bool,
    /// Start a fresh session from a terminal phase
    pub restart: bool,
}

/// Session outcome emitted by the frame that decided it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Lost,
    Won,
}

/// Advance the session by one frame
///
/// Returns the outcome event on the frame the session ends, `None` otherwise.
/// Frames with `dt` above the stall guard are dropped whole rather than
/// integrated as one huge step.
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32) -> Option<SessionEvent> {
    if dt > MAX_FRAME_DT {
        log::warn!("dropping frame, dt={dt:.3} exceeds stall guard");
        return None;
    }

    match state.phase {
        SessionPhase::Lost | SessionPhase::Won => {
            if input.restart {
                let next_seed = state.seed.wrapping_add(1);
                log::info!("restarting session, seed={next_seed}");
                *state = GameState::new(next_seed);
            }
            return None;
        }
        SessionPhase::Playing => {}
    }

    if input.toggle_debug {
        state.debug_view = !state.debug_view;
    }
    state.time += dt;

    update_player(&mut state.player, input, dt, state.arena);
    if state.player.hunger() == 0 {
        log::info!("player starved at t={:.1}", state.time);
        state.phase = SessionPhase::Lost;
        return Some(SessionEvent::Lost);
    }

    for tree in &mut state.trees {
        tree.update(dt);
    }

    update_wolf(state, dt);

    let sighting = vision::sweep(
        &mut state.rays,
        state.wolf.poly.pos,
        state.wolf.poly.heading,
        &state.trees,
        &state.player.poly,
    );
    state.player_visible = sighting.player_visible;
    if let Some(seen) = sighting.last_seen {
        if matches!(state.wolf.behavior, WolfBehavior::Patrol { .. }) {
            log::debug!("player spotted at {:.0},{:.0}", seen.x, seen.y);
        }
        state.wolf.behavior = WolfBehavior::Chase { last_seen: seen };
    }

    if state.wolf.poly.overlaps(&state.player.poly) {
        log::info!("wolf caught the player at t={:.1}", state.time);
        state.player.hit();
        state.phase = SessionPhase::Lost;
        return Some(SessionEvent::Lost);
    }

    if harvest(state) {
        log::info!("orchard exhausted, player wins at t={:.1}", state.time);
        state.phase = SessionPhase::Won;
        return Some(SessionEvent::Won);
    }

    None
}

/// Player steering from raw input, hunger decay, then the shared kinematics
/// step. A caught player ignores movement input entirely.
fn update_player(player: &mut Player, input: &FrameInput, dt: f32, arena: Vec2) {
    let steer = if player.is_hit() {
        Steering::default()
    } else {
        Steering {
            left: input.left,
            right: input.right && !input.left,
            forward: input.up,
            reverse: input.down && !input.up,
        }
    };
    player.advance_hunger(dt);
    kinematics::step(&mut player.poly, &mut player.vel, &steer, &Player::tuning(), dt, arena);
}

/// Behavior decision feeding the same frame's kinematics step
fn update_wolf(state: &mut GameState, dt: f32) {
    let GameState { wolf, rng, arena, player_visible, .. } = state;
    let steer = behavior::decide(wolf, *player_visible, *arena, rng);
    kinematics::step(&mut wolf.poly, &mut wolf.vel, &steer, &Wolf::tuning(), dt, *arena);
}

/// Resolve player-vs-tree overlaps. Each harvest depletes the tree, refills
/// hunger, and spawns a replacement; returns true when the harvest happened
/// with the collection already past the win threshold.
fn harvest(state: &mut GameState) -> bool {
    let mut won = false;
    let count = state.trees.len();
    for i in 0..count {
        if state.trees[i].is_depleted() {
            continue;
        }
        if !state.trees[i].poly.overlaps(&state.player.poly) {
            continue;
        }
        if state.trees.len() > WIN_TREE_COUNT {
            won = true;
        }
        state.player.refuel();
        state.trees[i].deplete();
        let sapling = Tree::spawn(&mut state.rng, state.arena);
        log::debug!(
            "harvest #{i}, new tree at {:.0},{:.0} ({} total)",
            sapling.poly.pos.x,
            sapling.poly.pos.y,
            state.trees.len() + 1
        );
        state.trees.push(sapling);
    }
    won
}

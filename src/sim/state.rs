//! Game state and core simulation types
//!
//! Everything needed to reproduce a session lives here: entities, the wolf's
//! behavior value, the session phase, and the seeded RNG. Same seed + same
//! input script = identical run.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::kinematics::MotionTuning;
use super::poly::{OrientedPoly, Shape};
use super::vision::Ray;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Active gameplay
    Playing,
    /// Caught by the wolf or starved; waiting for restart
    Lost,
    /// Harvested past the win threshold; waiting for restart
    Won,
}

/// The wolf's active behavior, with its per-state scratch data
///
/// A tagged union owned by the wolf instance: the patrol target and the
/// last-seen player position live here, not in any shared state object, so
/// multiple wolves would never alias each other's scratch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WolfBehavior {
    /// Wander toward a random target, picking a new one on arrival
    Patrol { target: Option<Vec2> },
    /// Steer toward where the player was last spotted
    Chase { last_seen: Vec2 },
}

/// The player's forager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub poly: OrientedPoly,
    pub vel: Vec2,
    /// Remaining hunger bars; the session is lost at zero
    hunger: u8,
    hunger_timer: f32,
    /// One-shot: set when the wolf catches the player, never cleared
    hit: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            poly: OrientedPoly::new(
                Vec2::new(PLAYER_START_X, PLAYER_START_Y),
                PLAYER_START_HEADING,
                Shape::Rectangle { width: PLAYER_WIDTH, height: PLAYER_HEIGHT },
            ),
            vel: Vec2::ZERO,
            hunger: HUNGER_FULL,
            hunger_timer: 0.0,
            hit: false,
        }
    }

    pub fn tuning() -> MotionTuning {
        MotionTuning {
            max_speed: PLAYER_MAX_SPEED,
            acceleration: PLAYER_ACCELERATION,
            reverse_deceleration: PLAYER_DECELERATION,
            friction: PLAYER_FRICTION,
            rotation_speed: PLAYER_ROTATION_SPEED,
            wrap_heading: false,
        }
    }

    /// Accumulate hunger decay; drops one bar per interval
    pub fn advance_hunger(&mut self, dt: f32) {
        self.hunger_timer += dt;
        if self.hunger_timer > HUNGER_INTERVAL {
            self.hunger = self.hunger.saturating_sub(1);
            self.hunger_timer = 0.0;
        }
    }

    /// Reset hunger to full (successful harvest)
    pub fn refuel(&mut self) {
        self.hunger = HUNGER_FULL;
        self.hunger_timer = 0.0;
    }

    /// Mark the player caught: zero velocity, ignore further movement input.
    /// Idempotent.
    pub fn hit(&mut self) {
        if self.hit {
            return;
        }
        self.hit = true;
        self.vel = Vec2::ZERO;
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn hunger(&self) -> u8 {
        self.hunger
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// The AI pursuer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wolf {
    pub poly: OrientedPoly,
    pub vel: Vec2,
    pub behavior: WolfBehavior,
}

impl Wolf {
    pub fn new(arena: Vec2) -> Self {
        Self {
            poly: OrientedPoly::new(
                arena - Vec2::new(12.0, 12.0),
                std::f32::consts::PI,
                Shape::Triangle { nose: WOLF_NOSE_LEN, tail: WOLF_TAIL_LEN },
            ),
            vel: Vec2::ZERO,
            behavior: WolfBehavior::Patrol { target: None },
        }
    }

    pub fn tuning() -> MotionTuning {
        MotionTuning {
            max_speed: WOLF_MAX_SPEED,
            acceleration: WOLF_ACCELERATION,
            reverse_deceleration: 0.0,
            friction: WOLF_FRICTION,
            rotation_speed: WOLF_ROTATION_SPEED,
            wrap_heading: true,
        }
    }
}

/// A harvestable tree
///
/// Depleted trees regrow after a fixed delay. They are skipped by harvest
/// collision but their polygon still occludes vision rays while bare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub poly: OrientedPoly,
    depleted: bool,
    regrow_timer: f32,
}

impl Tree {
    pub fn spawn(rng: &mut Pcg32, arena: Vec2) -> Self {
        let pos = Vec2::new(
            rng.random_range(0.0..arena.x),
            rng.random_range(0.0..arena.y),
        );
        // Heading is cosmetic for an octagon but kept for the renderer
        let heading = rng.random_range(0.0..std::f32::consts::TAU);
        Self {
            poly: OrientedPoly::new(pos, heading, Shape::Octagon { radius: TREE_RADIUS }),
            depleted: false,
            regrow_timer: 0.0,
        }
    }

    /// Advance the regrowth timer while depleted
    pub fn update(&mut self, dt: f32) {
        if self.depleted {
            self.regrow_timer += dt;
            if self.regrow_timer > TREE_REGROW_TIME {
                self.depleted = false;
                self.regrow_timer = 0.0;
            }
        }
    }

    /// Strip the tree after a harvest. Idempotent.
    pub fn deplete(&mut self) {
        if self.depleted {
            return;
        }
        self.depleted = true;
        self.regrow_timer = 0.0;
    }

    pub fn is_depleted(&self) -> bool {
        self.depleted
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(super) rng: Pcg32,
    pub phase: SessionPhase,
    /// Accumulated simulation time
    pub time: f32,
    /// Arena rectangle [0, x] x [0, y]
    pub arena: Vec2,
    pub player: Player,
    pub wolf: Wolf,
    pub(super) trees: Vec<Tree>,
    pub(super) rays: Vec<Ray>,
    /// Result of the latest ray sweep; read by the behavior controller on
    /// the next tick
    pub player_visible: bool,
    /// Wireframe/debug overlay flag for the renderer
    pub debug_view: bool,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        let arena = Vec2::new(ARENA_WIDTH, ARENA_HEIGHT);
        let mut rng = Pcg32::seed_from_u64(seed);
        let wolf = Wolf::new(arena);
        let trees = vec![Tree::spawn(&mut rng, arena)];
        let rays = Ray::fan(wolf.poly.pos, wolf.poly.heading);
        log::debug!("session seeded: seed={seed} trees={}", trees.len());
        Self {
            seed,
            rng,
            phase: SessionPhase::Playing,
            time: 0.0,
            arena,
            player: Player::new(),
            wolf,
            trees,
            rays,
            player_visible: false,
            debug_view: false,
        }
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_layout() {
        let state = GameState::new(7);
        assert_eq!(state.phase, SessionPhase::Playing);
        assert_eq!(state.trees.len(), 1);
        assert_eq!(state.rays.len(), RAY_COUNT);
        assert_eq!(state.player.hunger(), HUNGER_FULL);
        assert_eq!(state.wolf.behavior, WolfBehavior::Patrol { target: None });
        // Wolf starts at the far corner
        assert!((state.wolf.poly.pos - Vec2::new(ARENA_WIDTH - 12.0, ARENA_HEIGHT - 12.0))
            .length()
            < 1e-4);
    }

    #[test]
    fn test_same_seed_same_spawn() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        assert_eq!(a.trees[0].poly.pos, b.trees[0].poly.pos);
        let c = GameState::new(43);
        assert_ne!(a.trees[0].poly.pos, c.trees[0].poly.pos);
    }

    #[test]
    fn test_hit_is_one_shot() {
        let mut player = Player::new();
        player.vel = Vec2::new(50.0, 10.0);
        player.hit();
        assert!(player.is_hit());
        assert_eq!(player.vel, Vec2::ZERO);
        player.vel = Vec2::new(1.0, 0.0);
        player.hit();
        // Second call is a no-op, it does not re-zero anything
        assert_eq!(player.vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_tree_regrowth_cycle() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut tree = Tree::spawn(&mut rng, Vec2::new(1100.0, 600.0));
        assert!(!tree.is_depleted());
        tree.deplete();
        assert!(tree.is_depleted());
        tree.update(TREE_REGROW_TIME - 0.5);
        assert!(tree.is_depleted());
        tree.update(1.0);
        assert!(!tree.is_depleted());
    }

    #[test]
    fn test_state_snapshot_round_trip() {
        let state = GameState::new(99);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, state.seed);
        assert_eq!(back.trees.len(), state.trees.len());
        assert_eq!(back.player.poly.pos, state.player.poly.pos);
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per frame in a fixed internal order
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod behavior;
pub mod geom;
pub mod kinematics;
pub mod poly;
pub mod state;
pub mod tick;
pub mod vision;

pub use geom::{contains_any_vertex, point_in_polygon, polys_overlap, segment_hit, segment_params};
pub use kinematics::{MotionTuning, Steering};
pub use poly::{OrientedPoly, Shape};
pub use state::{GameState, Player, SessionPhase, Tree, Wolf, WolfBehavior};
pub use tick::{FrameInput, SessionEvent, tick};
pub use vision::{Ray, Sighting};

//! Headless session runner
//!
//! Drives the simulation with a scripted forager at a fixed timestep and
//! logs the outcome. Useful for profiling the ray sweep and for eyeballing
//! a full session without a renderer; seed comes from the first CLI
//! argument (default 0) so runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use orchard_prowl::sim::{FrameInput, GameState, SessionEvent, tick};

const DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 600; // ten simulated minutes

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0u64);
    log::info!("headless session, seed={seed}");

    let mut state = GameState::new(seed);
    // Script RNG is separate from the session RNG so the driver does not
    // perturb tree spawns or patrol targets
    let mut script = Pcg32::seed_from_u64(seed ^ 0x5eed);

    let mut input = FrameInput { up: true, ..Default::default() };
    for frame in 0..MAX_FRAMES {
        // Re-roll the steering roughly twice a second
        if frame % 30 == 0 {
            let turn: u8 = script.random_range(0..3);
            input.left = turn == 1;
            input.right = turn == 2;
        }
        match tick(&mut state, &input, DT) {
            Some(SessionEvent::Won) => {
                log::info!(
                    "won after {frame} frames ({:.1}s), {} trees",
                    state.time,
                    state.trees().len()
                );
                return;
            }
            Some(SessionEvent::Lost) => {
                log::info!(
                    "lost after {frame} frames ({:.1}s), hunger={} caught={}",
                    state.time,
                    state.player.hunger(),
                    state.player.is_hit()
                );
                return;
            }
            None => {}
        }
    }
    log::info!(
        "stopped after {MAX_FRAMES} frames, still playing: {} trees, hunger={}",
        state.trees().len(),
        state.player.hunger()
    );
}

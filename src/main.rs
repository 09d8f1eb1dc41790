//! Headless demo entry point
//!
//! Runs a full session without a renderer: a synthetic 60 Hz clock drives
//! the scheduler while a simple autopilot keeps the paddle under the ball.
//! Useful for watching the simulation behave end to end via logging.

use brickbreak::consts::TICK_DT;
use brickbreak::sim::{apply_intent, GameEvent, GamePhase, GameState, Intent};
use brickbreak::FrameScheduler;

/// Ten simulated minutes at 60 frames per second
const FRAME_LIMIT: u32 = 10 * 60 * 60;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut state = GameState::new(seed);
    let mut scheduler = FrameScheduler::new();

    apply_intent(&mut state, Intent::Start);
    apply_intent(&mut state, Intent::ReleaseBall);

    let mut clock = 0.0_f64;
    for _ in 0..FRAME_LIMIT {
        // Autopilot: chase the ball, the same way a demo attract mode would
        let ball_x = state.ball.pos.x;
        apply_intent(&mut state, Intent::PointerMove(ball_x));
        scheduler.advance(&mut state, clock);
        clock += TICK_DT as f64;

        for event in state.take_events() {
            log::debug!("cue: {event:?}");
            match event {
                // Every fresh serve needs a release
                GameEvent::LifeLost | GameEvent::LevelUp => {
                    apply_intent(&mut state, Intent::ReleaseBall);
                }
                _ => {}
            }
        }

        if let GamePhase::GameOver { won } = state.phase {
            let outcome = if won { "won" } else { "lost" };
            log::info!(
                "run {outcome}: score {} at level {} after {} ticks",
                state.score,
                state.level,
                state.time_ticks
            );
            return;
        }
    }

    log::info!(
        "frame limit reached: score {} at level {}",
        state.score,
        state.level
    );
}

//! Frame scheduling
//!
//! Converts the host's per-frame callbacks into fixed-rate simulation ticks.
//! The core takes no dependency on any particular refresh mechanism: the
//! host calls [`FrameScheduler::advance`] once per displayed frame with its
//! monotonic clock, and the scheduler runs however many whole ticks fit,
//! capped to avoid a spiral of death after a stall. Single-threaded; each
//! tick runs to completion before the next.

use crate::consts::{MAX_SUBSTEPS, TICK_DT};
use crate::sim::{tick, GamePhase, GameState};

/// Accumulator-based fixed-timestep driver
#[derive(Debug, Default)]
pub struct FrameScheduler {
    accumulator: f32,
    last_time: Option<f64>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the session to `now` (seconds on the host's monotonic clock).
    /// Returns the number of ticks that ran.
    pub fn advance(&mut self, state: &mut GameState, now: f64) -> u32 {
        let frame_dt = match self.last_time {
            Some(last) => ((now - last) as f32).max(0.0),
            None => 0.0,
        };
        self.last_time = Some(now);

        if !Self::tickable(state.phase) {
            // Drop banked time so resuming does not replay a burst of ticks
            self.accumulator = 0.0;
            return 0;
        }

        // A long stall (hidden tab, debugger) counts as at most 100ms
        self.accumulator += frame_dt.min(0.1);

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            tick(state);
            self.accumulator -= TICK_DT;
            substeps += 1;
            if !Self::tickable(state.phase) {
                self.accumulator = 0.0;
                break;
            }
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= TICK_DT {
            log::debug!("substep cap hit, dropping {:.0}ms", self.accumulator * 1000.0);
            self.accumulator = 0.0;
        }
        substeps
    }

    /// Phases in which the simulation consumes ticks. A level transition
    /// ticks its countdown; everything else is frozen.
    fn tickable(phase: GamePhase) -> bool {
        matches!(phase, GamePhase::Running | GamePhase::LevelTransition)
    }
}

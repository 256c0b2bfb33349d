use std::time::Instant;

use log::debug;

use crate::game::{GameState, RunStatus, Snapshot, StepOutcome};
use crate::input::GameInput;
use crate::scheduler::TickScheduler;

/// Owns the game state and its tick timer.
///
/// Input and ticks both go through `&mut self`, so a step never observes a
/// half-applied heading change. Every method that changes state returns the
/// snapshot to publish.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    scheduler: TickScheduler,
}

impl Session {
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            scheduler: TickScheduler::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Routes one input event. [`GameInput::Start`] after game over resets.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) -> Option<Snapshot> {
        if input == GameInput::Start && self.state.status == RunStatus::GameOver {
            return Some(self.reset());
        }

        let changed = self.state.apply_input(input);
        self.sync_scheduler(now);

        changed.then(|| self.state.snapshot())
    }

    /// Runs one step if the tick is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<Snapshot> {
        if !self.scheduler.poll(now) {
            return None;
        }

        let report = self.state.step();
        if report.outcome == StepOutcome::Skipped {
            return None;
        }

        if self.state.status == RunStatus::Running {
            self.scheduler.arm(now, report.interval());
        }

        Some(self.state.snapshot())
    }

    /// Cancels any pending tick, then restores the start layout.
    pub fn reset(&mut self) -> Snapshot {
        self.scheduler.cancel();
        self.state.reset();
        self.state.snapshot()
    }

    fn sync_scheduler(&mut self, now: Instant) {
        match (self.state.status, self.scheduler.is_armed()) {
            (RunStatus::Running, false) => {
                debug!("tick timer armed at {}ms", self.state.speed_ms());
                self.scheduler.arm(now, self.state.tick_interval());
            }
            (RunStatus::Paused | RunStatus::GameOver, true) => {
                debug!("tick timer cancelled");
                self.scheduler.cancel();
            }
            _ => {}
        }
    }
}

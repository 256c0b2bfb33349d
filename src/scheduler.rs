use std::time::{Duration, Instant};

/// One-shot tick timer driven by an external clock.
///
/// The scheduler never sleeps. The owner polls it with the current instant,
/// and after each step rearms it with whatever interval the step returned.
/// An interval change therefore takes effect from the step that caused it.
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    deadline: Option<Instant>,
}

impl TickScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the next tick `interval` after `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant, interval: Duration) {
        self.deadline = Some(now + interval);
    }

    /// Drops the pending tick, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Instant the pending tick becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true once when the pending tick is due, disarming the timer.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

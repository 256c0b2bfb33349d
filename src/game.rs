use std::time::Duration;

use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::board::Coordinate;
use crate::config::{
    INITIAL_HEADING, INITIAL_SNAKE, INITIAL_SPEED_MS, LEVEL_SPEED_INCREMENT_MS, MIN_SPEED_MS,
    POINTS_PER_LEVEL,
};
use crate::food::place_food;
use crate::input::{Direction, GameInput, propose_heading};
use crate::snake::Snake;

/// Coarse lifecycle state of a run.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum RunStatus {
    /// Idle before a run starts, or paused by the player.
    Paused,
    Running,
    GameOver,
}

/// Why the last run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// What a single call to [`GameState::step`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The game was not running; nothing changed.
    Skipped,
    Moved,
    Ate { level_up: bool },
    Died(DeathReason),
}

/// Result of one step: the outcome plus the tick interval now in effect.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct StepReport {
    pub outcome: StepOutcome,
    pub speed_ms: u64,
}

impl StepReport {
    /// Tick interval the scheduler should wait before the next step.
    #[must_use]
    pub fn interval(self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }
}

/// Read-only copy of the state handed to presentation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    pub snake: Vec<Coordinate>,
    pub food: Coordinate,
    pub heading: Direction,
    pub score: u32,
    pub level: u32,
    pub speed_ms: u64,
    pub status: RunStatus,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
}

impl Snapshot {
    /// True before the first step of a run.
    #[must_use]
    pub fn is_start_screen(&self) -> bool {
        self.status == RunStatus::Paused && self.tick_count == 0
    }
}

/// Level reached with `score` points: `score / POINTS_PER_LEVEL + 1`.
#[must_use]
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Tick interval for `level`, clamped to [`MIN_SPEED_MS`].
#[must_use]
pub fn speed_for_level(level: u32) -> u64 {
    let speed_penalty_ms = u64::from(level.saturating_sub(1)) * LEVEL_SPEED_INCREMENT_MS;
    INITIAL_SPEED_MS
        .saturating_sub(speed_penalty_ms)
        .max(MIN_SPEED_MS)
}

/// Complete game state for one session.
///
/// Heading input is buffered: [`GameState::apply_input`] writes the pending
/// heading, and only [`GameState::step`] commits it. Reversals are judged
/// against the committed heading, so no burst of inputs between two steps
/// can turn the snake back into its own neck.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Coordinate,
    pub score: u32,
    pub status: RunStatus,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    level: u32,
    speed_ms: u64,
    heading: Direction,
    pending_heading: Direction,
    rng: StdRng,
}

impl GameState {
    /// Creates a paused game with an entropy-seeded food sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let snake = Snake::from_segments(INITIAL_SNAKE);
        let food = place_food(&mut rng, &snake);

        Self {
            snake,
            food,
            score: 0,
            status: RunStatus::Paused,
            death_reason: None,
            tick_count: 0,
            level: 1,
            speed_ms: INITIAL_SPEED_MS,
            heading: INITIAL_HEADING,
            pending_heading: INITIAL_HEADING,
            rng,
        }
    }

    /// Restores the start layout and returns to [`RunStatus::Paused`].
    ///
    /// The RNG stream carries on, so the new food is a fresh draw.
    pub fn reset(&mut self) {
        self.snake = Snake::from_segments(INITIAL_SNAKE);
        self.food = place_food(&mut self.rng, &self.snake);
        self.score = 0;
        self.status = RunStatus::Paused;
        self.death_reason = None;
        self.tick_count = 0;
        self.level = 1;
        self.speed_ms = INITIAL_SPEED_MS;
        self.heading = INITIAL_HEADING;
        self.pending_heading = INITIAL_HEADING;

        debug!("game reset, food at ({}, {})", self.food.x, self.food.y);
    }

    /// Advances simulation by one tick.
    ///
    /// Score, level and speed are derived in that order, and the resulting
    /// speed is returned so the caller can rearm its timer.
    pub fn step(&mut self) -> StepReport {
        if self.status != RunStatus::Running {
            return self.report(StepOutcome::Skipped);
        }

        self.tick_count += 1;
        self.heading = self.pending_heading;
        let new_head = self.snake.head().translated(self.heading);

        if let Some(reason) = self.collision_at(new_head) {
            self.status = RunStatus::GameOver;
            self.death_reason = Some(reason);
            info!(
                "game over after {} ticks: {reason:?}, score {}, level {}",
                self.tick_count, self.score, self.level
            );
            return self.report(StepOutcome::Died(reason));
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);

        if !ate {
            trace!("head -> ({}, {})", new_head.x, new_head.y);
            return self.report(StepOutcome::Moved);
        }

        self.food = place_food(&mut self.rng, &self.snake);
        self.score += 1;
        let level_up = self.update_level();

        self.report(StepOutcome::Ate { level_up })
    }

    /// Applies one external input event. Returns true when state changed.
    ///
    /// [`GameInput::Start`] does not reset a finished game; the owner
    /// of the tick timer does that so it can cancel the timer first.
    pub fn apply_input(&mut self, input: GameInput) -> bool {
        match input {
            GameInput::Direction(requested) => self.request_heading(requested),
            GameInput::Start => {
                if self.status != RunStatus::Paused {
                    return false;
                }
                self.status = RunStatus::Running;
                true
            }
            GameInput::Pause => match self.status {
                RunStatus::Running => {
                    self.status = RunStatus::Paused;
                    true
                }
                RunStatus::Paused => {
                    self.status = RunStatus::Running;
                    true
                }
                RunStatus::GameOver => false,
            },
            GameInput::Quit => false,
        }
    }

    /// Overrides the committed and pending heading, bypassing the reversal
    /// check. For setting up scenarios around a hand-placed snake.
    pub fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
        self.pending_heading = heading;
    }

    /// Heading the last step moved in.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Heading the next step will move in.
    #[must_use]
    pub fn pending_heading(&self) -> Direction {
        self.pending_heading
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current tick interval in milliseconds.
    #[must_use]
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.to_vec(),
            food: self.food,
            heading: self.pending_heading,
            score: self.score,
            level: self.level,
            speed_ms: self.speed_ms,
            status: self.status,
            death_reason: self.death_reason,
            tick_count: self.tick_count,
        }
    }

    fn request_heading(&mut self, requested: Direction) -> bool {
        if self.status == RunStatus::GameOver {
            return false;
        }

        let next = propose_heading(self.heading, requested);
        if next != requested {
            trace!("rejected reversal {requested:?} while heading {:?}", self.heading);
            return false;
        }

        let changed = next != self.pending_heading;
        self.pending_heading = next;

        if self.status == RunStatus::Paused {
            self.status = RunStatus::Running;
            return true;
        }

        changed
    }

    fn collision_at(&self, position: Coordinate) -> Option<DeathReason> {
        if !position.is_within_bounds() {
            return Some(DeathReason::WallCollision);
        }

        if self.snake.occupies(position) {
            return Some(DeathReason::SelfCollision);
        }

        None
    }

    fn update_level(&mut self) -> bool {
        let level = level_for_score(self.score);
        if level <= self.level {
            return false;
        }

        self.level = level;
        self.speed_ms = speed_for_level(level);
        debug!(
            "level {} reached at score {}, tick interval {}ms",
            self.level, self.score, self.speed_ms
        );
        true
    }

    fn report(&self, outcome: StepOutcome) -> StepReport {
        StepReport {
            outcome,
            speed_ms: self.speed_ms,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

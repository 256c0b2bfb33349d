use std::time::{Duration, Instant};

use grid_snake::board::Coordinate;
use grid_snake::config::INITIAL_SNAKE;
use grid_snake::game::{GameState, RunStatus};
use grid_snake::input::{Direction, GameInput};
use grid_snake::session::Session;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn started(seed: u64, food: Coordinate) -> (Session, Instant) {
    let mut state = GameState::new_with_seed(seed);
    state.food = food;
    let mut session = Session::new(state);
    let start = Instant::now();
    session.handle_input(GameInput::Direction(Direction::Down), start);
    (session, start)
}

#[test]
fn no_step_happens_before_the_interval() {
    let (mut session, start) = started(1, Coordinate::new(0, 0));

    assert_eq!(session.poll(start + ms(199)), None);
    assert_eq!(session.state().snake.head(), Coordinate::new(10, 10));

    let snapshot = session.poll(start + ms(200)).expect("tick is due");
    assert_eq!(snapshot.snake[0], Coordinate::new(10, 11));
}

#[test]
fn each_deadline_produces_exactly_one_step() {
    let (mut session, start) = started(2, Coordinate::new(0, 0));

    assert!(session.poll(start + ms(200)).is_some());
    assert!(session.poll(start + ms(200)).is_none());
    assert!(session.poll(start + ms(399)).is_none());
    assert!(session.poll(start + ms(400)).is_some());
    assert_eq!(session.state().tick_count, 2);
}

#[test]
fn level_up_shortens_the_very_next_wait() {
    let mut state = GameState::new_with_seed(3);
    state.score = 4;
    state.food = Coordinate::new(11, 10);
    let mut session = Session::new(state);
    let start = Instant::now();
    session.handle_input(GameInput::Start, start);

    let level_up_at = start + ms(200);
    let snapshot = session.poll(level_up_at).expect("tick is due");
    assert_eq!(snapshot.level, 2);
    assert_eq!(snapshot.speed_ms, 180);

    assert_eq!(session.scheduler().deadline(), Some(level_up_at + ms(180)));
    assert!(session.poll(level_up_at + ms(179)).is_none());
    assert!(session.poll(level_up_at + ms(180)).is_some());
}

#[test]
fn pause_cancels_and_resume_rearms() {
    let (mut session, start) = started(4, Coordinate::new(0, 0));

    let paused_at = start + ms(150);
    session.handle_input(GameInput::Pause, paused_at);
    assert_eq!(session.state().status, RunStatus::Paused);
    assert!(!session.scheduler().is_armed());
    assert!(session.poll(start + ms(5_000)).is_none());

    let resumed_at = start + ms(6_000);
    session.handle_input(GameInput::Pause, resumed_at);
    assert_eq!(session.scheduler().deadline(), Some(resumed_at + ms(200)));
}

#[test]
fn game_over_leaves_the_timer_disarmed() {
    let mut state = GameState::new_with_seed(5);
    state.food = Coordinate::new(0, 0);
    let mut session = Session::new(state);
    let start = Instant::now();
    session.handle_input(GameInput::Direction(Direction::Up), start);

    let mut now = start;
    while session.state().status == RunStatus::Running {
        now += ms(200);
        session.poll(now);
    }

    assert_eq!(session.state().status, RunStatus::GameOver);
    assert_eq!(session.state().snake.head(), Coordinate::new(10, 0));
    assert!(!session.scheduler().is_armed());
    assert!(session.poll(now + ms(10_000)).is_none());
}

#[test]
fn start_after_game_over_resets_to_paused() {
    let mut state = GameState::new_with_seed(6);
    state.status = RunStatus::GameOver;
    state.score = 9;
    let mut session = Session::new(state);

    let snapshot = session
        .handle_input(GameInput::Start, Instant::now())
        .expect("reset publishes a snapshot");

    assert_eq!(snapshot.status, RunStatus::Paused);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.snake, INITIAL_SNAKE.to_vec());
    assert!(snapshot.is_start_screen());
    assert!(!session.scheduler().is_armed());
}

#[test]
fn reset_cancels_an_in_flight_tick() {
    let (mut session, start) = started(7, Coordinate::new(0, 0));
    assert!(session.scheduler().is_armed());

    session.reset();

    assert!(!session.scheduler().is_armed());
    assert!(session.poll(start + ms(1_000)).is_none());
    assert_eq!(session.state().snake.to_vec(), INITIAL_SNAKE.to_vec());
}

#[test]
fn rapid_inputs_between_ticks_apply_only_the_last_valid_one() {
    let (mut session, start) = started(8, Coordinate::new(0, 0));
    session.poll(start + ms(200));

    // Committed heading is Down; Right then Up then Left arrive before the next tick.
    let between = start + ms(250);
    session.handle_input(GameInput::Direction(Direction::Right), between);
    session.handle_input(GameInput::Direction(Direction::Up), between);
    session.handle_input(GameInput::Direction(Direction::Left), between);

    let snapshot = session.poll(start + ms(400)).expect("tick is due");

    assert_eq!(snapshot.status, RunStatus::Running);
    assert_eq!(snapshot.snake[0], Coordinate::new(9, 11));
}

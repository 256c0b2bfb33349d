use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::board::Coordinate;
use crate::input::Direction;

/// Side length of the square board, in cells.
pub const BOARD_SIZE: i32 = 20;

/// Tick interval at level 1, in milliseconds.
pub const INITIAL_SPEED_MS: u64 = 200;

/// Fastest allowed tick interval, in milliseconds.
pub const MIN_SPEED_MS: u64 = 50;

/// Score needed per level increase.
pub const POINTS_PER_LEVEL: u32 = 5;

/// Tick interval reduction applied per level above 1, in milliseconds.
pub const LEVEL_SPEED_INCREMENT_MS: u64 = 20;

/// Starting body, head first.
pub const INITIAL_SNAKE: [Coordinate; 3] = [
    Coordinate { x: 10, y: 10 },
    Coordinate { x: 9, y: 10 },
    Coordinate { x: 8, y: 10 },
];

/// Heading of a freshly reset game.
pub const INITIAL_HEADING: Direction = Direction::Right;

/// How long the front-end waits for a key event before checking the clock.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Terminal columns used to draw one board cell, so cells look square.
pub const CELL_WIDTH: u16 = 2;

/// Colors applied to every drawn element.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_alert: Color,
    pub menu_footer: Color,
}

/// Lime snake on slate, red food.
pub const THEME: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::Gray,
    hud_label: Color::Gray,
    hud_value: Color::LightGreen,
    menu_title: Color::LightGreen,
    menu_alert: Color::LightRed,
    menu_footer: Color::DarkGray,
};

/// Rounded frame around the play area.
pub const BORDER_PLAY_AREA: border::Set = border::ROUNDED;

/// Glyph for the snake head (one cell, two columns).
pub const GLYPH_SNAKE_HEAD: &str = "██";

/// Glyph for every other snake segment.
pub const GLYPH_SNAKE_BODY: &str = "▓▓";

/// Glyph for food.
pub const GLYPH_FOOD: &str = "()";

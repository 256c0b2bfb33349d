use serde::Serialize;

use crate::config::BOARD_SIZE;
use crate::input::Direction;

/// Board cell in logical coordinates, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when both axes lie in `0..BOARD_SIZE`.
    #[must_use]
    pub fn is_within_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }

    /// Returns the neighbouring cell one step towards `direction`.
    ///
    /// The result may lie outside the board; callers test it with
    /// [`Coordinate::is_within_bounds`].
    #[must_use]
    pub fn translated(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

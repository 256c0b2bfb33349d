use rand::Rng;

use crate::board::Coordinate;
use crate::config::BOARD_SIZE;
use crate::snake::Snake;

/// Picks a uniformly random free cell by rejection sampling.
///
/// Draws in-bounds coordinates until one is not occupied by `occupied`.
/// A snake covering every cell of the board would make this loop forever;
/// play never gets close, so no fallback exists.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, occupied: &Snake) -> Coordinate {
    loop {
        let candidate = Coordinate {
            x: rng.gen_range(0..BOARD_SIZE),
            y: rng.gen_range(0..BOARD_SIZE),
        };
        if !occupied.occupies(candidate) {
            return candidate;
        }
    }
}

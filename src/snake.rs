use std::collections::VecDeque;

use crate::board::Coordinate;

/// Ordered snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Coordinate>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: impl IntoIterator<Item = Coordinate>) -> Self {
        let body: VecDeque<Coordinate> = segments.into_iter().collect();
        assert!(!body.is_empty(), "snake needs at least one segment");

        Self { body }
    }

    /// Prepends `head`; keeps the tail only when `grow` is set.
    pub fn advance(&mut self, head: Coordinate, grow: bool) {
        self.body.push_front(head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Coordinate {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Coordinate {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Coordinate) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Coordinate> {
        self.body.iter()
    }

    /// Copies the body into a head-first vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Coordinate> {
        self.body.iter().copied().collect()
    }
}

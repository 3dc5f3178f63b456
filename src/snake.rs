use std::collections::VecDeque;

use crate::config::GridSize;
use crate::error::SimulationError;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// The neighbouring cell one step along `direction`. May leave the grid.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Ordered snake segments, head at the front.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Moves the head to `new_head`, keeping the tail when `grow` is set.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    pub fn head(&self) -> Result<Position, SimulationError> {
        self.body.front().copied().ok_or(SimulationError::EmptyBody)
    }

    /// Returns the current tail position, if any.
    #[must_use]
    pub fn tail(&self) -> Option<Position> {
        self.body.back().copied()
    }

    /// Returns true if any segment occupies `position`.
    ///
    /// With `tail_vacates` set, the tail segment is skipped: it moves out of
    /// its cell during the same tick the head moves in.
    #[must_use]
    pub fn occupies(&self, position: Position, tail_vacates: bool) -> bool {
        let considered = if tail_vacates {
            self.body.len().saturating_sub(1)
        } else {
            self.body.len()
        };

        self.body
            .iter()
            .take(considered)
            .any(|segment| *segment == position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::error::SimulationError;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn bounds_check_covers_all_edges() {
        let bounds = GridSize::square(15);

        assert!(Position::new(0, 0).is_within_bounds(bounds));
        assert!(Position::new(14, 14).is_within_bounds(bounds));
        assert!(!Position::new(-1, 3).is_within_bounds(bounds));
        assert!(!Position::new(3, 15).is_within_bounds(bounds));
    }

    #[test]
    fn step_follows_direction_delta() {
        let origin = Position::new(5, 5);

        assert_eq!(origin.step(Direction::Up), Position::new(5, 4));
        assert_eq!(origin.step(Direction::Down), Position::new(5, 6));
        assert_eq!(origin.step(Direction::Left), Position::new(4, 5));
        assert_eq!(origin.step(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn advance_without_growth_drops_tail() {
        let mut snake = Snake::from_segments(vec![
            Position::new(5, 5),
            Position::new(4, 5),
            Position::new(3, 5),
        ]);

        snake.advance(Position::new(6, 5), false);

        let segments: Vec<_> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Position::new(6, 5), Position::new(5, 5), Position::new(4, 5)]
        );
    }

    #[test]
    fn advance_with_growth_keeps_previous_tail() {
        let mut snake = Snake::new(Position::new(5, 5));

        snake.advance(Position::new(6, 5), true);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Ok(Position::new(6, 5)));
        assert_eq!(snake.tail(), Some(Position::new(5, 5)));
    }

    #[test]
    fn occupies_can_skip_the_vacating_tail() {
        let snake = Snake::from_segments(vec![
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(2, 2),
        ]);

        assert!(snake.occupies(Position::new(2, 2), false));
        assert!(!snake.occupies(Position::new(2, 2), true));
        assert!(snake.occupies(Position::new(1, 1), true));
        assert!(!snake.occupies(Position::new(0, 0), false));
    }

    #[test]
    fn empty_body_reports_error() {
        let snake = Snake::from_segments(Vec::new());

        assert!(snake.is_empty());
        assert_eq!(snake.head(), Err(SimulationError::EmptyBody));
        assert_eq!(snake.tail(), None);
    }
}

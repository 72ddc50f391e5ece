use crate::config::{GridSize, INITIAL_SNAKE_LENGTH, MIN_SNAKE_LENGTH, STARVATION_THRESHOLD_MS};
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one grid step towards `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns this position with each axis clamped to the nearest in-bounds cell.
    #[must_use]
    pub fn clamped(self, bounds: GridSize) -> Self {
        Self {
            x: self.x.clamp(0, i32::from(bounds.width) - 1),
            y: self.y.clamp(0, i32::from(bounds.height) - 1),
        }
    }

    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// One snake: head-first body, heading, one-slot input buffer and feeding clock.
///
/// The body is a plain vector because every segment shifts into its
/// predecessor's slot on each advance; a freshly grown tail duplicates the
/// previous tail cell until the next advance spreads it out.
#[derive(Debug, Clone)]
pub struct Snake {
    body: Vec<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    last_fed_at: u64,
}

impl Snake {
    /// Creates a three-segment snake heading right with its body trailing left of `head`.
    #[must_use]
    pub fn new(head: Position, now_ms: u64) -> Self {
        let body = (0..INITIAL_SNAKE_LENGTH)
            .map(|offset| Position {
                x: head.x - offset as i32,
                y: head.y,
            })
            .collect();

        Self {
            body,
            direction: Direction::Right,
            pending_direction: None,
            last_fed_at: now_ms,
        }
    }

    /// Creates a snake from explicit body segments (first is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` holds fewer than [`MIN_SNAKE_LENGTH`] cells.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction, now_ms: u64) -> Self {
        assert!(
            segments.len() >= MIN_SNAKE_LENGTH,
            "a snake needs at least {MIN_SNAKE_LENGTH} segments, got {}",
            segments.len()
        );

        Self {
            body: segments,
            direction,
            pending_direction: None,
            last_fed_at: now_ms,
        }
    }

    /// Buffers a turn for the next advance; last call wins, reversals are dropped.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if !direction_change_is_valid(self.direction, direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Overrides the heading immediately. Used by the enemy policy.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Applies the pending turn, shifts every segment into its predecessor's
    /// cell and moves the head one step.
    pub fn advance(&mut self) {
        if let Some(pending) = self.pending_direction.take() {
            if direction_change_is_valid(self.direction, pending) {
                self.direction = pending;
            }
        }

        for index in (1..self.body.len()).rev() {
            self.body[index] = self.body[index - 1];
        }
        self.body[0] = self.body[0].step(self.direction);
    }

    /// Appends a copy of the tail and restarts the feeding clock.
    pub fn grow(&mut self, now_ms: u64) {
        let tail = self.tail();
        self.body.push(tail);
        self.last_fed_at = now_ms;
    }

    /// Drops the tail segment unless the snake is already at minimum length.
    pub fn shrink(&mut self) {
        if self.body.len() > MIN_SNAKE_LENGTH {
            let _ = self.body.pop();
        }
    }

    /// Shrinks once and restarts the feeding clock when the snake has gone
    /// unfed for longer than the starvation threshold. Returns true on shrink.
    pub fn starve(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_fed_at) <= STARVATION_THRESHOLD_MS {
            return false;
        }

        self.shrink();
        self.last_fed_at = now_ms;
        true
    }

    /// Moves the head back inside the grid, axis by axis.
    pub fn clamp_head(&mut self, bounds: GridSize) {
        self.body[0] = self.body[0].clamped(bounds);
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    #[must_use]
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if any non-head segment occupies `position`.
    #[must_use]
    pub fn body_occupies(&self, position: Position) -> bool {
        self.body[1..].contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        self.body_occupies(self.head())
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake never drops below its minimum length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    #[must_use]
    pub fn last_fed_at(&self) -> u64 {
        self.last_fed_at
    }

    /// Body segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Position] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    fn straight_snake(length: usize) -> Snake {
        let segments = (0..length)
            .map(|offset| Position {
                x: 20 - offset as i32,
                y: 5,
            })
            .collect();
        Snake::from_segments(segments, Direction::Right, 0)
    }

    #[test]
    fn new_snake_trails_left_of_head() {
        let snake = Snake::new(Position { x: 2, y: 2 }, 7);

        assert_eq!(
            snake.segments(),
            &[
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 0, y: 2 },
            ]
        );
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.last_fed_at(), 7);
    }

    #[test]
    fn advance_shifts_segments_into_predecessor_cells() {
        let mut snake = Snake::from_segments(
            vec![
                Position { x: 3, y: 3 },
                Position { x: 3, y: 4 },
                Position { x: 4, y: 4 },
                Position { x: 5, y: 4 },
            ],
            Direction::Up,
            0,
        );
        let before = snake.segments().to_vec();

        snake.advance();

        assert_eq!(snake.head(), Position { x: 3, y: 2 });
        for index in 1..snake.len() {
            assert_eq!(snake.segments()[index], before[index - 1]);
        }
    }

    #[test]
    fn pending_direction_applies_on_next_advance_only() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, 0);

        snake.set_pending_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Right);

        snake.advance();
        assert_eq!(snake.head(), Position { x: 5, y: 4 });
        assert_eq!(snake.pending_direction(), None);
    }

    #[test]
    fn later_pending_direction_overwrites_earlier() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, 0);

        snake.set_pending_direction(Direction::Up);
        snake.set_pending_direction(Direction::Down);
        snake.advance();

        assert_eq!(snake.head(), Position { x: 5, y: 6 });
    }

    #[test]
    fn reversal_is_rejected() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, 0);

        snake.set_pending_direction(Direction::Left);
        snake.advance();

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head(), Position { x: 6, y: 5 });
    }

    #[test]
    fn grow_duplicates_tail_and_feeds() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, 0);
        let tail = snake.tail();

        snake.grow(1_234);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), tail);
        assert_eq!(snake.last_fed_at(), 1_234);
    }

    #[test]
    fn grown_segment_spreads_out_on_advance() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, 0);
        snake.grow(0);

        snake.advance();

        assert_eq!(
            snake.segments(),
            &[
                Position { x: 6, y: 5 },
                Position { x: 5, y: 5 },
                Position { x: 4, y: 5 },
                Position { x: 3, y: 5 },
            ]
        );
    }

    #[test]
    fn starvation_shrinks_once_per_threshold() {
        let mut snake = straight_snake(6);

        assert!(!snake.starve(5_000));
        assert!(snake.starve(5_001));
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.last_fed_at(), 5_001);

        assert!(!snake.starve(10_001));
        assert!(snake.starve(10_002));
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn head_clamps_per_axis() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };

        assert_eq!(
            Position { x: -1, y: 3 }.clamped(bounds),
            Position { x: 0, y: 3 }
        );
        assert_eq!(
            Position { x: 10, y: 8 }.clamped(bounds),
            Position { x: 9, y: 7 }
        );
    }

    #[test]
    fn manhattan_distance_sums_axes() {
        let a = Position { x: 1, y: 7 };
        let b = Position { x: 4, y: 3 };
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(b.manhattan_distance(a), 7);
    }

    #[test]
    fn head_overlap_ignores_head_itself() {
        let snake = straight_snake(3);
        assert!(!snake.head_overlaps_body());
        assert!(snake.occupies(snake.head()));
        assert!(!snake.body_occupies(snake.head()));
    }

    #[test]
    #[should_panic(expected = "at least 2 segments")]
    fn from_segments_rejects_single_cell_body() {
        let _ = Snake::from_segments(vec![Position { x: 4, y: 4 }], Direction::Up, 0);
    }

    proptest! {
        #[test]
        fn shrink_never_goes_below_two(length in 2usize..30, shrinks in 0usize..60) {
            let mut snake = straight_snake(length);
            for _ in 0..shrinks {
                snake.shrink();
            }
            prop_assert_eq!(snake.len(), length.saturating_sub(shrinks).max(2));
        }

        #[test]
        fn reversal_never_changes_heading(index in 0usize..4) {
            let direction = Direction::ALL[index];
            let mut snake = Snake::from_segments(
                vec![Position { x: 10, y: 10 }, Position { x: 10, y: 10 }],
                direction,
                0,
            );
            let head = snake.head();

            snake.set_pending_direction(direction.opposite());
            snake.advance();

            prop_assert_eq!(snake.direction(), direction);
            prop_assert_eq!(snake.head(), head.step(direction));
        }
    }
}

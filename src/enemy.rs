//! Heuristic steering for the AI snake.
//!
//! The enemy looks exactly one step ahead. It hunts the nearest pellet while
//! the board is well stocked and otherwise heads for the player's body.

use crate::config::{ENEMY_FOOD_TARGET_THRESHOLD, GridSize};
use crate::food::FoodSet;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Returns true when one step towards `direction` stays on the grid and
/// misses every current non-head segment of `snake`.
///
/// The tail is treated as fixed even though it would move away this tick.
#[must_use]
pub fn is_safe(snake: &Snake, direction: Direction, bounds: GridSize) -> bool {
    let trial = snake.head().step(direction);
    trial.is_within_bounds(bounds) && !snake.body_occupies(trial)
}

/// Integer-truncated mean of every segment position.
#[must_use]
pub fn body_center(snake: &Snake) -> Position {
    let segments = snake.segments();
    let count = segments.len() as i32;
    let (sum_x, sum_y) = segments
        .iter()
        .fold((0, 0), |(x, y), segment| (x + segment.x, y + segment.y));

    Position {
        x: sum_x / count,
        y: sum_y / count,
    }
}

/// Nearest pellet by Manhattan distance from `from`; ties keep the earliest.
#[must_use]
pub fn nearest_food(from: Position, foods: &FoodSet) -> Option<Position> {
    let mut best: Option<(i32, Position)> = None;
    for food in foods.iter() {
        let distance = from.manhattan_distance(food.position);
        if best.is_none_or(|(best_distance, _)| distance < best_distance) {
            best = Some((distance, food.position));
        }
    }
    best.map(|(_, position)| position)
}

/// Picks what the enemy steers towards this tick.
#[must_use]
pub fn choose_target(enemy: &Snake, player: &Snake, foods: &FoodSet) -> Position {
    if foods.len() > ENEMY_FOOD_TARGET_THRESHOLD {
        nearest_food(enemy.head(), foods).unwrap_or_else(|| enemy.head())
    } else {
        body_center(player)
    }
}

/// Proposes the enemy's heading for its next advance.
#[must_use]
pub fn next_direction(
    enemy: &Snake,
    player: &Snake,
    foods: &FoodSet,
    bounds: GridSize,
) -> Direction {
    let target = choose_target(enemy, player, foods);

    if is_safe(enemy, enemy.direction(), bounds) {
        greedy_axis_step(enemy.head(), target)
    } else {
        evade(enemy, target, bounds)
    }
}

/// Steps along the axis with the larger gap; ties and zero gaps go vertical.
///
/// The result is not checked for safety.
fn greedy_axis_step(head: Position, target: Position) -> Direction {
    if (head.x - target.x).abs() > (head.y - target.y).abs() {
        if head.x > target.x {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if head.y > target.y {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Best safe non-reversing direction by distance to `target`, or the current
/// heading when none is safe. The current heading itself stays a candidate.
fn evade(enemy: &Snake, target: Position, bounds: GridSize) -> Direction {
    let current = enemy.direction();
    let mut best: Option<(i32, Direction)> = None;

    for direction in Direction::ALL {
        if direction == current.opposite() || !is_safe(enemy, direction, bounds) {
            continue;
        }

        let score = enemy.head().step(direction).manhattan_distance(target);
        if best.is_none_or(|(best_score, _)| score < best_score) {
            best = Some((score, direction));
        }
    }

    best.map_or(current, |(_, direction)| direction)
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::food::{Food, FoodSet};
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{body_center, choose_target, is_safe, nearest_food, next_direction};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 10,
    };

    fn pos(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    fn foods_at(positions: &[(i32, i32)]) -> FoodSet {
        FoodSet::from(
            positions
                .iter()
                .map(|&(x, y)| Food::new(pos(x, y)))
                .collect::<Vec<_>>(),
        )
    }

    fn far_player() -> Snake {
        Snake::from_segments(vec![pos(8, 8), pos(7, 8), pos(6, 8)], Direction::Right, 0)
    }

    #[test]
    fn walls_and_body_are_unsafe() {
        let snake = Snake::from_segments(vec![pos(0, 5), pos(1, 5), pos(2, 5)], Direction::Left, 0);

        assert!(!is_safe(&snake, Direction::Left, BOUNDS));
        assert!(!is_safe(&snake, Direction::Right, BOUNDS));
        assert!(is_safe(&snake, Direction::Up, BOUNDS));
        assert!(is_safe(&snake, Direction::Down, BOUNDS));
    }

    #[test]
    fn tail_counts_as_occupied() {
        let snake = Snake::from_segments(
            vec![pos(5, 5), pos(5, 6), pos(6, 6), pos(6, 5)],
            Direction::Up,
            0,
        );

        assert!(!is_safe(&snake, Direction::Right, BOUNDS));
    }

    #[test]
    fn body_center_truncates() {
        let snake = Snake::from_segments(vec![pos(3, 1), pos(2, 1), pos(2, 2)], Direction::Right, 0);

        assert_eq!(body_center(&snake), pos(2, 1));
    }

    #[test]
    fn nearest_food_prefers_first_on_tie() {
        let foods = foods_at(&[(7, 5), (3, 5), (5, 7)]);

        assert_eq!(nearest_food(pos(5, 5), &foods), Some(pos(7, 5)));
        assert_eq!(nearest_food(pos(5, 5), &FoodSet::new()), None);
    }

    #[test]
    fn target_switches_on_food_threshold() {
        let enemy = Snake::from_segments(vec![pos(1, 1), pos(0, 1)], Direction::Right, 0);
        let player = far_player();

        let five = foods_at(&[(2, 1), (9, 9), (9, 8), (9, 7), (9, 6)]);
        assert_eq!(choose_target(&enemy, &player, &five), body_center(&player));

        let six = foods_at(&[(9, 9), (2, 1), (9, 8), (9, 7), (9, 6), (9, 5)]);
        assert_eq!(choose_target(&enemy, &player, &six), pos(2, 1));
    }

    #[test]
    fn safe_heading_steps_along_larger_gap() {
        let enemy = Snake::from_segments(vec![pos(1, 1), pos(0, 1)], Direction::Right, 0);
        let player = Snake::from_segments(vec![pos(2, 8), pos(2, 9)], Direction::Up, 0);

        // Center (2, 8): |dx| = 1 < |dy| = 7.
        assert_eq!(
            next_direction(&enemy, &player, &FoodSet::new(), BOUNDS),
            Direction::Down
        );
    }

    #[test]
    fn greedy_step_may_reverse_into_neck() {
        let enemy = Snake::from_segments(vec![pos(5, 5), pos(4, 5)], Direction::Right, 0);
        let player = Snake::from_segments(vec![pos(1, 5), pos(0, 5)], Direction::Left, 0);

        assert_eq!(
            next_direction(&enemy, &player, &FoodSet::new(), BOUNDS),
            Direction::Left
        );
    }

    #[test]
    fn unsafe_heading_picks_closest_safe_candidate() {
        // Heading into the right wall; food lies up the wall.
        let enemy = Snake::from_segments(vec![pos(9, 5), pos(8, 5), pos(7, 5)], Direction::Right, 0);
        let foods = foods_at(&[(9, 1), (0, 9), (0, 8), (0, 7), (0, 6), (0, 5)]);

        assert_eq!(
            next_direction(&enemy, &far_player(), &foods, BOUNDS),
            Direction::Up
        );
    }

    #[test]
    fn boxed_in_enemy_keeps_heading() {
        // Corner with the body wrapped around: every non-reversing step is unsafe.
        let enemy = Snake::from_segments(
            vec![pos(0, 0), pos(0, 1), pos(1, 1), pos(1, 0), pos(2, 0)],
            Direction::Left,
            0,
        );

        assert_eq!(
            next_direction(&enemy, &far_player(), &FoodSet::new(), BOUNDS),
            Direction::Left
        );
    }
}

use rand::Rng;
use ratatui::style::Color;

use crate::config::{FOOD_COLOR, GridSize};
use crate::snake::{Position, Snake};

/// A pellet on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    pub color: Color,
}

impl Food {
    /// Creates a regular pellet at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            position,
            color: FOOD_COLOR,
        }
    }
}

/// Pellets currently on the board, in spawn order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FoodSet {
    foods: Vec<Food>,
}

impl FoodSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tries to place one pellet on a uniformly random cell.
    ///
    /// The attempt is dropped, without retrying, when the cell is covered by
    /// either snake. Returns the spawned position, if any.
    pub fn spawn_one<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        bounds: GridSize,
        player: &Snake,
        enemy: Option<&Snake>,
    ) -> Option<Position> {
        let position = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };

        if player.occupies(position) || enemy.is_some_and(|enemy| enemy.occupies(position)) {
            log::debug!("food spawn at {position:?} dropped: cell occupied");
            return None;
        }

        self.foods.push(Food::new(position));
        Some(position)
    }

    /// Removes and returns the pellet at `index`.
    pub fn remove_at(&mut self, index: usize) -> Food {
        self.foods.remove(index)
    }

    /// Returns the index of the first pellet at `position`.
    #[must_use]
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.foods.iter().position(|food| food.position == position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Food> {
        self.foods.iter()
    }
}

impl From<Vec<Food>> for FoodSet {
    fn from(foods: Vec<Food>) -> Self {
        Self { foods }
    }
}

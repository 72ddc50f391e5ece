use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::collision::{self, Collision};
use crate::config::{
    ENEMY_RESPAWN_DELAY_MS, FOOD_SPAWN_INTERVAL_STEP_MS, GridSize,
    INITIAL_FOOD_COUNT, INITIAL_FOOD_SPAWN_INTERVAL_MS, MAX_FOOD_COUNT, MAX_FOOD_SPAWN_INTERVAL_MS,
};
use crate::enemy::next_direction;
use crate::food::FoodSet;
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake};

pub use crate::collision::DeathReason;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// The AI snake, or the cooldown until it returns.
#[derive(Debug, Clone)]
pub enum Enemy {
    Alive(Snake),
    Respawning { respawn_at: u64 },
}

impl Enemy {
    #[must_use]
    pub fn snake(&self) -> Option<&Snake> {
        match self {
            Self::Alive(snake) => Some(snake),
            Self::Respawning { .. } => None,
        }
    }

    pub fn snake_mut(&mut self) -> Option<&mut Snake> {
        match self {
            Self::Alive(snake) => Some(snake),
            Self::Respawning { .. } => None,
        }
    }

    /// Scheduled respawn time while the enemy is absent.
    #[must_use]
    pub fn respawn_at(&self) -> Option<u64> {
        match self {
            Self::Alive(_) => None,
            Self::Respawning { respawn_at } => Some(*respawn_at),
        }
    }
}

/// Complete mutable game state for one session.
///
/// Time is supplied by the caller as monotonic milliseconds so the
/// simulation stays deterministic under test.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Snake,
    pub enemy: Enemy,
    pub foods: FoodSet,
    pub food_spawn_interval_ms: u64,
    pub last_food_spawn_at: u64,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    /// Where the player's fatal collision happened.
    pub player_impact: Option<Position>,
    /// Where the enemy last died; cleared when it respawns.
    pub enemy_impact: Option<Position>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game whose food placement is fully determined by `seed`.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64, now_ms: u64) -> Self {
        let width = i32::from(bounds.width);
        let height = i32::from(bounds.height);
        let player = Snake::new(Position { x: 2, y: 2 }, now_ms);
        let enemy = Snake::new(
            Position {
                x: width - 3,
                y: height - 3,
            },
            now_ms,
        );

        let mut state = Self {
            player,
            enemy: Enemy::Alive(enemy),
            foods: FoodSet::new(),
            food_spawn_interval_ms: INITIAL_FOOD_SPAWN_INTERVAL_MS,
            last_food_spawn_at: now_ms,
            tick_count: 0,
            status: GameStatus::Playing,
            death_reason: None,
            player_impact: None,
            enemy_impact: None,
            bounds,
            rng: StdRng::seed_from_u64(seed),
        };

        for _ in 0..INITIAL_FOOD_COUNT {
            state.spawn_food();
        }
        log::info!(
            "new game on {}x{} board with {} foods",
            bounds.width,
            bounds.height,
            state.foods.len()
        );

        state
    }

    /// Advances simulation by one gameplay tick at time `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        if self.status == GameStatus::GameOver {
            return;
        }

        self.tick_count += 1;
        log::trace!("tick {} at {now_ms} ms", self.tick_count);

        self.player.advance();
        if let Enemy::Alive(enemy) = &mut self.enemy {
            let direction = next_direction(enemy, &self.player, &self.foods, self.bounds);
            enemy.set_direction(direction);
            enemy.advance();
        }

        let head = self.player.head();
        if !head.is_within_bounds(self.bounds) {
            self.end_game(DeathReason::WallCollision);
            return;
        }
        if let Some(enemy) = self.enemy.snake_mut() {
            enemy.clamp_head(self.bounds);
        }

        self.consume_food(now_ms);
        self.resolve_collisions(now_ms);
        self.apply_starvation(now_ms);
        self.pace_food_spawn(now_ms);
        self.respawn_enemy_if_due(now_ms);
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        if let GameInput::Direction(direction) = input {
            if self.status == GameStatus::Playing {
                self.player.set_pending_direction(direction);
            }
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Each head eats at most one pellet per tick; the player is checked first.
    /// Each head eats at most one pellet per tick.
    fn consume_food(&mut self, now_ms: u64) {
        if let Some(index) = self.foods.index_of(self.player.head()) {
            let _ = self.foods.remove_at(index);
            self.player.grow(now_ms);
        }

        let Some(enemy) = self.enemy.snake_mut() else {
            return;
        };
        if let Some(index) = self.foods.index_of(enemy.head()) {
            let _ = self.foods.remove_at(index);
            enemy.grow(now_ms);
        }
    }

    fn resolve_collisions(&mut self, now_ms: u64) {
        match collision::detect(&self.player, self.enemy.snake()) {
            Some(Collision::Player(reason)) => self.end_game(reason),
            Some(Collision::Enemy) => self.kill_enemy(now_ms),
            None => {}
        }
    }

    fn apply_starvation(&mut self, now_ms: u64) {
        if self.player.starve(now_ms) {
            log::debug!("player starved down to {}", self.player.len());
        }
        if let Some(enemy) = self.enemy.snake_mut() {
            if enemy.starve(now_ms) {
                log::debug!("enemy starved down to {}", enemy.len());
            }
        }
    }

    fn pace_food_spawn(&mut self, now_ms: u64) {
        if now_ms.saturating_sub(self.last_food_spawn_at) <= self.food_spawn_interval_ms
            || self.foods.len() >= MAX_FOOD_COUNT
        {
            return;
        }

        self.spawn_food();
        self.last_food_spawn_at = now_ms;
        self.food_spawn_interval_ms =
            (self.food_spawn_interval_ms + FOOD_SPAWN_INTERVAL_STEP_MS).min(MAX_FOOD_SPAWN_INTERVAL_MS);
    }

    fn spawn_food(&mut self) {
        let _ = self
            .foods
            .spawn_one(&mut self.rng, self.bounds, &self.player, self.enemy.snake());
    }

    fn respawn_enemy_if_due(&mut self, now_ms: u64) {
        let Some(respawn_at) = self.enemy.respawn_at() else {
            return;
        };
        if now_ms < respawn_at {
            return;
        }

        let snake = respawn_snake(self.player.head(), self.bounds, now_ms);
        log::info!(
            "enemy respawned at {:?} heading {:?}",
            snake.head(),
            snake.direction()
        );
        self.enemy = Enemy::Alive(snake);
        self.enemy_impact = None;
    }

    fn end_game(&mut self, reason: DeathReason) {
        let head = self.player.head();
        log::info!("game over: {reason:?} at {head:?}, length {}", self.player.len());

        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        self.player_impact = Some(head);
        self.enemy_impact = None;
    }

    fn kill_enemy(&mut self, now_ms: u64) {
        let Some(enemy) = self.enemy.snake() else {
            return;
        };
        let head = enemy.head();
        let respawn_at = now_ms + ENEMY_RESPAWN_DELAY_MS;
        log::info!("enemy died at {head:?}; respawn at {respawn_at} ms");

        self.enemy_impact = Some(head);
        self.player_impact = None;
        self.enemy = Enemy::Respawning { respawn_at };
    }
}

/// Builds a new enemy in the corner diagonally opposite the player's
/// quadrant, facing towards the board center.
#[must_use]
pub fn respawn_snake(player_head: Position, bounds: GridSize, now_ms: u64) -> Snake {
    let width = i32::from(bounds.width);
    let height = i32::from(bounds.height);
    let (center_x, center_y) = bounds.center();

    let head = Position {
        x: if player_head.x < center_x { width - 3 } else { 1 },
        y: if player_head.y < center_y { height - 3 } else { 1 },
    };

    let mut snake = Snake::new(head, now_ms);
    snake.set_direction(heading_towards(head, Position {
        x: center_x,
        y: center_y,
    }));
    snake
}

/// Axis with the larger offset first; ties go horizontal.
fn heading_towards(from: Position, to: Position) -> Direction {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    if dx.abs() >= dy.abs() {
        if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

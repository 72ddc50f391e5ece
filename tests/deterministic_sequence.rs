use snake_duel::config::{DEFAULT_GRID, ENEMY_RESPAWN_DELAY_MS, TICK_INTERVAL_MS};
use snake_duel::food::{Food, FoodSet};
use snake_duel::game::{DeathReason, Enemy, GameState, GameStatus};
use snake_duel::input::{Direction, GameInput};
use snake_duel::snake::{Position, Snake};

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = GameState::new_with_seed(DEFAULT_GRID, 42, 0);
    state.enemy = Enemy::Respawning {
        respawn_at: u64::MAX,
    };
    state.player = Snake::new(Position { x: 2, y: 1 }, 0);
    state.foods = FoodSet::from(vec![Food::new(Position { x: 3, y: 1 })]);

    state.tick(TICK_INTERVAL_MS);
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.player.len(), 4);
    assert_eq!(state.player.head(), Position { x: 3, y: 1 });
    assert!(state.foods.is_empty());

    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick(2 * TICK_INTERVAL_MS);
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.player.head(), Position { x: 3, y: 0 });

    state.tick(3 * TICK_INTERVAL_MS);
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(state.player_impact, Some(Position { x: 3, y: -1 }));

    let frozen = state.player.segments().to_vec();
    state.tick(4 * TICK_INTERVAL_MS);
    assert_eq!(state.player.segments(), frozen.as_slice());
}

#[test]
fn same_seed_replays_identically() {
    let run = |seed| {
        let mut state = GameState::new_with_seed(DEFAULT_GRID, seed, 0);
        let mut now = 0;
        for step in 0..200 {
            now += TICK_INTERVAL_MS;
            if step % 7 == 0 {
                let turn = if step % 14 == 0 {
                    Direction::Down
                } else {
                    Direction::Right
                };
                state.apply_input(GameInput::Direction(turn));
            }
            state.tick(now);
        }
        (
            state.status,
            state.tick_count,
            state.player.segments().to_vec(),
            state.enemy.snake().map(|enemy| enemy.segments().to_vec()),
            state.foods.iter().map(|food| food.position).collect::<Vec<_>>(),
        )
    };

    assert_eq!(run(9), run(9));
}

#[test]
fn enemy_respawns_after_cooldown_in_opposite_quadrant() {
    let mut state = GameState::new_with_seed(DEFAULT_GRID, 5, 0);
    state.foods = FoodSet::new();
    // Player in the bottom-right quadrant walking up the right-hand side.
    let player_at = |head_y| {
        Snake::from_segments(
            vec![
                Position { x: 25, y: head_y },
                Position {
                    x: 25,
                    y: head_y + 1,
                },
            ],
            Direction::Up,
            0,
        )
    };
    state.player = player_at(20);
    // Safe heading with the target to its left: the enemy turns back into its neck.
    state.enemy = Enemy::Alive(Snake::from_segments(
        vec![
            Position { x: 28, y: 18 },
            Position { x: 27, y: 18 },
            Position { x: 26, y: 18 },
        ],
        Direction::Up,
        0,
    ));

    state.tick(1_000);
    let respawn_at = state.enemy.respawn_at().expect("enemy should have died");
    assert_eq!(respawn_at, 1_000 + ENEMY_RESPAWN_DELAY_MS);
    assert_eq!(state.enemy_impact, Some(Position { x: 27, y: 18 }));

    let mut now = 1_000;
    while now < respawn_at {
        now += TICK_INTERVAL_MS;
        state.player = player_at(20);
        state.tick(now);
        assert_eq!(state.status, GameStatus::Playing);
    }

    let enemy = state.enemy.snake().expect("enemy should be back");
    assert_eq!(enemy.head(), Position { x: 1, y: 1 });
    assert_eq!(enemy.direction(), Direction::Right);
}

use crate::snake::Snake;

/// Why the player's run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    EnemyBody,
    HeadOn,
}

/// Outcome of snake-versus-snake resolution for one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    /// The player dies; the game is over.
    Player(DeathReason),
    /// The enemy dies and must respawn.
    Enemy,
}

/// Returns the first collision in priority order, if any.
///
/// Order: player self, enemy self, player head into enemy body, head-on,
/// enemy head into player body. Head-on only ends the player.
#[must_use]
pub fn detect(player: &Snake, enemy: Option<&Snake>) -> Option<Collision> {
    if player.head_overlaps_body() {
        return Some(Collision::Player(DeathReason::SelfCollision));
    }

    let enemy = enemy?;

    if enemy.head_overlaps_body() {
        return Some(Collision::Enemy);
    }
    if enemy.body_occupies(player.head()) {
        return Some(Collision::Player(DeathReason::EnemyBody));
    }
    if player.head() == enemy.head() {
        return Some(Collision::Player(DeathReason::HeadOn));
    }
    if player.body_occupies(enemy.head()) {
        return Some(Collision::Enemy);
    }

    None
}

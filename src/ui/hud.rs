use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::{ENEMY_COLOR, FOOD_COLOR, HUD_COLOR, PLAYER_COLOR};
use crate::game::{Enemy, GameState};

const SEPARATOR: &str = " │ ";

/// Renders the one-line status row below the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, now_ms: u64) {
    if area.height == 0 {
        return;
    }

    let line = Line::from(vec![
        Span::raw("You: "),
        Span::styled(state.player.len().to_string(), Style::default().fg(PLAYER_COLOR)),
        Span::raw(SEPARATOR),
        Span::raw("Enemy: "),
        Span::styled(enemy_status(&state.enemy, now_ms), Style::default().fg(ENEMY_COLOR)),
        Span::raw(SEPARATOR),
        Span::raw("Food: "),
        Span::styled(state.foods.len().to_string(), Style::default().fg(FOOD_COLOR)),
    ]);

    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Right)
            .style(Style::default().fg(HUD_COLOR)),
        area,
    );
}

/// Enemy length, or the whole seconds left until it respawns.
#[must_use]
pub fn enemy_status(enemy: &Enemy, now_ms: u64) -> String {
    match enemy {
        Enemy::Alive(snake) => snake.len().to_string(),
        Enemy::Respawning { respawn_at } => {
            let seconds = respawn_at.saturating_sub(now_ms).div_ceil(1_000);
            format!("back in {seconds}s")
        }
    }
}

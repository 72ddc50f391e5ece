use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::DeathReason;

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    length: usize,
    death_reason: Option<DeathReason>,
) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Final length: {length}")),
        Line::from(death_reason.map_or("", cause_text)),
        Line::from(""),
        Line::from("[any key] Play again"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn cause_text(reason: DeathReason) -> &'static str {
    match reason {
        DeathReason::WallCollision => "Cause: hit the wall",
        DeathReason::SelfCollision => "Cause: hit yourself",
        DeathReason::EnemyBody => "Cause: hit the enemy",
        DeathReason::HeadOn => "Cause: head-on collision",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

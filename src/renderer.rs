use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType};

use crate::config::{
    BACKGROUND_COLOR, BORDER_COLOR, BORDER_THICKNESS, CELL_WIDTH, ENEMY_COLOR, FLASH_COLOR,
    GAME_OVER_FLASH_MS, GLYPH_CELL, GLYPH_HEAD_DOWN, GLYPH_HEAD_LEFT, GLYPH_HEAD_RIGHT,
    GLYPH_BORDER_IMPACT, GLYPH_HEAD_UP, GLYPH_IMPACT, GridSize, HUD_HEIGHT, PLAYER_COLOR, board_width,
};
use crate::game::GameState;
use crate::input::Direction;
use crate::snake::{Position, Snake};
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, now_ms: u64) {
    let area = frame.area();
    let bounds = state.bounds();

    let board = Rect {
        x: area.x,
        y: area.y,
        width: board_width(bounds).min(area.width),
        height: (bounds.height + 2 * BORDER_THICKNESS).min(area.height),
    };
    let hud_area = Rect {
        x: area.x,
        y: board.bottom(),
        width: board.width,
        height: HUD_HEIGHT.min(area.bottom().saturating_sub(board.bottom())),
    };

    let block = Block::bordered()
        .border_type(BorderType::Thick)
        .border_style(Style::new().fg(BORDER_COLOR))
        .style(Style::new().bg(BACKGROUND_COLOR));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, state);

    if let Some(enemy) = state.enemy.snake() {
        let style = Style::new().fg(ENEMY_COLOR);
        render_snake(frame, inner, bounds, enemy, style, style);
    }
    if let Some(impact) = state.enemy_impact {
        draw_cell(frame, inner, bounds, impact, GLYPH_IMPACT, Style::new().fg(FLASH_COLOR));
    }

    let player_head_color = if state.is_game_over() && game_over_flash_on(now_ms) {
        FLASH_COLOR
    } else {
        PLAYER_COLOR
    };
    let player_head_style = Style::new().fg(player_head_color).add_modifier(Modifier::BOLD);
    render_snake(
        frame,
        inner,
        bounds,
        &state.player,
        Style::new().fg(PLAYER_COLOR),
        player_head_style,
    );
    if let Some(impact) = state.player_impact.filter(|_| state.is_game_over()) {
        render_wall_impact(
            frame,
            board,
            inner,
            bounds,
            impact,
            state.player.direction(),
            player_head_style,
        );
    }

    render_hud(frame, hud_area, state, now_ms);

    if state.is_game_over() {
        render_game_over_menu(frame, board, state.player.len(), state.death_reason);
    }
}

/// True during the bright half of the game-over head flash.
#[must_use]
pub fn game_over_flash_on(now_ms: u64) -> bool {
    (now_ms / GAME_OVER_FLASH_MS) % 2 == 0
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    for food in state.foods.iter() {
        draw_cell(
            frame,
            inner,
            state.bounds(),
            food.position,
            GLYPH_CELL,
            Style::new().fg(food.color),
        );
    }
}

/// Draws the body tail-first, then the head on top.
fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    snake: &Snake,
    body_style: Style,
    head_style: Style,
) {
    for segment in snake.segments().iter().skip(1).rev() {
        draw_cell(frame, inner, bounds, *segment, GLYPH_CELL, body_style);
    }
    draw_cell(
        frame,
        inner,
        bounds,
        snake.head(),
        head_glyph(snake.direction()),
        head_style,
    );
}

/// Head glyph with the neck-facing edge flush and the others inset.
#[must_use]
pub fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_HEAD_UP,
        Direction::Down => GLYPH_HEAD_DOWN,
        Direction::Left => GLYPH_HEAD_LEFT,
        Direction::Right => GLYPH_HEAD_RIGHT,
    }
}

fn draw_cell(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    position: Position,
    glyph: &str,
    style: Style,
) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, position) else {
        return;
    };

    frame.buffer_mut().set_string(x, y, glyph, style);
}

/// Draws a head that left the grid by one step over the border it crossed.
fn render_wall_impact(
    frame: &mut Frame<'_>,
    board: Rect,
    inner: Rect,
    bounds: GridSize,
    impact: Position,
    direction: Direction,
    style: Style,
) {
    let Some((x, y, width)) = border_cell(inner, bounds, impact) else {
        return;
    };
    if x.saturating_add(width) > board.right() || y >= board.bottom() {
        return;
    }

    let glyph = if width == CELL_WIDTH {
        head_glyph(direction)
    } else {
        GLYPH_BORDER_IMPACT
    };
    frame.buffer_mut().set_string(x, y, glyph, style);
}

/// Border cell `(x, y, width)` under a position one step outside the grid.
///
/// Top and bottom rows are a full cell wide; side columns are a single column.
fn border_cell(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16, u16)> {
    let width = i32::from(bounds.width);
    let height = i32::from(bounds.height);
    let column = |x: i32| -> Option<u16> {
        inner
            .x
            .checked_add(u16::try_from(x).ok()?.checked_mul(CELL_WIDTH)?)
    };
    let row = |y: i32| -> Option<u16> { inner.y.checked_add(u16::try_from(y).ok()?) };

    if (0..width).contains(&position.x) {
        if position.y == -1 {
            let y = inner.y.checked_sub(BORDER_THICKNESS)?;
            return Some((column(position.x)?, y, CELL_WIDTH));
        }
        if position.y == height {
            return Some((column(position.x)?, inner.bottom(), CELL_WIDTH));
        }
    } else if (0..height).contains(&position.y) {
        if position.x == -1 {
            return Some((inner.x.checked_sub(BORDER_THICKNESS)?, row(position.y)?, 1));
        }
        if position.x == width {
            return Some((inner.right(), row(position.y)?, 1));
        }
    }

    None
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

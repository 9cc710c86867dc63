use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType};

use crate::config::{GLYPH_FOOD, GLYPH_SNAKE, Theme};
use crate::game::{Game, RunState};
use crate::geometry::{Cell, Geometry};
use crate::ui::hud::{render_score_line, render_title};
use crate::ui::menu::{render_stopped_menu, render_too_small};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, game: &Game, theme: &Theme) {
    let area = frame.area();
    let grid = game.grid();

    frame.render_widget(Block::new().style(Style::new().bg(theme.terminal_bg)), area);

    let Some(canvas) = canvas_rect(area, grid) else {
        render_too_small(frame, area, grid.canvas_size());
        return;
    };

    frame.render_widget(Block::new().style(Style::new().bg(theme.board_bg)), canvas);

    let origin = (canvas.x, canvas.y);
    let board = grid.board_rect(origin);
    let border = Block::bordered()
        .border_type(BorderType::Thick)
        .border_style(Style::new().fg(theme.ink).bg(theme.board_bg));
    frame.render_widget(border, outset(board));

    render_food(frame, grid, origin, game.food.position, theme);
    render_snake(frame, grid, origin, game, theme);

    render_title(frame, canvas, theme);
    render_score_line(
        frame,
        board,
        board.bottom().saturating_add(1),
        game.score,
        game.high_score(),
        theme,
    );

    if game.run_state == RunState::Stopped {
        render_stopped_menu(frame, board, game.death_reason, game.high_score(), theme);
    }
}

/// Centers the canvas in `area`, or `None` when it does not fit.
#[must_use]
pub fn canvas_rect(area: Rect, grid: Geometry) -> Option<Rect> {
    let (width, height) = grid.canvas_size();
    if width > area.width || height > area.height {
        return None;
    }

    Some(Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    ))
}

fn render_food(
    frame: &mut Frame<'_>,
    grid: Geometry,
    origin: (u16, u16),
    food: Cell,
    theme: &Theme,
) {
    let style = Style::new().fg(theme.food).bg(theme.board_bg);
    paint_cell(frame, grid, origin, food, GLYPH_FOOD, style);
}

fn render_snake(
    frame: &mut Frame<'_>,
    grid: Geometry,
    origin: (u16, u16),
    game: &Game,
    theme: &Theme,
) {
    let style = Style::new().fg(theme.ink).bg(theme.board_bg);
    for segment in game.snake.segments() {
        paint_cell(frame, grid, origin, *segment, GLYPH_SNAKE, style);
    }
}

fn paint_cell(
    frame: &mut Frame<'_>,
    grid: Geometry,
    origin: (u16, u16),
    cell: Cell,
    glyph: &str,
    style: Style,
) {
    let Some(rect) = grid.cell_rect(origin, cell) else {
        return;
    };

    let buffer = frame.buffer_mut();
    for y in rect.top()..rect.bottom() {
        buffer.set_string(rect.x, y, glyph, style);
    }
}

/// Grows `rect` by one unit on every side, for the border around the board.
fn outset(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_sub(1),
        rect.y.saturating_sub(1),
        rect.width.saturating_add(2),
        rect.height.saturating_add(2),
    )
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::config::{TITLE, Theme};

/// Draws the title centered on the top row of the canvas.
pub fn render_title(frame: &mut Frame<'_>, canvas: Rect, theme: &Theme) {
    let x = centered_x(canvas, TITLE);
    let style = Style::new()
        .fg(theme.ink)
        .bg(theme.board_bg)
        .add_modifier(Modifier::BOLD);

    frame.buffer_mut().set_string(x, canvas.y, TITLE, style);
}

/// Draws the score under the board, and the session best when it is kept.
///
/// `row` is the terminal row below the bottom border.
pub fn render_score_line(
    frame: &mut Frame<'_>,
    board: Rect,
    row: u16,
    score: u32,
    high_score: Option<u32>,
    theme: &Theme,
) {
    let style = Style::new().fg(theme.ink).bg(theme.board_bg);
    let left = board.x.saturating_sub(1);
    let buffer = frame.buffer_mut();

    buffer.set_string(left, row, score_text(score), style);

    if let Some(best) = high_score {
        let best = best_text(best);
        let right_edge = board.right().saturating_add(1);
        let x = right_edge.saturating_sub(text_width(&best));
        buffer.set_string(x, row, best, style);
    }
}

fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

fn best_text(best: u32) -> String {
    format!("Best: {best}")
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

fn centered_x(area: Rect, text: &str) -> u16 {
    let slack = area.width.saturating_sub(text_width(text));
    area.x.saturating_add(slack / 2)
}

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::DeathReason;

/// Draws the stopped screen as a centered popup over the board.
pub fn render_stopped_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    death_reason: Option<DeathReason>,
    high_score: Option<u32>,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let style = Style::new().fg(theme.ink).bg(theme.board_bg);
    let mut lines = vec![
        Line::from("GAME OVER").style(style.add_modifier(Modifier::BOLD)),
        Line::from(""),
    ];

    if let Some(reason) = death_reason {
        lines.push(Line::from(format!("You {}", reason.describe())));
    }
    if let Some(best) = high_score {
        lines.push(Line::from(format!("Best: {best}")));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("Press any key to play again"));
    lines.push(Line::from("[Q]/[Esc] Quit"));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_style(style)),
        popup,
    );
}

/// Shown instead of the board when the terminal cannot fit the canvas.
pub fn render_too_small(frame: &mut Frame<'_>, area: Rect, needed: (u16, u16)) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!("need {}x{}", needed.0, needed.1)),
    ];

    let [_, middle, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
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

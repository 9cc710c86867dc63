use std::io::{self, Write};
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::Theme;
use crate::game::Game;
use crate::renderer;

type GameTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw-mode alternate screen the game is drawn on.
///
/// Dropping the session hands the terminal back to the shell.
pub struct TerminalSession {
    terminal: GameTerminal,
}

impl TerminalSession {
    /// Switches stdout to raw mode on the alternate screen with the cursor hidden.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = enter_screen(&mut stdout) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
            restore_terminal();
        })?;
        debug!("terminal session started");

        Ok(Self { terminal })
    }

    /// Draws one frame of `game`.
    pub fn draw(&mut self, game: &Game, theme: &Theme) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, game, theme))
            .map(|_| ())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
        debug!("terminal session ended");
    }
}

/// Restores the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}

fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, Hide)
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Show, LeaveAlternateScreen)
}

// Both steps always run; a failed raw-mode reset must not keep the
// alternate screen up.
fn restore_terminal() {
    let raw = disable_raw_mode();
    let screen = leave_screen(&mut io::stdout());

    if let Err(error) = raw.and(screen) {
        warn!("terminal not fully restored: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::{enter_screen, leave_screen};

    #[test]
    fn entering_switches_screen_then_hides_cursor() {
        let mut out = Vec::new();

        enter_screen(&mut out).expect("write to buffer");

        assert_eq!(out, b"\x1b[?1049h\x1b[?25l");
    }

    #[test]
    fn leaving_undoes_entering_in_reverse_order() {
        let mut out = Vec::new();

        enter_screen(&mut out).expect("write to buffer");
        leave_screen(&mut out).expect("write to buffer");

        assert_eq!(out, b"\x1b[?1049h\x1b[?25l\x1b[?25h\x1b[?1049l");
    }
}

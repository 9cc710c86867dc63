use std::io;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::{Settings, THEME_RETRO, Theme};
use crate::error::AppError;
use crate::game::Game;
use crate::input::{GameInput, InputHandler};
use crate::terminal_runtime::TerminalSession;

/// Fixed-cadence trigger for game ticks, independent of the frame rate.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    #[must_use]
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last: start,
        }
    }

    /// Returns true once per elapsed interval.
    ///
    /// Deadlines advance by whole intervals so frame rounding does not
    /// stretch the cadence. After a stall longer than one interval the
    /// schedule restarts at `now` instead of firing a catch-up burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) < self.interval {
            return false;
        }

        self.last += self.interval;
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
        }
        true
    }
}

/// Owns every runtime resource: terminal, input, game state and timing.
pub struct App {
    session: TerminalSession,
    input: InputHandler,
    game: Game,
    theme: &'static Theme,
    tick_interval: Duration,
    frame_interval: Duration,
}

impl App {
    /// Builds the game from `settings` and takes over the terminal.
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let game = Game::from_settings(settings)?;
        let session = TerminalSession::enter()?;

        Ok(Self {
            session,
            input: InputHandler::new(),
            game,
            theme: &THEME_RETRO,
            tick_interval: settings.tick_interval(),
            frame_interval: settings.frame_interval(),
        })
    }

    /// Runs the draw / input / tick loop until a quit key is pressed.
    pub fn run(&mut self) -> io::Result<()> {
        info!(
            "starting loop: tick {:?}, frame {:?}, theme {}",
            self.tick_interval, self.frame_interval, self.theme.name
        );
        let mut ticker = Ticker::new(self.tick_interval, Instant::now());

        loop {
            let frame_start = Instant::now();

            self.session.draw(&self.game, self.theme)?;

            if !self.pump_input(frame_start)? {
                info!("quit after {} ticks", self.game.tick_count);
                return Ok(());
            }

            if ticker.poll(Instant::now()) {
                self.game.update();
            }
        }
    }

    /// Dispatches input until this frame's budget is spent.
    ///
    /// Returns `false` when the player asked to quit.
    fn pump_input(&mut self, frame_start: Instant) -> io::Result<bool> {
        loop {
            let remaining = self.frame_interval.saturating_sub(frame_start.elapsed());
            if remaining.is_zero() {
                return Ok(true);
            }

            match self.input.poll_input(remaining)? {
                Some(GameInput::Quit) => return Ok(false),
                Some(input) => {
                    debug!("input {input:?}");
                    self.game.apply_input(input);
                }
                None => {}
            }
        }
    }
}

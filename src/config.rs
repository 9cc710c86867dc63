use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use ratatui::style::Color;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::geometry::Geometry;

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "retro-snake";

const SETTINGS_FILE_NAME: &str = "settings.json";

/// Cells per board side.
pub const DEFAULT_GRID_SIZE: u16 = 25;

/// Smallest board that still contains the fixed starting body.
pub const MIN_GRID_SIZE: u16 = 10;

pub const MAX_GRID_SIZE: u16 = 200;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Render and input polling rate.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Terminal columns per logical cell. Two columns keep cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Terminal rows per logical cell.
pub const CELL_HEIGHT: u16 = 1;

/// Space between the canvas edge and the board, in terminal units.
pub const BOARD_OFFSET: u16 = 2;

pub const GLYPH_SNAKE: &str = "██";
pub const GLYPH_FOOD: &str = "◖◗";

pub const TITLE: &str = "Retro Snake";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Board background.
    pub board_bg: Color,
    /// Snake, border and text color.
    pub ink: Color,
    pub food: Color,
    /// Background outside the canvas.
    pub terminal_bg: Color,
}

/// Light green board with dark green ink.
pub const THEME_RETRO: Theme = Theme {
    name: "Retro",
    board_bg: Color::Rgb(173, 204, 96),
    ink: Color::Rgb(43, 51, 24),
    food: Color::Rgb(196, 64, 48),
    terminal_bg: Color::Reset,
};

/// Runtime settings, merged from the settings file and the command line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub grid_size: u16,
    pub tick_interval_ms: u64,
    pub frame_rate: u32,
    /// Keep the best score of this session visible across game overs.
    pub preserve_high_score: bool,
    /// Fixed RNG seed for reproducible food placement.
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            frame_rate: DEFAULT_FRAME_RATE,
            preserve_high_score: false,
            seed: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or from the default location when `None`.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => match default_settings_path() {
                Some(path) => Self::load_optional(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like `load_from_path`, but a missing file yields defaults.
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        let raw = read_optional(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match raw {
            Some(raw) => Self::from_json(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            None => Ok(Self::default()),
        }
    }

    fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Rejects values the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            });
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }

        Ok(())
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        Geometry {
            cells_per_side: self.grid_size,
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            offset: BOARD_OFFSET,
        }
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}

/// Returns the platform-correct settings file path, if the platform has one.
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    Some(base)
}

fn read_optional(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

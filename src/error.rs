use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems with user-provided settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size {size} is outside the supported range {min}..={max}")]
    GridSize { size: u16, min: u16, max: u16 },

    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,

    #[error("frame rate must be at least 1 fps")]
    ZeroFrameRate,

    #[error("failed to read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level failure surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

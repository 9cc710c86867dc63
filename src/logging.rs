use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::config::APP_DIR_NAME;
use crate::error::AppError;

const LOG_FILE_NAME: &str = "retro-snake.log";

/// Returns the platform-correct log file path.
///
/// The game owns the terminal while it runs, so log output goes to a file.
#[must_use]
pub fn log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Installs the global file logger. Returns the log path, or `None` when
/// logging is switched off.
pub fn init(level: LevelFilter) -> Result<Option<PathBuf>, AppError> {
    if level == LevelFilter::Off {
        return Ok(None);
    }

    let path = log_path();
    let file = create_log_file(&path)?;
    WriteLogger::init(level, Config::default(), file)?;

    Ok(Some(path))
}

fn create_log_file(path: &Path) -> Result<File, AppError> {
    let to_error = |source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_error)?;
    }

    File::create(path).map_err(to_error)
}

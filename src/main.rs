use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, info};
use retro_snake::app::App;
use retro_snake::config::Settings;
use retro_snake::error::AppError;
use retro_snake::logging;
use retro_snake::terminal_runtime::install_panic_hook;

#[derive(Debug, Parser)]
#[command(name = "retro-snake", version, about = "Retro Snake in the terminal")]
struct Cli {
    /// Settings file (JSON). Defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells per board side.
    #[arg(long = "grid-size")]
    grid_size: Option<u16>,

    /// Milliseconds between snake moves.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Frames drawn per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Keep the best score of this session on screen after game over.
    #[arg(long = "preserve-high-score")]
    preserve_high_score: bool,

    /// Seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// off, error, warn, info, debug or trace.
    #[arg(long = "log-level")]
    log_level: Option<LevelFilter>,
}

impl Cli {
    /// Command-line values win over the settings file.
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(grid_size) = self.grid_size {
            settings.grid_size = grid_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            settings.tick_interval_ms = tick_ms;
        }
        if let Some(fps) = self.fps {
            settings.frame_rate = fps;
        }
        if self.preserve_high_score {
            settings.preserve_high_score = true;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if let Some(level) = self.log_level {
            settings.log_level = level;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("retro-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    cli.apply_to(&mut settings);
    settings.validate()?;

    if let Some(path) = logging::init(settings.log_level)? {
        info!("logging to {}", path.display());
    }
    info!("settings: {settings:?}");

    install_panic_hook();

    let mut app = App::new(&settings)?;
    app.run()?;

    Ok(())
}

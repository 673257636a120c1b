//! Tracing setup. The terminal belongs to the canvas, so logs only go to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::shared::config::Config;
use crate::shared::error::AppError;

/// Install a file-backed subscriber when `--log-file` is given.
///
/// `RUST_LOG` overrides the level chosen by `--verbose`. Without a log file
/// no subscriber is installed and tracing macros are no-ops.
pub fn init(config: &Config) -> Result<(), AppError> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.clone(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("paper_timer={}", config.log_level())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(AppError::LoggingInit)
}

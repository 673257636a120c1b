use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("TUI error: {0}")]
    Tui(#[source] std::io::Error),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to initialise logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync>),
}

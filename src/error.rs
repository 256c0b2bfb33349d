use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the terminal front-end. The game core itself cannot fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("cannot open trace file {}: {source}", path.display())]
    TraceFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write snapshot trace: {0}")]
    Trace(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

use crate::error::{AppError, Result};

const APP_DIR_NAME: &str = "grid-snake";
const LOG_FILE_NAME: &str = "grid-snake.log";

/// Returns the platform-correct default log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Installs the global logger, appending to `path`.
///
/// The terminal is in raw mode while the game runs, so log output never
/// goes to stdout or stderr. The filter is read from `RUST_LOG` and
/// defaults to `info`.
pub fn init(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    log::info!("logging to {}", path.display());
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    let to_error = |source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_error)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)
}

//! File-based logging.
//!
//! The terminal belongs to the UI, so log records only ever go to rotating
//! files under `~/.local/state/kudoboard/logs`. Failing to set up logging is
//! never fatal; the caller just runs without it.

use std::io;
use std::path::{Path, PathBuf};

use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, WriteMode,
};
use thiserror::Error;

const LOG_FILE_BASENAME: &str = "kudoboard";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to start logger: {0}")]
    Start(#[from] FlexiLoggerError),
}

/// Default log directory, `None` when there is no home directory.
pub fn default_log_dir() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(
        home.join(".local")
            .join("state")
            .join("kudoboard")
            .join("logs"),
    )
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Start the global logger writing into `log_dir`.
///
/// Keep the returned handle alive for as long as records should be flushed.
pub fn init_logging(log_dir: &Path) -> Result<LoggerHandle, LoggingError> {
    std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let handle = Logger::try_with_str(default_log_level())?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    log::info!(
        "event=app_start version={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    Ok(handle)
}

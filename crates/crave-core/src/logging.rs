//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Log level filter is read from this variable
pub const LOG_ENV: &str = "CRAVE_LOG";

const DEFAULT_FILTER: &str = "crave=info,crave_core=info,warn";

/// Initialize the logging subsystem
///
/// Logs go to `<data_local_dir>/crave/logs/` because the TUI owns the
/// terminal. Level is controlled by the `CRAVE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CRAVE_LOG=debug crave
/// CRAVE_LOG=crave_core=trace crave search pie
/// ```
pub fn init() -> Result<PathBuf> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "crave.log");

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init();

    tracing::info!("Crave {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(log_dir)
}

/// Get the log directory path
pub fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().ok_or(Error::NoDirectory { what: "data" })?;
    Ok(base.join("crave").join("logs"))
}

use crate::config::AppConfig;
use crate::error::NoteSyncError;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    filter::LevelFilter,
    EnvFilter, Layer,
};

const LOG_FILE_NAME: &str = "notesync.log";

/// Initialize logging from application configuration
///
/// Console output is always enabled. When `log_to_file` is set, an
/// append-only `notesync.log` in `config.log_dir` receives the same events.
/// `RUST_LOG` takes precedence over `config.log_level`.
pub fn setup_logging(config: &AppConfig, log_to_file: bool) -> Result<(), NoteSyncError> {
    if !log_to_file {
        return setup_console_logging(&config.log_level);
    }

    let log_file_path = log_file_path(&config.log_dir);
    let log_file = open_log_file(&log_file_path)?;

    let env_filter = build_filter(&config.log_level);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(env_filter.clone());

    let file_layer = fmt::layer()
        .with_writer(log_file)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| NoteSyncError::config(format!("Failed to install logger: {}", e)))?;

    tracing::info!(
        "Logging initialized: level={}, log_file={}",
        config.log_level,
        log_file_path.display()
    );

    Ok(())
}

/// Console-only logging, used when no log file is wanted
pub fn setup_console_logging(log_level: &str) -> Result<(), NoteSyncError> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_line_number(true)
        .with_env_filter(build_filter(log_level))
        .try_init()
        .map_err(|e| NoteSyncError::config(format!("Failed to install logger: {}", e)))?;

    tracing::info!("Console logging initialized: level={}", log_level);

    Ok(())
}

/// Location of the log file inside `log_dir`
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(log_level))
}

/// Filter enabling `log_level` and above for every target
///
/// The name is normalized first, so aliases like "warning" never end up
/// parsed as a target directive. Unknown names fall back to INFO.
fn level_filter(log_level: &str) -> EnvFilter {
    let level = parse_log_level(log_level).unwrap_or(Level::INFO);
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .parse_lossy("")
}

fn open_log_file(path: &Path) -> Result<std::fs::File, NoteSyncError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| {
            NoteSyncError::config(format!(
                "Failed to create log directory {}: {}",
                dir.display(),
                e
            ))
        })?;
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            NoteSyncError::config(format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            ))
        })
}

/// Parse string to tracing Level, `None` when unrecognized
pub fn parse_log_level(level: &str) -> Option<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Keeps the structured log writer flushing until dropped.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    pub log_path: PathBuf,
}

/// `-v` raises the configured level to debug, `-vv` to trace.
pub fn effective_level(logging: &LoggingConfig, verbosity: u8) -> Level {
    match verbosity {
        0 => logging.level().unwrap_or(Level::WARN),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init_logging(logging: &LoggingConfig, verbosity: u8) -> Result<Option<LoggingGuard>> {
    let level = effective_level(logging, verbosity);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if !logging.enable_structured {
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer);
        // Ignore error if a global subscriber is already set (e.g., when running in tests)
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(None);
    }

    let log_path = logging.log_path();
    if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory at {}", parent.display()))?;
    }
    let file = File::create(&log_path)
        .with_context(|| format!("creating log file at {}", log_path.display()))?;

    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(file);

    let json_layer = fmt::layer()
        .json()
        .with_current_span(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(json_layer);
    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(Some(LoggingGuard {
        _guard: guard,
        log_path,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_configured_level() {
        let logging = LoggingConfig::default();
        assert_eq!(effective_level(&logging, 0), Level::WARN);
        assert_eq!(effective_level(&logging, 1), Level::DEBUG);
        assert_eq!(effective_level(&logging, 4), Level::TRACE);
    }

    #[test]
    fn structured_logging_creates_log_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let logging = LoggingConfig {
            enable_structured: true,
            tracing_level: "info".to_string(),
            log_file: dir.path().join("logs/run.jsonl").display().to_string(),
        };
        let guard = init_logging(&logging, 0)
            .expect("logging initialises")
            .expect("guard returned");
        assert!(guard.log_path.exists());
    }
}

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Keeps the background log writer alive. Drop it only at process exit.
pub struct LoggingGuard {
    _guard: Option<WorkerGuard>,
    pub log_path: Option<PathBuf>,
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the configured level.
///
/// Structured logging writes JSON lines to the configured file. Otherwise compact
/// lines go to stderr, leaving stdout to the game dialogue.
pub fn init_logging(logging: &LoggingConfig) -> Result<LoggingGuard> {
    let level = logging.level().unwrap_or(Level::WARN);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let path = match (logging.enable_structured, logging.path()) {
        (true, Some(path)) => path,
        _ => {
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(filter)
                .compact()
                .with_writer(std::io::stderr)
                .finish();
            // Ignore error if a global subscriber is already set (e.g., when running in tests)
            let _ = tracing::subscriber::set_global_default(subscriber);
            return Ok(LoggingGuard {
                _guard: None,
                log_path: None,
            });
        }
    };

    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory at {}", dir.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("creating log file at {}", path.display()))?;

    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(file);

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .json()
        .with_current_span(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(LoggingGuard {
        _guard: Some(guard),
        log_path: Some(path),
    })
}

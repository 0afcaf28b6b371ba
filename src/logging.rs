// Logging module - tracing subscriber setup
//
// stdout always gets a human-readable fmt layer. When file logging is
// enabled, a JSON layer writes to rolling files through a non-blocking
// writer whose guard must outlive the program's logging.
//
// Precedence: RUST_LOG env var > resolved [logging] level > "info"

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFile, LoggingConfig};

/// Filter used when RUST_LOG is unset
pub fn default_filter(level: &str) -> String {
    format!("tailpage={},axum=debug", level)
}

fn file_appender(file: &LogFile) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(file.rotation.into())
        .filename_prefix(file.prefix.as_str())
        .build(&file.dir)
}

/// Install the global subscriber.
///
/// Returns the file writer's guard when file logging is active; dropping it
/// flushes and stops the background writer.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(&config.level_name()).into());

    if !config.file_enabled {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
        return None;
    }

    let appender = std::fs::create_dir_all(&config.file.dir)
        .map_err(|e| e.to_string())
        .and_then(|()| file_appender(&config.file).map_err(|e| e.to_string()));
    let appender = match appender {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!(
                "Warning: Could not open log files in {:?}: {}",
                config.file.dir, e
            );
            // Fall back to stdout only
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
            return None;
        }
    };

    // File layer uses JSON format for structured log parsing
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}

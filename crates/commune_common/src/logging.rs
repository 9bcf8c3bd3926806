//! Logging utilities for the Commune client.
//!
//! Every crate logs through `tracing`; this module installs the subscriber
//! once at startup.

use commune_config::LoggingConfig;
use tracing::{error, info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging from the `[logging]` config section.
///
/// `RUST_LOG` is honored; the `commune` targets are raised to at least
/// `level`. A second call is ignored. When `directory` is set, a daily
/// rolling `commune.log` is written there as well. The returned guard must be
/// held until exit so buffered lines are flushed.
pub fn init_from_config(config: &LoggingConfig) -> Option<WorkerGuard> {
    let level = parse_level(&config.level);

    let (file_layer, guard) = match config.directory.as_deref() {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "commune.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_target(true).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let result = tracing_subscriber::registry()
        .with(stderr_layer())
        .with(file_layer)
        .with(filter_for(level))
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
    guard
}

/// Parses a level name, falling back to INFO for anything unrecognized.
pub fn parse_level(name: &str) -> Level {
    name.trim().parse::<Level>().unwrap_or(Level::INFO)
}

fn stderr_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
}

fn filter_for(level: Level) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match format!("commune={}", level).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}

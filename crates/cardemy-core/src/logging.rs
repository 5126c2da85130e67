//! Tracing bootstrap shared by the CLI and the TUI.
//!
//! Filter directives come from `CARDEMY_LOG`, then `RUST_LOG`, then the
//! `[logging] level` config value. The interactive chat owns the terminal, so
//! it disables the stderr layer and relies on the optional rolling file under
//! `${CARDEMY_HOME}/logs` instead.

use std::io;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LoggingConfig, paths};

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    let directive = std::env::var("CARDEMY_LOG")
        .ok()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.level.clone());
    EnvFilter::new(directive)
}

/// Initializes the global tracing subscriber.
///
/// With `stderr` set, events are formatted compactly to stderr; the
/// interactive chat passes `false` so nothing is written into the alternate
/// screen. File output is enabled by `[logging] file = true` and rotates
/// daily. The returned guard must stay alive for the file writer to flush.
///
/// # Errors
/// Returns an error if the log directory cannot be created or a subscriber is
/// already installed.
pub fn init(config: &LoggingConfig, stderr: bool) -> Result<Option<WorkerGuard>> {
    let registry = Registry::default().with(build_env_filter(config));

    let (file_layer, guard) = if config.file {
        let log_dir = paths::log_dir();
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
        let appender = tracing_appender::rolling::daily(log_dir, "cardemy.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_ansi(false).with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let stderr_layer =
        stderr.then(|| fmt::layer().compact().with_writer(io::stderr as fn() -> io::Stderr));

    registry
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_falls_back_to_config_level() {
        // Only meaningful when neither env var is set in the test runner.
        if std::env::var("CARDEMY_LOG").is_err() && std::env::var("RUST_LOG").is_err() {
            let config = LoggingConfig { level: "debug".to_string(), file: false };
            let filter = build_env_filter(&config);
            assert_eq!(filter.to_string(), "debug");
        }
    }
}

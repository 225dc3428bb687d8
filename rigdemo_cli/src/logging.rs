//! Tracing setup: console layer on stderr, optional JSON-lines file layer.

use std::path::Path;

use eyre::{WrapErr, eyre};
use rigdemo_core::DemoError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Level used when neither --log-level, RUST_LOG nor [logging].level is set.
/// Kept at warn so a normal run leaves stderr empty.
pub const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber. stdout is never written to.
///
/// The returned guard flushes the log file on drop; keep it alive for the whole run.
pub fn init_tracing(
    level: &str,
    json: bool,
    cfg: &rigdemo_config::Logging,
) -> eyre::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .wrap_err_with(|| format!("invalid log level '{level}'"))?;

    let console = if json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(false)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed()
    };

    let mut guard = None;
    let file = match cfg.file.as_deref() {
        Some(path) => {
            let path = Path::new(path);
            let dir = path
                .parent()
                .filter(|d| !d.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| eyre!("logging.file '{}' has no file name", path.display()))?;
            let rotation = match cfg.rotation.as_deref() {
                Some("daily") => Rotation::DAILY,
                Some("hourly") => Rotation::HOURLY,
                _ => Rotation::NEVER,
            };
            let appender = RollingFileAppender::builder()
                .rotation(rotation)
                .filename_prefix(name.to_string_lossy())
                .build(dir)
                .map_err(|e| {
                    DemoError::Config(format!(
                        "logging.file '{}' cannot be opened: {e}",
                        path.display()
                    ))
                })?;
            let (writer, g) = tracing_appender::non_blocking(appender);
            guard = Some(g);
            Some(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(writer)
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .wrap_err("failed to install tracing subscriber")?;
    Ok(guard)
}

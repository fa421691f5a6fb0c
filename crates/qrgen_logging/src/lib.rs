//! Shared logging setup for qrgen binaries.
//!
//! Stdout belongs to the rendered symbol, so console logging always goes to
//! stderr. A daily rolling file under `<home>/logs` receives the full stream.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "qrgen=info,qrgen_security=info";
const VERBOSE_LOG_FILTER: &str = "qrgen=debug,qrgen_security=debug";
const QUIET_CONSOLE_FILTER: &str = "warn";

/// Logging configuration shared by qrgen binaries.
pub struct LogConfig<'a> {
    pub app_name: &'a str,
    pub verbose: bool,
    /// Also write to a rolling file in the logs directory
    pub file_logging: bool,
}

/// Keeps the non-blocking file writer alive. Drop it last in `main`.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Initialize tracing with stderr output and, when enabled, a rolling file.
///
/// A logs directory that cannot be created downgrades to console-only logging
/// with a warning; it never aborts the run.
pub fn init_logging(config: LogConfig<'_>) -> Result<LogGuard> {
    let mut file_guard = None;
    let file_layer = if config.file_logging {
        match qrgen_protocol::paths::ensure_logs_dir() {
            Ok(log_dir) => {
                let file_name = format!("{}.log", sanitize_name(config.app_name));
                let appender = tracing_appender::rolling::daily(log_dir, file_name);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                file_guard = Some(guard);
                Some(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_filter(file_filter()),
                )
            }
            Err(err) => {
                eprintln!("Warning: failed to create logs directory: {}", err);
                None
            }
        }
    } else {
        None
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter(config.verbose));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(LogGuard { _file: file_guard })
}

fn file_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn console_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(VERBOSE_LOG_FILTER))
    } else {
        EnvFilter::new(QUIET_CONSOLE_FILTER)
    }
}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' { ch } else { '_' })
        .collect()
}

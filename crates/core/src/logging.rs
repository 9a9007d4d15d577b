//! Tracing setup shared by the CLI commands and the MCP server.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Overrides the log directory.
pub const LOG_DIR_ENV: &str = "HEROSCOPE_LOG_DIR";
/// Filter directives; `RUST_LOG` is honored when this is unset.
pub const LOG_FILTER_ENV: &str = "HEROSCOPE_LOG";

const DEFAULT_DIRECTIVES: &str =
    "warn,heroscope_core=info,heroscope_mcp=info,heroscope_runtime=info,heroscope_cli=info";

/// Directory holding rolling log files: `$HEROSCOPE_LOG_DIR`, else
/// `~/.heroscope/logs`.
pub fn log_dir() -> PathBuf {
    log_dir_from(env::var_os(LOG_DIR_ENV), dirs::home_dir())
}

fn log_dir_from(configured: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    match configured.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => home
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".heroscope")
            .join("logs"),
    }
}

/// File name prefix for one component, e.g. `heroscope-search`.
pub fn log_file_prefix(component: &str) -> String {
    format!("heroscope-{component}")
}

fn build_filter(directives: Option<String>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

fn filter_from_env() -> EnvFilter {
    let directives = env::var(LOG_FILTER_ENV)
        .or_else(|_| env::var(EnvFilter::DEFAULT_ENV))
        .ok();
    build_filter(directives)
}

/// Installs the global subscriber.
///
/// Always writes to a daily rolled file named after `component`. Stdout is
/// never used, since the MCP transport owns it.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let log_dir = log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    // heroscope-mcp.2026-01-21, heroscope-search.2026-01-21, ...
    let file_appender = tracing_appender::rolling::daily(&log_dir, log_file_prefix(component));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry()
        .with(filter_from_env())
        .with(file_layer);

    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    guard
}

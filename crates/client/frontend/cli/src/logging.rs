//! File logging for the terminal UI.
//!
//! The TUI owns stdout, so logs never go to the terminal: every session
//! writes to its own `client.log` under the platform cache directory.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber writing to the session log file.
///
/// The returned guard flushes the non-blocking writer on drop; keep it alive
/// for the whole program.
pub fn setup_logging(session_id: &Option<String>) -> Result<WorkerGuard> {
    let session_id = session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // ANSI kept on for colorized `tail -f`
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/canvas-hud/logs`
/// - Linux: `~/.cache/canvas-hud/logs` (or `$XDG_CACHE_HOME/canvas-hud/logs`)
/// - Windows: `%LOCALAPPDATA%\canvas-hud\cache\logs`
/// - Fallback: `/tmp/canvas-hud/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "canvas-hud")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/canvas-hud"))
        .join("logs")
}

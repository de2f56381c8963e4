use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Where the rolling log files go.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "tempo-diagnostic")
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir)
}

/// Initialize logging to file (never stdout, that belongs to the terminal
/// window the user is watching). Keep the guard alive until exit.
pub fn init(file_name: &str, default_filter: &str) -> Result<WorkerGuard> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    Ok(guard)
}

use anyhow::{Context, Result};
use roster::domain::config::{LogConfig, LogRotation};
use roster_logger::{Logger, Rotation};

/// Installs the process logger described by the `log` config section.
///
/// `RUST_LOG`, when set, takes precedence over `log.level`.
///
/// # Errors
/// Returns an error if the filter is malformed, the log directory is unusable, or a
/// subscriber is already installed.
pub fn init_logger(name: &str, cfg: &LogConfig) -> Result<Logger> {
    let mut builder = Logger::builder()
        .name(name)
        .json(cfg.json)
        .rotation(rotation(cfg.rotation))
        .max_files(cfg.max_files);

    if std::env::var_os("RUST_LOG").is_none() {
        builder = builder.env_filter(&cfg.level);
    }
    if let Some(path) = &cfg.path {
        builder = builder.path(path);
    }

    builder.init().context("Failed to initialize logging")
}

const fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Minutely => Rotation::MINUTELY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}

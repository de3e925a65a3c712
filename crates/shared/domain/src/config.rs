use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level service configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub users: UsersConfig,
    pub docs: DocsConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Upper bound for draining in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
}

/// Users feature slice settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UsersConfig {
    /// Start with the demo records (Miguel, Ana, Carlos).
    pub seed: bool,
}

/// Interactive documentation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub enabled: bool,
    /// Mount point of the UI; the JSON document lives at `{path}/openapi.json`.
    pub path: String,
}

/// Logging settings consumed by the server binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directives, e.g. `info` or `roster_users=debug,info`.
    pub level: String,
    /// Directory for rolling log files; console only when absent.
    pub path: Option<PathBuf>,
    pub json: bool,
    /// How often the log file rolls over.
    pub rotation: LogRotation,
    /// Rolled files kept on disk; older ones are removed.
    pub max_files: usize,
}

/// Rollover period of the file output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

impl DocsConfig {
    #[must_use]
    pub fn openapi_path(&self) -> String {
        format!("{}/openapi.json", self.path.trim_end_matches('/'))
    }
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 3000, shutdown_timeout_secs: 30 }
    }
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self { enabled: true, path: "/api-docs".to_owned() }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            path: None,
            json: false,
            rotation: LogRotation::Daily,
            max_files: 10,
        }
    }
}

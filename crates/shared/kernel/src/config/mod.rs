use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default base file name, resolved against every format `config` understands
/// (`roster.toml`, `roster.yaml`, `roster.json`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "roster";
/// Prefix of environment overrides, e.g. `ROSTER__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "ROSTER";
const ENV_SEPARATOR: &str = "__";

#[roster_derive::roster_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration by layering environment overrides over an optional file.
///
/// 1. **Base file**: `path`, or [`DEFAULT_CONFIG_FILE`] in the working directory. A missing
///    file is not an error; every section of the service config has defaults.
/// 2. **Environment**: variables prefixed with `ROSTER__`; nested keys use `__`
///    (`ROSTER__USERS__SEED=false` maps to `users.seed`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file exists but is malformed, or if the merged
/// values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use roster_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_with_env(path, env_overrides())
}

fn env_overrides() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR).try_parsing(true)
}

fn load_with_env<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    debug!(path = %effective_path.display(), "Loading configuration");

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_domain::config::ApiConfig;
    use std::fs;

    fn env(pairs: &[(&str, &str)]) -> Environment {
        let vars = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        env_overrides().source(Some(vars))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg: ApiConfig =
            load_with_env(Some(dir.path().join("absent")), env(&[])).expect("defaults");

        assert_eq!(cfg.server.port, 3000);
        assert!(cfg.users.seed);
        assert_eq!(cfg.docs.path, "/api-docs");
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("roster.toml");
        fs::write(&file, "[server]\nport = 8081\n\n[users]\nseed = false\n").expect("write");

        let cfg: ApiConfig = load_with_env(Some(&file), env(&[])).expect("config");
        assert_eq!(cfg.server.port, 8081);
        assert!(!cfg.users.seed);
        assert_eq!(cfg.log.level, "info");
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("roster.toml");
        fs::write(&file, "[server]\nport = 8081\n").expect("write");

        let cfg: ApiConfig = load_with_env(
            Some(&file),
            env(&[("ROSTER__SERVER__PORT", "9000"), ("ROSTER__DOCS__ENABLED", "false")]),
        )
        .expect("config");

        assert_eq!(cfg.server.port, 9000);
        assert!(!cfg.docs.enabled);
    }

    #[test]
    fn malformed_values_are_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("roster.toml");
        fs::write(&file, "[server]\nport = \"not a port\"\n").expect("write");

        let err = load_with_env::<ApiConfig>(Some(&file), env(&[])).expect_err("bad port");
        assert!(err.to_string().contains("Failed to deserialize config"));
    }
}

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::audit::transport::DEFAULT_TIMEOUT;
use crate::core::errors::{AuditError, Result};
use crate::core::models::splunk_env::SplunkEnv;

/// Environment variables read by [`AppConfig::apply_env`], with the field
/// each one overrides.
pub const ENV_ENDPOINT: &str = "SPLUNK_ENDPOINT";
pub const ENV_TOKEN: &str = "SPLUNK_TOKEN";
pub const ENV_INDEX: &str = "SPLUNK_INDEX";
pub const ENV_HOST: &str = "HOST";
pub const ENV_NAMESPACE: &str = "NAMESPACE";
pub const ENV_POD: &str = "POD_NAME";

/// Top-level configuration, usually read from `~/.config/gabi/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub splunk: SplunkSection,
    pub log: LogSection,
}

impl AppConfig {
    /// Load the configuration from an explicit file. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AuditError::InvalidConfig {
                detail: format!("config file not found: {}", path.display()),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| AuditError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given, otherwise the default file when present,
    /// otherwise built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Override Splunk settings from environment variables looked up via
    /// `lookup`. Unset variables leave the current value alone; set but
    /// empty variables clear it.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let env = &mut self.splunk.env;
        for (name, field) in [
            (ENV_ENDPOINT, &mut env.endpoint),
            (ENV_TOKEN, &mut env.token),
            (ENV_INDEX, &mut env.index),
            (ENV_HOST, &mut env.host),
            (ENV_NAMESPACE, &mut env.namespace),
            (ENV_POD, &mut env.pod),
        ] {
            if let Some(value) = lookup(name) {
                *field = value;
            }
        }
    }

    /// Reject values no sink could work with.
    pub fn validate(&self) -> Result<()> {
        if self.splunk.timeout_secs == Some(0) {
            return Err(AuditError::InvalidConfig {
                detail: "splunk.timeout_secs must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

/// `$XDG_CONFIG_HOME/gabi/config.toml` (or the platform equivalent).
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gabi").join("config.toml"))
}

/// The `[splunk]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SplunkSection {
    #[serde(flatten)]
    pub env: SplunkEnv,
    /// Request timeout; the default client's timeout when absent.
    pub timeout_secs: Option<u64>,
}

impl SplunkSection {
    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}

/// The `[log]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub level: LogLevel,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_full_config() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"
[splunk]
endpoint = "https://splunk:8088/services/collector/event"
token = "abc"
index = "audit"
host = "gabi"
namespace = "prod"
pod = "gabi-0"
timeout_secs = 3

[log]
level = "debug"
format = "json"
"#,
        );

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(
            config.splunk.env.endpoint,
            "https://splunk:8088/services/collector/event"
        );
        assert_eq!(config.splunk.env.token, "abc");
        assert_eq!(config.splunk.env.index, "audit");
        assert_eq!(config.splunk.env.pod, "gabi-0");
        assert_eq!(config.splunk.timeout(), Duration::from_secs(3));
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn empty_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "");

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.splunk.env, SplunkEnv::default());
        assert_eq!(config.splunk.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.log.level, LogLevel::Warn);
        assert_eq!(config.log.format, LogFormat::Text);
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let err = AppConfig::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, AuditError::InvalidConfig { .. }));
    }

    #[test]
    fn unknown_log_level_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[log]\nlevel = \"loud\"\n");

        let err = AppConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn zero_timeout_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[splunk]\ntimeout_secs = 0\n");

        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = AppConfig::default();
        config.splunk.env.endpoint = "http://from-file".into();
        config.splunk.env.host = "file-host".into();

        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_ENDPOINT, "http://from-env"),
            (ENV_TOKEN, "env-token"),
            (ENV_POD, ""),
        ]);
        config.apply_env(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.splunk.env.endpoint, "http://from-env");
        assert_eq!(config.splunk.env.token, "env-token");
        assert_eq!(config.splunk.env.host, "file-host");
        assert_eq!(config.splunk.env.pod, "");
    }
}

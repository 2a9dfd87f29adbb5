//! Application configuration
//!
//! Loaded from `~/.config/tarefas/config.toml` (or an explicit `--config`
//! path). Every field has a default so an empty or missing file is valid.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Top-level configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Interface the web server binds to
    pub host: String,

    /// Port for the web server
    pub port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Base URL used to build share links
    pub public_url: String,

    /// Session lifetime in seconds
    pub session_ttl_secs: u64,

    /// Maximum number of live sessions kept in memory
    pub session_capacity: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_path: PathBuf::from("tarefas.db"),
            public_url: "http://localhost:3000".to_string(),
            session_ttl_secs: 30 * 24 * 60 * 60,
            session_capacity: 10_000,
        }
    }
}

impl AppConfig {
    /// `<config_dir>/tarefas/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tarefas").join("config.toml"))
    }

    /// Parse a config file; the file must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| CoreError::TomlParse {
            path: path.to_path_buf(),
            message: source.message().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Explicit path must exist; the default path is optional
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(CoreError::InvalidConfig {
                message: "host must not be empty".to_string(),
            });
        }
        if !(self.public_url.starts_with("http://") || self.public_url.starts_with("https://")) {
            return Err(CoreError::InvalidConfig {
                message: format!("public_url must be an http(s) URL, got '{}'", self.public_url),
            });
        }
        if self.session_ttl_secs == 0 {
            return Err(CoreError::InvalidConfig {
                message: "session_ttl_secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            public_url: self.public_url.trim_end_matches('/').to_string(),
            session_ttl: Duration::from_secs(self.session_ttl_secs),
            session_capacity: self.session_capacity,
            ..StoreConfig::default()
        }
    }
}

/// Runtime settings for the data store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL for share links, without trailing slash
    pub public_url: String,

    /// Session time-to-live
    pub session_ttl: Duration,

    /// Maximum sessions held in memory
    pub session_capacity: u64,

    /// Broadcast channel capacity for live updates
    pub event_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            public_url: "http://localhost:3000".to_string(),
            session_ttl: Duration::from_secs(30 * 24 * 60 * 60),
            session_capacity: 10_000,
            event_capacity: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_file_overrides() {
        let config = AppConfig::from_toml(
            r#"
            port = 8080
            public_url = "https://tarefas.example.com/"
            "#,
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(
            config.store_config().public_url,
            "https://tarefas.example.com"
        );
    }

    #[test]
    fn test_validate_rejects_bad_public_url() {
        let config = AppConfig {
            public_url: "tarefas.example.com".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            AppConfig::load_or_default(Some(&missing)),
            Err(CoreError::FileRead { .. })
        ));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = \"not a number\"").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(CoreError::TomlParse { .. })
        ));
    }

    #[test]
    fn test_store_config_session_ttl() {
        let config = AppConfig {
            session_ttl_secs: 60,
            ..AppConfig::default()
        };
        assert_eq!(config.store_config().session_ttl, Duration::from_secs(60));
    }
}

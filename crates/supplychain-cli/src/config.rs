//! `supplychain.toml` loading and command-line overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "supplychain.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0} already exists")]
    AlreadyExists(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: String,
    pub tenant: String,
    pub out_dir: PathBuf,
    pub log: LogConfig,
    pub warehouse: WarehouseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://supplychain.db".to_string(),
            listen_addr: "127.0.0.1:8080".to_string(),
            tenant: "tenant_acme".to_string(),
            out_dir: PathBuf::from("out"),
            log: LogConfig::default(),
            warehouse: WarehouseConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive; `RUST_LOG` wins when set.
    pub level: String,
    /// Emit console logs as JSON lines.
    pub json: bool,
    /// Additional JSON log file.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarehouseConfig {
    pub url: Option<String>,
    pub query: Option<String>,
}

/// Values given on the command line (or through their env variables).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub database_url: Option<String>,
    pub log_level: Option<String>,
    pub log_json: bool,
    pub log_file: Option<PathBuf>,
    pub warehouse_url: Option<String>,
}

impl AppConfig {
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(url) = overrides.database_url {
            self.database_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.log.level = level;
        }
        if overrides.log_json {
            self.log.json = true;
        }
        if let Some(file) = overrides.log_file {
            self.log.file = Some(file);
        }
        if let Some(url) = overrides.warehouse_url {
            self.warehouse.url = Some(url);
        }
    }
}

/// Load the config file. An explicit path must exist; the default path is
/// optional and falls back to built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };

    if !required && !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
}

/// Write `config` as TOML, refusing to replace an existing file unless
/// `force` is set.
pub fn save_config(path: &Path, config: &AppConfig, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    let encoded = toml::to_string_pretty(config)?;
    std::fs::write(path, encoded).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("supplychain_{label}_{}.toml", Uuid::new_v4()))
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let config: AppConfig = toml::from_str(
            r#"
            tenant = "tenant_acme"

            [log]
            json = true
            "#,
        )
        .expect("parse");
        assert_eq!(config.tenant, "tenant_acme");
        assert!(config.log.json);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.database_url, AppConfig::default().database_url);
        assert_eq!(config.warehouse.url, None);
    }

    #[test]
    fn overrides_win_over_file_values() {
        let mut config = AppConfig::default();
        config.log.file = Some(PathBuf::from("from_file.ndjson"));
        config.apply(Overrides {
            database_url: Some("sqlite::memory:".to_string()),
            log_level: Some("debug".to_string()),
            warehouse_url: Some("postgres://wh".to_string()),
            ..Overrides::default()
        });
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, Some(PathBuf::from("from_file.ndjson")));
        assert_eq!(config.warehouse.url.as_deref(), Some("postgres://wh"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let path = temp_path("missing");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn saved_config_loads_back() {
        let path = temp_path("saved");
        let mut config = AppConfig::default();
        config.warehouse.query = Some("SELECT 1".to_string());
        save_config(&path, &config, false).expect("save");

        assert_eq!(load_config(Some(&path)).expect("load"), config);
        assert!(matches!(
            save_config(&path, &config, false),
            Err(ConfigError::AlreadyExists(_))
        ));
        save_config(&path, &config, true).expect("overwrite");
        std::fs::remove_file(&path).ok();
    }
}

//! Layered configuration: built-in defaults, TOML file, environment, CLI.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::favorites::Favorites;
use crate::params::DEFAULT_GOOGLE_HOSTS;

/// Environment variable prefix (`SERPTUNE_LOGGING__LEVEL=debug`).
pub const ENV_PREFIX: &str = "SERPTUNE_";

const STORE_FILE: &str = "store.json";
const LOG_FILE: &str = "serptune.log";
const CONFIG_FILE: &str = "config.toml";

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// Merging or extracting configuration failed
    Extract(Box<figment::Error>),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Explicitly requested config file does not exist
    Missing(PathBuf),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Extract(e) => write!(f, "Configuration error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::Missing(p) => write!(f, "Config file not found: {}", p.display()),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Extract(Box::new(e))
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Persisted favorites/presets location
    pub storage: StorageConfig,
    /// Log output
    pub logging: LoggingConfig,
    /// Search page detection
    pub search: SearchConfig,
    /// Favorites seeded into a fresh store
    pub favorites: Favorites,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
            search: SearchConfig::default(),
            favorites: Favorites::builtin(),
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Store file (default: `<data dir>/store.json`)
    pub path: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file (default: `<data dir>/serptune.log`)
    pub file: Option<PathBuf>,
    /// trace, debug, info, warn, error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

/// Google page detection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Host substrings that identify a Google search page
    pub hosts: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            hosts: DEFAULT_GOOGLE_HOSTS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

/// Values set on the command line; unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "StorageOverrides::is_empty")]
    pub storage: StorageOverrides,
    #[serde(skip_serializing_if = "LoggingOverrides::is_empty")]
    pub logging: LoggingOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StorageOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StorageOverrides {
    fn is_empty(&self) -> bool {
        self.path.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoggingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl LoggingOverrides {
    fn is_empty(&self) -> bool {
        self.file.is_none() && self.level.is_none()
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "serptune", "serptune")
}

fn data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default config file location, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

impl AppConfig {
    /// Build the layered figment.
    ///
    /// An explicit `path` must exist; otherwise the default config file is
    /// used when present.
    pub fn figment(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        match path {
            Some(path) if !path.exists() => return Err(ConfigError::Missing(path.to_path_buf())),
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                if let Some(default) = default_config_path() {
                    figment = figment.merge(Toml::file(default));
                }
            }
        }

        Ok(figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Serialized::defaults(overrides)))
    }

    /// Load configuration from all layers.
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Ok(Self::figment(path, overrides)?.extract()?)
    }

    /// Parse a TOML document on top of the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::string(content))
            .extract()?)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolved store file.
    pub fn store_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| data_dir().join(STORE_FILE))
    }

    /// Resolved log file.
    pub fn log_path(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| data_dir().join(LOG_FILE))
    }
}

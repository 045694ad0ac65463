//! Configuration management
//!
//! Settings come from built-in defaults, optionally overridden by a TOML file:
//! either the one named with `--config` or `mesu_inspect/config.toml` under
//! the user's config directory. Nothing is ever written back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::manifest::ManifestConfig;
use crate::constants::{expected, files, logging};
use crate::errors::{ConfigError, ConfigResult};

/// Application configuration for TOML deserialization
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Manifest loading settings
    pub manifest: ManifestConfigToml,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// TOML-friendly manifest configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ManifestConfigToml {
    /// Manifest read when no `--file` is given
    pub default_file: PathBuf,
    /// Product name records must carry
    pub expected_product: String,
    /// Publisher records must carry
    pub expected_publisher: String,
    /// Download format anything else is warned about
    pub expected_compression: String,
}

impl Default for ManifestConfigToml {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from(files::DEFAULT_MANIFEST_FILE),
            expected_product: expected::PRODUCT.to_string(),
            expected_publisher: expected::PUBLISHER.to_string(),
            expected_compression: expected::COMPRESSION.to_string(),
        }
    }
}

impl ManifestConfigToml {
    /// Convert to the loader's runtime configuration
    pub fn to_runtime_config(&self) -> ManifestConfig {
        ManifestConfig {
            expected_product: self.expected_product.clone(),
            expected_publisher: self.expected_publisher.clone(),
            expected_compression: self.expected_compression.clone(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: logging::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration with precedence: explicit file, default location,
    /// built-in defaults
    ///
    /// An explicitly named file that does not exist is an error; a missing
    /// default file is not.
    pub fn load(config_file_override: Option<&Path>) -> ConfigResult<Self> {
        let config = match config_file_override {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Some(path) => Self::load_from_file(path)?,
            None => match Self::default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::load_from_file(&path)?,
                None => {
                    debug!("No configuration file found, using defaults");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        debug!("Loading config from: {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse TOML configuration text
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/mesu_inspect/config.toml`, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(files::CONFIG_DIR_NAME)
                .join(files::CONFIG_FILE_NAME)
        })
    }

    /// Reject values the loader cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        let manifest = &self.manifest;
        for (field, value) in [
            ("manifest.expected_product", &manifest.expected_product),
            ("manifest.expected_publisher", &manifest.expected_publisher),
            ("manifest.expected_compression", &manifest.expected_compression),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.clone(),
                    reason: "Value must not be empty".to_string(),
                });
            }
        }

        if manifest.default_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "manifest.default_file".to_string(),
                value: String::new(),
                reason: "A default manifest path is required".to_string(),
            });
        }

        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: "Expected one of error, warn, info, debug, trace".to_string(),
            });
        }

        Ok(())
    }
}

//! Error types for the manifest inspector
//!
//! Only fatal conditions live here. Anything the loader can work around is a
//! [`LoadWarning`](crate::app::manifest::LoadWarning) instead and never
//! reaches these types.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest reading and validation errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found or not accessible
    #[error("File does not exist: {path}")]
    NotFound { path: PathBuf },

    /// I/O error reading manifest
    #[error("I/O error reading manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Property list could not be parsed
    #[error("Property list parsing error in manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    /// Document shape is not what a software update manifest looks like
    #[error("Invalid manifest format: {reason}")]
    InvalidFormat { reason: String },

    /// Required top-level key is absent
    #[error("The '{key}' key is not available in the PLIST file: {path}")]
    MissingKey { key: String, path: PathBuf },

    /// A record carries a value that rules the whole manifest out
    #[error("{field} different from '{expected}': {found}")]
    Validation {
        field: String,
        expected: String,
        found: String,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration file could not be read
    #[error("Failed to read configuration file")]
    Io(#[from] std::io::Error),

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON rendering error
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Manifest(_) => "manifest",
            AppError::Config(_) => "config",
            AppError::Json(_) => "json",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Manifest result type alias
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

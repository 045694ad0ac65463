//! mesu_inspect library
//!
//! Parses iOS software update asset manifests
//! (`com_apple_MobileAsset_SoftwareUpdate.xml`) into a by-device and
//! by-version index and renders reports over it.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};

#[cfg(test)]
mod tests {
    use super::*;
    use constants::*;

    #[test]
    fn test_constants_accessible() {
        assert_eq!(DEFAULT_MANIFEST_FILE, "com_apple_MobileAsset_SoftwareUpdate.xml");
        assert_eq!(ABSENT, "None");
        assert_eq!(keys::ASSETS, "Assets");
    }

    #[test]
    fn test_error_types() {
        let app_error = AppError::from(errors::ConfigError::NotFound {
            path: "missing.toml".into(),
        });
        assert_eq!(app_error.category(), "config");
    }
}

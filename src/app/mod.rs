//! Core application logic
//!
//! Data models, manifest loading, the asset index and report rendering.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mesu_inspect::app::{load, Detail, FileFingerprint, Reporter};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let path = "com_apple_MobileAsset_SoftwareUpdate.xml";
//! let fingerprint = FileFingerprint::from_path(path)?;
//! let result = load(path)?;
//!
//! let reporter = Reporter::new(&result, &fingerprint, Detail::OneLine);
//! reporter.write_summary_line(&mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod hash;
pub mod index;
pub mod manifest;
pub mod models;
pub mod report;

// Re-export main public API
pub use hash::{FileFingerprint, Sha1Digest};
pub use index::AssetIndex;
pub use manifest::{load, load_with_config, LoadResult, LoadWarning, ManifestConfig};
pub use models::{Asset, AssetRecord, Field};
pub use report::{Detail, ManifestSummary, Reporter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        let config = ManifestConfig::default();
        assert_eq!(config.expected_product, "iOS");
        assert_eq!(AssetIndex::default().device_count(), 0);
    }
}

//! Manifest loading and indexing
//!
//! This module turns a software update property list into a [`LoadResult`]:
//! the by-device/by-version [`AssetIndex`](crate::app::index::AssetIndex)
//! plus the summary values computed while the records are walked.
//!
//! # Module Organization
//!
//! - [`types`] - Loader configuration, warnings, version range and load result
//! - [`loader`] - Property list reading, record checks and device fan-out
//! - [`tests`] - Scenario tests against manifest files on disk
//!
//! # Examples
//!
//! ```rust,no_run
//! use mesu_inspect::app::manifest::load;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let result = load("com_apple_MobileAsset_SoftwareUpdate.xml")?;
//!
//! println!("{} assets, max version {}", result.total_assets, result.max_version());
//! if let Some(versions) = result.index.versions_for_device("iPhone6,1") {
//!     println!("iPhone6,1: {}", versions.join(" "));
//! }
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
pub mod tests;

pub use loader::{load, load_document, load_with_config};
pub use types::{LoadResult, LoadWarning, ManifestConfig, VersionRange};

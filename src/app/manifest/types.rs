//! Core types for manifest loading
//!
//! Configuration for the loader, the warnings it records, and the
//! [`LoadResult`] it hands to every query and report.

use std::collections::BTreeSet;
use std::fmt;

use crate::app::index::AssetIndex;
use crate::app::models::Field;
use crate::constants::{expected, keys};

/// Values each manifest record is checked against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestConfig {
    /// Product name a record must carry when present (mismatch is fatal)
    pub expected_product: String,
    /// Publisher a record must carry when present (mismatch is fatal)
    pub expected_publisher: String,
    /// Download format anything else is warned about
    pub expected_compression: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            expected_product: expected::PRODUCT.to_string(),
            expected_publisher: expected::PUBLISHER.to_string(),
            expected_compression: expected::COMPRESSION.to_string(),
        }
    }
}

/// A non-fatal anomaly found while loading
///
/// Entry numbers are 1-based positions in the manifest's asset list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// An expected key is missing; defaults are used
    MissingKey { key: &'static str, entry: usize },
    /// A key is present but its value has the wrong type; treated as missing
    UnexpectedType { key: &'static str, entry: usize },
    /// Release type present but not `Beta`; the value is kept
    UnexpectedReleaseType { entry: usize, value: String },
    /// Download format is not the expected one, or is missing
    UnexpectedCompression {
        entry: usize,
        expected: String,
        found: Field<String>,
    },
    /// Base URL or relative path missing; the URL keeps the placeholder text
    IncompleteUrl { entry: usize },
    /// Asset list element that is not a dictionary; skipped
    NotARecord { entry: usize },
}

impl LoadWarning {
    /// Manifest entry the warning refers to
    pub fn entry(&self) -> usize {
        match self {
            LoadWarning::MissingKey { entry, .. }
            | LoadWarning::UnexpectedType { entry, .. }
            | LoadWarning::UnexpectedReleaseType { entry, .. }
            | LoadWarning::UnexpectedCompression { entry, .. }
            | LoadWarning::IncompleteUrl { entry }
            | LoadWarning::NotARecord { entry } => *entry,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::MissingKey { key, entry } => {
                write!(f, "There is no '{}' key for entry {}.", key, entry)
            }
            LoadWarning::UnexpectedType { key, entry } => write!(
                f,
                "The '{}' key of entry {} has an unexpected type.",
                key, entry
            ),
            LoadWarning::UnexpectedReleaseType { value, .. } => write!(
                f,
                "Release type key different from '{}': {}",
                expected::BETA_RELEASE,
                value
            ),
            LoadWarning::UnexpectedCompression {
                expected, found, ..
            } => write!(
                f,
                "Download file format different from '{}': {}",
                expected, found
            ),
            LoadWarning::IncompleteUrl { entry } => write!(
                f,
                "There is no '{}' or '{}' key for entry {}.",
                keys::BASE_URL,
                keys::RELATIVE_PATH,
                entry
            ),
            LoadWarning::NotARecord { entry } => {
                write!(f, "Entry {} is not a dictionary and was skipped.", entry)
            }
        }
    }
}

/// Running lexicographic minimum and maximum of version keys
///
/// Comparison is plain string ordering, so `"7.10" < "7.2"` and a beta key
/// such as `"7.1.2(X)"` sorts above `"7.1.2"`. Ties keep the first value seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRange {
    min: Option<String>,
    max: Option<String>,
}

impl VersionRange {
    /// Fold one more version key into the range
    pub fn observe(&mut self, version: &str) {
        if self.min.as_deref().map_or(true, |min| version < min) {
            self.min = Some(version.to_string());
        }
        if self.max.as_deref().map_or(true, |max| version > max) {
            self.max = Some(version.to_string());
        }
    }

    pub fn min(&self) -> Option<&str> {
        self.min.as_deref()
    }

    pub fn max(&self) -> Option<&str> {
        self.max.as_deref()
    }
}

/// Everything a manifest load produces
///
/// Built once by the loader and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    /// By-device and by-version index
    pub index: AssetIndex,
    /// Number of (device, asset) pairs, not of manifest records
    pub total_assets: usize,
    /// Number of elements in the manifest's asset list
    pub records: usize,
    /// Lexicographic min/max over every asset's version key
    pub versions: VersionRange,
    /// Version keys of `Beta` records, sorted and deduplicated
    pub beta_versions: BTreeSet<String>,
    /// Non-fatal anomalies, in manifest order
    pub warnings: Vec<LoadWarning>,
}

impl LoadResult {
    /// Smallest version key, or an empty string for a manifest without assets
    pub fn min_version(&self) -> &str {
        self.versions.min().unwrap_or_default()
    }

    /// Largest version key, or an empty string for a manifest without assets
    pub fn max_version(&self) -> &str {
        self.versions.max().unwrap_or_default()
    }

    pub fn has_beta_versions(&self) -> bool {
        !self.beta_versions.is_empty()
    }
}

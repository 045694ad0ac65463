//! Manifest loading
//!
//! Reads the property list, walks the `Assets` list in manifest order and
//! fans every record out into one [`Asset`] per supported device. Only a
//! missing `Assets` key, a malformed document, or a product/publisher that is
//! present but wrong abort the load; everything else becomes a
//! [`LoadWarning`].

use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::Path;

use plist::{Dictionary, Value};
use tracing::{debug, warn};

use super::types::{LoadResult, LoadWarning, ManifestConfig, VersionRange};
use crate::app::index::AssetIndex;
use crate::app::models::{Asset, AssetRecord, Field};
use crate::constants::keys;
use crate::errors::{ManifestError, ManifestResult};

/// Load a manifest with the default record checks
///
/// # Errors
///
/// * `ManifestError::NotFound` / `ManifestError::Io` if the file cannot be read
/// * `ManifestError::Parse` if it is not a property list
/// * `ManifestError::MissingKey` if there is no `Assets` key
/// * `ManifestError::Validation` on a product or publisher mismatch
pub fn load<P: AsRef<Path>>(path: P) -> ManifestResult<LoadResult> {
    load_with_config(path, &ManifestConfig::default())
}

/// Load a manifest, checking records against `config`
pub fn load_with_config<P: AsRef<Path>>(
    path: P,
    config: &ManifestConfig,
) -> ManifestResult<LoadResult> {
    let path = path.as_ref();
    let document = Value::from_file(path).map_err(|e| match e.as_io() {
        Some(io) if io.kind() == ErrorKind::NotFound => ManifestError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ManifestError::Parse {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    debug!("Parsed property list from {}", path.display());

    load_document(&document, path, config)
}

/// Build a [`LoadResult`] from an already parsed property list
///
/// `source` is only used in error messages.
pub fn load_document(
    document: &Value,
    source: &Path,
    config: &ManifestConfig,
) -> ManifestResult<LoadResult> {
    let root = document
        .as_dictionary()
        .ok_or_else(|| ManifestError::InvalidFormat {
            reason: "top-level element is not a dictionary".to_string(),
        })?;

    let records = root
        .get(keys::ASSETS)
        .ok_or_else(|| ManifestError::MissingKey {
            key: keys::ASSETS.to_string(),
            path: source.to_path_buf(),
        })?
        .as_array()
        .ok_or_else(|| ManifestError::InvalidFormat {
            reason: format!("'{}' is not an array", keys::ASSETS),
        })?;

    let mut builder = IndexBuilder::new(config);
    for (position, value) in records.iter().enumerate() {
        builder.add(position + 1, value)?;
    }

    let result = builder.finish(records.len());
    debug!(
        "Loaded {} records into {} assets ({} devices, {} versions, {} warnings)",
        result.records,
        result.total_assets,
        result.index.device_count(),
        result.index.version_count(),
        result.warnings.len()
    );
    Ok(result)
}

/// Accumulates assets and summaries while records are processed
struct IndexBuilder<'a> {
    config: &'a ManifestConfig,
    by_device: BTreeMap<String, Vec<Asset>>,
    total_assets: usize,
    versions: VersionRange,
    beta_versions: BTreeSet<String>,
    warnings: Vec<LoadWarning>,
}

impl<'a> IndexBuilder<'a> {
    fn new(config: &'a ManifestConfig) -> Self {
        Self {
            config,
            by_device: BTreeMap::new(),
            total_assets: 0,
            versions: VersionRange::default(),
            beta_versions: BTreeSet::new(),
            warnings: Vec::new(),
        }
    }

    fn warn(&mut self, warning: LoadWarning) {
        warn!(entry = warning.entry(), "{}", warning);
        self.warnings.push(warning);
    }

    fn add(&mut self, entry: usize, value: &Value) -> ManifestResult<()> {
        let Some(dictionary) = value.as_dictionary() else {
            self.warn(LoadWarning::NotARecord { entry });
            return Ok(());
        };

        let record = AssetRecord::from_dictionary(dictionary);
        self.check(entry, dictionary, &record)?;

        let asset = record.to_asset();
        if asset.is_beta && record.os_version.is_present() {
            self.beta_versions.insert(asset.version.clone());
        }

        if let Field::Present(devices) = &record.supported_devices {
            for device in devices {
                self.total_assets += 1;
                self.versions.observe(&asset.version);
                self.by_device
                    .entry(device.clone())
                    .or_default()
                    .push(asset.clone());
            }
        }

        Ok(())
    }

    /// Apply the per-record checks; only product/publisher mismatches fail
    fn check(
        &mut self,
        entry: usize,
        dictionary: &Dictionary,
        record: &AssetRecord,
    ) -> ManifestResult<()> {
        let config = self.config;
        if record.supported_devices.is_absent() {
            let key = keys::SUPPORTED_DEVICES;
            if dictionary.contains_key(key) {
                self.warn(LoadWarning::UnexpectedType { key, entry });
            } else {
                self.warn(LoadWarning::MissingKey { key, entry });
            }
        }

        self.check_identity(
            entry,
            &record.product,
            keys::PRODUCT,
            "Product name",
            &config.expected_product,
        )?;
        self.check_identity(
            entry,
            &record.publisher,
            keys::PUBLISHER,
            "Publisher",
            &config.expected_publisher,
        )?;

        if record.os_version.is_absent() {
            self.warn(LoadWarning::MissingKey {
                key: keys::OS_VERSION,
                entry,
            });
        } else if let Field::Present(release_type) = &record.release_type {
            if !record.is_beta() {
                self.warn(LoadWarning::UnexpectedReleaseType {
                    entry,
                    value: release_type.clone(),
                });
            }
        }

        if record.compression_algorithm.as_option() != Some(&config.expected_compression) {
            self.warn(LoadWarning::UnexpectedCompression {
                entry,
                expected: config.expected_compression.clone(),
                found: record.compression_algorithm.clone(),
            });
        }

        if record.base_url.is_absent() || record.relative_path.is_absent() {
            self.warn(LoadWarning::IncompleteUrl { entry });
        }

        Ok(())
    }

    fn check_identity(
        &mut self,
        entry: usize,
        value: &Field<String>,
        key: &'static str,
        field: &str,
        expected: &str,
    ) -> ManifestResult<()> {
        match value {
            Field::Absent => {
                self.warn(LoadWarning::MissingKey { key, entry });
                Ok(())
            }
            Field::Present(found) if found != expected => Err(ManifestError::Validation {
                field: field.to_string(),
                expected: expected.to_string(),
                found: found.clone(),
            }),
            Field::Present(_) => Ok(()),
        }
    }

    fn finish(self, records: usize) -> LoadResult {
        LoadResult {
            index: AssetIndex::from_by_device(self.by_device),
            total_assets: self.total_assets,
            records,
            versions: self.versions,
            beta_versions: self.beta_versions,
            warnings: self.warnings,
        }
    }
}

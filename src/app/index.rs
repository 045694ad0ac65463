//! Queryable index over the flattened assets
//!
//! [`AssetIndex`] holds the two complementary views of a loaded manifest:
//! assets grouped by device and the devices offering each version key. The
//! by-version view is derived from the by-device one when the index is built
//! and is never updated separately, so the two cannot disagree.

use std::collections::{BTreeMap, BTreeSet};

use crate::app::models::Asset;

/// Immutable by-device and by-version index of a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetIndex {
    by_device: BTreeMap<String, Vec<Asset>>,
    by_version: BTreeMap<String, BTreeSet<String>>,
}

impl AssetIndex {
    /// Build the index from assets grouped by device
    ///
    /// Each device keeps its assets in the order they were declared.
    pub fn from_by_device(by_device: BTreeMap<String, Vec<Asset>>) -> Self {
        let mut by_version: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (device, assets) in &by_device {
            for asset in assets {
                by_version
                    .entry(asset.version.clone())
                    .or_default()
                    .insert(device.clone());
            }
        }

        Self {
            by_device,
            by_version,
        }
    }

    /// Sorted, unique version keys offered for a device
    ///
    /// Returns `None` when the device does not appear in the manifest.
    pub fn versions_for_device(&self, device: &str) -> Option<Vec<&str>> {
        self.by_device.get(device).map(|assets| {
            assets
                .iter()
                .map(|asset| asset.version.as_str())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        })
    }

    /// Sorted, unique devices offering a version key
    ///
    /// Returns `None` when no device offers the version.
    pub fn devices_for_version(&self, version: &str) -> Option<Vec<&str>> {
        self.by_version
            .get(version)
            .map(|devices| devices.iter().map(String::as_str).collect())
    }

    /// Number of distinct devices
    pub fn device_count(&self) -> usize {
        self.by_device.len()
    }

    /// Number of distinct version keys
    pub fn version_count(&self) -> usize {
        self.by_version.len()
    }

    /// Devices in sorted order
    pub fn devices(&self) -> impl Iterator<Item = &str> {
        self.by_device.keys().map(String::as_str)
    }

    /// Version keys in sorted order
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.by_version.keys().map(String::as_str)
    }

    /// Assets of one device in manifest order
    pub fn assets_for_device(&self, device: &str) -> Option<&[Asset]> {
        self.by_device.get(device).map(Vec::as_slice)
    }

    /// Every (device, asset) pair, devices sorted, each device's assets in
    /// manifest order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Asset)> {
        self.by_device
            .iter()
            .flat_map(|(device, assets)| assets.iter().map(move |asset| (device.as_str(), asset)))
    }

    /// Total number of (device, asset) pairs
    pub fn asset_count(&self) -> usize {
        self.by_device.values().map(Vec::len).sum()
    }
}

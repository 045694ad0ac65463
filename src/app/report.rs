//! Report rendering
//!
//! Pure formatting over a [`LoadResult`]: no report adds logic beyond sorting
//! and choosing between the one-line and full rendering of each asset. All
//! output goes through a caller-supplied writer so the CLI can print to stdout
//! and tests can render into a buffer.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::app::hash::{FileFingerprint, Sha1Digest};
use crate::app::manifest::LoadResult;
use crate::app::models::Asset;
use crate::constants::display::{ABSENT, BETA_MARKER};

/// How much of each asset to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Detail {
    /// Index, device, version, build, prerequisites, beta marker, hash
    #[default]
    OneLine,
    /// Adds sizes, file format, URL and hash algorithm over several lines
    Full,
}

/// Aggregate numbers describing one manifest file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestSummary {
    pub filename: PathBuf,
    pub sha1: Sha1Digest,
    pub size: u64,
    pub assets: usize,
    pub devices: usize,
    pub versions: usize,
    pub beta_versions: Vec<String>,
    pub min_version: String,
    pub max_version: String,
}

impl ManifestSummary {
    pub fn new(result: &LoadResult, fingerprint: &FileFingerprint) -> Self {
        Self {
            filename: fingerprint.path.clone(),
            sha1: fingerprint.sha1,
            size: fingerprint.size,
            assets: result.total_assets,
            devices: result.index.device_count(),
            versions: result.index.version_count(),
            beta_versions: result.beta_versions.iter().cloned().collect(),
            min_version: result.min_version().to_string(),
            max_version: result.max_version().to_string(),
        }
    }

    fn beta_marker(&self) -> &'static str {
        if self.beta_versions.is_empty() {
            ""
        } else {
            BETA_MARKER
        }
    }
}

/// Renders reports over one loaded manifest
pub struct Reporter<'a> {
    result: &'a LoadResult,
    summary: ManifestSummary,
    detail: Detail,
}

impl<'a> Reporter<'a> {
    pub fn new(result: &'a LoadResult, fingerprint: &FileFingerprint, detail: Detail) -> Self {
        Self {
            result,
            summary: ManifestSummary::new(result, fingerprint),
            detail,
        }
    }

    /// Single summary line: file, hash, size, counts and version range
    pub fn write_summary_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let s = &self.summary;
        writeln!(
            out,
            "{} (SHA-1: {}) = {} bytes, {} assets, {} devices, {} versions{}, min: {}, max: {}",
            s.filename.display(),
            s.sha1,
            s.size,
            s.assets,
            s.devices,
            s.versions,
            s.beta_marker(),
            s.min_version,
            s.max_version
        )
    }

    /// Multi-line file summary, with the beta version list when there is one
    pub fn write_file_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let s = &self.summary;
        writeln!(out, "- File Summary: ")?;
        writeln!(out)?;
        writeln!(out, "Filename:        {}", s.filename.display())?;
        writeln!(out, "SHA1:            {}", s.sha1)?;
        writeln!(out, "Size:            {}", s.size)?;
        writeln!(out, "# Assets:        {}", s.assets)?;
        writeln!(out, "# Devices:       {}", s.devices)?;
        writeln!(out, "# iOS versions:  {}{}", s.versions, s.beta_marker())?;
        writeln!(out, "Min. iOS:        {}", s.min_version)?;
        writeln!(out, "Max. iOS:        {}", s.max_version)?;
        if !s.beta_versions.is_empty() {
            writeln!(out, "# Beta versions: {}", s.beta_versions.len())?;
            writeln!(out, "Beta versions:   {}", s.beta_versions.join(" "))?;
        }
        Ok(())
    }

    /// Summary as a JSON object
    pub fn write_summary_json<W: Write>(&self, out: &mut W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.summary)?;
        writeln!(out).map_err(serde_json::Error::io)
    }

    /// Every asset, devices sorted, each device's assets sorted by version
    pub fn write_assets<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "- PLIST File Details: ({} assets)",
            self.result.total_assets
        )?;
        writeln!(out)?;

        // Devices come out sorted; the stable sort keeps manifest order on ties
        let mut assets: Vec<(&str, &Asset)> = self.result.index.iter().collect();
        assets.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.version.cmp(&b.1.version)));
        for (count, (device, asset)) in assets.into_iter().enumerate() {
            self.write_asset(out, count + 1, device, asset)?;
        }
        Ok(())
    }

    /// Assets of one device, sorted by version
    pub fn write_assets_for_device<W: Write>(&self, out: &mut W, device: &str) -> io::Result<()> {
        writeln!(out, "- Assets Details for Device {}: ", device)?;
        writeln!(out)?;

        if self.result.index.assets_for_device(device).is_none() {
            return writeln!(out, "{}", ABSENT);
        }
        for (count, asset) in self.sorted_assets(device).into_iter().enumerate() {
            self.write_asset(out, count + 1, device, asset)?;
        }
        Ok(())
    }

    /// Assets with one version key across all devices
    pub fn write_assets_for_version<W: Write>(
        &self,
        out: &mut W,
        version: &str,
    ) -> io::Result<()> {
        writeln!(out, "- Assets Details for iOS Version {}: ", version)?;
        writeln!(out)?;

        let mut count = 0;
        for device in self.result.index.devices() {
            for asset in self.sorted_assets(device) {
                if asset.version == version {
                    count += 1;
                    self.write_asset(out, count, device, asset)?;
                }
            }
        }
        if count == 0 {
            writeln!(out, "{}", ABSENT)?;
        }
        Ok(())
    }

    /// One line per device with its version keys
    pub fn write_summary_by_device<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let index = &self.result.index;
        writeln!(out, "- Summary By Device: ({} devices)", index.device_count())?;
        writeln!(out)?;
        for device in index.devices() {
            let versions = index.versions_for_device(device).unwrap_or_default();
            writeln!(out, "{}: {}", device, versions.join(" "))?;
        }
        Ok(())
    }

    /// One line per version key with the devices offering it
    pub fn write_summary_by_version<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let index = &self.result.index;
        writeln!(
            out,
            "- Summary By iOS Version: ({} iOS versions)",
            index.version_count()
        )?;
        writeln!(out)?;
        for version in index.versions() {
            let devices = index.devices_for_version(version).unwrap_or_default();
            writeln!(out, "{}: {}", version, devices.join(" "))?;
        }
        Ok(())
    }

    /// Version keys of a device on one line, or the not-found placeholder
    pub fn write_versions_for_device<W: Write>(&self, out: &mut W, device: &str) -> io::Result<()> {
        write_list(out, self.result.index.versions_for_device(device))
    }

    /// Devices offering a version key on one line, or the not-found placeholder
    pub fn write_devices_for_version<W: Write>(
        &self,
        out: &mut W,
        version: &str,
    ) -> io::Result<()> {
        write_list(out, self.result.index.devices_for_version(version))
    }

    pub fn write_min_version<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.summary.min_version)
    }

    pub fn write_max_version<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.summary.max_version)
    }

    fn sorted_assets(&self, device: &str) -> Vec<&'a Asset> {
        let mut assets: Vec<&Asset> = self
            .result
            .index
            .assets_for_device(device)
            .map(|assets| assets.iter().collect())
            .unwrap_or_default();
        assets.sort_by(|a, b| a.version.cmp(&b.version));
        assets
    }

    fn write_asset<W: Write>(
        &self,
        out: &mut W,
        count: usize,
        device: &str,
        asset: &Asset,
    ) -> io::Result<()> {
        match self.detail {
            Detail::OneLine => write_asset_line(out, count, device, asset),
            Detail::Full => {
                write_asset_full(out, count, device, asset)?;
                writeln!(out)
            }
        }
    }
}

/// `[n] device: version (build) [from version prev (prev build)] hash`
pub fn write_asset_line<W: Write>(
    out: &mut W,
    count: usize,
    device: &str,
    asset: &Asset,
) -> io::Result<()> {
    writeln!(
        out,
        "[{}] {}{} {}",
        count,
        asset_heading(device, asset),
        beta_marker(asset),
        asset.hash
    )
}

/// Multi-line asset rendering with sizes, URL and hash algorithm
pub fn write_asset_full<W: Write>(
    out: &mut W,
    count: usize,
    device: &str,
    asset: &Asset,
) -> io::Result<()> {
    writeln!(out, "[{}]", count)?;
    writeln!(out, "{}{}", asset_heading(device, asset), beta_marker(asset))?;
    writeln!(
        out,
        "Size: {} ({}) --> {} (Install: {})",
        asset.download_size, asset.file_format, asset.unarchived_size, asset.install_size
    )?;
    writeln!(out, "URL: {}", asset.url)?;
    writeln!(out, "{}: {}", asset.hash_algorithm, asset.hash)
}

fn asset_heading(device: &str, asset: &Asset) -> String {
    format!(
        "{}: {} ({}) [from version {} ({})]",
        device, asset.version, asset.build, asset.prerequisite_version, asset.prerequisite_build
    )
}

fn beta_marker(asset: &Asset) -> &'static str {
    if asset.is_beta {
        BETA_MARKER
    } else {
        ""
    }
}

fn write_list<W: Write>(out: &mut W, items: Option<Vec<&str>>) -> io::Result<()> {
    match items {
        Some(items) => writeln!(out, "{}", items.join(" ")),
        None => writeln!(out, "{}", ABSENT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::index::AssetIndex;
    use crate::app::manifest::VersionRange;
    use crate::app::models::Field;
    use std::collections::{BTreeMap, BTreeSet};

    fn asset(version: &str, beta: bool) -> Asset {
        Asset {
            version: version.to_string(),
            is_beta: beta,
            os_version: Field::Present(version.to_string()),
            documentation_id: Field::Absent,
            release_type: Field::Absent,
            prerequisite_version: Field::Present("7.0".to_string()),
            build: Field::Present("11D201".to_string()),
            prerequisite_build: Field::Absent,
            install_size: Field::Present("300".to_string()),
            download_size: Field::Present("100".to_string()),
            unarchived_size: Field::Present("200".to_string()),
            file_format: Field::Present("zip".to_string()),
            url: "http://example.com/a.zip".to_string(),
            hash_algorithm: Field::Present("SHA-1".to_string()),
            hash: Field::Present("deadbeef".to_string()),
        }
    }

    fn sample() -> (LoadResult, FileFingerprint) {
        let mut by_device = BTreeMap::new();
        by_device.insert(
            "iPhone1,1".to_string(),
            vec![asset("7.1.2(X)", true), asset("7.1.1", false)],
        );
        by_device.insert("iPad1,1".to_string(), vec![asset("7.1.1", false)]);

        let mut versions = VersionRange::default();
        for v in ["7.1.2(X)", "7.1.1", "7.1.1"] {
            versions.observe(v);
        }

        let result = LoadResult {
            index: AssetIndex::from_by_device(by_device),
            total_assets: 3,
            records: 2,
            versions,
            beta_versions: BTreeSet::from(["7.1.2(X)".to_string()]),
            warnings: Vec::new(),
        };
        let fingerprint = FileFingerprint {
            path: PathBuf::from("feed.xml"),
            size: 3,
            sha1: Sha1Digest::of(b"abc"),
        };
        (result, fingerprint)
    }

    fn render<F>(detail: Detail, f: F) -> String
    where
        F: FnOnce(&Reporter<'_>, &mut Vec<u8>) -> io::Result<()>,
    {
        let (result, fingerprint) = sample();
        let reporter = Reporter::new(&result, &fingerprint, detail);
        let mut out = Vec::new();
        f(&reporter, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_line() {
        let text = render(Detail::OneLine, |r, out| r.write_summary_line(out));
        assert_eq!(
            text,
            "feed.xml (SHA-1: a9993e364706816aba3e25717850c26c9cd0d89d) = 3 bytes, \
             3 assets, 2 devices, 2 versions (beta), min: 7.1.1, max: 7.1.2(X)\n"
        );
    }

    #[test]
    fn test_file_summary_lists_betas() {
        let text = render(Detail::OneLine, |r, out| r.write_file_summary(out));
        assert!(text.contains("# iOS versions:  2 (beta)\n"));
        assert!(text.contains("# Beta versions: 1\n"));
        assert!(text.contains("Beta versions:   7.1.2(X)\n"));
    }

    #[test]
    fn test_assets_for_device_sorted_one_line() {
        let text = render(Detail::OneLine, |r, out| {
            r.write_assets_for_device(out, "iPhone1,1")
        });
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "- Assets Details for Device iPhone1,1: ");
        assert_eq!(
            lines[2],
            "[1] iPhone1,1: 7.1.1 (11D201) [from version 7.0 (None)] deadbeef"
        );
        assert_eq!(
            lines[3],
            "[2] iPhone1,1: 7.1.2(X) (11D201) [from version 7.0 (None)] (beta) deadbeef"
        );
    }

    #[test]
    fn test_full_asset_rendering() {
        let text = render(Detail::Full, |r, out| r.write_assets_for_version(out, "7.1.1"));
        let expected = "- Assets Details for iOS Version 7.1.1: \n\n\
                        [1]\n\
                        iPad1,1: 7.1.1 (11D201) [from version 7.0 (None)]\n\
                        Size: 100 (zip) --> 200 (Install: 300)\n\
                        URL: http://example.com/a.zip\n\
                        SHA-1: deadbeef\n\n\
                        [2]\n\
                        iPhone1,1: 7.1.1 (11D201) [from version 7.0 (None)]\n\
                        Size: 100 (zip) --> 200 (Install: 300)\n\
                        URL: http://example.com/a.zip\n\
                        SHA-1: deadbeef\n\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_all_assets_numbered_across_devices() {
        let text = render(Detail::OneLine, |r, out| r.write_assets(out));
        assert!(text.starts_with("- PLIST File Details: (3 assets)\n\n[1] iPad1,1: 7.1.1"));
        assert!(text.contains("[3] iPhone1,1: 7.1.2(X)"));
    }

    #[test]
    fn test_grouped_summaries() {
        let by_device = render(Detail::OneLine, |r, out| r.write_summary_by_device(out));
        assert_eq!(
            by_device,
            "- Summary By Device: (2 devices)\n\niPad1,1: 7.1.1\niPhone1,1: 7.1.1 7.1.2(X)\n"
        );

        let by_version = render(Detail::OneLine, |r, out| r.write_summary_by_version(out));
        assert_eq!(
            by_version,
            "- Summary By iOS Version: (2 iOS versions)\n\n7.1.1: iPad1,1 iPhone1,1\n7.1.2(X): iPhone1,1\n"
        );
    }

    #[test]
    fn test_lookup_lines_and_not_found() {
        let text = render(Detail::OneLine, |r, out| {
            r.write_versions_for_device(out, "iPhone1,1")?;
            r.write_versions_for_device(out, "iPod1,1")?;
            r.write_devices_for_version(out, "7.1.1")?;
            r.write_devices_for_version(out, "1.0")
        });
        assert_eq!(text, "7.1.1 7.1.2(X)\nNone\niPad1,1 iPhone1,1\nNone\n");
    }

    #[test]
    fn test_min_max_lines() {
        let text = render(Detail::OneLine, |r, out| {
            r.write_min_version(out)?;
            r.write_max_version(out)
        });
        assert_eq!(text, "7.1.1\n7.1.2(X)\n");
    }

    #[test]
    fn test_summary_json() {
        let (result, fingerprint) = sample();
        let reporter = Reporter::new(&result, &fingerprint, Detail::OneLine);
        let mut out = Vec::new();
        reporter.write_summary_json(&mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["assets"], 3);
        assert_eq!(value["sha1"], "a9993e364706816aba3e25717850c26c9cd0d89d");
        assert_eq!(value["beta_versions"][0], "7.1.2(X)");
        assert_eq!(value["max_version"], "7.1.2(X)");
    }
}

//! Command-line argument parsing
//!
//! A single command with a group of mutually exclusive output selectors,
//! defined with clap derive macros. With no selector the one-line summary is
//! printed.

use std::path::PathBuf;

use clap::{Args, Parser};

use super::banner;

/// Inspect iOS software update manifests
#[derive(Parser, Debug)]
#[command(
    name = "mesu_inspect",
    version,
    about = "Parse and extract details from iOS software update PLIST files",
    long_about = banner::long_about(),
    after_help = banner::EPILOG
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Output selectors
    #[command(flatten)]
    pub selector: SelectorArgs,
}

/// Options that apply to every selector
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Increase output verbosity: print the header and per-asset details
    #[arg(short, long)]
    pub verbose: bool,

    /// Show full details for assets
    #[arg(short = 'F', long)]
    pub full_details: bool,

    /// iOS software update PLIST file (e.g. com_apple_MobileAsset_SoftwareUpdate.xml)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit the file summary as JSON (only with -s or -S)
    #[arg(
        long,
        conflicts_with_all = [
            "device",
            "ios_version",
            "summary_by_device",
            "summary_by_ios_version",
            "min_version",
            "max_version",
            "both_versions",
        ]
    )]
    pub json: bool,

    /// Suppress load warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug logging to stderr
    #[arg(long)]
    pub very_verbose: bool,
}

/// Mutually exclusive output selectors
#[derive(Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct SelectorArgs {
    /// Show one-line PLIST file summary (default)
    #[arg(short, long)]
    pub summary: bool,

    /// Show PLIST file summary (use with -v or -vF to list every asset)
    #[arg(short = 'S', long)]
    pub file_summary: bool,

    /// Show iOS versions for this device (use with -v or -vF for details)
    #[arg(short, long, value_name = "DEVICE")]
    pub device: Option<String>,

    /// Show devices for this iOS version (use with -v or -vF for details)
    #[arg(short, long, value_name = "VERSION")]
    pub ios_version: Option<String>,

    /// Show PLIST file summary by device
    #[arg(short = 'D', long)]
    pub summary_by_device: bool,

    /// Show PLIST file summary by iOS version
    #[arg(short = 'I', long)]
    pub summary_by_ios_version: bool,

    /// Show minimum iOS version
    #[arg(short, long)]
    pub min_version: bool,

    /// Show maximum iOS version
    #[arg(short = 'M', long)]
    pub max_version: bool,

    /// Show both minimum and maximum iOS version
    #[arg(short, long)]
    pub both_versions: bool,
}

/// The one report a run produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Summary,
    FileSummary,
    VersionsForDevice(String),
    DevicesForVersion(String),
    SummaryByDevice,
    SummaryByVersion,
    MinVersion,
    MaxVersion,
    BothVersions,
}

impl SelectorArgs {
    /// Resolve the selected report, defaulting to the one-line summary
    pub fn selection(&self) -> Selection {
        if let Some(device) = &self.device {
            Selection::VersionsForDevice(device.clone())
        } else if let Some(version) = &self.ios_version {
            Selection::DevicesForVersion(version.clone())
        } else if self.min_version {
            Selection::MinVersion
        } else if self.max_version {
            Selection::MaxVersion
        } else if self.both_versions {
            Selection::BothVersions
        } else if self.file_summary {
            Selection::FileSummary
        } else if self.summary_by_device {
            Selection::SummaryByDevice
        } else if self.summary_by_ios_version {
            Selection::SummaryByVersion
        } else {
            Selection::Summary
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level from flags, falling back to the configured level
    pub fn log_level(&self, configured: &str) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else {
            configured.parse().unwrap_or(tracing::Level::WARN)
        }
    }
}

//! Application constants
//!
//! Manifest key names, expected record values and the tool's own metadata,
//! grouped by the part of the program that reads them.

/// Property list keys used by the software update manifest
pub mod keys {
    /// Top-level key holding the list of asset records
    pub const ASSETS: &str = "Assets";

    pub const SUPPORTED_DEVICES: &str = "SupportedDevices";
    pub const PRODUCT: &str = "SUProductSystemName";
    pub const PUBLISHER: &str = "SUPublisher";
    pub const DOCUMENTATION_ID: &str = "SUDocumentationID";
    pub const OS_VERSION: &str = "OSVersion";
    pub const RELEASE_TYPE: &str = "ReleaseType";
    pub const PREREQUISITE_OS_VERSION: &str = "PrerequisiteOSVersion";
    pub const BUILD: &str = "Build";
    pub const PREREQUISITE_BUILD: &str = "PrerequisiteBuild";
    pub const INSTALLATION_SIZE: &str = "InstallationSize";
    pub const DOWNLOAD_SIZE: &str = "_DownloadSize";
    pub const UNARCHIVED_SIZE: &str = "_UnarchivedSize";
    pub const COMPRESSION_ALGORITHM: &str = "_CompressionAlgorithm";
    pub const BASE_URL: &str = "__BaseURL";
    pub const RELATIVE_PATH: &str = "__RelativePath";
    pub const MEASUREMENT_ALGORITHM: &str = "_MeasurementAlgorithm";
    pub const MEASUREMENT: &str = "_Measurement";
}

/// Values a record is checked against
pub mod expected {
    /// Product name every record must carry when present
    pub const PRODUCT: &str = "iOS";

    /// Publisher every record must carry when present
    pub const PUBLISHER: &str = "Apple Inc.";

    /// Download archive format
    pub const COMPRESSION: &str = "zip";

    /// The only release type value with a meaning
    pub const BETA_RELEASE: &str = "Beta";
}

/// Manifest files and feeds
pub mod files {
    /// File read when no `--file` is given
    pub const DEFAULT_MANIFEST_FILE: &str = "com_apple_MobileAsset_SoftwareUpdate.xml";

    /// Where the update manifest is published (informational only)
    pub const UPDATE_FEED_URL: &str = "http://mesu.apple.com/assets/com_apple_MobileAsset_SoftwareUpdate/com_apple_MobileAsset_SoftwareUpdate.xml";

    /// Companion documentation manifest (informational only)
    pub const DOCUMENTATION_FEED_URL: &str = "http://mesu.apple.com/assets/com_apple_MobileAsset_SoftwareUpdateDocumentation/com_apple_MobileAsset_SoftwareUpdateDocumentation.xml";

    /// Config file name looked up under the user config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Directory under the user config directory
    pub const CONFIG_DIR_NAME: &str = "mesu_inspect";
}

/// Rendering constants
pub mod display {
    /// Placeholder printed for any field the manifest omitted, and for lookups
    /// that found nothing
    pub const ABSENT: &str = "None";

    /// Marker appended to beta assets and beta summaries
    pub const BETA_MARKER: &str = " (beta)";
}

/// Tool metadata shown in the banner
pub mod about {
    pub const TOOL_NAME: &str = "mesu_inspect";

    pub const RELEASE_DATE: &str = "2026-10-18";

    pub const LICENSE_LINE: &str = "Released under the GNU General Public License";

    /// Newest OS version whose manifest has been checked against this parser
    pub const TESTED_OS_VERSION: &str = "7.1.1";
}

/// Logging defaults
pub mod logging {
    /// Default log level
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}

// Re-export commonly used constants for convenience
pub use display::ABSENT;
pub use files::DEFAULT_MANIFEST_FILE;

//! Header and help text

use std::io::{self, Write};

use crate::constants::{about, files};

/// Closing line of `--help`
pub const EPILOG: &str = "\t-- Check the new details about the latest iOS updates! --";

const ART: &str = r#"
  _ __ ___   ___  ___ _   _
 | '_ ` _ \ / _ \/ __| | | |
 | | | | | |  __/\__ \ |_| |
 |_| |_| |_|\___||___/\__,_|  inspect
"#;

/// Banner printed above the file summary, grouped summaries and verbose
/// per-asset listings
pub fn header() -> String {
    format!(
        "{}\n\t{}: iOS com_apple_MobileAsset_SoftwareUpdate\n\t         (v{} - {})\n\n\t{}\n",
        ART,
        about::TOOL_NAME,
        env!("CARGO_PKG_VERSION"),
        about::RELEASE_DATE,
        about::LICENSE_LINE
    )
}

/// Blank line followed by the banner
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", header())
}

/// Long `--help` description
pub fn long_about() -> String {
    format!(
        "{}\n\tTool that parses and extracts details from Apple iOS software\n\
         \tupdate PLIST files: {}.\n\
         \t(v{} - PLIST file tested up to iOS version {})\n\n\
         \tManifest feed:      {}\n\
         \tDocumentation feed: {}",
        header(),
        files::DEFAULT_MANIFEST_FILE,
        env!("CARGO_PKG_VERSION"),
        about::TESTED_OS_VERSION,
        files::UPDATE_FEED_URL,
        files::DOCUMENTATION_FEED_URL
    )
}

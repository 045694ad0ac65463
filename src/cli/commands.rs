//! Command handling
//!
//! Loads the manifest once, builds the index, and runs the single report the
//! invocation selected.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use super::args::{Cli, Selection};
use super::banner;
use crate::app::hash::FileFingerprint;
use crate::app::manifest::load_with_config;
use crate::app::report::{Detail, Reporter};
use crate::config::AppConfig;
use crate::errors::Result;

/// Output switches that shape how a selection is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Header and per-asset listings instead of terse lines
    pub verbose: bool,
    /// JSON instead of text for the summary selectors
    pub json: bool,
}

/// Load the manifest named on the command line and print the selected report
pub fn handle_inspect(cli: &Cli, config: &AppConfig) -> Result<()> {
    let path: PathBuf = cli
        .global
        .file
        .clone()
        .unwrap_or_else(|| config.manifest.default_file.clone());
    info!("Inspecting manifest {}", path.display());

    let fingerprint = FileFingerprint::from_path(&path)?;
    let result = load_with_config(&path, &config.manifest.to_runtime_config())?;

    let detail = if cli.global.full_details {
        Detail::Full
    } else {
        Detail::OneLine
    };
    let reporter = Reporter::new(&result, &fingerprint, detail);
    let options = OutputOptions {
        verbose: cli.global.verbose,
        json: cli.global.json,
    };
    let selection = cli.selector.selection();
    debug!("Rendering {:?} with {:?}", selection, options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&reporter, &selection, options, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write one selected report
pub fn render<W: Write>(
    reporter: &Reporter<'_>,
    selection: &Selection,
    options: OutputOptions,
    out: &mut W,
) -> Result<()> {
    match selection {
        Selection::VersionsForDevice(device) => {
            if options.verbose {
                banner::write_header(out)?;
                reporter.write_assets_for_device(out, device)?;
            } else {
                reporter.write_versions_for_device(out, device)?;
            }
        }
        Selection::DevicesForVersion(version) => {
            if options.verbose {
                banner::write_header(out)?;
                reporter.write_assets_for_version(out, version)?;
            } else {
                reporter.write_devices_for_version(out, version)?;
            }
        }
        Selection::MinVersion => reporter.write_min_version(out)?,
        Selection::MaxVersion => reporter.write_max_version(out)?,
        Selection::BothVersions => {
            reporter.write_min_version(out)?;
            reporter.write_max_version(out)?;
        }
        Selection::Summary if options.json => reporter.write_summary_json(out)?,
        Selection::Summary => reporter.write_summary_line(out)?,
        Selection::FileSummary if options.json => reporter.write_summary_json(out)?,
        Selection::FileSummary => {
            banner::write_header(out)?;
            reporter.write_file_summary(out)?;
            if options.verbose {
                writeln!(out)?;
                reporter.write_assets(out)?;
            }
        }
        Selection::SummaryByDevice => {
            banner::write_header(out)?;
            reporter.write_summary_by_device(out)?;
        }
        Selection::SummaryByVersion => {
            banner::write_header(out)?;
            reporter.write_summary_by_version(out)?;
        }
    }
    Ok(())
}

//! mesu_inspect CLI application
//!
//! Command-line interface for inspecting iOS software update asset manifests.

use std::process;

use tracing::{debug, info};
use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

use mesu_inspect::cli::{handle_inspect, Cli};
use mesu_inspect::config::AppConfig;
use mesu_inspect::errors::{AppError, Result};

fn main() {
    let result = run();

    // Warnings never reach here; only fatal conditions change the exit status
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = AppConfig::load(cli.global.config.as_deref())?;

    init_logging(&cli, &config)?;

    info!("mesu_inspect v{} starting", env!("CARGO_PKG_VERSION"));
    debug!("Configuration: {:?}", config);

    handle_inspect(&cli, &config)
}

/// Initialize logging on stderr so reports on stdout stay clean
fn init_logging(cli: &Cli, config: &AppConfig) -> Result<()> {
    let log_level = cli.log_level(&config.logging.level);

    let directive: Directive = format!("mesu_inspect={}", log_level)
        .parse()
        .map_err(|e| AppError::generic(format!("invalid log directive: {}", e)))?;
    let filter = EnvFilter::from_default_env().add_directive(directive);

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if cli.global.very_verbose {
        debug!("Very verbose logging enabled");
    }
    Ok(())
}

//! Prelude module
//!
//! Re-exports the items needed to load a manifest and query or report on it
//! with a single `use mesu_inspect::prelude::*;`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use mesu_inspect::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let result = load(DEFAULT_MANIFEST_FILE)?;
//!     println!("{} devices", result.index.device_count());
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, ManifestError, Result};

pub use crate::app::{
    load, load_with_config, Asset, AssetIndex, Detail, Field, FileFingerprint, LoadResult,
    LoadWarning, ManifestConfig, ManifestSummary, Reporter, Sha1Digest,
};

pub use crate::config::AppConfig;

// Commonly used constants
pub use crate::constants::{ABSENT, DEFAULT_MANIFEST_FILE};

pub use std::path::{Path, PathBuf};

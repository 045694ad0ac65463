//! Command-line interface components
//!
//! Argument parsing, the banner/help text and the handler that turns a parsed
//! command line into one printed report.

pub mod args;
pub mod banner;
pub mod commands;

pub use args::{Cli, GlobalArgs, SelectorArgs, Selection};
pub use commands::{handle_inspect, render, OutputOptions};

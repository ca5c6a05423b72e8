//! Command-line argument definitions for the pathmerge CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration
//! file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the pathmerge tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the source pathway diagram files
    #[arg(help = "Path to the diagram directory")]
    pub input: String,

    /// Path to the output XGMML file
    #[arg(short, long, default_value = "network.xgmml")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

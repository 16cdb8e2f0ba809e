//! Command-line argument definitions for the Vellum CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the output directory and format,
//! configuration file selection, and logging verbosity. Flags left unset
//! fall back to the configuration file, then to built-in defaults.

use clap::Parser;

/// Command-line arguments for the Vellum diagram generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory the diagram files are written into
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Output format (svg, png, dot)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

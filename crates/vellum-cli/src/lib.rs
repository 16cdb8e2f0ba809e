//! CLI logic for the Vellum diagram generator.
//!
//! This module contains the core CLI logic for the Vellum diagram generator.

pub mod catalog;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::PathBuf, str::FromStr};

use log::info;

use vellum::{DiagramRenderer, Format, VellumError};

/// Run the Vellum CLI application
///
/// This function renders every catalog diagram into the output directory and
/// prints one confirmation line per written file to standard output.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `VellumError` for:
/// - Configuration loading errors
/// - An unknown output format name
/// - Topology validation errors
/// - File I/O errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), VellumError> {
    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Command-line flags override the configuration file
    let format = match args.format.as_deref() {
        Some(value) => Format::from_str(value).map_err(VellumError::Config)?,
        None => app_config.render().format(),
    };
    let output_dir = args
        .output_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| app_config.render().directory().to_path_buf());

    info!(
        output_dir = output_dir.display().to_string(),
        format:? = format;
        "Rendering diagram catalog"
    );

    fs::create_dir_all(&output_dir)?;

    // Render each catalog diagram using the DiagramRenderer API
    let renderer = DiagramRenderer::new(app_config);
    for diagram in catalog::all() {
        let path = renderer.render_to_file(&diagram, &output_dir, format)?;
        println!("Created {}", path.display());
    }

    info!("Diagram catalog rendered");

    Ok(())
}

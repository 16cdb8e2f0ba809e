//! Error types for Vellum operations.
//!
//! This module provides the main error type [`VellumError`] which wraps the
//! error conditions that can occur during diagram processing.

use std::io;

use thiserror::Error;

/// The main error type for Vellum operations.
///
/// Errors are not recovered from: they propagate to the caller, and the CLI
/// reports them and exits.
#[derive(Debug, Error)]
pub enum VellumError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(Box<dyn std::error::Error>),
}

impl VellumError {
    /// Create a new `Render` error wrapping a renderer invocation failure.
    pub fn new_render_error(err: impl std::error::Error + 'static) -> Self {
        Self::Render(Box::new(err))
    }
}

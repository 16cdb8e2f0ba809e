//! Configuration types for Vellum diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are styled and where they are written. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining style and render settings.
//! - [`StyleConfig`] - Controls visual styling shared by every diagram.
//! - [`RenderConfig`] - Controls the default output format and directory.
//!
//! # Example
//!
//! ```
//! # use vellum::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use vellum_core::color::Color;

use crate::export::Format;

/// Top-level application configuration combining style and render settings.
///
/// Groups [`StyleConfig`] and [`RenderConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style and render configurations.
    ///
    /// # Arguments
    ///
    /// * `style` - Visual styling options.
    /// * `render` - Output format and directory defaults.
    pub fn new(style: StyleConfig, render: RenderConfig) -> Self {
        Self { style, render }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Visual styling configuration applied to every rendered diagram.
///
/// The defaults match the tool's built-in appearance: 14pt labels, half an
/// inch of padding, white background.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Font size for graph and node labels, in points.
    #[serde(default = "default_fontsize")]
    fontsize: f32,

    /// Padding around the drawing, in inches.
    #[serde(default = "default_pad")]
    pad: f32,

    /// Default background [`Color`] for diagrams, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the specified values.
    pub fn new(fontsize: f32, pad: f32, background_color: Option<String>) -> Self {
        Self {
            fontsize,
            pad,
            background_color,
        }
    }

    /// Returns the label font size in points.
    pub fn fontsize(&self) -> f32 {
        self.fontsize
    }

    /// Returns the drawing padding in inches.
    pub fn pad(&self) -> f32 {
        self.pad
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fontsize: default_fontsize(),
            pad: default_pad(),
            background_color: None,
        }
    }
}

fn default_fontsize() -> f32 {
    14.0
}

fn default_pad() -> f32 {
    0.5
}

/// Output settings used when the command line does not override them.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Default output [`Format`].
    #[serde(default)]
    format: Format,

    /// Default output directory.
    #[serde(default = "default_directory")]
    directory: PathBuf,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`] with the specified format and directory.
    pub fn new(format: Format, directory: PathBuf) -> Self {
        Self { format, directory }
    }

    /// Returns the default output [`Format`].
    pub fn format(&self) -> Format {
        self.format
    }

    /// Returns the default output directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: Format::default(),
            directory: default_directory(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_appearance() {
        let config = AppConfig::default();

        assert_eq!(config.style().fontsize(), 14.0);
        assert_eq!(config.style().pad(), 0.5);
        assert_eq!(config.style().background_color().unwrap(), None);
        assert_eq!(config.render().format(), Format::Svg);
        assert_eq!(config.render().directory(), Path::new("."));
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            fontsize = 11.0
            "#,
        )
        .unwrap();

        assert_eq!(config.style().fontsize(), 11.0);
        assert_eq!(config.style().pad(), 0.5);
        assert_eq!(config.render().format(), Format::Svg);
    }

    #[test]
    fn test_full_toml_is_parsed() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            fontsize = 12.0
            pad = 0.25
            background_color = "lightyellow"

            [render]
            format = "dot"
            directory = "out"
            "#,
        )
        .unwrap();

        assert_eq!(config.style().fontsize(), 12.0);
        assert_eq!(config.style().pad(), 0.25);
        assert_eq!(
            config
                .style()
                .background_color()
                .unwrap()
                .map(|color| color.to_string()),
            Some("lightyellow".to_string())
        );
        assert_eq!(config.render().format(), Format::Dot);
        assert_eq!(config.render().directory(), Path::new("out"));
    }

    #[test]
    fn test_invalid_background_color_surfaces_on_access() {
        let config = StyleConfig::new(14.0, 0.5, Some("nonsense".to_string()));

        let err = config.background_color().unwrap_err();
        assert!(err.contains("Invalid background color"));
    }
}

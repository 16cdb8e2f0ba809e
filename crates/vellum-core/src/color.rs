//! Color handling for diagram styling.
//!
//! Graphviz consumes CSS color names and hex strings verbatim, so [`Color`]
//! validates the string at construction time and keeps the original
//! spelling for the exporter.

use std::fmt;

/// A validated CSS color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    value: String,
}

impl Color {
    /// Parses and validates a CSS color string (named colors and hex forms).
    ///
    /// # Errors
    ///
    /// Returns a description of the parse failure if `value` is not a valid
    /// CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_core::color::Color;
    ///
    /// let white = Color::new("white").unwrap();
    /// assert_eq!(white.as_str(), "white");
    ///
    /// assert!(Color::new("definitely-not-a-color").is_err());
    /// ```
    pub fn new(value: &str) -> Result<Self, String> {
        ::color::parse_color(value).map_err(|err| format!("invalid color `{value}`: {err}"))?;

        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the color string as it was written.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Default for Color {
    fn default() -> Self {
        Self {
            value: "black".to_string(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

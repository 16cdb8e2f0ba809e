//! Export of semantic diagrams to Graphviz.
//!
//! The [`dot`] submodule lowers a diagram to the DOT AST; [`Format`] selects
//! what is written to disk.

pub(crate) mod dot;

use std::str::FromStr;

use serde::Deserialize;

/// Output format for rendered diagrams.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Scalable vector graphics, rendered by the Graphviz executable (default)
    #[default]
    Svg,
    /// Raster image, rendered by the Graphviz executable
    Png,
    /// Plain DOT source text; requires no external renderer
    Dot,
}

impl Format {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Dot => "dot",
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "dot" => Ok(Self::Dot),
            _ => Err(format!(
                "invalid output format `{s}`, valid values: svg, png, dot"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_extensions() {
        assert_eq!(Format::Svg.extension(), "svg");
        assert_eq!(Format::Png.extension(), "png");
        assert_eq!(Format::Dot.extension(), "dot");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(Format::from_str("svg").unwrap(), Format::Svg);
        assert_eq!(Format::from_str("png").unwrap(), Format::Png);
        assert_eq!(Format::from_str("dot").unwrap(), Format::Dot);

        let result = Format::from_str("jpeg");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("invalid output format"));
    }

    #[test]
    fn test_format_default_is_svg() {
        assert_eq!(Format::default(), Format::Svg);
    }
}

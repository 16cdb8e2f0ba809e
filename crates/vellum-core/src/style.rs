//! Visual vocabulary for diagram nodes and edges.
//!
//! This module defines the small set of visual classes a diagram can use:
//!
//! - [`NodeShape`]: The outline drawn for a node (rectangle, oval, component,
//!   cylinder, diamond)
//! - [`EdgeStyle`]: The line pattern of a relation (solid, dashed, dotted, bold)
//! - [`Direction`]: The rank direction of a whole diagram
//!
//! # Design Philosophy
//!
//! Each type maps onto one Graphviz attribute value and follows Graphviz
//! terminology so the exporter can translate without lookup tables.
//!
//! # DOT Attribute Mapping
//!
//! | Rust Type | DOT Attribute | Example Values |
//! |-----------|---------------|----------------|
//! | `NodeShape` | `shape` | `"box"`, `"cylinder"` |
//! | `EdgeStyle` | `style` | `"dashed"`, `"bold"` |
//! | `Direction` | `rankdir` | `"TB"`, `"LR"` |

use std::str::FromStr;

/// The outline drawn for a diagram node.
///
/// # DOT Mapping
///
/// Each variant maps to a Graphviz `shape` value:
/// - `Rectangle`: "box"
/// - `Oval`: "ellipse"
/// - `Component`: "component"
/// - `Cylinder`: "cylinder"
/// - `Diamond`: "diamond"
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// Plain rectangular box (default)
    #[default]
    Rectangle,
    /// Ellipse, used for external actors such as clients
    Oval,
    /// UML component shape, used for deployable services
    Component,
    /// Database cylinder
    Cylinder,
    /// Decision diamond
    Diamond,
}

impl NodeShape {
    /// Returns the Graphviz `shape` value for this shape.
    pub fn to_dot_value(&self) -> &'static str {
        match self {
            Self::Rectangle => "box",
            Self::Oval => "ellipse",
            Self::Component => "component",
            Self::Cylinder => "cylinder",
            Self::Diamond => "diamond",
        }
    }
}

impl FromStr for NodeShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangle" | "box" => Ok(Self::Rectangle),
            "oval" | "ellipse" => Ok(Self::Oval),
            "component" => Ok(Self::Component),
            "cylinder" | "database" => Ok(Self::Cylinder),
            "diamond" | "decision" => Ok(Self::Diamond),
            _ => Err(format!(
                "invalid node shape `{s}`, valid values: rectangle, oval, component, cylinder, diamond"
            )),
        }
    }
}

/// The line pattern of a relation.
///
/// # DOT Mapping
///
/// Each variant maps to a Graphviz edge `style` value; `Solid` is the
/// renderer default and emits no attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line, used for conditional flow
    Dashed,
    /// Dotted line
    Dotted,
    /// Thick line
    Bold,
}

impl EdgeStyle {
    /// Returns the Graphviz `style` value for this style, or `None` for
    /// solid lines.
    pub fn to_dot_value(&self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("dashed"),
            Self::Dotted => Some("dotted"),
            Self::Bold => Some("bold"),
        }
    }
}

impl FromStr for EdgeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "bold" => Ok(Self::Bold),
            _ => Err(format!(
                "invalid edge style `{s}`, valid values: solid, dashed, dotted, bold"
            )),
        }
    }
}

/// The rank direction of a diagram.
///
/// # DOT Mapping
///
/// Maps directly to the Graphviz `rankdir` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Top to bottom (default)
    #[default]
    TopBottom,
    /// Left to right
    LeftRight,
    /// Bottom to top
    BottomTop,
    /// Right to left
    RightLeft,
}

impl Direction {
    /// Returns the Graphviz `rankdir` value for this direction.
    pub fn to_dot_value(&self) -> &'static str {
        match self {
            Self::TopBottom => "TB",
            Self::LeftRight => "LR",
            Self::BottomTop => "BT",
            Self::RightLeft => "RL",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tb" | "top-bottom" => Ok(Self::TopBottom),
            "lr" | "left-right" => Ok(Self::LeftRight),
            "bt" | "bottom-top" => Ok(Self::BottomTop),
            "rl" | "right-left" => Ok(Self::RightLeft),
            _ => Err(format!(
                "invalid direction `{s}`, valid values: TB, LR, BT, RL"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_shape_dot_values() {
        assert_eq!(NodeShape::Rectangle.to_dot_value(), "box");
        assert_eq!(NodeShape::Oval.to_dot_value(), "ellipse");
        assert_eq!(NodeShape::Component.to_dot_value(), "component");
        assert_eq!(NodeShape::Cylinder.to_dot_value(), "cylinder");
        assert_eq!(NodeShape::Diamond.to_dot_value(), "diamond");
    }

    #[test]
    fn test_node_shape_from_str() {
        assert_eq!(
            NodeShape::from_str("rectangle").unwrap(),
            NodeShape::Rectangle
        );
        assert_eq!(NodeShape::from_str("box").unwrap(), NodeShape::Rectangle);
        assert_eq!(NodeShape::from_str("oval").unwrap(), NodeShape::Oval);
        assert_eq!(
            NodeShape::from_str("database").unwrap(),
            NodeShape::Cylinder
        );
        assert_eq!(NodeShape::from_str("decision").unwrap(), NodeShape::Diamond);

        let result = NodeShape::from_str("hexagon");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("invalid node shape"));
    }

    #[test]
    fn test_edge_style_dot_values() {
        assert_eq!(EdgeStyle::Solid.to_dot_value(), None);
        assert_eq!(EdgeStyle::Dashed.to_dot_value(), Some("dashed"));
        assert_eq!(EdgeStyle::Dotted.to_dot_value(), Some("dotted"));
        assert_eq!(EdgeStyle::Bold.to_dot_value(), Some("bold"));
    }

    #[test]
    fn test_edge_style_from_str() {
        assert_eq!(EdgeStyle::from_str("solid").unwrap(), EdgeStyle::Solid);
        assert_eq!(EdgeStyle::from_str("dashed").unwrap(), EdgeStyle::Dashed);
        assert_eq!(EdgeStyle::from_str("dotted").unwrap(), EdgeStyle::Dotted);
        assert_eq!(EdgeStyle::from_str("bold").unwrap(), EdgeStyle::Bold);

        let result = EdgeStyle::from_str("wavy");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("invalid edge style"));
    }

    #[test]
    fn test_direction_dot_values() {
        assert_eq!(Direction::TopBottom.to_dot_value(), "TB");
        assert_eq!(Direction::LeftRight.to_dot_value(), "LR");
        assert_eq!(Direction::BottomTop.to_dot_value(), "BT");
        assert_eq!(Direction::RightLeft.to_dot_value(), "RL");
    }

    #[test]
    fn test_direction_from_str_is_case_insensitive() {
        assert_eq!(Direction::from_str("TB").unwrap(), Direction::TopBottom);
        assert_eq!(Direction::from_str("lr").unwrap(), Direction::LeftRight);
        assert_eq!(
            Direction::from_str("left-right").unwrap(),
            Direction::LeftRight
        );

        let result = Direction::from_str("diagonal");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("invalid direction"));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(NodeShape::default(), NodeShape::Rectangle);
        assert_eq!(EdgeStyle::default(), EdgeStyle::Solid);
        assert_eq!(Direction::default(), Direction::TopBottom);
    }
}

//! Vellum - architecture diagram generation through Graphviz.
//!
//! A semantic model of nodes, clusters, and relations is validated, lowered
//! to the Graphviz DOT language, and rendered to SVG or PNG by the system
//! `dot` executable (or written out as DOT text directly).

pub mod config;

mod error;
mod export;
mod structure;

pub use vellum_core::{color, identifier, semantic, style};

pub use error::VellumError;
pub use export::Format;
pub use structure::Topology;

use std::{
    fs,
    path::{Path, PathBuf},
};

use graphviz_rust::{
    cmd::{CommandArg, Format as GraphvizFormat},
    exec_dot,
    printer::{DotPrinter, PrinterContext},
};
use log::{debug, info, trace};

use config::AppConfig;
use export::dot::DotBuilder;

/// Renderer for Vellum diagrams.
///
/// This drives a semantic [`semantic::Diagram`] through topology validation,
/// DOT lowering, and (for image formats) Graphviz execution.
///
/// # Examples
///
/// ```rust,no_run
/// use vellum::{DiagramRenderer, config::AppConfig};
/// use vellum::{
///     identifier::Id,
///     semantic::{Diagram, Element, Node, Relation, Scope},
///     style::{Direction, NodeShape},
/// };
///
/// let app = Id::new("app");
/// let scope = Scope::new(vec![Element::Node(Node::new(
///     app,
///     "Application",
///     NodeShape::Rectangle,
/// ))]);
/// let diagram = Diagram::new("Overview", "overview", Direction::TopBottom, scope);
///
/// // With custom config
/// let config = AppConfig::default();
/// let renderer = DiagramRenderer::new(config);
///
/// // Render to DOT source text
/// let dot = renderer.render_dot(&diagram)
///     .expect("Failed to render");
///
/// // Or use default config
/// let renderer = DiagramRenderer::default();
/// ```
#[derive(Default)]
pub struct DiagramRenderer {
    config: AppConfig,
}

impl DiagramRenderer {
    /// Create a new diagram renderer with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including style and render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Validates the diagram and returns its DOT source text.
    ///
    /// This flattens the diagram's scope tree into a validated topology and
    /// lowers it to DOT.
    ///
    /// # Arguments
    ///
    /// * `diagram` - A semantic diagram to render
    ///
    /// # Errors
    ///
    /// Returns `VellumError` for topology violations (undeclared relation
    /// endpoints, duplicate node IDs) or invalid configured style values.
    pub fn render_dot(&self, diagram: &semantic::Diagram) -> Result<String, VellumError> {
        info!(diagram = diagram.slug(); "Building diagram topology");
        let topology = Topology::from_diagram(diagram)?;
        debug!(
            nodes = topology.node_count(),
            relations = topology.relation_count();
            "Topology validated"
        );

        let graph = DotBuilder::new(diagram, self.config.style()).build()?;
        let dot_source = graph.print(&mut PrinterContext::default());
        trace!(dot_source:?; "DOT source generated");

        Ok(dot_source)
    }

    /// Renders the diagram into `directory` and returns the path of the
    /// written file.
    ///
    /// SVG and PNG output is produced by the system Graphviz `dot`
    /// executable; the `dot` format writes the DOT source directly and needs
    /// no external renderer.
    ///
    /// # Arguments
    ///
    /// * `diagram` - A semantic diagram to render
    /// * `directory` - Existing directory the output file is written into
    /// * `format` - Output format
    ///
    /// # Errors
    ///
    /// Returns `VellumError` for topology violations, file I/O failures, or
    /// a failed Graphviz invocation (including a missing `dot` executable).
    pub fn render_to_file(
        &self,
        diagram: &semantic::Diagram,
        directory: &Path,
        format: Format,
    ) -> Result<PathBuf, VellumError> {
        let output_path = directory
            .join(diagram.slug())
            .with_extension(format.extension());
        let dot_source = self.render_dot(diagram)?;

        match graphviz_format(format) {
            None => fs::write(&output_path, &dot_source)?,
            Some(image_format) => {
                exec_dot(
                    dot_source,
                    vec![
                        CommandArg::Format(image_format),
                        CommandArg::Output(output_path.display().to_string()),
                    ],
                )
                .map_err(VellumError::new_render_error)?;
            }
        }

        info!(output_file = output_path.display().to_string(); "Diagram rendered");
        Ok(output_path)
    }
}

/// Maps an output format onto the Graphviz output format, or `None` when no
/// Graphviz invocation is needed.
fn graphviz_format(format: Format) -> Option<GraphvizFormat> {
    match format {
        Format::Svg => Some(GraphvizFormat::Svg),
        Format::Png => Some(GraphvizFormat::Png),
        Format::Dot => None,
    }
}

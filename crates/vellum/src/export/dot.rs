//! Lowering of semantic diagrams to the Graphviz DOT AST.
//!
//! [`DotBuilder`] walks a diagram's scope tree and produces a
//! [`dot_structures::Graph`]. Layout is left entirely to Graphviz; the
//! builder only translates structure and style:
//!
//! - the diagram title, font size, padding, background color, and rank
//!   direction become top-level graph attributes
//! - nodes become DOT nodes with quoted, escaped labels and a `shape`
//! - clusters become `cluster_N` subgraphs, numbered in declaration order
//! - relations become directed edges with an optional `label` and `style`

use dot_structures::{
    Attribute, Edge, EdgeTy, Graph, GraphAttributes, Id as DotId, Node as DotNode, NodeId, Stmt,
    Subgraph, Vertex,
};

use vellum_core::{
    identifier::Id,
    semantic::{Cluster, Diagram, Element, Node, Relation, Scope},
};

use crate::{config::StyleConfig, error::VellumError};

/// Background used when the configuration does not set one.
const DEFAULT_BACKGROUND: &str = "white";

/// Builder lowering one diagram plus style configuration into a DOT graph.
pub(crate) struct DotBuilder<'a> {
    diagram: &'a Diagram,
    style: &'a StyleConfig,
}

impl<'a> DotBuilder<'a> {
    /// Creates a builder for the given diagram and style configuration.
    pub(crate) fn new(diagram: &'a Diagram, style: &'a StyleConfig) -> Self {
        Self { diagram, style }
    }

    /// Lowers the diagram to a DOT graph.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::Config`] if the configured background color is
    /// not a valid color string.
    pub(crate) fn build(self) -> Result<Graph, VellumError> {
        let mut stmts = vec![
            Stmt::GAttribute(GraphAttributes::Graph(self.graph_attributes()?)),
            Stmt::GAttribute(GraphAttributes::Node(self.node_defaults())),
        ];

        let mut cluster_counter = 0;
        lower_scope(self.diagram.scope(), &mut stmts, &mut cluster_counter);

        Ok(Graph::DiGraph {
            id: quoted(self.diagram.slug()),
            strict: false,
            stmts,
        })
    }

    fn graph_attributes(&self) -> Result<Vec<Attribute>, VellumError> {
        let background = self
            .style
            .background_color()
            .map_err(VellumError::Config)?
            .map_or_else(|| DEFAULT_BACKGROUND.to_string(), |color| color.to_string());

        Ok(vec![
            attribute("label", quoted(self.diagram.title())),
            attribute("labelloc", plain("t")),
            attribute("fontsize", plain(self.style.fontsize().to_string())),
            attribute("bgcolor", quoted(&background)),
            attribute("pad", plain(self.style.pad().to_string())),
            attribute("rankdir", plain(self.diagram.direction().to_dot_value())),
        ])
    }

    fn node_defaults(&self) -> Vec<Attribute> {
        vec![attribute(
            "fontsize",
            plain(self.style.fontsize().to_string()),
        )]
    }
}

fn lower_scope(scope: &Scope, stmts: &mut Vec<Stmt>, cluster_counter: &mut usize) {
    for element in scope.elements() {
        match element {
            Element::Node(node) => stmts.push(lower_node(node)),
            Element::Cluster(cluster) => stmts.push(lower_cluster(cluster, cluster_counter)),
            Element::Relation(relation) => stmts.push(lower_relation(relation)),
        }
    }
}

fn lower_node(node: &Node) -> Stmt {
    Stmt::Node(DotNode {
        id: node_id(node.id()),
        attributes: vec![
            attribute("label", quoted(node.label())),
            attribute("shape", plain(node.shape().to_dot_value())),
        ],
    })
}

fn lower_cluster(cluster: &Cluster, cluster_counter: &mut usize) -> Stmt {
    // Graphviz only draws a subgraph border when its name starts with "cluster".
    let id = DotId::Plain(format!("cluster_{}", *cluster_counter));
    *cluster_counter += 1;

    let mut stmts = vec![Stmt::GAttribute(GraphAttributes::Graph(vec![attribute(
        "label",
        quoted(cluster.label()),
    )]))];
    lower_scope(cluster.scope(), &mut stmts, cluster_counter);

    Stmt::Subgraph(Subgraph { id, stmts })
}

fn lower_relation(relation: &Relation) -> Stmt {
    let mut attributes = Vec::new();
    if let Some(label) = relation.label() {
        attributes.push(attribute("label", quoted(label)));
    }
    if let Some(style) = relation.style().to_dot_value() {
        attributes.push(attribute("style", plain(style)));
    }

    Stmt::Edge(Edge {
        ty: EdgeTy::Pair(
            Vertex::N(node_id(relation.source())),
            Vertex::N(node_id(relation.target())),
        ),
        attributes,
    })
}

fn node_id(id: Id) -> NodeId {
    NodeId(quoted(&id.resolve()), None)
}

fn attribute(key: &str, value: DotId) -> Attribute {
    Attribute(DotId::Plain(key.to_string()), value)
}

fn plain(value: impl Into<String>) -> DotId {
    DotId::Plain(value.into())
}

fn quoted(text: &str) -> DotId {
    DotId::Escaped(format!("\"{}\"", escape(text)))
}

/// Escapes text for embedding in a double-quoted DOT string. Embedded
/// newlines become Graphviz line breaks.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

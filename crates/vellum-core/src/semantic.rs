//! Semantic model types for diagrams.
//!
//! A [`Diagram`] is the fully resolved description handed to the rendering
//! pipeline: a titled, directed tree of scopes containing nodes, clusters,
//! and relations. The types here carry no layout information; positioning is
//! decided entirely by the renderer downstream.

use crate::{
    identifier::Id,
    style::{Direction, EdgeStyle, NodeShape},
};

/// A labeled box in the rendered output.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    label: String,
    shape: NodeShape,
}

impl Node {
    /// Creates a new node with the given identifier, display label, and shape.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier referenced by relations.
    /// * `label` - Text drawn inside the node; may contain newlines.
    /// * `shape` - Visual class of the node.
    pub fn new(id: Id, label: impl Into<String>, shape: NodeShape) -> Self {
        Self {
            id,
            label: label.into(),
            shape,
        }
    }

    /// Returns the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the node shape.
    pub fn shape(&self) -> NodeShape {
        self.shape
    }
}

/// A directed, optionally labeled arrow between two nodes.
#[derive(Debug, Clone)]
pub struct Relation {
    source: Id,
    target: Id,
    label: Option<String>,
    style: EdgeStyle,
}

impl Relation {
    /// Creates a new relation between two nodes.
    ///
    /// # Arguments
    ///
    /// * `source` - Identifier of the node the arrow starts from.
    /// * `target` - Identifier of the node the arrow points to.
    /// * `label` - Optional text drawn along the arrow.
    /// * `style` - Line pattern of the arrow.
    pub fn new(source: Id, target: Id, label: Option<String>, style: EdgeStyle) -> Self {
        Self {
            source,
            target,
            label,
            style,
        }
    }

    /// Creates a solid, unlabeled relation (convenience constructor).
    pub fn plain(source: Id, target: Id) -> Self {
        Self::new(source, target, None, EdgeStyle::Solid)
    }

    /// Creates a solid, labeled relation (convenience constructor).
    pub fn labeled(source: Id, target: Id, label: impl Into<String>) -> Self {
        Self::new(source, target, Some(label.into()), EdgeStyle::Solid)
    }

    /// Returns the source node identifier.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Returns the target node identifier.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Returns the arrow label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the line pattern.
    pub fn style(&self) -> EdgeStyle {
        self.style
    }
}

/// A visual grouping boundary enclosing related elements.
///
/// Clusters nest arbitrarily; each one is rendered as a labeled border
/// around the elements of its scope.
#[derive(Debug, Clone)]
pub struct Cluster {
    label: String,
    scope: Scope,
}

impl Cluster {
    /// Creates a new cluster with the given label and contents.
    pub fn new(label: impl Into<String>, scope: Scope) -> Self {
        Self {
            label: label.into(),
            scope,
        }
    }

    /// Returns the cluster label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the enclosed scope.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// One entry in a diagram scope.
#[derive(Debug, Clone)]
pub enum Element {
    /// A node declaration.
    Node(Node),
    /// A nested cluster.
    Cluster(Cluster),
    /// A relation between two declared nodes.
    Relation(Relation),
}

/// An ordered collection of diagram elements.
///
/// Order is preserved through export so output is deterministic. Relations
/// may appear before or after the nodes they reference; endpoint resolution
/// happens over the whole diagram during topology validation.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    elements: Vec<Element>,
}

impl Scope {
    /// Creates a scope from an ordered list of elements.
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Returns the elements in declaration order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// A complete diagram ready for rendering.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    slug: String,
    direction: Direction,
    scope: Scope,
}

impl Diagram {
    /// Creates a new diagram.
    ///
    /// # Arguments
    ///
    /// * `title` - Human-readable title, drawn above the diagram.
    /// * `slug` - Filename stem of the output file.
    /// * `direction` - Rank direction for layout.
    /// * `scope` - Root scope holding all elements.
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        direction: Direction,
        scope: Scope,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            direction,
            scope,
        }
    }

    /// Returns the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the output filename stem.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the rank direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the root scope.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_accessors() {
        let id = Id::new("gateway");
        let node = Node::new(id, "API Gateway", NodeShape::Component);

        assert_eq!(node.id(), id);
        assert_eq!(node.label(), "API Gateway");
        assert_eq!(node.shape(), NodeShape::Component);
    }

    #[test]
    fn test_relation_conveniences() {
        let source = Id::new("a");
        let target = Id::new("b");

        let plain = Relation::plain(source, target);
        assert_eq!(plain.label(), None);
        assert_eq!(plain.style(), EdgeStyle::Solid);

        let labeled = Relation::labeled(source, target, "route");
        assert_eq!(labeled.label(), Some("route"));
        assert_eq!(labeled.style(), EdgeStyle::Solid);

        let dashed = Relation::new(source, target, None, EdgeStyle::Dashed);
        assert_eq!(dashed.style(), EdgeStyle::Dashed);
    }

    #[test]
    fn test_diagram_accessors() {
        let id = Id::new("app");
        let scope = Scope::new(vec![Element::Node(Node::new(
            id,
            "App",
            NodeShape::Rectangle,
        ))]);
        let diagram = Diagram::new("System Overview", "overview", Direction::LeftRight, scope);

        assert_eq!(diagram.title(), "System Overview");
        assert_eq!(diagram.slug(), "overview");
        assert_eq!(diagram.direction(), Direction::LeftRight);
        assert_eq!(diagram.scope().elements().len(), 1);
    }

    #[test]
    fn test_scope_preserves_order() {
        let first = Id::new("first");
        let second = Id::new("second");
        let scope = Scope::new(vec![
            Element::Node(Node::new(first, "First", NodeShape::Rectangle)),
            Element::Node(Node::new(second, "Second", NodeShape::Rectangle)),
        ]);

        let labels: Vec<&str> = scope
            .elements()
            .iter()
            .filter_map(|element| match element {
                Element::Node(node) => Some(node.label()),
                _ => None,
            })
            .collect();

        assert_eq!(labels, vec!["First", "Second"]);
    }
}

//! Diagram structure building and validation.
//!
//! Before a diagram is lowered to DOT, its scope tree is flattened into a
//! [`Topology`]: every node is registered exactly once and every relation is
//! checked against the registered nodes. A node must belong to the diagram
//! to be rendered, so an undeclared endpoint fails the whole render here,
//! before any output is produced.

mod graph_base;

use log::debug;

use vellum_core::{
    identifier::Id,
    semantic::{Diagram, Element, Relation, Scope},
    style::EdgeStyle,
};

use crate::error::VellumError;
use graph_base::GraphInternal;

/// The validated directed graph extracted from a diagram's scope tree.
///
/// Node registration ignores cluster boundaries: clusters are a visual
/// grouping, not a namespace, so a relation may cross cluster lines freely.
#[derive(Debug)]
pub struct Topology {
    graph: GraphInternal<Id, EdgeStyle>,
}

impl Topology {
    /// Flattens and validates the diagram's scope tree.
    ///
    /// Nodes are collected over the entire tree first, so relations may be
    /// declared before the nodes they reference.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::Graph`] if a node ID is declared more than
    /// once or a relation references an undeclared node.
    pub fn from_diagram(diagram: &Diagram) -> Result<Self, VellumError> {
        let mut graph = GraphInternal::new();
        let mut relations = Vec::new();

        collect_scope(diagram.scope(), &mut graph, &mut relations)?;

        for relation in relations {
            for (role, id) in [("source", relation.source()), ("target", relation.target())] {
                if !graph.contains_node(id) {
                    return Err(VellumError::Graph(format!(
                        "relation {role} `{id}` does not name a declared node"
                    )));
                }
            }

            graph.add_edge(relation.source(), relation.target(), relation.style());
        }

        debug!(
            nodes = graph.nodes_count(),
            relations = graph.edges_count();
            "Topology built"
        );

        Ok(Self { graph })
    }

    /// Returns the number of declared nodes.
    pub fn node_count(&self) -> usize {
        self.graph.nodes_count()
    }

    /// Returns the number of relations.
    pub fn relation_count(&self) -> usize {
        self.graph.edges_count()
    }

    /// Returns the number of relations drawn with a non-solid line, i.e.
    /// conditional flow.
    pub fn conditional_relation_count(&self) -> usize {
        self.graph
            .edges()
            .filter(|style| *style != EdgeStyle::Solid)
            .count()
    }

    /// Returns `true` if the given node is declared in the diagram.
    pub fn contains(&self, id: Id) -> bool {
        self.graph.contains_node(id)
    }

    /// Returns every declared node ID, in declaration order.
    pub fn node_ids(&self) -> Vec<Id> {
        self.graph.nodes().collect()
    }

    /// Returns the nodes with no incoming relations, in declaration order.
    pub fn roots(&self) -> Vec<Id> {
        self.graph.roots().collect()
    }

    /// Returns the number of relations leaving the given node.
    pub fn fan_out(&self, id: Id) -> usize {
        self.graph.outgoing_nodes(id).count()
    }
}

fn collect_scope<'a>(
    scope: &'a Scope,
    graph: &mut GraphInternal<Id, EdgeStyle>,
    relations: &mut Vec<&'a Relation>,
) -> Result<(), VellumError> {
    for element in scope.elements() {
        match element {
            Element::Node(node) => {
                if graph.contains_node(node.id()) {
                    return Err(VellumError::Graph(format!(
                        "node `{}` is declared more than once",
                        node.id()
                    )));
                }
                graph.add_node(node.id(), node.id());
            }
            Element::Cluster(cluster) => collect_scope(cluster.scope(), graph, relations)?,
            Element::Relation(relation) => relations.push(relation),
        }
    }

    Ok(())
}

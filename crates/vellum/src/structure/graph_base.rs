//! Low-level graph data structures and primitives.
//!
//! This module provides the foundational graph implementation used by
//! topology validation. It offers a lightweight, custom graph structure
//! rather than a general graph library because the needs here are small:
//! node and edge storage, incoming/outgoing tracking per node, and root
//! detection.
//!
//! Nodes iterate in insertion order (backed by `IndexMap`) so everything
//! derived from a graph is deterministic for a given diagram.
//!
//! This is an internal module; its types are not exposed publicly but are
//! used by the higher-level `Topology` structure.

use indexmap::IndexMap;

use vellum_core::identifier::Id;

/// Index of an edge in the graph's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EdgeIndex(usize);

impl EdgeIndex {
    /// Creates a new edge index with the given numeric index.
    fn new(index: usize) -> Self {
        EdgeIndex(index)
    }
}

/// A directed edge in the graph.
///
/// Stores the source and target node IDs along with an associated value
/// of generic type `E`.
#[derive(Debug)]
struct Edge<E>
where
    E: Copy + std::fmt::Debug,
{
    #[allow(dead_code)]
    source: Id,
    target: Id,
    value: E,
}

impl<E> Edge<E>
where
    E: Copy + std::fmt::Debug,
{
    fn new(source: Id, target: Id, value: E) -> Self {
        Edge {
            source,
            target,
            value,
        }
    }
}

/// Core graph data structure.
///
/// The graph is directed and allows self-loops and multiple edges between
/// nodes.
///
/// Type parameters:
/// - `N`: Node data type (must be Copy and Debug)
/// - `E`: Edge data type (must be Copy and Debug)
#[derive(Debug)]
pub(crate) struct GraphInternal<N, E>
where
    N: Copy + std::fmt::Debug,
    E: Copy + std::fmt::Debug,
{
    nodes: IndexMap<Id, N>,
    edges: Vec<Edge<E>>,
    incoming_edges: IndexMap<Id, Vec<EdgeIndex>>,
    outgoing_edges: IndexMap<Id, Vec<EdgeIndex>>,
}

impl<N, E> GraphInternal<N, E>
where
    N: Copy + std::fmt::Debug,
    E: Copy + std::fmt::Debug,
{
    /// Creates a new empty graph.
    pub(crate) fn new() -> Self {
        GraphInternal {
            nodes: IndexMap::new(),
            edges: Vec::new(),
            incoming_edges: IndexMap::new(),
            outgoing_edges: IndexMap::new(),
        }
    }

    /// Returns the node data for the given ID without checking existence.
    ///
    /// # Panics
    /// Panics if the node ID does not exist in the graph.
    fn node_unchecked(&self, id: Id) -> N {
        self.nodes[&id]
    }

    /// Returns an iterator over all node data, in insertion order.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = N> {
        self.nodes.values().copied()
    }

    /// Returns the total number of nodes in the graph.
    pub(crate) fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// Checks if a node with the given ID exists in the graph.
    pub(crate) fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns an iterator over all edge data.
    pub(crate) fn edges(&self) -> impl Iterator<Item = E> {
        self.edges.iter().map(|edge| edge.value)
    }

    /// Returns the total number of edges in the graph.
    pub(crate) fn edges_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over root nodes (nodes with no incoming edges),
    /// in insertion order.
    pub(crate) fn roots(&self) -> impl Iterator<Item = N> {
        self.nodes.iter().filter_map(|(node_id, node)| {
            if self
                .incoming_edges
                .get(node_id)
                .is_none_or(|edges| edges.is_empty())
            {
                Some(*node)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over nodes that are targets of outgoing edges
    /// from the given source.
    ///
    /// Returns an empty iterator if the source node has no outgoing edges.
    pub(crate) fn outgoing_nodes(&self, source_id: Id) -> impl Iterator<Item = N> {
        self.outgoing_edges
            .get(&source_id)
            .into_iter()
            .flatten()
            .map(|idx| {
                let outgoing_node_id = self.edges[idx.0].target;
                self.node_unchecked(outgoing_node_id)
            })
    }

    /// Adds a node to the graph with the given ID and data.
    ///
    /// If a node with the same ID already exists, it will be replaced.
    pub(crate) fn add_node(&mut self, id: Id, node: N) {
        self.nodes.insert(id, node);
    }

    /// Adds a directed edge to the graph between two nodes.
    ///
    /// Updates both the edge storage and the incoming/outgoing edge indices.
    /// Both source and target nodes must exist in the graph.
    ///
    /// # Returns
    /// The index of the newly added edge.
    ///
    /// # Panics
    /// Panics in debug mode if either the source or target node does not
    /// exist in the graph. Callers validate endpoints before adding edges;
    /// in a release build this check is optimized away.
    pub(crate) fn add_edge(&mut self, source_id: Id, target_id: Id, edge: E) -> EdgeIndex {
        #[cfg(debug_assertions)]
        {
            assert!(
                self.nodes.contains_key(&source_id),
                "Adding edge: Source node {source_id} does not exist for {edge:?}",
            );
            assert!(
                self.nodes.contains_key(&target_id),
                "Adding edge: Target node {target_id} does not exist for {edge:?}",
            );
        }

        self.edges.push(Edge::new(source_id, target_id, edge));

        let idx = EdgeIndex::new(self.edges.len() - 1);
        self.outgoing_edges.entry(source_id).or_default().push(idx);
        self.incoming_edges.entry(target_id).or_default().push(idx);
        idx
    }
}

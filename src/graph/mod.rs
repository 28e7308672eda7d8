//! Graph construction and inspection.
//!
//! The Dijkstra query itself lives in [`traversal`]; this module covers
//! building the adjacency structure and looking at what was built.

mod traversal;


use std::collections::HashMap;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::model::{Link, Node};

/// A weighted graph of named nodes.
///
/// Nodes are keyed by a unique string name and own their outgoing
/// links. The structure is mutated only through [`Graph::add_node`] and
/// [`Graph::add_link`] (both `&mut self`); queries such as
/// [`Graph::shortest_distance`] take `&self` and allocate their own
/// working state, so concurrent read-only queries against a shared
/// graph are safe and construction cannot race a query.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<String, Node>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with no outgoing links.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateNode`] if a node with this name
    /// already exists; the graph is left unchanged.
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.nodes.contains_key(&name) {
            return Err(GraphError::DuplicateNode(name));
        }
        debug!(node = %name, "adding node");
        self.nodes.insert(name, Node::new());
        Ok(())
    }

    /// Adds a weighted link from `start` to `end`.
    ///
    /// When `mirror` is true the link is also recorded in the reverse
    /// direction with the same weight, simulating an undirected
    /// connection. The weight is expected to be non-negative but is not
    /// validated; negative weights break Dijkstra's guarantees.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is
    /// unknown. Both endpoints are validated before any mutation, so a
    /// failed call never records a partial link and every stored link
    /// targets a node that exists.
    pub fn add_link(&mut self, start: &str, end: &str, distance: f64, mirror: bool) -> Result<()> {
        if !self.nodes.contains_key(start) {
            return Err(GraphError::NodeNotFound(start.to_string()));
        }
        if !self.nodes.contains_key(end) {
            return Err(GraphError::NodeNotFound(end.to_string()));
        }

        debug!(from = %start, to = %end, distance, mirror, "adding link");
        if let Some(node) = self.nodes.get_mut(start) {
            node.links.push(Link::new(end, distance));
        }
        if mirror {
            if let Some(node) = self.nodes.get_mut(end) {
                node.links.push(Link::new(start, distance));
            }
        }
        Ok(())
    }

    /// Returns all node names, in map iteration order.
    ///
    /// The order is implementation-defined; callers must not assume it
    /// is sorted or stable across runs.
    pub fn node_names(&self) -> Vec<&str> {
        self.nodes.keys().map(String::as_str).collect()
    }

    /// Returns true if a node with this name exists.
    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of directed links; a mirrored link counts twice.
    pub fn link_count(&self) -> usize {
        self.nodes.values().map(|node| node.links.len()).sum()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn nodes(&self) -> &HashMap<String, Node> {
        &self.nodes
    }
}

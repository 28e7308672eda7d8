//! Value types for nodes and their outgoing links.

/// A directed, weighted connection from one node to another.
///
/// A link is owned by its source node and stores only the target name;
/// the [`crate::Graph`] node map is the sole authority on which nodes
/// exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Name of the destination node.
    pub target: String,
    /// Weight of the connection. Expected non-negative; not validated.
    pub distance: f64,
}

impl Link {
    /// Creates a link to `target` with the given weight.
    pub fn new(target: impl Into<String>, distance: f64) -> Self {
        Self {
            target: target.into(),
            distance,
        }
    }
}

/// A vertex in the graph.
///
/// Holds the ordered sequence of outgoing links. Incoming links are not
/// tracked; a node is identified externally through the graph's
/// name-to-node map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    /// Outgoing links, in insertion order.
    pub links: Vec<Link>,
}

impl Node {
    /// Creates a node with no outgoing links.
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }
}

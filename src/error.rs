//! Error handling for Wayline operations.
//!
//! All public APIs return `Result<T, GraphError>`. An unreachable target
//! is deliberately not an error: [`crate::Graph::shortest_distance`]
//! reports it as `f64::INFINITY`, so callers can always tell "no route"
//! apart from a misuse of the API.

use thiserror::Error;

/// Result type for Wayline operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while building or querying a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A node with this name already exists.
    ///
    /// Raised by `add_node`; the graph is left unchanged.
    #[error("node `{0}` already exists")]
    DuplicateNode(String),

    /// No node with this name exists in the graph.
    ///
    /// Raised by `add_link` and `shortest_distance` when an endpoint
    /// names an unknown node. Nodes are never created implicitly.
    #[error("node `{0}` not found")]
    NodeNotFound(String),

    /// Invalid argument or operation.
    ///
    /// Currently raised only by logging initialization (bad filter
    /// directive, subscriber already installed).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

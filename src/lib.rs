//! Wayline: a weighted route network answering shortest-distance queries.
//!
//! A [`Graph`] is built in-process from named nodes and weighted links,
//! then queried with [`Graph::shortest_distance`], which runs Dijkstra's
//! algorithm and returns the minimum distance between two nodes (or
//! `f64::INFINITY` when no route exists).
//!
//! # Example
//!
//! ```rust
//! use wayline::{Graph, Result};
//!
//! fn main() -> Result<()> {
//!     let mut graph = Graph::new();
//!     graph.add_node("A")?;
//!     graph.add_node("B")?;
//!     graph.add_node("C")?;
//!     graph.add_link("A", "B", 2.0, true)?;
//!     graph.add_link("B", "C", 3.0, true)?;
//!     assert_eq!(graph.shortest_distance("A", "C")?, 5.0);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod graph;
pub mod logging;
pub mod model;

pub use error::{GraphError, Result};
pub use graph::Graph;
pub use model::{Link, Node};

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Per-query bookkeeping for one node: whether its minimum distance has
/// been finalized, and the best distance found so far.
#[derive(Debug)]
struct SearchEntry {
    visited: bool,
    distance: f64,
}

impl SearchEntry {
    fn unvisited() -> Self {
        Self {
            visited: false,
            distance: f64::INFINITY,
        }
    }
}

impl Graph {
    /// Computes the minimum total weight of any path from `start` to
    /// `end` using Dijkstra's algorithm.
    ///
    /// Returns `f64::INFINITY` when `end` is unreachable from `start`;
    /// that is a legitimate answer, not an error. Ties between equally
    /// distant candidates are broken by map iteration order, which does
    /// not affect the returned distance under non-negative weights.
    ///
    /// The query allocates all of its working state per call and never
    /// mutates the graph, so any number of queries may run concurrently
    /// over a shared `&Graph`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `start` or `end` is not a
    /// known node.
    pub fn shortest_distance(&self, start: &str, end: &str) -> Result<f64> {
        if !self.contains_node(start) {
            return Err(GraphError::NodeNotFound(start.to_string()));
        }
        if !self.contains_node(end) {
            return Err(GraphError::NodeNotFound(end.to_string()));
        }

        let mut search: HashMap<&str, SearchEntry> = self
            .nodes()
            .keys()
            .map(|name| (name.as_str(), SearchEntry::unvisited()))
            .collect();
        if let Some(entry) = search.get_mut(start) {
            entry.distance = 0.0;
        }

        let mut remaining = search.len();
        while remaining > 0 {
            let Some(current) = Self::next_unvisited(&search) else {
                break;
            };

            // An infinite selection means everything left is unreachable
            // from `start`; relaxing from it changes nothing, so the loop
            // just marks the rest visited and terminates.
            let current_distance = search.get(current).map_or(f64::INFINITY, |e| e.distance);

            if let Some(node) = self.nodes().get(current) {
                for link in &node.links {
                    let Some(entry) = search.get_mut(link.target.as_str()) else {
                        continue;
                    };
                    if entry.visited {
                        continue;
                    }
                    let candidate = current_distance + link.distance;
                    if candidate < entry.distance {
                        entry.distance = candidate;
                    }
                }
            }

            if let Some(entry) = search.get_mut(current) {
                entry.visited = true;
            }
            remaining -= 1;
        }

        Ok(search.get(end).map_or(f64::INFINITY, |entry| entry.distance))
    }

    /// Picks the unvisited node with the smallest current distance, or
    /// `None` once every node has been finalized.
    fn next_unvisited<'graph>(search: &HashMap<&'graph str, SearchEntry>) -> Option<&'graph str> {
        search
            .iter()
            .filter(|(_, entry)| !entry.visited)
            .min_by(|a, b| {
                a.1.distance
                    .partial_cmp(&b.1.distance)
                    .unwrap_or(Ordering::Equal)
            })
            .map(|(name, _)| *name)
    }
}

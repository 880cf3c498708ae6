//! Degree centrality: the number of friends someone has.
//!
//! Only outgoing edges count. For a graph built with both directions per
//! friendship this equals the plain friend count.

use crate::{FriendGraph, FriendId};
use std::collections::BTreeMap;

/// Out-degree of every friend, as `f64` for ranking alongside the other measures.
///
/// # Example
///
/// ```
/// use friendgraph::{FriendGraph, FriendId};
/// use friendgraph::algo::centrality::degree_centrality;
///
/// let mut graph = FriendGraph::new();
/// graph.add_edge(1, 2).unwrap();
/// graph.add_edge(1, 3).unwrap();
///
/// let degrees = degree_centrality(&graph);
/// assert_eq!(degrees[&FriendId(1)], 2.0);
/// assert_eq!(degrees[&FriendId(2)], 0.0);
/// ```
#[must_use]
pub fn degree_centrality(graph: &FriendGraph) -> BTreeMap<FriendId, f64> {
    graph
        .ids()
        .map(|id| (id, graph.degree(id).unwrap_or(0) as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_star() {
        let mut graph = FriendGraph::new();
        for leaf in [2, 3, 4] {
            graph.add_friendship(1, leaf).unwrap();
        }

        let degrees = degree_centrality(&graph);
        assert_eq!(degrees[&FriendId(1)], 3.0);
        assert_eq!(degrees[&FriendId(4)], 1.0);
    }

    #[test]
    fn test_duplicates_ignored() {
        let mut graph = FriendGraph::new();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(1, 2).unwrap();

        assert_eq!(degree_centrality(&graph)[&FriendId(1)], 1.0);
    }

    #[test]
    fn test_empty_graph() {
        let graph = FriendGraph::new();
        assert!(degree_centrality(&graph).is_empty());
    }
}

//! Closeness centrality: measuring proximity to all other friends.
//!
//! # Intuition
//!
//! Closeness measures how quickly gossip can spread from a person.
//! High closeness = short average distance to everyone else.
//!
//! # Definition
//!
//! ```text
//! C_C(v) = (n - 1) / Σ_{u reachable from v} d(v, u)
//! ```
//!
//! `n` is the number of friends in the whole graph, not only the reachable
//! ones, and unreachable friends contribute nothing to the sum. A friend who
//! reaches nobody has a zero sum and gets closeness 0.
//!
//! # Harmonic variant
//!
//! On disconnected graphs the classic form mixes component sizes. The
//! harmonic form ignores unreachable friends entirely:
//!
//! ```text
//! C_H(v) = Σ_{u≠v} 1 / d(v, u)
//! ```
//!
//! # References
//!
//! - Bavelas (1950). "Communication patterns in task-oriented groups"
//! - Rochat (2009). "Closeness centrality extended to unconnected graphs"

use crate::algo::bfs::bfs_distances;
use crate::{FriendGraph, FriendId};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Configuration for closeness centrality.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosenessConfig {
    /// Sum inverse distances instead of inverting the distance sum.
    pub harmonic: bool,
}

/// Compute closeness centrality for all friends.
///
/// # Complexity
///
/// - Time: O(V(V + E)) (BFS from each friend)
/// - Space: O(V)
///
/// # Example
///
/// ```
/// use friendgraph::{FriendGraph, FriendId};
/// use friendgraph::algo::centrality::{closeness_centrality, ClosenessConfig};
///
/// let mut graph = FriendGraph::new();
/// // Path: 1 -- 2 -- 3
/// graph.add_friendship(1, 2).unwrap();
/// graph.add_friendship(2, 3).unwrap();
///
/// let scores = closeness_centrality(&graph, ClosenessConfig::default());
/// assert_eq!(scores[&FriendId(2)], 1.0); // 2 / (1 + 1)
/// assert!(scores[&FriendId(1)] < scores[&FriendId(2)]);
/// ```
#[must_use]
pub fn closeness_centrality(
    network: &FriendGraph,
    config: ClosenessConfig,
) -> BTreeMap<FriendId, f64> {
    let graph = network.as_petgraph();
    let n = graph.node_count();
    debug!(
        friends = n,
        edges = graph.edge_count(),
        harmonic = config.harmonic,
        "computing closeness centrality"
    );

    let mut result = BTreeMap::new();

    for source in graph.node_indices() {
        let distances = bfs_distances(graph, source);
        let reached = distances.iter().filter(|&&d| d > 0);

        let closeness = if config.harmonic {
            reached.map(|&d| 1.0 / f64::from(d)).sum()
        } else {
            let total: f64 = reached.map(|&d| f64::from(d)).sum();
            if total > 0.0 {
                (n as f64 - 1.0) / total
            } else {
                0.0
            }
        };

        let id = graph[source].id;
        trace!(friend = %id, closeness, "closeness pass");
        result.insert(id, closeness);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closeness_star() {
        let mut graph = FriendGraph::new();
        for leaf in [2, 3, 4] {
            graph.add_friendship(1, leaf).unwrap();
        }

        let scores = closeness_centrality(&graph, ClosenessConfig::default());

        // Hub: 3 / (1 + 1 + 1); leaf: 3 / (1 + 2 + 2)
        assert_eq!(scores[&FriendId(1)], 1.0);
        assert!((scores[&FriendId(2)] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_isolated_friend_is_zero() {
        let mut graph = FriendGraph::new();
        graph.add_vertex(1).unwrap();
        graph.add_friendship(2, 3).unwrap();

        let scores = closeness_centrality(&graph, ClosenessConfig::default());
        assert_eq!(scores[&FriendId(1)], 0.0);
        assert!(scores[&FriendId(1)].is_finite());
    }

    #[test]
    fn test_single_friend_is_zero() {
        let mut graph = FriendGraph::new();
        graph.add_vertex(0).unwrap();

        let scores = closeness_centrality(&graph, ClosenessConfig::default());
        assert_eq!(scores[&FriendId(0)], 0.0);
    }

    #[test]
    fn test_unreachable_friends_ignored_in_sum() {
        let mut graph = FriendGraph::new();
        // 1 -> 2, plus an unrelated 3
        graph.add_edge(1, 2).unwrap();
        graph.add_vertex(3).unwrap();

        let scores = closeness_centrality(&graph, ClosenessConfig::default());
        // (3 - 1) / 1
        assert_eq!(scores[&FriendId(1)], 2.0);
        assert_eq!(scores[&FriendId(2)], 0.0);
    }

    #[test]
    fn test_harmonic() {
        let mut graph = FriendGraph::new();
        graph.add_friendship(1, 2).unwrap();
        graph.add_friendship(2, 3).unwrap();

        let config = ClosenessConfig { harmonic: true };
        let scores = closeness_centrality(&graph, config);

        // 1/1 + 1/1 = 2, 1/1 + 1/2 = 1.5
        assert!((scores[&FriendId(2)] - 2.0).abs() < 1e-12);
        assert!((scores[&FriendId(1)] - 1.5).abs() < 1e-12);
        assert!((scores[&FriendId(3)] - 1.5).abs() < 1e-12);
    }
}

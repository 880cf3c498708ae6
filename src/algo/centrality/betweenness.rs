//! Betweenness centrality: who sits between friend groups.
//!
//! A person scores high when many shortest introduction chains between other
//! people must pass through them. Removing such a person splits the network
//! or makes everyone else further apart.
//!
//! ```text
//! C_B(v) = Σ_{s≠v≠t} σ_st(v) / σ_st
//! ```
//!
//! σ_st counts the shortest chains from s to t and σ_st(v) those that go
//! through v.
//!
//! # Computation
//!
//! Brandes (2001): one breadth-first sweep per source person records how many
//! shortest chains reach each friend and who they arrive from. Walking the
//! sweep backwards then spreads each friend's share onto the people in front
//! of them:
//!
//! ```text
//! δ_s(v) = Σ_{w: v∈P_s(w)} (σ_sv/σ_sw) × (1 + δ_s(w))
//! ```
//!
//! The source's own dependency is never credited to it.
//!
//! # Magnitude
//!
//! Scores are raw sums over ordered pairs. A friendship stored in both
//! directions is counted from both ends, so use
//! [`BetweennessConfig::undirected`] to halve them and
//! [`BetweennessConfig::normalized`] to divide by `(n-1)(n-2)`.

use crate::{FriendGraph, FriendId, FriendNode};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, trace};

/// Configuration for betweenness centrality.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetweennessConfig {
    /// Divide by `(n-1)(n-2)` after any halving.
    pub normalized: bool,
    /// Halve scores for graphs built with `add_friendship`.
    pub undirected: bool,
}

/// Betweenness of every friend.
///
/// Every call starts from a zeroed accumulator, so repeated calls return the
/// same scores.
///
/// Runs in O(V(V + E)) time and O(V + E) space.
///
/// # Example
///
/// ```
/// use friendgraph::{FriendGraph, FriendId};
/// use friendgraph::algo::centrality::{betweenness_centrality, BetweennessConfig};
///
/// let mut graph = FriendGraph::new();
/// // Path: 1 -- 2 -- 3
/// graph.add_friendship(1, 2).unwrap();
/// graph.add_friendship(2, 3).unwrap();
///
/// let scores = betweenness_centrality(&graph, BetweennessConfig::default());
/// // 2 is on the only path 1 -> 3 and on 3 -> 1
/// assert_eq!(scores[&FriendId(2)], 2.0);
/// assert_eq!(scores[&FriendId(1)], 0.0);
/// ```
#[must_use]
pub fn betweenness_centrality(
    network: &FriendGraph,
    config: BetweennessConfig,
) -> BTreeMap<FriendId, f64> {
    let graph = network.as_petgraph();
    let n = graph.node_count();
    debug!(
        friends = n,
        edges = graph.edge_count(),
        "computing betweenness centrality"
    );

    let mut scores = vec![0.0_f64; n];
    for source in graph.node_indices() {
        let sweep = Sweep::from_source(graph, source);
        for (idx, dependency) in sweep.dependencies() {
            scores[idx.index()] += dependency;
        }
        trace!(source = %graph[source].id, reached = sweep.order.len(), "betweenness pass");
    }

    if config.undirected {
        scores.iter_mut().for_each(|b| *b /= 2.0);
    }
    if config.normalized && n > 2 {
        let pairs = ((n - 1) * (n - 2)) as f64;
        scores.iter_mut().for_each(|b| *b /= pairs);
    }

    graph
        .node_indices()
        .map(|idx| (graph[idx].id, scores[idx.index()]))
        .collect()
}

/// One breadth-first sweep from a single source.
struct Sweep {
    source: NodeIndex,
    /// Shortest chains from the source, by node index.
    paths: Vec<f64>,
    /// Who each friend is reached from on a shortest chain.
    parents: Vec<Vec<NodeIndex>>,
    /// Friends in the order they were settled.
    order: Vec<NodeIndex>,
}

impl Sweep {
    fn from_source(graph: &DiGraph<FriendNode, ()>, source: NodeIndex) -> Self {
        let n = graph.node_count();
        let mut paths = vec![0.0_f64; n];
        let mut hops: Vec<Option<u32>> = vec![None; n];
        let mut parents = vec![Vec::new(); n];
        let mut order = Vec::with_capacity(n);

        paths[source.index()] = 1.0;
        hops[source.index()] = Some(0);
        let mut queue = VecDeque::from([source]);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            let next = hops[v.index()].map(|h| h + 1);

            for w in graph.neighbors_directed(v, Direction::Outgoing) {
                let slot = &mut hops[w.index()];
                if slot.is_none() {
                    *slot = next;
                    queue.push_back(w);
                }
                if *slot == next {
                    paths[w.index()] += paths[v.index()];
                    parents[w.index()].push(v);
                }
            }
        }

        Self {
            source,
            paths,
            parents,
            order,
        }
    }

    /// Dependency of the source on every other reached friend.
    fn dependencies(&self) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        let mut delta = vec![0.0_f64; self.paths.len()];
        for &w in self.order.iter().rev() {
            let carried = 1.0 + delta[w.index()];
            for &v in &self.parents[w.index()] {
                delta[v.index()] += (self.paths[v.index()] / self.paths[w.index()]) * carried;
            }
        }
        self.order
            .iter()
            .filter(move |&&w| w != self.source)
            .map(move |&w| (w, delta[w.index()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_betweenness_line_directed() {
        let mut graph = FriendGraph::new();
        // 1 -> 2 -> 3 -> 4
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph.add_edge(3, 4).unwrap();

        let scores = betweenness_centrality(&graph, BetweennessConfig::default());

        // 2 is on 1->3, 1->4; 3 is on 1->4, 2->4
        assert_eq!(scores[&FriendId(1)], 0.0);
        assert_eq!(scores[&FriendId(2)], 2.0);
        assert_eq!(scores[&FriendId(3)], 2.0);
        assert_eq!(scores[&FriendId(4)], 0.0);
    }

    #[test]
    fn test_betweenness_splits_between_equal_paths() {
        let mut graph = FriendGraph::new();
        // Square: 1 -- 2 -- 4 and 1 -- 3 -- 4
        graph.add_friendship(1, 2).unwrap();
        graph.add_friendship(1, 3).unwrap();
        graph.add_friendship(2, 4).unwrap();
        graph.add_friendship(3, 4).unwrap();

        let scores = betweenness_centrality(&graph, BetweennessConfig::default());

        // 2 carries half of 1<->4 in each direction, same for 3
        for id in [1, 2, 3, 4] {
            assert!((scores[&FriendId(id)] - 1.0).abs() < 1e-12, "{id}");
        }
    }

    #[test]
    fn test_betweenness_undirected_halves() {
        let mut graph = FriendGraph::new();
        graph.add_friendship(1, 2).unwrap();
        graph.add_friendship(2, 3).unwrap();

        let config = BetweennessConfig {
            normalized: false,
            undirected: true,
        };
        let scores = betweenness_centrality(&graph, config);
        assert_eq!(scores[&FriendId(2)], 1.0);
    }

    #[test]
    fn test_betweenness_normalized() {
        let mut graph = FriendGraph::new();
        for leaf in [2, 3, 4] {
            graph.add_friendship(1, leaf).unwrap();
        }

        let config = BetweennessConfig {
            normalized: true,
            undirected: false,
        };
        let scores = betweenness_centrality(&graph, config);

        // Hub is on all 6 ordered leaf pairs; (n-1)(n-2) = 6
        assert!((scores[&FriendId(1)] - 1.0).abs() < 1e-12);
        assert_eq!(scores[&FriendId(2)], 0.0);
    }

    #[test]
    fn test_sweep_counts_parallel_chains() {
        let mut graph = FriendGraph::new();
        graph.add_friendship(1, 2).unwrap();
        graph.add_friendship(1, 3).unwrap();
        graph.add_friendship(2, 4).unwrap();
        graph.add_friendship(3, 4).unwrap();

        let source = graph.node_index(FriendId(1)).unwrap();
        let far = graph.node_index(FriendId(4)).unwrap();
        let sweep = Sweep::from_source(graph.as_petgraph(), source);

        assert_eq!(sweep.order.len(), 4);
        assert_eq!(sweep.order[0], source);
        assert_eq!(sweep.paths[far.index()], 2.0);
        assert_eq!(sweep.parents[far.index()].len(), 2);

        // 4 is a leaf of this sweep; 2 and 3 each carry half a chain to it
        let deps: BTreeMap<_, _> = sweep.dependencies().collect();
        assert!(!deps.contains_key(&source));
        assert_eq!(deps[&far], 0.0);
        assert_eq!(deps[&graph.node_index(FriendId(2)).unwrap()], 0.5);
    }

    #[test]
    fn test_betweenness_small_graphs() {
        let mut graph = FriendGraph::new();
        assert!(betweenness_centrality(&graph, BetweennessConfig::default()).is_empty());

        graph.add_friendship(1, 2).unwrap();
        let scores = betweenness_centrality(&graph, BetweennessConfig::default());
        assert_eq!(scores[&FriendId(1)], 0.0);
        assert_eq!(scores[&FriendId(2)], 0.0);
    }
}

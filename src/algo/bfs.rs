//! Breadth-first shortest-path lengths over unweighted edges.

use crate::{Error, FriendGraph, FriendId, FriendNode, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{BTreeMap, VecDeque};

/// Hop distance from `start` to every friend in the graph.
///
/// Unreached friends map to `None`; `start` maps to `Some(0)`.
///
/// # Example
///
/// ```
/// use friendgraph::{FriendGraph, FriendId};
/// use friendgraph::algo::bfs::shortest_path_lengths;
///
/// let mut graph = FriendGraph::new();
/// graph.add_edge(1, 2).unwrap();
/// graph.add_edge(2, 3).unwrap();
/// graph.add_vertex(4).unwrap();
///
/// let lengths = shortest_path_lengths(&graph, FriendId(1)).unwrap();
/// assert_eq!(lengths[&FriendId(3)], Some(2));
/// assert_eq!(lengths[&FriendId(4)], None);
/// ```
pub fn shortest_path_lengths(
    graph: &FriendGraph,
    start: FriendId,
) -> Result<BTreeMap<FriendId, Option<u32>>> {
    let source = graph
        .node_index(start)
        .ok_or(Error::FriendNotFound(start))?;
    let dist = bfs_distances(graph.as_petgraph(), source);

    Ok(graph
        .friends()
        .filter_map(|friend| {
            let idx = graph.node_index(friend.id)?;
            Some((friend.id, u32::try_from(dist[idx.index()]).ok()))
        })
        .collect())
}

/// BFS from `source` over outgoing edges.
///
/// Returns a distance array indexed by node index. -1 means unreachable,
/// 0 means self.
pub(crate) fn bfs_distances(graph: &DiGraph<FriendNode, ()>, source: NodeIndex) -> Vec<i32> {
    let mut dist = vec![-1_i32; graph.node_count()];
    dist[source.index()] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let v_dist = dist[v.index()];

        for w in graph.neighbors_directed(v, Direction::Outgoing) {
            if dist[w.index()] < 0 {
                dist[w.index()] = v_dist + 1;
                queue.push_back(w);
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bfs_chain_undirected() {
        let mut graph = FriendGraph::new();
        for (a, b) in [(1, 2), (2, 3), (3, 4)] {
            graph.add_friendship(a, b).unwrap();
        }

        let lengths = shortest_path_lengths(&graph, FriendId(4)).unwrap();
        assert_eq!(lengths[&FriendId(4)], Some(0));
        assert_eq!(lengths[&FriendId(3)], Some(1));
        assert_eq!(lengths[&FriendId(1)], Some(3));
    }

    #[test]
    fn test_bfs_respects_direction() {
        let mut graph = FriendGraph::new();
        graph.add_edge(1, 2).unwrap();

        let from_two = shortest_path_lengths(&graph, FriendId(2)).unwrap();
        assert_eq!(from_two[&FriendId(1)], None);
        assert_eq!(from_two[&FriendId(2)], Some(0));
    }

    #[test]
    fn test_bfs_takes_shortest_route() {
        let mut graph = FriendGraph::new();
        // 1 -> 2 -> 3 -> 4 and the shortcut 1 -> 4
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph.add_edge(3, 4).unwrap();
        graph.add_edge(1, 4).unwrap();

        let lengths = shortest_path_lengths(&graph, FriendId(1)).unwrap();
        assert_eq!(lengths[&FriendId(4)], Some(1));
    }

    #[test]
    fn test_self_loop_keeps_zero() {
        let mut graph = FriendGraph::new();
        graph.add_edge(1, 1).unwrap();
        graph.add_edge(1, 2).unwrap();

        let lengths = shortest_path_lengths(&graph, FriendId(1)).unwrap();
        assert_eq!(lengths[&FriendId(1)], Some(0));
    }

    #[test]
    fn test_unknown_start() {
        let graph = FriendGraph::new();
        assert_eq!(
            shortest_path_lengths(&graph, FriendId(8)),
            Err(Error::FriendNotFound(FriendId(8)))
        );
    }
}

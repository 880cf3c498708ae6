//! Star subgraphs around the best-connected friends.

use crate::algo::centrality::CentralityKind;
use crate::algo::rank::{check_bound, rank_buckets};
use crate::{FriendGraph, FriendId, Result};
use tracing::debug;

/// Build the star subgraph rooted at `root`: the root plus an edge to each
/// of its direct neighbors.
///
/// The result shares nothing with `graph`. An unknown root yields an empty graph.
#[must_use]
pub fn star_subgraph(graph: &FriendGraph, root: FriendId) -> FriendGraph {
    let mut star = FriendGraph::new();
    if !graph.contains(root) {
        return star;
    }
    star.get_or_create_friend(root);
    for neighbor in graph.neighbors(root) {
        star.link(root, neighbor);
    }
    star
}

/// One star subgraph per friend in the top `number` degree buckets.
///
/// Ties are expanded exactly like
/// [`top_centrality_for`](crate::algo::rank::top_centrality_for), so the
/// result can hold more than `number` graphs.
///
/// # Example
///
/// ```
/// use friendgraph::FriendGraph;
///
/// let mut graph = FriendGraph::new();
/// graph.add_friendship(1, 2).unwrap();
/// graph.add_friendship(1, 3).unwrap();
///
/// let stars = graph.export_top_degree_graphs(1).unwrap();
/// assert_eq!(stars.len(), 1);
/// assert_eq!(stars[0].vertex_count(), 3);
/// ```
pub fn export_top_degree_graphs(graph: &FriendGraph, number: usize) -> Result<Vec<FriendGraph>> {
    check_bound(number, graph.vertex_count())?;

    let stars: Vec<FriendGraph> = rank_buckets(graph, CentralityKind::Degree)
        .into_iter()
        .take(number)
        .flat_map(|bucket| bucket.members)
        .map(|root| star_subgraph(graph, root))
        .collect();

    debug!(number, subgraphs = stars.len(), "exported top degree subgraphs");
    Ok(stars)
}

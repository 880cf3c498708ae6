//! Tie-aware top-N ranking.
//!
//! Friends are grouped into buckets sharing an *exact* centrality value and
//! buckets are ordered by descending value. A top-N query returns every
//! friend of the first `N` buckets, so the result can hold more than `N`
//! friends whenever values tie.
//!
//! ```text
//! degrees:  a=3 b=3 c=2 d=1
//! buckets:  [3: a b] [2: c] [1: d]
//! top 2  →  a b c
//! ```

use crate::algo::centrality::{degree_centrality, CentralityKind};
use crate::{Error, FriendGraph, FriendId, Result};
use std::collections::BTreeMap;
use tracing::warn;

/// Friends sharing one exact centrality value.
#[derive(Debug, Clone, PartialEq)]
pub struct RankBucket {
    /// The shared value.
    pub value: f64,
    /// Members in ascending ID order.
    pub members: Vec<FriendId>,
}

/// A friend selected by a top-N query, with the value it was ranked by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedFriend {
    /// The friend.
    pub id: FriendId,
    /// Centrality value used for ranking.
    pub value: f64,
}

/// Group scores into buckets of equal value, highest value first.
#[must_use]
pub fn bucket_scores(scores: &BTreeMap<FriendId, f64>) -> Vec<RankBucket> {
    let mut sorted: Vec<(FriendId, f64)> = scores.iter().map(|(&id, &v)| (id, v)).collect();
    // Stable: ties keep ascending ID order.
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut buckets: Vec<RankBucket> = Vec::new();
    for (id, value) in sorted {
        match buckets.last_mut() {
            Some(bucket) if bucket.value == value => bucket.members.push(id),
            _ => buckets.push(RankBucket {
                value,
                members: vec![id],
            }),
        }
    }
    buckets
}

/// Current values for `kind`: live degree, or the stored closeness/betweenness.
///
/// Warns when stored values were computed on an older graph structure.
pub fn current_scores(graph: &FriendGraph, kind: CentralityKind) -> BTreeMap<FriendId, f64> {
    if graph.is_stale(kind) {
        warn!(%kind, "ranking by stored values that predate the current graph");
    }
    match kind {
        CentralityKind::Degree => degree_centrality(graph),
        CentralityKind::Closeness => graph.friends().map(|f| (f.id, f.closeness())).collect(),
        CentralityKind::Betweenness => graph.friends().map(|f| (f.id, f.betweenness())).collect(),
    }
}

/// Buckets for `kind` over the whole graph.
#[must_use]
pub fn rank_buckets(graph: &FriendGraph, kind: CentralityKind) -> Vec<RankBucket> {
    bucket_scores(&current_scores(graph, kind))
}

/// Every friend in the top `number` buckets of `scores`.
///
/// Fails with [`Error::InvalidArgument`] unless `1 <= number <= scores.len()`.
pub fn rank_scores(scores: &BTreeMap<FriendId, f64>, number: usize) -> Result<Vec<RankedFriend>> {
    check_bound(number, scores.len())?;
    Ok(take_buckets(bucket_scores(scores), number))
}

/// Every friend in the top `number` buckets for `kind`.
///
/// Closeness and betweenness read the values stored by the last
/// `measure_and_set_*` call; degree is computed live.
///
/// # Example
///
/// ```
/// use friendgraph::FriendGraph;
/// use friendgraph::algo::centrality::CentralityKind;
///
/// let mut graph = FriendGraph::new();
/// graph.add_friendship(1, 2).unwrap();
/// graph.add_friendship(1, 3).unwrap();
/// graph.add_friendship(2, 3).unwrap();
/// graph.add_friendship(3, 4).unwrap();
///
/// // Degrees: 3 → 3, {1, 2} → 2, 4 → 1
/// let top = graph.top_centrality_for(2, CentralityKind::Degree).unwrap();
/// let ids: Vec<u32> = top.iter().map(|f| f.id.get()).collect();
/// assert_eq!(ids, vec![3, 1, 2]);
/// ```
pub fn top_centrality_for(
    graph: &FriendGraph,
    number: usize,
    kind: CentralityKind,
) -> Result<Vec<RankedFriend>> {
    check_bound(number, graph.vertex_count())?;
    Ok(take_buckets(rank_buckets(graph, kind), number))
}

pub(crate) fn check_bound(number: usize, vertex_count: usize) -> Result<()> {
    if number == 0 || number > vertex_count {
        return Err(Error::InvalidArgument(format!(
            "number must be between 1 and the number of friends ({vertex_count}), got {number}"
        )));
    }
    Ok(())
}

fn take_buckets(buckets: Vec<RankBucket>, number: usize) -> Vec<RankedFriend> {
    buckets
        .into_iter()
        .take(number)
        .flat_map(|bucket| {
            let value = bucket.value;
            bucket
                .members
                .into_iter()
                .map(move |id| RankedFriend { id, value })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(u32, f64)]) -> BTreeMap<FriendId, f64> {
        pairs.iter().map(|&(id, v)| (FriendId(id), v)).collect()
    }

    #[test]
    fn test_buckets_group_exact_values() {
        let buckets = bucket_scores(&scores(&[(4, 1.0), (1, 3.0), (2, 1.0), (3, 2.0)]));

        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].value, 3.0);
        assert_eq!(buckets[2].members, vec![FriendId(2), FriendId(4)]);
    }

    #[test]
    fn test_rank_counts_buckets_not_friends() {
        let s = scores(&[(1, 5.0), (2, 5.0), (3, 5.0), (4, 1.0)]);

        let top = rank_scores(&s, 1).unwrap();
        assert_eq!(top.len(), 3);
        assert!(top.iter().all(|f| f.value == 5.0));

        let top = rank_scores(&s, 2).unwrap();
        assert_eq!(top.len(), 4);
    }

    #[test]
    fn test_rank_bounds() {
        let s = scores(&[(1, 1.0), (2, 2.0)]);

        assert!(matches!(rank_scores(&s, 0), Err(Error::InvalidArgument(_))));
        assert!(matches!(rank_scores(&s, 3), Err(Error::InvalidArgument(_))));
        // All values distinct: every bucket fits.
        assert_eq!(rank_scores(&s, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_number_above_bucket_count_returns_everyone() {
        let s = scores(&[(1, 1.0), (2, 1.0), (3, 1.0)]);
        assert_eq!(rank_scores(&s, 3).unwrap().len(), 3);
    }

    #[test]
    fn test_top_centrality_empty_graph() {
        let graph = FriendGraph::new();
        assert!(top_centrality_for(&graph, 1, CentralityKind::Degree).is_err());
    }

    #[test]
    fn test_top_betweenness_reads_stored_values() {
        let mut graph = FriendGraph::new();
        graph.add_friendship(1, 2).unwrap();
        graph.add_friendship(2, 3).unwrap();

        // Before measuring every stored value is 0: one bucket.
        let before = top_centrality_for(&graph, 1, CentralityKind::Betweenness).unwrap();
        assert_eq!(before.len(), 3);

        graph.measure_and_set_betweenness_centrality();
        let after = top_centrality_for(&graph, 1, CentralityKind::Betweenness).unwrap();
        assert_eq!(
            after,
            vec![RankedFriend {
                id: FriendId(2),
                value: 2.0
            }]
        );
    }
}

//! Ready-made friend graphs: the two reference networks and seeded random ones.

use crate::{FriendGraph, FriendId};
use rand::prelude::*;
use rand_xorshift::XorShiftRng;
use std::collections::HashSet;

/// A six-person chain `10 - 20 - 30 - 40 - 50 - 60` with the extra
/// friendships `30 - 50` and `40 - 60`, all inserted in both directions.
///
/// ```text
/// 10 -- 20 -- 30 -- 40 -- 60
///              \    |    /
///               \-- 50 -/
/// ```
pub fn bridged_chain() -> FriendGraph {
    let mut graph = FriendGraph::with_capacity(6, 14);
    for (a, b) in [
        (10, 20),
        (20, 30),
        (30, 40),
        (30, 50),
        (40, 50),
        (40, 60),
        (50, 60),
    ] {
        graph.link(FriendId(a), FriendId(b));
        graph.link(FriendId(b), FriendId(a));
    }
    graph
}

/// A seven-person directed community over `{18, 23, 25, 32, 44, 50, 65}`.
///
/// Some friendships are one-sided, which makes it a good fixture for
/// friend suggestions.
pub fn community_sample() -> FriendGraph {
    let mut graph = FriendGraph::with_capacity(7, 13);
    for id in [32, 50, 44, 18, 25, 65, 23] {
        graph.get_or_create_friend(FriendId(id));
    }
    for (from, to) in [
        (32, 50),
        (32, 44),
        (44, 50),
        (18, 23),
        (18, 44),
        (25, 23),
        (25, 65),
        (25, 18),
        (65, 23),
        (23, 18),
        (23, 25),
        (23, 65),
        (50, 23),
    ] {
        graph.link(FriendId(from), FriendId(to));
    }
    graph
}

/// Configuration for [`random_friendships`].
#[derive(Debug, Clone, Copy)]
pub struct RandomGraphConfig {
    /// Friends are numbered `0..vertices`.
    pub vertices: u32,
    /// Distinct undirected friendships to create (capped at the number of pairs).
    pub friendships: usize,
    /// Random seed for reproducibility.
    pub seed: u64,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            vertices: 20,
            friendships: 40,
            seed: 42,
        }
    }
}

/// Generate a random undirected friend graph.
///
/// Each friendship is stored in both directions. The same config always
/// yields the same graph.
///
/// # Example
///
/// ```
/// use friendgraph::generate::{random_friendships, RandomGraphConfig};
///
/// let config = RandomGraphConfig { vertices: 10, friendships: 15, seed: 7 };
/// let graph = random_friendships(config);
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 30);
/// ```
#[must_use]
pub fn random_friendships(config: RandomGraphConfig) -> FriendGraph {
    let n = config.vertices;
    let max_pairs = (n as usize) * (n as usize).saturating_sub(1) / 2;
    let target = config.friendships.min(max_pairs);

    let mut graph = FriendGraph::with_capacity(n as usize, target * 2);
    for id in 0..n {
        graph.get_or_create_friend(FriendId(id));
    }

    let mut rng = XorShiftRng::seed_from_u64(config.seed);
    let mut seen: HashSet<(u32, u32)> = HashSet::with_capacity(target);
    while seen.len() < target {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a == b || !seen.insert((a.min(b), a.max(b))) {
            continue;
        }
        graph.link(FriendId(a), FriendId(b));
        graph.link(FriendId(b), FriendId(a));
    }

    graph
}

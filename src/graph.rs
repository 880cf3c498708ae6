//! Friend graph implementation using petgraph.

use crate::algo::centrality::{
    betweenness_centrality, closeness_centrality, BetweennessConfig, CentralityKind,
    ClosenessConfig,
};
use crate::algo::{bfs, rank, subgraph, suggest};
use crate::{FriendId, FriendNode, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::debug;

/// A directed graph of friend relationships.
///
/// Uses petgraph's directed graph as an arena; friends refer to each other
/// only through [`FriendId`]s resolved by the graph. Undirected friendships
/// are a caller convention: insert both directions, or use
/// [`add_friendship`](Self::add_friendship).
///
/// # Example
///
/// ```rust
/// use friendgraph::{FriendGraph, FriendId};
///
/// let mut graph = FriendGraph::new();
/// graph.add_edge(1, 2).unwrap();
/// graph.add_edge(1, 2).unwrap(); // duplicate: neighbor set unchanged
///
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_insertions(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.degree(FriendId(1)), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct FriendGraph {
    /// The underlying directed graph.
    graph: DiGraph<FriendNode, ()>,

    /// Map from friend ID to node index, ordered by ID.
    friend_index: BTreeMap<FriendId, NodeIndex>,

    /// Raw `add_edge` calls, duplicates included.
    edge_insertions: usize,

    /// Bumped on every structural change.
    revision: u64,
    closeness_revision: Option<u64>,
    betweenness_revision: Option<u64>,
}

impl Default for FriendGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl FriendGraph {
    /// Create an empty friend graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            friend_index: BTreeMap::new(),
            edge_insertions: 0,
            revision: 0,
            closeness_revision: None,
            betweenness_revision: None,
        }
    }

    /// Create a friend graph with estimated capacity.
    pub fn with_capacity(friends: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(friends, edges),
            ..Self::new()
        }
    }

    /// Add a friend. Adding an existing friend is a no-op.
    ///
    /// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument)
    /// if `id` is negative.
    pub fn add_vertex(&mut self, id: i64) -> Result<FriendId> {
        let id = FriendId::try_from(id)?;
        self.get_or_create_friend(id);
        Ok(id)
    }

    /// Add a directed edge `from -> to`, creating missing endpoints.
    ///
    /// Both ids are validated before anything is inserted. The raw insertion
    /// counter grows on every call, even when the edge already exists.
    pub fn add_edge(&mut self, from: i64, to: i64) -> Result<()> {
        let from = FriendId::try_from(from)?;
        let to = FriendId::try_from(to)?;
        self.link(from, to);
        Ok(())
    }

    /// Add an undirected friendship: `a -> b` and `b -> a`.
    ///
    /// Counts as two edge insertions.
    pub fn add_friendship(&mut self, a: i64, b: i64) -> Result<()> {
        let a = FriendId::try_from(a)?;
        let b = FriendId::try_from(b)?;
        self.link(a, b);
        self.link(b, a);
        Ok(())
    }

    /// Insert a directed edge between already validated ids.
    pub(crate) fn link(&mut self, from: FriendId, to: FriendId) {
        let from_idx = self.get_or_create_friend(from);
        let to_idx = self.get_or_create_friend(to);

        if self.graph.find_edge(from_idx, to_idx).is_none() {
            self.graph.add_edge(from_idx, to_idx, ());
            self.revision += 1;
        }
        self.edge_insertions += 1;
    }

    /// Get or create a friend node.
    pub(crate) fn get_or_create_friend(&mut self, id: FriendId) -> NodeIndex {
        if let Some(&idx) = self.friend_index.get(&id) {
            return idx;
        }

        let idx = self.graph.add_node(FriendNode::new(id));
        self.friend_index.insert(id, idx);
        self.revision += 1;
        idx
    }

    /// Get a friend by ID.
    pub fn friend(&self, id: FriendId) -> Option<&FriendNode> {
        self.friend_index.get(&id).map(|&idx| &self.graph[idx])
    }

    /// Whether `id` is a vertex of this graph.
    pub fn contains(&self, id: FriendId) -> bool {
        self.friend_index.contains_key(&id)
    }

    /// Iterate over all friends in ascending ID order.
    pub fn friends(&self) -> impl Iterator<Item = &FriendNode> + '_ {
        self.friend_index.values().map(move |&idx| &self.graph[idx])
    }

    /// Iterate over all friend IDs in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = FriendId> + '_ {
        self.friend_index.keys().copied()
    }

    /// Outgoing neighbors of `id`, ascending. Empty if `id` is unknown.
    pub fn neighbors(&self, id: FriendId) -> Vec<FriendId> {
        let Some(&idx) = self.friend_index.get(&id) else {
            return Vec::new();
        };
        let mut neighbors: Vec<FriendId> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| self.graph[n].id)
            .collect();
        neighbors.sort_unstable();
        neighbors
    }

    /// Number of distinct outgoing neighbors, or `None` if `id` is unknown.
    pub fn degree(&self, id: FriendId) -> Option<usize> {
        self.friend_index.get(&id).map(|&idx| {
            self.graph
                .neighbors_directed(idx, Direction::Outgoing)
                .count()
        })
    }

    /// Number of friends.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of `add_edge` calls, duplicates included.
    pub fn edge_insertions(&self) -> usize {
        self.edge_insertions
    }

    /// Number of distinct directed edges (sum of neighbor-set sizes).
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Export adjacency as `id -> neighbor ids`, multiplicities discarded.
    pub fn export_graph(&self) -> BTreeMap<FriendId, BTreeSet<FriendId>> {
        self.ids()
            .map(|id| (id, self.neighbors(id).into_iter().collect()))
            .collect()
    }

    /// Render the adjacency list as text.
    ///
    /// The header reports the vertex count and the raw edge-insertion count.
    pub fn adjacency_string(&self) -> String {
        let mut s = format!(
            "Adjacency list (size {}+{} integers):",
            self.vertex_count(),
            self.edge_insertions
        );
        for id in self.ids() {
            s.push_str(&format!("\n\t{id}: "));
            for neighbor in self.neighbors(id) {
                s.push_str(&format!("{neighbor}, "));
            }
        }
        s
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn as_petgraph(&self) -> &DiGraph<FriendNode, ()> {
        &self.graph
    }

    /// Node index of a friend in [`as_petgraph`](Self::as_petgraph).
    pub fn node_index(&self, id: FriendId) -> Option<NodeIndex> {
        self.friend_index.get(&id).copied()
    }

    /// Hop distance from `start` to every friend; `None` when unreachable.
    pub fn shortest_path_lengths(&self, start: i64) -> Result<BTreeMap<FriendId, Option<u32>>> {
        bfs::shortest_path_lengths(self, FriendId::try_from(start)?)
    }

    /// Compute closeness centrality and store it on every friend.
    ///
    /// Previous values are overwritten. Returns the fresh scores.
    pub fn measure_and_set_closeness_centrality(&mut self) -> BTreeMap<FriendId, f64> {
        self.measure_and_set_closeness_centrality_with(ClosenessConfig::default())
    }

    /// [`measure_and_set_closeness_centrality`](Self::measure_and_set_closeness_centrality)
    /// with an explicit configuration.
    pub fn measure_and_set_closeness_centrality_with(
        &mut self,
        config: ClosenessConfig,
    ) -> BTreeMap<FriendId, f64> {
        let scores = closeness_centrality(self, config);
        for (id, &score) in &scores {
            if let Some(&idx) = self.friend_index.get(id) {
                self.graph[idx].closeness = score;
            }
        }
        self.closeness_revision = Some(self.revision);
        debug!(friends = scores.len(), "stored closeness centrality");
        scores
    }

    /// Compute betweenness centrality and store it on every friend.
    ///
    /// Every call starts from zero, so repeated calls never accumulate.
    pub fn measure_and_set_betweenness_centrality(&mut self) -> BTreeMap<FriendId, f64> {
        self.measure_and_set_betweenness_centrality_with(BetweennessConfig::default())
    }

    /// [`measure_and_set_betweenness_centrality`](Self::measure_and_set_betweenness_centrality)
    /// with an explicit configuration.
    pub fn measure_and_set_betweenness_centrality_with(
        &mut self,
        config: BetweennessConfig,
    ) -> BTreeMap<FriendId, f64> {
        let scores = betweenness_centrality(self, config);
        for (id, &score) in &scores {
            if let Some(&idx) = self.friend_index.get(id) {
                self.graph[idx].betweenness = score;
            }
        }
        self.betweenness_revision = Some(self.revision);
        debug!(friends = scores.len(), "stored betweenness centrality");
        scores
    }

    /// Whether the stored values for `kind` predate the current structure.
    ///
    /// Degree is always computed live and is never stale.
    pub fn is_stale(&self, kind: CentralityKind) -> bool {
        let measured = match kind {
            CentralityKind::Degree => return false,
            CentralityKind::Closeness => self.closeness_revision,
            CentralityKind::Betweenness => self.betweenness_revision,
        };
        measured != Some(self.revision)
    }

    /// The friends in the top `number` value groups for `kind`.
    ///
    /// See [`rank::top_centrality_for`].
    pub fn top_centrality_for(
        &self,
        number: usize,
        kind: CentralityKind,
    ) -> Result<Vec<rank::RankedFriend>> {
        rank::top_centrality_for(self, number, kind)
    }

    /// Star subgraphs for the top `number` degree groups.
    ///
    /// See [`subgraph::export_top_degree_graphs`].
    pub fn export_top_degree_graphs(&self, number: usize) -> Result<Vec<FriendGraph>> {
        subgraph::export_top_degree_graphs(self, number)
    }

    /// Friend-of-friend suggestions within `person`'s neighborhood.
    ///
    /// See [`suggest::suggest_friends_of_friends`].
    pub fn suggest_friends_of_friends(
        &self,
        person: i64,
    ) -> Result<BTreeMap<FriendId, Vec<FriendId>>> {
        suggest::suggest_friends_of_friends(self, FriendId::try_from(person)?)
    }
}

impl fmt::Display for FriendGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.adjacency_string())
    }
}

/// Statistics about a friend graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStats {
    /// Number of friends.
    pub vertex_count: usize,
    /// Raw `add_edge` calls.
    pub edge_insertions: usize,
    /// Distinct directed edges.
    pub edge_count: usize,
    /// Average out-degree.
    pub average_degree: f64,
}

impl FriendGraph {
    /// Compute statistics about the graph.
    pub fn stats(&self) -> GraphStats {
        let vertex_count = self.vertex_count();
        let edge_count = self.edge_count();

        let average_degree = if vertex_count > 0 {
            edge_count as f64 / vertex_count as f64
        } else {
            0.0
        };

        GraphStats {
            vertex_count,
            edge_insertions: self.edge_insertions,
            edge_count,
            average_degree,
        }
    }
}

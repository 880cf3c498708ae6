#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]

//! Social graph analytics: who is popular, who is central, who is a broker.
//!
//! `friendgraph` keeps an in-memory graph of "friend" relationships keyed by
//! small non-negative integers and measures importance over it:
//!
//! - [`FriendGraph`] - the graph store (directed; friendships are inserted
//!   in both directions or via [`FriendGraph::add_friendship`])
//! - [`algo::bfs`] - unweighted shortest-path lengths
//! - [`algo::centrality`] - degree, closeness and Brandes betweenness
//! - [`algo::rank`] - tie-aware top-N selection
//! - [`algo::subgraph`] - star subgraphs around the top friends
//! - [`algo::suggest`] - friend-of-friend introductions
//! - [`generate`] - sample and seeded random networks
//!
//! # Centrality at a Glance
//!
//! | Measure | Captures | In a social network |
//! |---------|----------|---------------------|
//! | Degree | Number of connections | Popularity |
//! | Closeness | Inverse average distance | Reach, speed of gossip |
//! | Betweenness | Share of shortest paths | Brokerage between groups |
//!
//! Betweenness is usually the better signal of influence: the person through
//! whom communication between communities flows.
//!
//! # Ranking and Ties
//!
//! Top-N queries count *value groups*, not friends. Asking for the top 2 by
//! degree returns everyone with the highest degree plus everyone with the
//! second highest, however many friends that is.
//!
//! # Example
//!
//! ```rust
//! use friendgraph::{CentralityKind, FriendGraph, FriendId};
//!
//! let mut graph = FriendGraph::new();
//! graph.add_friendship(1, 2).unwrap();
//! graph.add_friendship(2, 3).unwrap();
//! graph.add_friendship(3, 4).unwrap();
//!
//! graph.measure_and_set_betweenness_centrality();
//! let top = graph.top_centrality_for(1, CentralityKind::Betweenness).unwrap();
//! let ids: Vec<FriendId> = top.iter().map(|f| f.id).collect();
//! assert_eq!(ids, vec![FriendId(2), FriendId(3)]);
//!
//! let suggestions = graph.suggest_friends_of_friends(2).unwrap();
//! assert_eq!(suggestions[&FriendId(1)], vec![FriendId(3)]);
//! ```

pub mod algo;
mod error;
pub mod generate;
mod graph;
mod node;

pub use algo::centrality::{BetweennessConfig, CentralityKind, ClosenessConfig};
pub use algo::rank::{RankBucket, RankedFriend};
pub use error::{Error, Result};
pub use graph::{FriendGraph, GraphStats};
pub use node::{FriendId, FriendNode};

// Re-export petgraph for advanced graph operations
pub use petgraph;

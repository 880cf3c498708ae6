//! Vertex types: identifiers and per-friend payload.

use crate::{Error, Result};
use std::fmt;

/// Identifier of a friend (vertex). Always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FriendId(pub u32);

impl FriendId {
    /// The raw identifier value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FriendId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl TryFrom<i64> for FriendId {
    type Error = Error;

    fn try_from(id: i64) -> Result<Self> {
        if id < 0 {
            return Err(Error::InvalidArgument(format!(
                "friend id must be 0 or greater, got {id}"
            )));
        }
        u32::try_from(id).map(Self).map_err(|_| {
            Error::InvalidArgument(format!("friend id {id} exceeds {}", u32::MAX))
        })
    }
}

/// A friend in the graph.
///
/// Adjacency is owned by [`FriendGraph`](crate::FriendGraph); the node only
/// carries its identity and the last centrality values written by
/// `measure_and_set_*`.
#[derive(Debug, Clone, PartialEq)]
pub struct FriendNode {
    /// Unique identifier.
    pub id: FriendId,
    pub(crate) closeness: f64,
    pub(crate) betweenness: f64,
}

impl FriendNode {
    /// Create a node with zeroed centrality slots.
    pub fn new(id: impl Into<FriendId>) -> Self {
        Self {
            id: id.into(),
            closeness: 0.0,
            betweenness: 0.0,
        }
    }

    /// Closeness centrality from the last closeness pass (0 before any pass).
    pub fn closeness(&self) -> f64 {
        self.closeness
    }

    /// Betweenness centrality from the last betweenness pass (0 before any pass).
    pub fn betweenness(&self) -> f64 {
        self.betweenness
    }
}

impl fmt::Display for FriendNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

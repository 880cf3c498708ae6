//! Error types for friendgraph.

use crate::FriendId;
use thiserror::Error;

/// Error type for graph construction and analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied argument is outside its contract: a negative or
    /// oversized identifier, a top-N bound outside `[1, vertex_count]`, or an
    /// unrecognized centrality kind.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The identifier is valid but no such vertex exists.
    #[error("Friend not found: {0}")]
    FriendNotFound(FriendId),
}

/// Result type for friendgraph operations.
pub type Result<T> = std::result::Result<T, Error>;

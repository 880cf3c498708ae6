//! Centrality algorithms for measuring friend importance.
//!
//! | Algorithm | Question Answered | Complexity |
//! |-----------|-------------------|------------|
//! | Degree | How many friends? | O(V) |
//! | Closeness | How close to all others? | O(V(V + E)) |
//! | Betweenness | How often on shortest paths? | O(V(V + E)) |
//!
//! ```text
//! Want to find...                 Use...
//! ─────────────────────────────────────────────
//! Popular people                  Degree
//! Fast information spreaders      Closeness
//! Brokers between friend groups   Betweenness
//! ```
//!
//! # References
//!
//! - Freeman (1977). "A set of measures of centrality based on betweenness"
//! - Brandes (2001). "A faster algorithm for betweenness centrality"

mod betweenness;
mod closeness;
mod degree;

pub use betweenness::{betweenness_centrality, BetweennessConfig};
pub use closeness::{closeness_centrality, ClosenessConfig};
pub use degree::degree_centrality;

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// The centrality measure used for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CentralityKind {
    /// Number of outgoing neighbors.
    Degree,
    /// Inverse average hop distance.
    Closeness,
    /// Brandes betweenness.
    Betweenness,
}

impl CentralityKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 3] = [Self::Degree, Self::Closeness, Self::Betweenness];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Degree => "degree",
            Self::Closeness => "closeness",
            Self::Betweenness => "betweenness",
        }
    }
}

impl fmt::Display for CentralityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CentralityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("invalid centrality type: {s:?}")))
    }
}

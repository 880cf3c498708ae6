//! Algorithms for friend graph analysis.
//!
//! | Algorithm | Question | Complexity |
//! |-----------|----------|------------|
//! | [`bfs`] | How many hops to everyone? | O(V + E) |
//! | Degree | How many friends? | O(V) |
//! | Closeness | How close to everyone? | O(V(V + E)) |
//! | Betweenness | Bridge between communities? | O(V(V + E)) |
//! | [`rank`] | Who is in the top N value groups? | O(V log V) |
//! | [`subgraph`] | What do the top friends' circles look like? | O(V + E) |
//! | [`suggest`] | Which of my friends should meet? | O(d²) |

/// Unweighted shortest-path lengths.
pub mod bfs;

/// Centrality algorithms for measuring friend importance.
pub mod centrality;

/// Tie-aware top-N ranking.
pub mod rank;

/// Star subgraph export for the top friends.
pub mod subgraph;

/// Friend-of-friend recommendation.
pub mod suggest;

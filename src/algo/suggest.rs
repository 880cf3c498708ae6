//! Friend-of-friend recommendation.
//!
//! For a person P, any two of P's friends A and B where A does not list B
//! as a friend are candidates for an introduction: B is suggested to A.
//! Only P's immediate neighborhood is examined (local triadic closure).

use crate::{Error, FriendGraph, FriendId, Result};
use std::collections::BTreeMap;

/// Suggestions among `person`'s friends, keyed by the friend receiving them.
///
/// Friends that already know all the others have no entry. Lists are in
/// ascending ID order.
///
/// # Example
///
/// ```
/// use friendgraph::{FriendGraph, FriendId};
///
/// let mut graph = FriendGraph::new();
/// graph.add_friendship(1, 2).unwrap();
/// graph.add_friendship(1, 3).unwrap();
///
/// let suggestions = graph.suggest_friends_of_friends(1).unwrap();
/// assert_eq!(suggestions[&FriendId(2)], vec![FriendId(3)]);
/// assert_eq!(suggestions[&FriendId(3)], vec![FriendId(2)]);
/// ```
pub fn suggest_friends_of_friends(
    graph: &FriendGraph,
    person: FriendId,
) -> Result<BTreeMap<FriendId, Vec<FriendId>>> {
    if !graph.contains(person) {
        return Err(Error::FriendNotFound(person));
    }

    let friends = graph.neighbors(person);
    let mut suggestions: BTreeMap<FriendId, Vec<FriendId>> = BTreeMap::new();

    for &outer in &friends {
        let known = graph.neighbors(outer);
        for &inner in &friends {
            if outer != inner && known.binary_search(&inner).is_err() {
                suggestions.entry(outer).or_default().push(inner);
            }
        }
    }

    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_has_no_suggestions() {
        let mut graph = FriendGraph::new();
        graph.add_friendship(1, 2).unwrap();
        graph.add_friendship(1, 3).unwrap();
        graph.add_friendship(2, 3).unwrap();

        assert!(suggest_friends_of_friends(&graph, FriendId(1))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_one_sided_friendship() {
        let mut graph = FriendGraph::new();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(1, 3).unwrap();
        // 2 lists 3, but 3 does not list 2
        graph.add_edge(2, 3).unwrap();

        let suggestions = suggest_friends_of_friends(&graph, FriendId(1)).unwrap();
        assert!(!suggestions.contains_key(&FriendId(2)));
        assert_eq!(suggestions[&FriendId(3)], vec![FriendId(2)]);
    }

    #[test]
    fn test_only_immediate_neighborhood() {
        let mut graph = FriendGraph::new();
        graph.add_friendship(1, 2).unwrap();
        graph.add_friendship(2, 3).unwrap();

        // 1 has a single friend: nobody to introduce.
        assert!(suggest_friends_of_friends(&graph, FriendId(1))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_unknown_person() {
        let graph = FriendGraph::new();
        assert_eq!(
            suggest_friends_of_friends(&graph, FriendId(4)),
            Err(Error::FriendNotFound(FriendId(4)))
        );
    }
}

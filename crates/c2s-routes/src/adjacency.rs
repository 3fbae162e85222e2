//! Edge-to-edge reachability derived from via connections.

use std::collections::{HashMap, HashSet};

use c2s_network::ViaConnection;

/// Which edges can be entered directly from which.
///
/// Parallel movements between the same edge pair (several lane links)
/// collapse into one entry.
#[derive(Debug, Default, Clone)]
pub struct Adjacency {
    next: HashMap<String, HashSet<String>>,
}

impl Adjacency {
    pub fn from_connections(connections: &[ViaConnection]) -> Self {
        let mut next: HashMap<String, HashSet<String>> = HashMap::new();
        for c in connections {
            next.entry(c.from_edge.clone())
                .or_default()
                .insert(c.to_edge.clone());
        }
        Self { next }
    }

    /// `true` if a single movement leads from `from` onto `to`.
    pub fn can_reach(&self, from: &str, to: &str) -> bool {
        self.next.get(from).is_some_and(|s| s.contains(to))
    }

    /// Edges enterable directly from `from`, in no particular order.
    pub fn successors<'a>(&'a self, from: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.next.get(from).into_iter().flatten().map(String::as_str)
    }

    /// `true` if every consecutive pair of `edges` is joined by a movement.
    ///
    /// Routes of zero or one edge are trivially traversable.
    pub fn is_traversable<S: AsRef<str>>(&self, edges: &[S]) -> bool {
        edges
            .windows(2)
            .all(|w| self.can_reach(w[0].as_ref(), w[1].as_ref()))
    }

    /// Number of distinct (from, to) edge pairs.
    pub fn pair_count(&self) -> usize {
        self.next.values().map(HashSet::len).sum()
    }
}

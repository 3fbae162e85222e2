//! `RouteRepair` — hook for fixing routes the network cannot carry.
//!
//! The translator calls `RouteRepair::repair` once per distinct
//! non-traversable edge sequence.  Returning `Some` proposes a replacement
//! sequence; the translator re-checks it and only accepts it if it is
//! traversable.  Returning `None` rejects the route.
//!
//! # Examples of application-defined repairs
//!
//! - **Gap fill**: insert the shortest edge chain between two disconnected
//!   consecutive edges.
//! - **Truncate**: keep the longest traversable prefix.

use crate::Adjacency;

/// Hook called on the first sighting of a non-traversable route.
///
/// # Contract
///
/// - Must be deterministic: identical input yields identical output.
/// - Must not perform I/O.
pub trait RouteRepair {
    /// Optionally propose a replacement for `edges`.
    fn repair(&self, edges: &[String], adjacency: &Adjacency) -> Option<Vec<String>>;
}

/// A repair that never fixes anything; invalid routes are dropped.
///
/// The default for translation.
pub struct NoRepair;

impl RouteRepair for NoRepair {
    #[inline]
    fn repair(&self, _edges: &[String], _adjacency: &Adjacency) -> Option<Vec<String>> {
        None
    }
}

impl<R: RouteRepair + ?Sized> RouteRepair for &R {
    #[inline]
    fn repair(&self, edges: &[String], adjacency: &Adjacency) -> Option<Vec<String>> {
        (**self).repair(edges, adjacency)
    }
}

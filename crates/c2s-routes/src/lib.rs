//! `c2s-routes` — vehicle routes translated against the synthesized network.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`loader`]      | `FlowRecord`, `load_flows_json`, `load_flows_reader`    |
//! | [`adjacency`]   | `Adjacency` (edge → directly reachable edges)           |
//! | [`repair`]      | `RouteRepair` trait, `NoRepair`                         |
//! | [`translate`]   | `RouteTranslator`, `Routes`, `Route`, `Vehicle`         |
//! | [`error`]       | `RouteError`, `RouteResult<T>`                          |
//!
//! # Acceptance model (summary)
//!
//! A route is accepted iff every consecutive edge pair is joined by at least
//! one via connection.  Routes are deduplicated by their exact edge sequence,
//! and each sequence is judged once:
//!
//! ```text
//! first sighting, traversable      → new Route, Vehicle emitted
//! first sighting, not traversable  → RouteRepair; if still invalid, warn + skip
//! seen, accepted                   → reuse Route, Vehicle emitted
//! seen, rejected                   → warn + skip
//! ```

pub mod adjacency;
pub mod error;
pub mod loader;
pub mod repair;
pub mod translate;

#[cfg(test)]
mod tests;

pub use adjacency::Adjacency;
pub use error::{RouteError, RouteResult};
pub use loader::{FlowRecord, load_flows_json, load_flows_reader, load_flows_str};
pub use repair::{NoRepair, RouteRepair};
pub use translate::{Route, RouteTranslator, Routes, Vehicle, translate_routes};

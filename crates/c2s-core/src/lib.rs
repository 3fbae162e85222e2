//! `c2s-core` — foundational types for the `cityflow2sumo` translator.
//!
//! This crate is a dependency of every other `c2s-*` crate.  It has no
//! `c2s-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Point`, Euclidean distance, `polyline_length`        |
//! | [`lane`]        | `Lane`, `invert_lane_index`                           |
//! | [`ids`]         | Deterministic lane / internal-edge naming             |
//! | [`direction`]   | `Direction` (straight / left / right)                 |
//! | [`config`]      | `TranslateConfig`                                     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on `Point`; needed by `c2s-network` |

pub mod config;
pub mod direction;
pub mod error;
pub mod geo;
pub mod ids;
pub mod lane;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TranslateConfig;
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use geo::{Point, polyline_length};
pub use ids::{internal_edge_id, lane_id};
pub use lane::{Lane, invert_lane_index};

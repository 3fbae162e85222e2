//! `c2s-network` — CityFlow roadnet to SUMO network translation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`loader`]   | Raw roadnet document types, `load_roadnet_json`             |
//! | [`road`]     | `Edge`, `build_edge` (road-network builder)                 |
//! | [`junction`] | `Junction`, via / internal connections, junction synthesis  |
//! | [`signal`]   | `TlLogic`, `Phase`, `LinkState`, `encode_phases`            |
//! | [`network`]  | `Network`, `NetworkBuilder`, `translate_network`            |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Pipeline
//!
//! ```text
//! roadnet.json ──load──▶ RoadnetDoc ──NetworkBuilder──▶ Network
//!                                      ├─ roads         → Edge
//!                                      ├─ virtual       → dead_end Junction
//!                                      └─ signalized    → Junction + InternalEdge
//!                                                         + ViaConnection
//!                                                         + InternalConnection
//!                                                         + TlLogic
//! ```

pub mod error;
pub mod junction;
pub mod loader;
pub mod network;
pub mod road;
pub mod signal;


pub use error::{NetworkError, NetworkResult};
pub use junction::{
    BoundaryLanes, InternalConnection, InternalEdge, Junction, JunctionKind, Request,
    SignalizedJunction, ViaConnection, build_boundary_junction, synthesize_signalized,
};
pub use loader::{load_roadnet_json, load_roadnet_reader, load_roadnet_str, RoadnetDoc};
pub use network::{Network, NetworkBuilder, translate_network};
pub use road::{Edge, build_edge};
pub use signal::{LinkState, Phase, TlLogic, encode_phases};

//! Network-translation error type.

use thiserror::Error;

use c2s_core::CoreError;

/// Fatal structural errors produced while translating a roadnet.
///
/// Any of these aborts the whole translation; nothing is written.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("duplicate road id {0:?}")]
    DuplicateRoad(String),

    #[error("intersection {junction:?} references unknown road {road:?}")]
    UnknownRoad { junction: String, road: String },

    #[error("intersection {junction:?}: lane {lane} does not exist on road {road:?} ({lane_count} lanes)")]
    LaneOutOfRange {
        junction:   String,
        road:       String,
        lane:       usize,
        lane_count: usize,
    },

    #[error("intersection {junction:?}: light phase {phase} names road link {road_link}, but only {road_link_count} exist")]
    UnknownRoadLink {
        junction:        String,
        phase:           usize,
        road_link:       usize,
        road_link_count: usize,
    },

    #[error("non-virtual intersection {0:?} has no traffic light")]
    MissingTrafficLight(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("roadnet parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;

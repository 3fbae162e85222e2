//! CityFlow roadnet JSON loader.
//!
//! # Document shape
//!
//! ```json
//! {
//!   "intersections": [
//!     { "id": "J", "point": {"x": 0, "y": 0}, "virtual": false,
//!       "roadLinks": [
//!         { "type": "go_straight", "startRoad": "A", "endRoad": "B",
//!           "laneLinks": [ {"startLaneIndex": 0, "endLaneIndex": 0} ] }
//!       ],
//!       "trafficLight": { "lightphases": [
//!         { "time": 30, "availableRoadLinks": [0] }
//!       ] } }
//!   ],
//!   "roads": [
//!     { "id": "A", "startIntersection": "W", "endIntersection": "J",
//!       "points": [ {"x": -300, "y": 0}, {"x": 0, "y": 0} ],
//!       "lanes": [ {"width": 3, "maxSpeed": 11.11} ] }
//!   ]
//! }
//! ```
//!
//! Members not listed above (lane `width`, lane-link `points`, road-link
//! `direction`, intersection `width`/`roads`) are accepted and ignored.
//! A missing required member is a parse error.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use c2s_core::Point;

use crate::NetworkResult;

// ── Raw document ──────────────────────────────────────────────────────────────

/// The whole roadnet document.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadnetDoc {
    pub intersections: Vec<RawIntersection>,
    pub roads:         Vec<RawRoad>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRoad {
    pub id:                 String,
    pub points:             Vec<Point>,
    pub lanes:              Vec<RawLane>,
    pub start_intersection: String,
    pub end_intersection:   String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLane {
    pub max_speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIntersection {
    pub id:    String,
    pub point: Point,
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
    #[serde(default)]
    pub road_links: Vec<RawRoadLink>,
    #[serde(default)]
    pub traffic_light: Option<RawTrafficLight>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRoadLink {
    /// Movement tag: `go_straight`, `turn_left` or `turn_right`.
    #[serde(rename = "type")]
    pub kind:       String,
    pub start_road: String,
    pub end_road:   String,
    pub lane_links: Vec<RawLaneLink>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLaneLink {
    pub start_lane_index: usize,
    pub end_lane_index:   usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTrafficLight {
    pub lightphases: Vec<RawLightPhase>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLightPhase {
    /// Phase duration in seconds.
    pub time: f64,
    /// Indices into the owning intersection's `roadLinks`.
    pub available_road_links: Vec<usize>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a roadnet document from a JSON file.
pub fn load_roadnet_json(path: &Path) -> NetworkResult<RoadnetDoc> {
    let file = std::fs::File::open(path)?;
    load_roadnet_reader(std::io::BufReader::new(file))
}

/// Like [`load_roadnet_json`] but accepts any `Read` source.
pub fn load_roadnet_reader<R: Read>(reader: R) -> NetworkResult<RoadnetDoc> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a roadnet document held in memory.
pub fn load_roadnet_str(s: &str) -> NetworkResult<RoadnetDoc> {
    Ok(serde_json::from_str(s)?)
}

//! CityFlow flow JSON loader.
//!
//! # Document shape
//!
//! ```json
//! [
//!   { "vehicle": { "length": 5.0, "maxSpeed": 11.11 },
//!     "route": ["road_0_1_0", "road_1_1_0"],
//!     "interval": 1.0, "startTime": 0, "endTime": 0 }
//! ]
//! ```
//!
//! Only `route` and `startTime` are read.  Each entry becomes at most one
//! vehicle departing at `startTime`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::RouteResult;

/// One entry of the flow document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRecord {
    /// Road ids, in travel order.
    pub route:      Vec<String>,
    /// Departure time in seconds.
    pub start_time: f64,
}

/// Load all flow entries from a JSON file.
pub fn load_flows_json(path: &Path) -> RouteResult<Vec<FlowRecord>> {
    let file = std::fs::File::open(path)?;
    load_flows_reader(std::io::BufReader::new(file))
}

/// Like [`load_flows_json`] but accepts any `Read` source.
pub fn load_flows_reader<R: Read>(reader: R) -> RouteResult<Vec<FlowRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a flow document held in memory.
pub fn load_flows_str(s: &str) -> RouteResult<Vec<FlowRecord>> {
    Ok(serde_json::from_str(s)?)
}

//! Road-network builder: one CityFlow road becomes one SUMO edge.

use c2s_core::{Lane, Point, lane_id, polyline_length};

use crate::loader::RawRoad;

/// A directed road segment with its lanes.
///
/// Lane `i` of `lanes` is the lane whose ordinal is `i` in SUMO's convention
/// (lane 0 is the outermost lane).  The ordinals are copied straight from the
/// source document; connections re-index them at the junction (see
/// [`c2s_core::invert_lane_index`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub id:    String,
    pub from:  String,
    pub to:    String,
    pub shape: Vec<Point>,
    pub lanes: Vec<Lane>,
}

impl Edge {
    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Length of the centre line in metres.
    pub fn length(&self) -> f64 {
        polyline_length(&self.shape)
    }
}

/// Build an [`Edge`] from a raw road record.
///
/// Every lane gets the full polyline length; lanes are assumed not to
/// diverge geometrically from the centre line.
pub fn build_edge(raw: &RawRoad) -> Edge {
    let length = polyline_length(&raw.points);
    let lanes = raw
        .lanes
        .iter()
        .enumerate()
        .map(|(i, l)| Lane::new(lane_id(&raw.id, i), i, l.max_speed, length))
        .collect();

    Edge {
        id:    raw.id.clone(),
        from:  raw.start_intersection.clone(),
        to:    raw.end_intersection.clone(),
        shape: raw.points.clone(),
        lanes,
    }
}

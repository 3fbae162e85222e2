//! Lane value type and lane-ordinal handedness conversion.

/// One lane of a road edge or an internal micro-edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Lane {
    pub id:     String,
    /// Ordinal within the parent edge, `0..lane_count`.
    pub index:  usize,
    /// Speed limit in m/s.
    pub speed:  f64,
    /// Length in metres.
    pub length: f64,
}

impl Lane {
    pub fn new(id: String, index: usize, speed: f64, length: f64) -> Self {
        Self { id, index, speed, length }
    }
}

/// Re-index a lane ordinal between CityFlow (innermost lane first) and SUMO
/// (outermost lane first).
///
/// The mapping is its own inverse for a fixed `lane_count`.  Returns `None`
/// if `ordinal` is not a valid lane of an edge with `lane_count` lanes.
#[inline]
pub fn invert_lane_index(ordinal: usize, lane_count: usize) -> Option<usize> {
    (ordinal < lane_count).then(|| lane_count - 1 - ordinal)
}

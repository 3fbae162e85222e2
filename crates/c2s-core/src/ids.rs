//! Deterministic identifier synthesis.
//!
//! Lanes and junction-interior edges never carry their own id in the source
//! document.  Their ids are derived from the parent id and an ordinal so any
//! component can address them without holding a reference.

/// Id of lane `index` on edge `edge_id`: `"{edge_id}_{index}"`.
#[inline]
pub fn lane_id(edge_id: &str, index: usize) -> String {
    format!("{edge_id}_{index}")
}

/// Id of the internal micro-edge carrying movement `link_index` through
/// junction `junction_id`.
///
/// SUMO reserves the `:` prefix for junction-internal edges.
#[inline]
pub fn internal_edge_id(junction_id: &str, link_index: usize) -> String {
    format!(":{junction_id}_{link_index}")
}

//! Junction synthesis.
//!
//! CityFlow intersections are coarse: a list of road-to-road links, each
//! carrying lane-to-lane pairs.  SUMO wants every lane-to-lane movement to be
//! an explicit connection routed through its own junction-internal lane.
//!
//! For every lane link of a signalized intersection this module allocates:
//!
//! ```text
//!   from_edge/from_lane ──ViaConnection──▶ :J_k/0 ──InternalConnection──▶ to_edge/to_lane
//!                         (linkIndex k, tl J)     (InternalEdge :J_k)
//! ```
//!
//! where `k` is the next free link index of junction `J`.  Lane ordinals are
//! inverted on both ends to move from CityFlow's lane numbering to SUMO's.
//!
//! Virtual (boundary) intersections get a plain `dead_end` junction whose
//! lane lists come from a global scan over all edges ([`BoundaryLanes`]).

use std::collections::{HashMap, HashSet};

use c2s_core::{
    Direction, Lane, Point, TranslateConfig, internal_edge_id, invert_lane_index, lane_id,
};

use crate::loader::RawIntersection;
use crate::road::Edge;
use crate::signal::{TlLogic, encode_phases};
use crate::{NetworkError, NetworkResult};

// ── Types ─────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum JunctionKind {
    /// Controlled by a [`TlLogic`] with the same id.
    TrafficLight,
    /// Network boundary; no program, no connections.
    DeadEnd,
}

impl JunctionKind {
    /// SUMO `type` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            JunctionKind::TrafficLight => "traffic_light",
            JunctionKind::DeadEnd      => "dead_end",
        }
    }
}

/// Right-of-way request of one link index against its foes.
///
/// Conflict resolution is not computed, so junctions always carry an empty
/// request list.  The type exists so the emitted junction layout stays
/// compatible with SUMO's.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub index:    usize,
    pub response: String,
    pub foes:     String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Junction {
    pub id:             String,
    pub kind:           JunctionKind,
    pub point:          Point,
    /// Lane ids entering the junction, first-seen order, no duplicates.
    pub incoming_lanes: Vec<String>,
    /// Lane ids leaving the junction, first-seen order, no duplicates.
    pub outgoing_lanes: Vec<String>,
    pub requests:       Vec<Request>,
}

/// A junction-interior micro-edge with its single lane.
#[derive(Clone, Debug, PartialEq)]
pub struct InternalEdge {
    pub id:   String,
    pub lane: Lane,
}

/// A signal-controlled movement: real lane → internal lane → real lane.
#[derive(Clone, Debug, PartialEq)]
pub struct ViaConnection {
    pub from_edge:  String,
    pub to_edge:    String,
    /// SUMO lane ordinal (already inverted).
    pub from_lane:  usize,
    /// SUMO lane ordinal (already inverted).
    pub to_lane:    usize,
    pub direction:  Direction,
    /// Position in the junction's phase state strings.
    pub link_index: usize,
    /// Id of the internal lane the movement passes through.
    pub via_lane:   String,
    /// Owning junction, which is also the id of its [`TlLogic`].
    pub junction:   String,
}

/// The second half of a via movement: internal lane → real lane.
#[derive(Clone, Debug, PartialEq)]
pub struct InternalConnection {
    /// Internal edge id.
    pub from_edge:  String,
    pub to_edge:    String,
    pub from_lane:  usize,
    pub to_lane:    usize,
    pub direction:  Direction,
}

/// Everything synthesized for one signalized intersection.
#[derive(Clone, Debug)]
pub struct SignalizedJunction {
    pub junction:             Junction,
    pub internal_edges:       Vec<InternalEdge>,
    pub via_connections:      Vec<ViaConnection>,
    pub internal_connections: Vec<InternalConnection>,
    pub tl_logic:             TlLogic,
}

// ── Boundary junctions ────────────────────────────────────────────────────────

/// Incoming / outgoing lane ids of every junction, gathered from the edges.
///
/// A junction's incident lanes are scattered across many edge records, so
/// this has to be computed over the whole edge list before any boundary
/// junction is finalized.
#[derive(Debug, Default)]
pub struct BoundaryLanes {
    incoming: HashMap<String, Vec<String>>,
    outgoing: HashMap<String, Vec<String>>,
}

impl BoundaryLanes {
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut incoming: HashMap<String, Vec<String>> = HashMap::new();
        let mut outgoing: HashMap<String, Vec<String>> = HashMap::new();
        let mut seen_in:  HashSet<(&str, &str)> = HashSet::new();
        let mut seen_out: HashSet<(&str, &str)> = HashSet::new();

        for edge in edges {
            for lane in &edge.lanes {
                if seen_in.insert((edge.to.as_str(), lane.id.as_str())) {
                    incoming.entry(edge.to.clone()).or_default().push(lane.id.clone());
                }
                if seen_out.insert((edge.from.as_str(), lane.id.as_str())) {
                    outgoing.entry(edge.from.clone()).or_default().push(lane.id.clone());
                }
            }
        }

        Self { incoming, outgoing }
    }

    pub fn incoming(&self, junction: &str) -> &[String] {
        self.incoming.get(junction).map_or(&[], Vec::as_slice)
    }

    pub fn outgoing(&self, junction: &str) -> &[String] {
        self.outgoing.get(junction).map_or(&[], Vec::as_slice)
    }
}

/// Build the `dead_end` junction for a virtual intersection.
pub fn build_boundary_junction(raw: &RawIntersection, lanes: &BoundaryLanes) -> Junction {
    Junction {
        id:             raw.id.clone(),
        kind:           JunctionKind::DeadEnd,
        point:          raw.point,
        incoming_lanes: lanes.incoming(&raw.id).to_vec(),
        outgoing_lanes: lanes.outgoing(&raw.id).to_vec(),
        requests:       Vec::new(),
    }
}

// ── Signalized junctions ──────────────────────────────────────────────────────

/// Expand a signalized intersection into connections and a program.
///
/// `lane_counts` maps every road id to its number of lanes.
///
/// # Errors
///
/// - [`NetworkError::Core`] for an unknown movement tag.
/// - [`NetworkError::UnknownRoad`] / [`NetworkError::LaneOutOfRange`] for
///   dangling references.
/// - [`NetworkError::MissingTrafficLight`] if the intersection has no plan.
/// - [`NetworkError::UnknownRoadLink`] from phase encoding.
pub fn synthesize_signalized(
    raw:         &RawIntersection,
    lane_counts: &HashMap<&str, usize>,
    config:      &TranslateConfig,
) -> NetworkResult<SignalizedJunction> {
    let junction_id = raw.id.as_str();
    let traffic_light = raw
        .traffic_light
        .as_ref()
        .ok_or_else(|| NetworkError::MissingTrafficLight(raw.id.clone()))?;

    let mut internal_edges       = Vec::new();
    let mut via_connections: Vec<ViaConnection> = Vec::new();
    let mut internal_connections = Vec::new();
    // link_groups[r] = link indices allocated for road link r.
    let mut link_groups: Vec<Vec<usize>> = Vec::with_capacity(raw.road_links.len());

    for road_link in &raw.road_links {
        let direction  = Direction::from_tag(&road_link.kind)?;
        let from_count = road_lane_count(lane_counts, junction_id, &road_link.start_road)?;
        let to_count   = road_lane_count(lane_counts, junction_id, &road_link.end_road)?;

        let mut group = Vec::with_capacity(road_link.lane_links.len());
        for lane_link in &road_link.lane_links {
            let from_lane = invert_checked(
                junction_id, &road_link.start_road, lane_link.start_lane_index, from_count,
            )?;
            let to_lane = invert_checked(
                junction_id, &road_link.end_road, lane_link.end_lane_index, to_count,
            )?;

            let link_index = via_connections.len();
            let edge_id    = internal_edge_id(junction_id, link_index);
            let via_lane   = lane_id(&edge_id, 0);

            via_connections.push(ViaConnection {
                from_edge: road_link.start_road.clone(),
                to_edge:   road_link.end_road.clone(),
                from_lane,
                to_lane,
                direction,
                link_index,
                via_lane:  via_lane.clone(),
                junction:  raw.id.clone(),
            });
            internal_connections.push(InternalConnection {
                from_edge: edge_id.clone(),
                to_edge:   road_link.end_road.clone(),
                from_lane: 0,
                to_lane,
                direction,
            });
            internal_edges.push(InternalEdge {
                id:   edge_id,
                lane: Lane::new(via_lane, 0, config.internal_lane_speed, config.internal_lane_length),
            });
            group.push(link_index);
        }
        link_groups.push(group);
    }

    let incoming_lanes = unique_in_order(
        via_connections.iter().map(|c| lane_id(&c.from_edge, c.from_lane)),
    );
    let outgoing_lanes = unique_in_order(
        via_connections.iter().map(|c| lane_id(&c.to_edge, c.to_lane)),
    );

    let phases = encode_phases(
        junction_id,
        &link_groups,
        via_connections.len(),
        &traffic_light.lightphases,
    )?;

    log::debug!(
        "junction {junction_id}: {} road links, {} connections, {} phases",
        raw.road_links.len(),
        via_connections.len(),
        phases.len(),
    );

    Ok(SignalizedJunction {
        junction: Junction {
            id:       raw.id.clone(),
            kind:     JunctionKind::TrafficLight,
            point:    raw.point,
            incoming_lanes,
            outgoing_lanes,
            requests: Vec::new(),
        },
        internal_edges,
        via_connections,
        internal_connections,
        tl_logic: TlLogic { id: raw.id.clone(), phases },
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn road_lane_count(
    lane_counts: &HashMap<&str, usize>,
    junction:    &str,
    road:        &str,
) -> NetworkResult<usize> {
    lane_counts
        .get(road)
        .copied()
        .ok_or_else(|| NetworkError::UnknownRoad {
            junction: junction.to_owned(),
            road:     road.to_owned(),
        })
}

fn invert_checked(
    junction:   &str,
    road:       &str,
    lane:       usize,
    lane_count: usize,
) -> NetworkResult<usize> {
    invert_lane_index(lane, lane_count).ok_or_else(|| NetworkError::LaneOutOfRange {
        junction: junction.to_owned(),
        road:     road.to_owned(),
        lane,
        lane_count,
    })
}

fn unique_in_order(ids: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(id.clone())).collect()
}

//! Translated network and its builder.
//!
//! # Build order
//!
//! 1. Every road becomes an [`Edge`]; the lane count of each road is indexed
//!    for the junction pass.
//! 2. Incoming / outgoing lanes of every junction are collected over all
//!    edges ([`BoundaryLanes`]).
//! 3. Intersections are translated in document order.  Their products are
//!    appended in that order, so the emitted network is deterministic.

use std::collections::HashMap;

use c2s_core::TranslateConfig;

use crate::junction::{
    BoundaryLanes, InternalConnection, InternalEdge, Junction, ViaConnection,
    build_boundary_junction, synthesize_signalized,
};
use crate::loader::{RawIntersection, RawRoad, RoadnetDoc};
use crate::road::{Edge, build_edge};
use crate::signal::TlLogic;
use crate::{NetworkError, NetworkResult};

// ── Network ───────────────────────────────────────────────────────────────────

/// A fully translated SUMO network.
///
/// All fields are `pub` for the emitter.  Do not construct directly; use
/// [`NetworkBuilder`] or [`translate_network`].
#[derive(Debug)]
pub struct Network {
    pub edges:                Vec<Edge>,
    pub internal_edges:       Vec<InternalEdge>,
    pub tl_logics:            Vec<TlLogic>,
    pub junctions:            Vec<Junction>,
    pub via_connections:      Vec<ViaConnection>,
    pub internal_connections: Vec<InternalConnection>,

    edge_index: HashMap<String, usize>,
}

impl Network {
    /// Whether `id` names a real (non-internal) edge.
    pub fn contains_edge(&self, id: &str) -> bool {
        self.edge_index.contains_key(id)
    }

    /// Program controlling junction `id`, if it is signalized.
    pub fn tl_logic(&self, id: &str) -> Option<&TlLogic> {
        self.tl_logics.iter().find(|t| t.id == id)
    }

    /// Via connections owned by junction `id`, in link-index order.
    pub fn connections_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a ViaConnection> + 'a {
        self.via_connections.iter().filter(move |c| c.junction == id)
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Accumulate roads and intersections, then call [`build`](Self::build).
///
/// Roads may be added in any order relative to intersections; nothing is
/// resolved until `build()`.
///
/// # Example
///
/// ```rust,ignore
/// let doc = load_roadnet_json(Path::new("roadnet.json"))?;
/// let mut b = NetworkBuilder::new(TranslateConfig::default());
/// for road in &doc.roads {
///     b.add_road(road)?;
/// }
/// for intersection in doc.intersections {
///     b.add_intersection(intersection);
/// }
/// let network = b.build()?;
/// ```
pub struct NetworkBuilder {
    config:        TranslateConfig,
    edges:         Vec<Edge>,
    edge_index:    HashMap<String, usize>,
    intersections: Vec<RawIntersection>,
}

impl NetworkBuilder {
    pub fn new(config: TranslateConfig) -> Self {
        Self {
            config,
            edges:         Vec::new(),
            edge_index:    HashMap::new(),
            intersections: Vec::new(),
        }
    }

    /// Translate a road into an edge.
    ///
    /// # Errors
    ///
    /// [`NetworkError::DuplicateRoad`] if a road with the same id was added
    /// before.
    pub fn add_road(&mut self, raw: &RawRoad) -> NetworkResult<()> {
        if self.edge_index.contains_key(&raw.id) {
            return Err(NetworkError::DuplicateRoad(raw.id.clone()));
        }
        self.edge_index.insert(raw.id.clone(), self.edges.len());
        self.edges.push(build_edge(raw));
        Ok(())
    }

    /// Queue an intersection for translation in `build()`.
    pub fn add_intersection(&mut self, raw: RawIntersection) {
        self.intersections.push(raw);
    }

    /// Consume the builder and produce a [`Network`].
    pub fn build(self) -> NetworkResult<Network> {
        let boundary = BoundaryLanes::from_edges(&self.edges);
        let lane_counts: HashMap<&str, usize> = self
            .edges
            .iter()
            .map(|e| (e.id.as_str(), e.lane_count()))
            .collect();

        let mut junctions            = Vec::with_capacity(self.intersections.len());
        let mut internal_edges       = Vec::new();
        let mut tl_logics            = Vec::new();
        let mut via_connections      = Vec::new();
        let mut internal_connections = Vec::new();

        for raw in &self.intersections {
            if raw.is_virtual {
                junctions.push(build_boundary_junction(raw, &boundary));
                continue;
            }
            let s = synthesize_signalized(raw, &lane_counts, &self.config)?;
            junctions.push(s.junction);
            internal_edges.extend(s.internal_edges);
            via_connections.extend(s.via_connections);
            internal_connections.extend(s.internal_connections);
            tl_logics.push(s.tl_logic);
        }

        log::info!(
            "network: {} edges, {} junctions ({} signalized), {} connections",
            self.edges.len(),
            junctions.len(),
            tl_logics.len(),
            via_connections.len(),
        );

        Ok(Network {
            edges: self.edges,
            internal_edges,
            tl_logics,
            junctions,
            via_connections,
            internal_connections,
            edge_index: self.edge_index,
        })
    }
}

/// Translate a whole roadnet document in one call.
pub fn translate_network(doc: &RoadnetDoc, config: &TranslateConfig) -> NetworkResult<Network> {
    let mut b = NetworkBuilder::new(config.clone());
    for road in &doc.roads {
        b.add_road(road)?;
    }
    for intersection in &doc.intersections {
        b.add_intersection(intersection.clone());
    }
    b.build()
}

//! Route translation: validate, deduplicate, and emit vehicles.

use std::collections::HashMap;

use c2s_network::Network;

use crate::{Adjacency, FlowRecord, RouteError, RouteRepair, RouteResult};

// ── Output records ────────────────────────────────────────────────────────────

/// A distinct, traversable edge sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id:    String,
    pub edges: Vec<String>,
}

/// One departure on a shared [`Route`].
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id:     String,
    /// Departure time in seconds.
    pub depart: f64,
    /// Id of the [`Route`] this vehicle follows.
    pub route:  String,
}

/// All accepted routes and vehicles of one run, in acceptance order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Routes {
    pub routes:   Vec<Route>,
    pub vehicles: Vec<Vehicle>,
    /// Flow entries dropped because their route is not traversable.
    pub rejected: usize,
}

// ── RouteTranslator ───────────────────────────────────────────────────────────

/// Verdict memoized per distinct edge sequence.
#[derive(Copy, Clone, Debug)]
enum Verdict {
    /// Accepted; index into `routes`.
    Accepted(usize),
    Rejected,
}

/// Feed flow entries in document order with [`push`](Self::push), then call
/// [`finish`](Self::finish).
///
/// Identity is assigned on first acceptance: routes are numbered
/// `route_0, route_1, …` in the order their sequence is first accepted, and
/// vehicles `vehicle_0, vehicle_1, …` over accepted entries only.
pub struct RouteTranslator<'n, R: RouteRepair> {
    network:   &'n Network,
    adjacency: Adjacency,
    repair:    R,
    verdicts:  HashMap<Vec<String>, Verdict>,
    out:       Routes,
    entries:   usize,
}

impl<'n, R: RouteRepair> RouteTranslator<'n, R> {
    pub fn new(network: &'n Network, repair: R) -> Self {
        Self {
            network,
            adjacency: Adjacency::from_connections(&network.via_connections),
            repair,
            verdicts:  HashMap::new(),
            out:       Routes::default(),
            entries:   0,
        }
    }

    /// Translate one flow entry.  Returns `true` if a vehicle was emitted.
    ///
    /// # Errors
    ///
    /// [`RouteError::EmptyRoute`] on the first sighting of an empty route.
    pub fn push(&mut self, record: &FlowRecord) -> RouteResult<bool> {
        let entry = self.entries;
        self.entries += 1;

        let verdict = match self.verdicts.get(&record.route).copied() {
            Some(v) => v,
            None => {
                let v = self.judge(entry, &record.route)?;
                self.verdicts.insert(record.route.clone(), v);
                v
            }
        };

        match verdict {
            Verdict::Accepted(i) => {
                let id = format!("vehicle_{}", self.out.vehicles.len());
                self.out.vehicles.push(Vehicle {
                    id,
                    depart: record.start_time,
                    route:  self.out.routes[i].id.clone(),
                });
                Ok(true)
            }
            Verdict::Rejected => {
                log::warn!(
                    "flow entry {entry}: route [{}] is not traversable, vehicle dropped",
                    record.route.join(", "),
                );
                self.out.rejected += 1;
                Ok(false)
            }
        }
    }

    /// Consume the translator and return everything accepted.
    pub fn finish(self) -> Routes {
        log::info!(
            "routes: {} distinct accepted, {} vehicles, {} entries dropped",
            self.out.routes.len(),
            self.out.vehicles.len(),
            self.out.rejected,
        );
        self.out
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// First-sighting decision for `edges`.
    fn judge(&mut self, entry: usize, edges: &[String]) -> RouteResult<Verdict> {
        if edges.is_empty() {
            return Err(RouteError::EmptyRoute { entry });
        }

        if self.is_valid(edges) {
            return Ok(Verdict::Accepted(self.accept(edges.to_vec())));
        }

        let Some(fixed) = self.repair.repair(edges, &self.adjacency) else {
            return Ok(Verdict::Rejected);
        };
        if fixed.is_empty() || !self.is_valid(&fixed) {
            log::debug!("flow entry {entry}: repaired route is still not traversable");
            return Ok(Verdict::Rejected);
        }

        // The repaired sequence is itself a content key.
        if let Some(Verdict::Accepted(i)) = self.verdicts.get(&fixed).copied() {
            return Ok(Verdict::Accepted(i));
        }
        let i = self.accept(fixed.clone());
        self.verdicts.insert(fixed, Verdict::Accepted(i));
        Ok(Verdict::Accepted(i))
    }

    /// Every edge exists and every consecutive pair is connected.  An edge
    /// missing from the network makes even a single-edge route invalid.
    fn is_valid(&self, edges: &[String]) -> bool {
        edges.iter().all(|e| self.network.contains_edge(e)) && self.adjacency.is_traversable(edges)
    }

    fn accept(&mut self, edges: Vec<String>) -> usize {
        let i = self.out.routes.len();
        self.out.routes.push(Route { id: format!("route_{i}"), edges });
        i
    }
}

/// Translate a whole flow document in one call.
pub fn translate_routes<R: RouteRepair>(
    flows:   &[FlowRecord],
    network: &Network,
    repair:  R,
) -> RouteResult<Routes> {
    let mut t = RouteTranslator::new(network, repair);
    for record in flows {
        t.push(record)?;
    }
    Ok(t.finish())
}

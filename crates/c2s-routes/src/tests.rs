//! Unit tests for c2s-routes.

#[cfg(test)]
mod helpers {
    use c2s_network::{Network, load_roadnet_str, translate_network};

    use crate::FlowRecord;

    /// ```text
    ///            C
    ///            ▲
    ///  W ──A──▶  J ──B──▶ E
    /// ```
    /// Only the movement A→B exists at J; C is reachable from nowhere.
    const FORK_ROADNET: &str = r#"{
      "intersections": [
        { "id": "W", "point": {"x": -300, "y": 0}, "virtual": true },
        { "id": "J", "point": {"x": 0, "y": 0}, "virtual": false,
          "roadLinks": [
            { "type": "go_straight", "startRoad": "A", "endRoad": "B",
              "laneLinks": [ {"startLaneIndex": 0, "endLaneIndex": 0},
                             {"startLaneIndex": 1, "endLaneIndex": 1} ] }
          ],
          "trafficLight": { "lightphases": [ { "time": 30, "availableRoadLinks": [0] } ] } },
        { "id": "E", "point": {"x": 300, "y": 0}, "virtual": true },
        { "id": "N", "point": {"x": 0, "y": 300}, "virtual": true }
      ],
      "roads": [
        { "id": "A", "startIntersection": "W", "endIntersection": "J",
          "points": [ {"x": -300, "y": 0}, {"x": 0, "y": 0} ],
          "lanes": [ {"maxSpeed": 11.11}, {"maxSpeed": 11.11} ] },
        { "id": "B", "startIntersection": "J", "endIntersection": "E",
          "points": [ {"x": 0, "y": 0}, {"x": 300, "y": 0} ],
          "lanes": [ {"maxSpeed": 11.11}, {"maxSpeed": 11.11} ] },
        { "id": "C", "startIntersection": "J", "endIntersection": "N",
          "points": [ {"x": 0, "y": 0}, {"x": 0, "y": 300} ],
          "lanes": [ {"maxSpeed": 11.11} ] }
      ]
    }"#;

    pub fn fork_network() -> Network {
        let doc = load_roadnet_str(FORK_ROADNET).expect("fixture parses");
        translate_network(&doc, &Default::default()).expect("fixture translates")
    }

    /// `W ──A──▶ J ──B──▶ E`, one lane each; only A and B exist.
    const LINE_ROADNET: &str = r#"{
      "intersections": [
        { "id": "W", "point": {"x": -300, "y": 0}, "virtual": true },
        { "id": "J", "point": {"x": 0, "y": 0}, "virtual": false,
          "roadLinks": [
            { "type": "go_straight", "startRoad": "A", "endRoad": "B",
              "laneLinks": [ {"startLaneIndex": 0, "endLaneIndex": 0} ] }
          ],
          "trafficLight": { "lightphases": [ { "time": 30, "availableRoadLinks": [0] } ] } },
        { "id": "E", "point": {"x": 300, "y": 0}, "virtual": true }
      ],
      "roads": [
        { "id": "A", "startIntersection": "W", "endIntersection": "J",
          "points": [ {"x": -300, "y": 0}, {"x": 0, "y": 0} ],
          "lanes": [ {"maxSpeed": 11.11} ] },
        { "id": "B", "startIntersection": "J", "endIntersection": "E",
          "points": [ {"x": 0, "y": 0}, {"x": 300, "y": 0} ],
          "lanes": [ {"maxSpeed": 11.11} ] }
      ]
    }"#;

    pub fn line_network() -> Network {
        let doc = load_roadnet_str(LINE_ROADNET).expect("fixture parses");
        translate_network(&doc, &Default::default()).expect("fixture translates")
    }

    pub fn flow(edges: &[&str], start_time: f64) -> FlowRecord {
        FlowRecord {
            route: edges.iter().map(|e| e.to_string()).collect(),
            start_time,
        }
    }
}

// ── Log capture ───────────────────────────────────────────────────────────────

/// Records log output per test thread so assertions see only their own lines.
#[cfg(test)]
mod capture {
    use std::cell::RefCell;

    use log::{Level, LevelFilter, Log, Metadata, Record};

    thread_local! {
        static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    struct Capture;

    impl Log for Capture {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
        }

        fn flush(&self) {}
    }

    static LOGGER: Capture = Capture;

    /// Install the capturing logger (once per process) and clear this
    /// thread's records.
    pub fn start() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
        RECORDS.with(|r| r.borrow_mut().clear());
    }

    pub fn warnings() -> Vec<String> {
        RECORDS.with(|r| {
            r.borrow()
                .iter()
                .filter(|(level, _)| *level == Level::Warn)
                .map(|(_, msg)| msg.clone())
                .collect()
        })
    }
}

// ── Adjacency ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod adjacency {
    use crate::Adjacency;

    #[test]
    fn parallel_lane_movements_collapse() {
        let net = super::helpers::fork_network();
        assert_eq!(net.via_connections.len(), 2);
        let adj = Adjacency::from_connections(&net.via_connections);
        assert_eq!(adj.pair_count(), 1);
        assert!(adj.can_reach("A", "B"));
        assert!(!adj.can_reach("B", "A"));
        assert!(!adj.can_reach("A", "C"));
        assert_eq!(adj.successors("A").collect::<Vec<_>>(), ["B"]);
        assert_eq!(adj.successors("C").count(), 0);
    }

    #[test]
    fn traversability() {
        let net = super::helpers::fork_network();
        let adj = Adjacency::from_connections(&net.via_connections);
        assert!(adj.is_traversable(&["A", "B"]));
        assert!(!adj.is_traversable(&["A", "C"]));
        assert!(!adj.is_traversable(&["A", "B", "A"]));
        // Single-edge routes need no movement at all.
        assert!(adj.is_traversable(&["C"]));
    }
}

// ── Translation ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod translate {
    use crate::{NoRepair, RouteError, translate_routes};

    use super::capture;
    use super::helpers::{flow, fork_network, line_network};

    #[test]
    fn identical_routes_share_one_route() {
        let net = fork_network();
        let flows = [flow(&["A", "B"], 0.0), flow(&["A", "B"], 5.0)];
        let out = translate_routes(&flows, &net, NoRepair).unwrap();

        assert_eq!(out.routes.len(), 1);
        assert_eq!(out.routes[0].id, "route_0");
        assert_eq!(out.routes[0].edges, ["A", "B"]);

        assert_eq!(out.vehicles.len(), 2);
        assert!(out.vehicles.iter().all(|v| v.route == "route_0"));
        assert_eq!(out.vehicles[0].depart, 0.0);
        assert_eq!(out.vehicles[1].depart, 5.0);
        assert_eq!(out.rejected, 0);
    }

    #[test]
    fn untraversable_route_dropped_and_later_entries_kept() {
        let net = fork_network();
        let flows = [flow(&["A", "C"], 0.0), flow(&["A", "B"], 1.0)];
        let out = translate_routes(&flows, &net, NoRepair).unwrap();

        assert_eq!(out.routes.len(), 1);
        assert_eq!(out.routes[0].edges, ["A", "B"]);
        assert_eq!(out.vehicles.len(), 1);
        // Rejected entries do not consume a vehicle id.
        assert_eq!(out.vehicles[0].id, "vehicle_0");
        assert_eq!(out.vehicles[0].depart, 1.0);
        assert_eq!(out.rejected, 1);
    }

    #[test]
    fn rejection_is_remembered() {
        let net = fork_network();
        let flows = [
            flow(&["A", "C"], 0.0),
            flow(&["A", "B"], 1.0),
            flow(&["A", "C"], 2.0),
            flow(&["C"], 3.0),
        ];
        let out = translate_routes(&flows, &net, NoRepair).unwrap();
        assert_eq!(out.rejected, 2);
        let ids: Vec<_> = out.routes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["route_0", "route_1"]);
        assert_eq!(out.routes[1].edges, ["C"]);
        let vehicles: Vec<_> = out.vehicles.iter().map(|v| (v.id.as_str(), v.route.as_str())).collect();
        assert_eq!(vehicles, [("vehicle_0", "route_0"), ("vehicle_1", "route_1")]);
    }

    #[test]
    fn decision_depends_only_on_content() {
        let net = fork_network();
        let a = translate_routes(&[flow(&["A", "B"], 0.0)], &net, NoRepair).unwrap();
        let b = translate_routes(
            &[flow(&["B"], 0.0), flow(&["A", "B"], 9.0), flow(&["A", "B"], 10.0)],
            &net,
            NoRepair,
        )
        .unwrap();
        assert!(a.routes[0].edges == b.routes[1].edges);
        assert_eq!(b.vehicles[1].route, b.vehicles[2].route);
    }

    #[test]
    fn deterministic_output() {
        let net = fork_network();
        let flows = [flow(&["A", "B"], 0.0), flow(&["A", "C"], 1.0), flow(&["B"], 2.0)];
        let first  = translate_routes(&flows, &net, NoRepair).unwrap();
        let second = translate_routes(&flows, &net, NoRepair).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn route_through_missing_edge_is_skipped_with_warning() {
        capture::start();
        let net = line_network();
        let flows = [flow(&["A", "C"], 0.0), flow(&["A", "B"], 1.0)];
        let out = translate_routes(&flows, &net, NoRepair).unwrap();

        assert_eq!(out.routes.len(), 1);
        assert_eq!(out.routes[0].edges, ["A", "B"]);
        assert_eq!(out.vehicles.len(), 1);
        assert_eq!(out.vehicles[0].depart, 1.0);
        assert_eq!(out.rejected, 1);

        let warnings = capture::warnings();
        assert_eq!(warnings.len(), 1, "{warnings:?}");
        assert!(warnings[0].contains("[A, C]"), "{warnings:?}");
    }

    #[test]
    fn single_missing_edge_is_rejected() {
        let net = line_network();
        let flows = [flow(&["Q"], 0.0), flow(&["A"], 1.0), flow(&["Q"], 2.0)];
        let out = translate_routes(&flows, &net, NoRepair).unwrap();
        assert_eq!(out.routes.len(), 1);
        assert_eq!(out.routes[0].edges, ["A"]);
        assert_eq!(out.rejected, 2);
    }

    #[test]
    fn every_rejected_entry_is_warned() {
        capture::start();
        let net = fork_network();
        let flows = [flow(&["A", "C"], 0.0), flow(&["A", "B"], 1.0), flow(&["A", "C"], 2.0)];
        let out = translate_routes(&flows, &net, NoRepair).unwrap();
        assert_eq!(out.rejected, 2);

        let warnings = capture::warnings();
        assert_eq!(warnings.len(), 2, "{warnings:?}");
        assert!(warnings[0].starts_with("flow entry 0:"));
        assert!(warnings[1].starts_with("flow entry 2:"));
    }

    #[test]
    fn empty_route_is_fatal() {
        let net = fork_network();
        let flows = [flow(&["A", "B"], 0.0), flow(&[], 1.0)];
        let err = translate_routes(&flows, &net, NoRepair).unwrap_err();
        assert!(matches!(err, RouteError::EmptyRoute { entry: 1 }));
    }
}

// ── Repair hook ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod repair {
    use std::cell::Cell;

    use crate::{Adjacency, RouteRepair, translate_routes};

    use super::helpers::{flow, fork_network};

    /// Keeps the longest traversable prefix and counts invocations.
    #[derive(Default)]
    struct TruncateRepair {
        calls: Cell<usize>,
    }

    impl RouteRepair for TruncateRepair {
        fn repair(&self, edges: &[String], adjacency: &Adjacency) -> Option<Vec<String>> {
            self.calls.set(self.calls.get() + 1);
            let mut keep = 1;
            while keep < edges.len() && adjacency.can_reach(&edges[keep - 1], &edges[keep]) {
                keep += 1;
            }
            Some(edges[..keep].to_vec())
        }
    }

    /// Proposes a sequence that is still broken.
    struct BadRepair;

    impl RouteRepair for BadRepair {
        fn repair(&self, _edges: &[String], _adjacency: &Adjacency) -> Option<Vec<String>> {
            Some(vec!["B".to_owned(), "A".to_owned()])
        }
    }

    /// Proposes an edge that does not exist.
    struct PhantomRepair;

    impl RouteRepair for PhantomRepair {
        fn repair(&self, _edges: &[String], _adjacency: &Adjacency) -> Option<Vec<String>> {
            Some(vec!["ghost".to_owned()])
        }
    }

    #[test]
    fn repaired_route_is_deduplicated_by_content() {
        let net = fork_network();
        let repair = TruncateRepair::default();
        let flows = [
            flow(&["A", "B", "A"], 0.0),
            flow(&["A", "B"], 1.0),
            flow(&["A", "B", "A"], 2.0),
        ];
        let out = translate_routes(&flows, &net, &repair).unwrap();

        assert_eq!(out.routes.len(), 1);
        assert_eq!(out.routes[0].edges, ["A", "B"]);
        assert_eq!(out.vehicles.len(), 3);
        assert!(out.vehicles.iter().all(|v| v.route == "route_0"));
        // Repair runs once per distinct broken sequence.
        assert_eq!(repair.calls.get(), 1);
    }

    #[test]
    fn missing_edge_is_offered_to_repair() {
        let net = super::helpers::line_network();
        let repair = TruncateRepair::default();
        let out = translate_routes(&[flow(&["A", "Q"], 0.0)], &net, &repair).unwrap();
        assert_eq!(repair.calls.get(), 1);
        assert_eq!(out.routes[0].edges, ["A"]);
        assert_eq!(out.vehicles.len(), 1);
    }

    #[test]
    fn still_broken_repair_is_rejected() {
        let net = fork_network();
        let out = translate_routes(&[flow(&["A", "C"], 0.0)], &net, BadRepair).unwrap();
        assert!(out.routes.is_empty());
        assert_eq!(out.rejected, 1);
    }

    #[test]
    fn repair_to_unknown_edge_is_rejected() {
        let net = fork_network();
        let out = translate_routes(&[flow(&["A", "C"], 0.0)], &net, PhantomRepair).unwrap();
        assert!(out.vehicles.is_empty());
        assert_eq!(out.rejected, 1);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use crate::{RouteError, load_flows_str};

    #[test]
    fn reads_route_and_start_time() {
        let flows = load_flows_str(r#"[
          { "vehicle": {"length": 5.0}, "route": ["A", "B"],
            "interval": 1.0, "startTime": 12, "endTime": 12 },
          { "route": ["C"], "startTime": 0.5 }
        ]"#).unwrap();
        assert_eq!(flows.len(), 2);
        assert_eq!(flows[0].route, ["A", "B"]);
        assert_eq!(flows[0].start_time, 12.0);
        assert_eq!(flows[1].start_time, 0.5);
    }

    #[test]
    fn missing_start_time_is_error() {
        let err = load_flows_str(r#"[ { "route": ["A"] } ]"#).unwrap_err();
        assert!(matches!(err, RouteError::Json(_)));
    }
}

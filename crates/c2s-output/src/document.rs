//! The `SumoDocument` trait and its three implementations.

use std::io::{self, Write};

use c2s_core::{Lane, Point, TranslateConfig};
use c2s_network::{
    Edge, InternalConnection, InternalEdge, Junction, Network, TlLogic, ViaConnection,
};
use c2s_routes::Routes;

use crate::xml::{XmlWriter, attrs};

const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Anything that can be written as one SUMO XML document.
pub trait SumoDocument {
    fn write_xml<W: Write>(&self, xml: &mut XmlWriter<W>) -> io::Result<()>;
}

/// Render a document to a `String` (declaration included).
pub fn render<D: SumoDocument + ?Sized>(doc: &D) -> io::Result<String> {
    let mut xml = XmlWriter::new(Vec::new())?;
    doc.write_xml(&mut xml)?;
    let bytes = xml.finish()?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

// ── Network ───────────────────────────────────────────────────────────────────

/// Element order: internal edges, edges, programs, junctions, via
/// connections, internal connections.
impl SumoDocument for Network {
    fn write_xml<W: Write>(&self, xml: &mut XmlWriter<W>) -> io::Result<()> {
        xml.open("net", attrs![
            "version" => "1.20",
            "junctionCornerDetail" => "5",
            "limitTurnSpeed" => "5.50",
            "xmlns:xsi" => XSI,
            "xsi:noNamespaceSchemaLocation" => "http://sumo.dlr.de/xsd/net_file.xsd",
        ])?;
        for e in &self.internal_edges {
            write_internal_edge(xml, e)?;
        }
        for e in &self.edges {
            write_edge(xml, e)?;
        }
        for t in &self.tl_logics {
            write_tl_logic(xml, t)?;
        }
        for j in &self.junctions {
            write_junction(xml, j)?;
        }
        for c in &self.via_connections {
            write_via_connection(xml, c)?;
        }
        for c in &self.internal_connections {
            write_internal_connection(xml, c)?;
        }
        xml.close("net")
    }
}

fn write_lane<W: Write>(xml: &mut XmlWriter<W>, lane: &Lane) -> io::Result<()> {
    xml.empty("lane", attrs![
        "id" => lane.id,
        "index" => lane.index,
        "speed" => lane.speed,
        "length" => lane.length,
        "shape" => "",
    ])
}

fn write_internal_edge<W: Write>(xml: &mut XmlWriter<W>, e: &InternalEdge) -> io::Result<()> {
    xml.open("edge", attrs!["id" => e.id, "function" => "internal"])?;
    write_lane(xml, &e.lane)?;
    xml.close("edge")
}

fn write_edge<W: Write>(xml: &mut XmlWriter<W>, e: &Edge) -> io::Result<()> {
    xml.open("edge", attrs![
        "id" => e.id,
        "from" => e.from,
        "to" => e.to,
        "priority" => "-1",
        "spreadType" => "center",
        "shape" => shape(&e.shape),
    ])?;
    for lane in &e.lanes {
        write_lane(xml, lane)?;
    }
    xml.close("edge")
}

fn write_tl_logic<W: Write>(xml: &mut XmlWriter<W>, t: &TlLogic) -> io::Result<()> {
    xml.open("tlLogic", attrs![
        "id" => t.id,
        "type" => "static",
        "programID" => "0",
        "offset" => "0",
    ])?;
    for p in &t.phases {
        xml.empty("phase", attrs!["duration" => p.duration, "state" => p.state])?;
    }
    xml.close("tlLogic")
}

fn write_junction<W: Write>(xml: &mut XmlWriter<W>, j: &Junction) -> io::Result<()> {
    let kind     = j.kind.as_str();
    let incoming = j.incoming_lanes.join(" ");
    let outgoing = j.outgoing_lanes.join(" ");
    let a = attrs![
        "id" => j.id,
        "type" => kind,
        "x" => j.point.x,
        "y" => j.point.y,
        "incLanes" => incoming,
        "intLanes" => outgoing,
    ];
    if j.requests.is_empty() {
        return xml.empty("junction", a);
    }
    xml.open("junction", a)?;
    for r in &j.requests {
        xml.empty("request", attrs![
            "index" => r.index,
            "response" => r.response,
            "foes" => r.foes,
            "cont" => "0",
        ])?;
    }
    xml.close("junction")
}

fn write_via_connection<W: Write>(xml: &mut XmlWriter<W>, c: &ViaConnection) -> io::Result<()> {
    xml.empty("connection", attrs![
        "from" => c.from_edge,
        "to" => c.to_edge,
        "fromLane" => c.from_lane,
        "toLane" => c.to_lane,
        "dir" => c.direction,
        "state" => "M",
        "linkIndex" => c.link_index,
        "via" => c.via_lane,
        "tl" => c.junction,
    ])
}

fn write_internal_connection<W: Write>(
    xml: &mut XmlWriter<W>,
    c:   &InternalConnection,
) -> io::Result<()> {
    xml.empty("connection", attrs![
        "from" => c.from_edge,
        "to" => c.to_edge,
        "fromLane" => c.from_lane,
        "toLane" => c.to_lane,
        "dir" => c.direction,
        "state" => "M",
    ])
}

/// `x,y x,y …`
fn shape(points: &[Point]) -> String {
    points.iter().map(Point::to_string).collect::<Vec<_>>().join(" ")
}

// ── Routes ────────────────────────────────────────────────────────────────────

impl SumoDocument for Routes {
    fn write_xml<W: Write>(&self, xml: &mut XmlWriter<W>) -> io::Result<()> {
        xml.open("routes", attrs![
            "xmlns:xsi" => XSI,
            "xsi:noNamespaceSchemaLocation" => "http://sumo.dlr.de/xsd/routes_file.xsd",
        ])?;
        for r in &self.routes {
            xml.empty("route", attrs!["id" => r.id, "edges" => r.edges.join(" ")])?;
        }
        for v in &self.vehicles {
            xml.empty("vehicle", attrs!["id" => v.id, "depart" => v.depart, "route" => v.route])?;
        }
        xml.close("routes")
    }
}

// ── Run configuration ─────────────────────────────────────────────────────────

/// `.sumocfg` contents: the network and route files, relative to the
/// configuration file's own directory.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub net_file:   String,
    pub route_file: String,
}

impl From<&TranslateConfig> for RunConfig {
    fn from(c: &TranslateConfig) -> Self {
        Self {
            net_file:   c.net_file.clone(),
            route_file: c.route_file.clone(),
        }
    }
}

impl SumoDocument for RunConfig {
    fn write_xml<W: Write>(&self, xml: &mut XmlWriter<W>) -> io::Result<()> {
        xml.open("configuration", attrs![
            "xmlns:xsi" => XSI,
            "xsi:noNamespaceSchemaLocation" => "http://sumo.dlr.de/xsd/sumoConfiguration.xsd",
        ])?;
        xml.open("input", attrs![])?;
        xml.empty("net-file", attrs!["value" => self.net_file])?;
        xml.empty("route-files", attrs!["value" => self.route_file])?;
        xml.close("input")?;
        xml.close("configuration")
    }
}

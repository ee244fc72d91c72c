use crate::input::passenger_counts::PassengerCountRow;
use crate::input::service_points::ServicePointRow;
use crate::model::Node;
use std::collections::{BTreeMap, HashMap};

/// the service point registry lacks a height for the italian terminus of
/// the bernina line; meters above sea level.
const TIRANO_DESIGNATION: &str = "Tirano";
const TIRANO_ELEVATION: f64 = 441.0;

/// the deduplicated node set shared by all four representations, sorted
/// ascending by UIC number.
pub struct NodeSet {
    nodes: Vec<Node>,
    by_id: HashMap<u32, usize>,
    by_name: HashMap<String, u32>,
}

impl NodeSet {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, bpuic: u32) -> bool {
        self.by_id.contains_key(&bpuic)
    }

    pub fn get(&self, bpuic: u32) -> Option<&Node> {
        self.by_id.get(&bpuic).map(|idx| &self.nodes[*idx])
    }

    /// resolves an official designation to its UIC number. when several
    /// points share a designation, the lowest number wins.
    pub fn id_for_name(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }
}

/// derives the node set from the service point registry, joined with the
/// most recent passenger counts per station.
///
/// canonicalization tie-break: when several registry rows share a UIC
/// number, the row with the lexicographically smallest official
/// designation wins, independent of input order.
pub fn extract_nodes(
    service_points: Vec<ServicePointRow>,
    counts: &HashMap<u32, PassengerCountRow>,
) -> NodeSet {
    let mut by_id: BTreeMap<u32, ServicePointRow> = BTreeMap::new();
    for row in service_points {
        match by_id.get(&row.number) {
            Some(existing) if existing.designation_official <= row.designation_official => {}
            _ => {
                by_id.insert(row.number, row);
            }
        }
    }

    let nodes: Vec<Node> = by_id
        .into_values()
        .map(|point| {
            let count = counts.get(&point.number);
            let elevation = match point.height {
                None if point.designation_official == TIRANO_DESIGNATION => {
                    Some(TIRANO_ELEVATION)
                }
                other => other,
            };
            Node {
                bpuic: point.number,
                station_name: point.designation_official,
                canton: point.canton_name,
                municipality: point.municipality_name,
                company: point.business_organisation,
                longitude: point.wgs84_east,
                latitude: point.wgs84_north,
                elevation,
                avg_daily_traffic: count.and_then(|c| c.avg_daily_traffic),
                avg_daily_traffic_weekdays: count.and_then(|c| c.avg_daily_traffic_weekdays),
                avg_daily_traffic_weekends: count.and_then(|c| c.avg_daily_traffic_weekends),
            }
        })
        .collect();

    let by_id = nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| (node.bpuic, idx))
        .collect();
    let mut by_name: HashMap<String, u32> = HashMap::new();
    for node in &nodes {
        // nodes are sorted by id, so the lowest number claims the name
        by_name
            .entry(node.station_name.clone())
            .or_insert(node.bpuic);
    }

    NodeSet {
        nodes,
        by_id,
        by_name,
    }
}

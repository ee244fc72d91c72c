use geo::{Distance, Geodesic, Point};
use itertools::Itertools;
use railnet_core::input::line_points::LinePointRow;
use railnet_core::node_ops::NodeSet;
use railnet_core::trip_ops::Trip;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// an undirected edge of the space-of-stations representation: the two
/// stations are adjacent on the physical track network. written once per
/// pair with the smaller code first.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StationsEdge {
    #[serde(rename = "BPUIC1")]
    pub from: u32,
    #[serde(rename = "BPUIC2")]
    pub to: u32,
    /// direct geodesic distance between the stations in km
    #[serde(
        rename = "DISTANCE_GEODESIC",
        serialize_with = "railnet_core::output::decimal::f64_4"
    )]
    pub distance_geodesic: f64,
    /// track distance in km from the line kilometer positions, where the
    /// line table covers the pair
    #[serde(
        rename = "DISTANCE_EXACT",
        serialize_with = "railnet_core::output::decimal::opt_f64_4"
    )]
    pub distance_exact: Option<f64>,
}

/// pairs the run data suggests are adjacent but which the track network
/// connects only through intermediate stations, or which duplicate
/// infrastructure already represented by another edge. resolved against
/// the node set by official designation.
const REMOVED_STATION_EDGES: [(&str, &str); 11] = [
    ("Bern", "Zofingen"),
    ("Bern Wankdorf", "Zürich HB"),
    ("Morges", "Yverdon-les-Bains"),
    ("Aarau", "Sissach"),
    ("Bergün/Bravuogn", "Pontresina"),
    ("Interlaken West", "Spiez"),
    ("Biel/Bienne", "Grenchen Nord"),
    ("Chambrelien", "Neuchâtel"),
    ("Concise", "Yverdon-les-Bains"),
    ("Etoy", "Rolle"),
    ("Klosters Platz", "Susch"), // keep a single edge for the vereina tunnel
];

/// physical connections the run data alone cannot express.
const ADDED_STATION_EDGES: [(&str, &str); 11] = [
    ("Biasca", "Erstfeld"),             // gotthard base tunnel
    ("Bern Wankdorf", "Rothrist"),      // bahn-2000 line
    ("Chambrelien", "Corcelles-Peseux"),
    ("Concise", "Grandson"),
    ("Immensee", "Rotkreuz"),
    ("Olten", "Rothrist"),              // bypasses aarburg-oftringen
    ("Rothrist", "Solothurn"),          // bahn-2000 line
    ("Aarau", "Däniken SO"),            // eppenberg tunnel
    ("Liestal", "Muttenz"),             // adler tunnel
    ("Thalwil", "Zürich HB"),           // zimmerberg tunnel
    ("Zürich Altstetten", "Zürich HB"), // own connecting infrastructure
];

/// the line table holds a wrong kilometer position for baar lindenpark;
/// corrected track distance to zug in km.
const BAAR_LINDENPARK: u32 = 8515993;
const ZUG: u32 = 8502204;
const BAAR_LINDENPARK_ZUG_KM: f64 = 1.0593;

/// builds the space-of-stations edge set: undirected consecutive-stop
/// pairs with shortcut pairs eliminated and the curated corrections
/// applied, weighted by geodesic and exact track distance. edges whose
/// endpoints lack coordinates are excluded with a warning.
pub fn build_edges(
    trips: &[Trip],
    nodes: &NodeSet,
    line_points: Vec<LinePointRow>,
) -> Vec<StationsEdge> {
    let mut pairs: BTreeSet<(u32, u32)> = BTreeSet::new();
    let mut stations: BTreeSet<u32> = BTreeSet::new();
    for trip in trips {
        for stop in &trip.stops {
            stations.insert(stop.bpuic);
        }
        for window in trip.stops.windows(2) {
            if window[0].bpuic != window[1].bpuic {
                pairs.insert(undirected(window[0].bpuic, window[1].bpuic));
            }
        }
    }

    // one representative per distinct stop sequence is enough for the
    // shortcut checks below
    let sequences: Vec<Vec<u32>> = trips
        .iter()
        .map(|trip| trip.stops.iter().map(|stop| stop.bpuic).collect_vec())
        .sorted()
        .dedup()
        .collect_vec();
    let mut coverage: HashMap<u32, Vec<usize>> = HashMap::new();
    for (idx, sequence) in sequences.iter().enumerate() {
        for bpuic in sequence.iter().collect::<HashSet<_>>() {
            coverage.entry(*bpuic).or_default().push(idx);
        }
    }

    let mut retained: BTreeSet<(u32, u32)> = pairs
        .into_iter()
        .filter(|pair| !is_shortcut(*pair, &sequences, &coverage))
        .collect();

    for (a, b) in REMOVED_STATION_EDGES {
        if let Some(pair) = resolve_pair(nodes, a, b) {
            retained.remove(&pair);
        }
    }
    for (a, b) in ADDED_STATION_EDGES {
        if let Some(pair) = resolve_pair(nodes, a, b) {
            retained.insert(pair);
        }
    }

    let exact = exact_line_distances(line_points, nodes, &stations);

    retained
        .into_iter()
        .filter_map(|(from, to)| {
            let Some(distance_geodesic) = geodesic_km(nodes, from, to) else {
                log::warn!("excluding edge {from}-{to}: missing station coordinates");
                return None;
            };
            Some(StationsEdge {
                from,
                to,
                distance_geodesic,
                distance_exact: exact.get(&(from, to)).copied(),
            })
        })
        .collect()
}

fn undirected(a: u32, b: u32) -> (u32, u32) {
    (a.min(b), a.max(b))
}

/// a pair is a shortcut when some distinct stop sequence serves both
/// stations without them being adjacent in that sequence, meaning the
/// track between them passes other stations.
fn is_shortcut(
    pair: (u32, u32),
    sequences: &[Vec<u32>],
    coverage: &HashMap<u32, Vec<usize>>,
) -> bool {
    let (Some(covering_a), Some(covering_b)) = (coverage.get(&pair.0), coverage.get(&pair.1))
    else {
        return false;
    };
    let covering_b: HashSet<usize> = covering_b.iter().copied().collect();
    covering_a
        .iter()
        .copied()
        .filter(|idx| covering_b.contains(idx))
        .any(|idx| !adjacent_in(&sequences[idx], pair))
}

fn adjacent_in(sequence: &[u32], (a, b): (u32, u32)) -> bool {
    sequence
        .windows(2)
        .any(|w| (w[0] == a && w[1] == b) || (w[0] == b && w[1] == a))
}

fn resolve_pair(nodes: &NodeSet, a: &str, b: &str) -> Option<(u32, u32)> {
    match (nodes.id_for_name(a), nodes.id_for_name(b)) {
        (Some(id_a), Some(id_b)) => Some(undirected(id_a, id_b)),
        _ => {
            log::warn!("curated station pair '{a}'/'{b}' does not resolve in the node set");
            None
        }
    }
}

/// derives exact track distances for station pairs adjacent on a numbered
/// line, from the difference of their kilometer positions. operation
/// points that never appear as stations in the run data are skipped, so
/// consecutive positions pair up stations rather than signals or sidings.
/// when several lines cover a pair, the shortest track wins.
fn exact_line_distances(
    line_points: Vec<LinePointRow>,
    nodes: &NodeSet,
    stations: &BTreeSet<u32>,
) -> HashMap<(u32, u32), f64> {
    let mut missing: BTreeSet<u32> = BTreeSet::new();
    let mut by_line: BTreeMap<u32, Vec<LinePointRow>> = BTreeMap::new();
    for row in line_points {
        if !nodes.contains(row.bpuic) {
            missing.insert(row.bpuic);
            continue;
        }
        if !stations.contains(&row.bpuic) {
            continue;
        }
        by_line.entry(row.line_id).or_default().push(row);
    }
    for bpuic in &missing {
        log::warn!(
            "line table references code {bpuic} with no service point entry; excluding its rows"
        );
    }

    let mut distances: HashMap<(u32, u32), f64> = HashMap::new();
    for rows in by_line.values_mut() {
        rows.sort_by(|a, b| a.km.total_cmp(&b.km).then(a.bpuic.cmp(&b.bpuic)));
        for window in rows.windows(2) {
            if window[0].bpuic == window[1].bpuic {
                continue;
            }
            let pair = undirected(window[0].bpuic, window[1].bpuic);
            let km = (window[1].km - window[0].km).abs();
            distances
                .entry(pair)
                .and_modify(|existing| {
                    if km < *existing {
                        *existing = km;
                    }
                })
                .or_insert(km);
        }
    }
    distances.insert(undirected(BAAR_LINDENPARK, ZUG), BAAR_LINDENPARK_ZUG_KM);
    distances
}

fn geodesic_km(nodes: &NodeSet, from: u32, to: u32) -> Option<f64> {
    let origin = nodes.get(from)?;
    let destination = nodes.get(to)?;
    let (Some(lon1), Some(lat1)) = (origin.longitude, origin.latitude) else {
        return None;
    };
    let (Some(lon2), Some(lat2)) = (destination.longitude, destination.latitude) else {
        return None;
    };
    let meters = Geodesic.distance(Point::new(lon1, lat1), Point::new(lon2, lat2));
    Some(meters / 1000.0)
}

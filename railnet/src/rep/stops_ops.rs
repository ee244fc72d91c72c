use railnet_core::trip_ops::Trip;
use serde::Serialize;
use std::collections::BTreeMap;

/// a directed edge of the space-of-stops representation: at least one
/// train run serves `from` and `to` consecutively.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StopsEdge {
    #[serde(rename = "BPUIC1")]
    pub from: u32,
    #[serde(rename = "BPUIC2")]
    pub to: u32,
    /// number of runs serving the two stops consecutively
    #[serde(rename = "NUM_CONNECTIONS")]
    pub num_connections: u64,
    /// mean travel time in minutes over those runs
    #[serde(
        rename = "AVG_DURATION",
        serialize_with = "railnet_core::output::decimal::f64_2"
    )]
    pub avg_duration: f64,
}

/// the runs between basel bad bf and schaffhausen pass through german
/// stations the swiss data does not record, so the pair is not an
/// adjacency in this network.
const EXCLUDED_STOP_PAIRS: [(u32, u32); 2] = [(8500090, 8503424), (8503424, 8500090)];

/// builds the space-of-stops edge set: one row per directed stop pair
/// served consecutively, aggregated to a connection count and a mean
/// travel time, sorted by source then target code.
pub fn build_edges(trips: &[Trip]) -> Vec<StopsEdge> {
    accumulate_connections(trips)
        .into_iter()
        .map(|((from, to), (count, minutes_sum))| StopsEdge {
            from,
            to,
            num_connections: count,
            avg_duration: minutes_sum / count as f64,
        })
        .collect()
}

/// sums consecutive-stop connections per directed pair: number of runs and
/// total travel time in minutes. pairs missing a departure or arrival time
/// and self-pairs contribute nothing.
pub(crate) fn accumulate_connections(trips: &[Trip]) -> BTreeMap<(u32, u32), (u64, f64)> {
    let mut connections: BTreeMap<(u32, u32), (u64, f64)> = BTreeMap::new();
    for trip in trips {
        for pair in trip.stops.windows(2) {
            if pair[0].bpuic == pair[1].bpuic {
                continue;
            }
            let (Some(departure), Some(arrival)) = (pair[0].departure, pair[1].arrival) else {
                continue;
            };
            let minutes = (arrival - departure).num_seconds() as f64 / 60.0;
            let entry = connections
                .entry((pair[0].bpuic, pair[1].bpuic))
                .or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += minutes;
        }
    }
    for pair in EXCLUDED_STOP_PAIRS {
        connections.remove(&pair);
    }
    connections
}

#[cfg(test)]
mod test {
    use super::build_edges;
    use crate::rep::test_support::{run, stop};

    #[test]
    fn test_consecutive_stops_only() {
        // one run A -> B -> C must yield A->B and B->C, never A->C
        let trips = vec![run(
            "r1",
            vec![
                stop(1, None, Some("08:00")),
                stop(2, Some("08:10"), Some("08:12")),
                stop(3, Some("08:30"), None),
            ],
        )];
        let edges = build_edges(&trips);
        let pairs: Vec<(u32, u32)> = edges.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(pairs, vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_duplicate_pairs_aggregate_to_count_and_mean() {
        let trips = vec![
            run(
                "r1",
                vec![stop(1, None, Some("08:00")), stop(2, Some("08:10"), None)],
            ),
            run(
                "r2",
                vec![stop(1, None, Some("09:00")), stop(2, Some("09:14"), None)],
            ),
        ];
        let edges = build_edges(&trips);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].num_connections, 2);
        assert_eq!(edges[0].avg_duration, 12.0);
    }

    #[test]
    fn test_basel_schaffhausen_pair_is_excluded() {
        let trips = vec![run(
            "r1",
            vec![
                stop(8500090, None, Some("08:00")),
                stop(8503424, Some("08:40"), None),
            ],
        )];
        assert!(build_edges(&trips).is_empty());
    }

    #[test]
    fn test_edges_are_sorted_by_source_then_target() {
        let trips = vec![
            run(
                "r1",
                vec![stop(5, None, Some("08:00")), stop(2, Some("08:10"), None)],
            ),
            run(
                "r2",
                vec![stop(2, None, Some("09:00")), stop(9, Some("09:10"), None)],
            ),
            run(
                "r3",
                vec![stop(2, None, Some("10:00")), stop(3, Some("10:10"), None)],
            ),
        ];
        let pairs: Vec<(u32, u32)> = build_edges(&trips).iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(pairs, vec![(2, 3), (2, 9), (5, 2)]);
    }
}

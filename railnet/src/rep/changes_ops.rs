use chrono::NaiveTime;
use railnet_core::trip_ops::Trip;
use rayon::prelude::*;
use serde::Serialize;

/// a directed temporal edge of the space-of-changes representation: a
/// single train run departs `from` and later reaches `to`, possibly with
/// stops in between. riding any prefix of a run therefore needs no change
/// of trains; every connection requiring a transfer shows up as the
/// absence of such an edge.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChangesEdge {
    #[serde(rename = "BPUIC1")]
    pub from: u32,
    #[serde(rename = "BPUIC2")]
    pub to: u32,
    /// departure at `from` in whole minutes since midnight of the
    /// operating day
    #[serde(rename = "START")]
    pub start: i64,
    /// travel time to `to` in whole minutes
    #[serde(rename = "DURATION")]
    pub duration: i64,
}

/// builds the space-of-changes edge set: every ordered stop pair within a
/// run becomes one row, no aggregation. this is combinatorially the
/// largest variant, so pairs are generated per run in parallel and merged
/// with a fixed sort to keep the output deterministic.
pub fn build_edges(trips: &[Trip]) -> Vec<ChangesEdge> {
    let mut edges: Vec<ChangesEdge> = trips.par_iter().flat_map_iter(run_pairs).collect();
    edges.sort_by_key(|e| (e.from, e.to, e.start, e.duration));
    edges
}

fn run_pairs(trip: &Trip) -> Vec<ChangesEdge> {
    let mut results = Vec::new();
    for (i, origin) in trip.stops.iter().enumerate() {
        let Some(departure) = origin.departure else {
            continue;
        };
        let midnight = origin.operating_day.and_time(NaiveTime::MIN);
        let start = (departure - midnight).num_minutes();
        for destination in trip.stops.iter().skip(i + 1) {
            if destination.bpuic == origin.bpuic {
                continue;
            }
            let Some(arrival) = destination.arrival else {
                continue;
            };
            results.push(ChangesEdge {
                from: origin.bpuic,
                to: destination.bpuic,
                start,
                duration: (arrival - departure).num_minutes(),
            });
        }
    }
    results
}

#[cfg(test)]
mod test {
    use super::{build_edges, ChangesEdge};
    use crate::rep::test_support::{run, stop};

    #[test]
    fn test_three_stop_run_yields_three_ordered_pairs() {
        let trips = vec![run(
            "r1",
            vec![
                stop(1, None, Some("08:00")),
                stop(2, Some("08:10"), Some("08:12")),
                stop(3, Some("08:30"), None),
            ],
        )];
        let edges = build_edges(&trips);
        assert_eq!(
            edges,
            vec![
                ChangesEdge {
                    from: 1,
                    to: 2,
                    start: 480,
                    duration: 10
                },
                ChangesEdge {
                    from: 1,
                    to: 3,
                    start: 480,
                    duration: 30
                },
                ChangesEdge {
                    from: 2,
                    to: 3,
                    start: 492,
                    duration: 18
                },
            ]
        );
    }

    #[test]
    fn test_every_pair_is_kept_without_aggregation() {
        let trips = vec![
            run(
                "r1",
                vec![stop(1, None, Some("08:00")), stop(2, Some("08:10"), None)],
            ),
            run(
                "r2",
                vec![stop(1, None, Some("09:00")), stop(2, Some("09:10"), None)],
            ),
        ];
        let edges = build_edges(&trips);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].start, 480);
        assert_eq!(edges[1].start, 540);
    }

    #[test]
    fn test_revisited_station_produces_no_self_loop() {
        let trips = vec![run(
            "loop",
            vec![
                stop(1, None, Some("08:00")),
                stop(2, Some("08:10"), Some("08:12")),
                stop(1, Some("08:30"), None),
            ],
        )];
        let edges = build_edges(&trips);
        assert!(edges.iter().all(|e| e.from != e.to));
    }
}

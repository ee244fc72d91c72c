use crate::model::StopEvent;
use crate::node_ops::NodeSet;
use std::collections::{BTreeMap, BTreeSet};

/// one train run with its stop events in order of departure.
#[derive(Debug, Clone)]
pub struct Trip {
    pub trip_id: String,
    pub stops: Vec<StopEvent>,
}

/// groups cleaned stop events into train runs.
///
/// events referencing a code absent from the service point registry are
/// excluded with one warning per code; runs with a single remaining stop
/// (mostly trains turning at a border point) are dropped. within a run,
/// stops are ordered by departure time with the terminal stop (no
/// departure) last, ties broken by arrival time and then code, so the
/// ordering never depends on input order.
pub fn assemble_trips(events: Vec<StopEvent>, nodes: &NodeSet) -> Vec<Trip> {
    let mut missing: BTreeSet<u32> = BTreeSet::new();
    let mut groups: BTreeMap<String, Vec<StopEvent>> = BTreeMap::new();
    for event in events {
        if !nodes.contains(event.bpuic) {
            missing.insert(event.bpuic);
            continue;
        }
        groups.entry(event.trip_id.clone()).or_default().push(event);
    }
    for bpuic in &missing {
        log::warn!(
            "actual data references code {bpuic} with no service point entry; excluding its stop events"
        );
    }

    groups
        .into_iter()
        .filter(|(_, stops)| stops.len() > 1)
        .map(|(trip_id, mut stops)| {
            stops.sort_by_key(|stop| {
                (
                    stop.departure.is_none(),
                    stop.departure,
                    stop.arrival.is_none(),
                    stop.arrival,
                    stop.bpuic,
                )
            });
            Trip { trip_id, stops }
        })
        .collect()
}

use crate::rep::stops_ops;
use railnet_core::node_ops::NodeSet;
use railnet_core::trip_ops::Trip;
use serde::Serialize;

/// a directed edge of the passenger-flow representation: the
/// space-of-stops adjacency weighted by the daily passenger volume its
/// endpoints support.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FlowsEdge {
    #[serde(rename = "BPUIC1")]
    pub from: u32,
    #[serde(rename = "BPUIC2")]
    pub to: u32,
    /// number of runs serving the two stops consecutively
    #[serde(rename = "NUM_CONNECTIONS")]
    pub num_connections: u64,
    /// mean of the endpoints' average daily traffic; absent when either
    /// endpoint has no passenger count
    #[serde(
        rename = "AVG_DAILY_FLOW",
        serialize_with = "railnet_core::output::decimal::opt_f64_1"
    )]
    pub avg_daily_flow: Option<f64>,
}

/// builds the passenger-flow edge set, sorted by source then target code.
pub fn build_edges(trips: &[Trip], nodes: &NodeSet) -> Vec<FlowsEdge> {
    stops_ops::accumulate_connections(trips)
        .into_iter()
        .map(|((from, to), (count, _))| {
            let avg_daily_flow = match (daily_traffic(nodes, from), daily_traffic(nodes, to)) {
                (Some(a), Some(b)) => Some((a + b) as f64 / 2.0),
                _ => None,
            };
            FlowsEdge {
                from,
                to,
                num_connections: count,
                avg_daily_flow,
            }
        })
        .collect()
}

fn daily_traffic(nodes: &NodeSet, bpuic: u32) -> Option<u64> {
    nodes.get(bpuic).and_then(|node| node.avg_daily_traffic)
}

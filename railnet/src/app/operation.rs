use crate::rep::{changes_ops, flows_ops, stations_ops, stops_ops};
use clap::{Args, Subcommand};
use railnet_core::error::RailNetError;
use railnet_core::input::{actual_data, line_points, passenger_counts, service_points};
use railnet_core::node_ops::{self, NodeSet};
use railnet_core::output::write_ops;
use railnet_core::trip_ops::{self, Trip};
use std::path::Path;

/// source tables shared by every representation. the node set is derived
/// from the service point registry and the passenger counts; the edge
/// sets from the actual run data.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// actual data (istdaten) table with the recorded train runs of one
    /// operating day
    #[arg(long, default_value_t = String::from("raw/2025-03-05_istdaten.csv"))]
    pub actual_data: String,
    /// service point registry table
    #[arg(
        long,
        default_value_t = String::from("raw/actual_date-swiss-only-service_point-2025-03-06.csv")
    )]
    pub service_points: String,
    /// passenger boarding and alighting counts table
    #[arg(long, default_value_t = String::from("raw/t01x-sbb-cff-ffs-frequentia-2023.csv"))]
    pub passenger_counts: String,
    /// directory receiving the node and edge list files
    #[arg(long, default_value_t = String::from("."))]
    pub output_dir: String,
}

/// the loaded and cleaned inputs every edge builder works from.
pub struct NetworkData {
    pub nodes: NodeSet,
    pub trips: Vec<Trip>,
}

impl SourceArgs {
    pub fn load(&self) -> Result<NetworkData, RailNetError> {
        let points = service_points::load_service_points(Path::new(&self.service_points))?;
        let counts = passenger_counts::load_passenger_counts(Path::new(&self.passenger_counts))?;
        let nodes = node_ops::extract_nodes(points, &counts);
        let events = actual_data::load_stop_events(Path::new(&self.actual_data))?;
        let trips = trip_ops::assemble_trips(events, &nodes);
        log::info!("loaded {} nodes and {} train runs", nodes.len(), trips.len());
        Ok(NetworkData { nodes, trips })
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Operation {
    /// build the space-of-stops representation: directed edges between
    /// stops served consecutively by a train run
    Stops {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// build the space-of-stations representation: undirected physical
    /// track adjacency with geodesic and exact distances
    Stations {
        #[command(flatten)]
        source: SourceArgs,
        /// line-to-operation-point mapping table with kilometer positions
        #[arg(long, default_value_t = String::from("raw/linie-mit-betriebspunkten.csv"))]
        line_points: String,
    },
    /// build the space-of-changes representation: directed temporal edges
    /// between every ordered stop pair of a train run
    Changes {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// build the passenger-flow representation: stop adjacency weighted
    /// by average daily traffic
    Flows {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Operation {
    /// runs one batch derivation end to end: load, extract nodes, build
    /// the representation's edges, write the node and edge files.
    pub fn run(&self) -> Result<(), RailNetError> {
        match self {
            Operation::Stops { source } => {
                let network = source.load()?;
                let edges = stops_ops::build_edges(&network.trips);
                write_ops::write_network(
                    Path::new(&source.output_dir),
                    "stops",
                    network.nodes.nodes(),
                    &edges,
                )
            }
            Operation::Stations {
                source,
                line_points,
            } => {
                let network = source.load()?;
                let rows = line_points::load_line_points(Path::new(line_points))?;
                let edges = stations_ops::build_edges(&network.trips, &network.nodes, rows);
                write_ops::write_network(
                    Path::new(&source.output_dir),
                    "stations",
                    network.nodes.nodes(),
                    &edges,
                )
            }
            Operation::Changes { source } => {
                let network = source.load()?;
                let edges = changes_ops::build_edges(&network.trips);
                write_ops::write_network(
                    Path::new(&source.output_dir),
                    "changes",
                    network.nodes.nodes(),
                    &edges,
                )
            }
            Operation::Flows { source } => {
                let network = source.load()?;
                let edges = flows_ops::build_edges(&network.trips, &network.nodes);
                write_ops::write_network(
                    Path::new(&source.output_dir),
                    "flows",
                    network.nodes.nodes(),
                    &edges,
                )
            }
        }
    }
}

//! core data model and dataset adapters for deriving graph representations
//! of the swiss railway network from the published open transport data
//! tables. see <https://opentransportdata.swiss> for the source datasets.
pub mod error;
pub mod input;
pub mod model;
pub mod node_ops;
pub mod output;
pub mod trip_ops;

mod operation;
mod railnet_app;

pub use operation::{NetworkData, Operation, SourceArgs};
pub use railnet_app::RailNetApp;

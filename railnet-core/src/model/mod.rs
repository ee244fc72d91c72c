mod node;
mod station_alias;
mod stop_event;

pub use node::Node;
pub use station_alias::{StationAlias, STATION_ALIASES};
pub use stop_event::StopEvent;

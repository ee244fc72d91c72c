//! derives four graph representations of the swiss railway network from
//! the published open data tables: the space of stops, the space of
//! stations, the space of changes, and passenger-flow weighted adjacency.
//! each representation is a node list and an edge list written as
//! semicolon-delimited files.
pub mod app;
pub mod rep;

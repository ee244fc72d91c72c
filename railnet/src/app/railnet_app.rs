use super::Operation;
use clap::Parser;

/// command line tool deriving graph representations of the swiss railway
/// network from the published open data tables
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RailNetApp {
    #[command(subcommand)]
    pub op: Operation,
}

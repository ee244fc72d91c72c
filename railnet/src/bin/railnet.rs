//! derives graph representations of the swiss railway network from the
//! published open data tables. one subcommand per representation; each
//! invocation is a one-shot batch run writing a node and an edge file.
use clap::Parser;
use railnet::app::RailNetApp;

fn main() {
    env_logger::init();
    let args = RailNetApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

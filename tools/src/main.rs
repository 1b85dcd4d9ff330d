use anyhow::Result;
use clap::Parser;

use nbs_tools::dump::{dump, DumpArgs};
use nbs_tools::inspect::{inspect, InspectArgs};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
enum Cli {
    Inspect(InspectArgs),
    Dump(DumpArgs),
}

fn main() -> Result<()> {
    match Cli::parse_from(wild::args()) {
        Cli::Inspect(args) => inspect(&args),
        Cli::Dump(args) => dump(&args),
    }
}

mod catalog;
mod census;
mod run;
mod util;

use anyhow::Result;
use catalog::{run_catalog, CatalogArgs};
use census::{run_census, CensusArgs};
use clap::{Parser, Subcommand};
use run::{run_random, run_seed, RandomArgs, RunArgs};

#[derive(Parser, Debug)]
#[command(version, about)]
struct CLIParser {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Simulate a seed file and write the census of every generation to a report file
    Run(RunArgs),
    /// Simulate a random soup and write the census of every generation to a report file
    Random(RandomArgs),
    /// List the life-forms that are counted and the masks they are recognized by
    Catalog(CatalogArgs),
    /// Print population and census of the initial field of a seed file
    Census(CensusArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIParser::parse();

    match args.action {
        Action::Run(args) => run_seed(args),
        Action::Random(args) => run_random(args),
        Action::Catalog(args) => run_catalog(args),
        Action::Census(args) => run_census(args),
    }
}

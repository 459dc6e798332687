use crate::util::print_population;
use anyhow::Result;
use clap::Args;
use life_census::{aggregate, PatternCatalog, Seed};

#[derive(Args, Debug)]
pub(super) struct CensusArgs {
    /// Path to the seed file: "W H", generations, then one "x y" per living cell; may be gzipped
    seed: String,

    /// Print the field
    #[arg(short, long)]
    print_grid: bool,
}

pub(super) fn run_census(args: CensusArgs) -> Result<()> {
    let timer = std::time::Instant::now();
    let grid = Seed::from_file(&args.seed)?.grid();
    println!("Universe size: {} x {}", grid.width(), grid.height());
    print_population(&grid);
    if args.print_grid {
        print!("{grid}");
    }

    let report = aggregate(&grid, PatternCatalog::standard());
    print!("{report}");
    println!(
        "Computed census in {:.1} secs",
        timer.elapsed().as_secs_f64()
    );
    Ok(())
}

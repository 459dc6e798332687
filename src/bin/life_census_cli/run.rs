use crate::util::{format_count, local_date, print_population};
use anyhow::{Context, Result};
use clap::Args;
use life_census::{Grid, PatternCatalog, Seed, Simulation, WORKER_THREADS};
use std::{
    fs::File,
    io::{BufWriter, Write},
    sync::{atomic::Ordering, Arc},
};

#[derive(Args, Debug)]
pub(super) struct RunArgs {
    /// Path to the seed file: "W H", generations, then one "x y" per living cell; may be gzipped
    seed: String,

    /// Overrides the number of generations given in the seed file
    #[arg(short, long)]
    generations: Option<usize>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
pub(super) struct RandomArgs {
    /// Width of the field
    #[arg(short = 'W', long)]
    width: usize,

    /// Height of the field
    #[arg(short = 'H', long)]
    height: usize,

    /// The number of generations to simulate
    #[arg(short, long)]
    generations: usize,

    /// Probability of a cell to be alive initially
    #[arg(short, long, default_value_t = 0.2)]
    density: f64,

    /// Seed of the random number generator, seeds from the OS by default
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
pub(super) struct OutputArgs {
    /// Path to the report file, simulation_results_<date>.txt by default
    #[arg(short, long)]
    output: Option<String>,

    /// The number of worker threads to use for the census, 0 picks one per core
    #[arg(short, long, default_value_t = 1)]
    workers: u32,

    /// Print the field of every generation
    #[arg(short, long)]
    print_grid: bool,
}

pub(super) fn run_seed(args: RunArgs) -> Result<()> {
    let timer = std::time::Instant::now();
    let seed = Seed::from_file(&args.seed)?;
    println!(
        "Loaded seed in {:.1} secs",
        timer.elapsed().as_secs_f64()
    );
    let generations = args.generations.unwrap_or(seed.generations);
    simulate(seed.grid(), generations, &args.output)
}

pub(super) fn run_random(args: RandomArgs) -> Result<()> {
    let grid = Grid::random(args.width, args.height, args.density, args.seed)?;
    simulate(grid, args.generations, &args.output)
}

fn simulate(grid: Grid, generations: usize, args: &OutputArgs) -> Result<()> {
    WORKER_THREADS.store(args.workers, Ordering::Relaxed);
    let date = local_date();
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| format!("simulation_results_{date}.txt"));
    let (width, height) = (grid.width(), grid.height());

    let file = File::create(&path).with_context(|| format!("Failed to create {path}"))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "Simulation at {date}")?;
    writeln!(writer, "Universe size: {width} x {height}\n")?;

    println!("Simulation at {date}");
    println!("Universe size: {width} x {height}");
    print_population(&grid);

    let catalog = Arc::new(PatternCatalog::standard().clone());
    let mut totals = vec![0; catalog.len()];
    let timer = std::time::Instant::now();
    Simulation::new(grid, Arc::clone(&catalog), generations)?.run(|generation| {
        if args.print_grid {
            println!("Generation {}:\n{}", generation.index, generation.grid);
        }
        writeln!(writer, "{}", generation.report)?;
        for (total, entry) in totals.iter_mut().zip(generation.report.counts()) {
            *total += entry.count;
        }
        Ok(())
    })?;
    writer.flush()?;
    println!(
        "Simulated {} generations in {:.1} secs",
        generations,
        timer.elapsed().as_secs_f64()
    );

    println!("Matches over all generations:");
    for (entry, total) in catalog.all_entries().iter().zip(totals) {
        println!("{:<22}{:>12}", entry.name, format_count(total));
    }
    println!("Results in {path}");
    Ok(())
}

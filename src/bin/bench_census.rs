use anyhow::Result;
use life_census::*;
use std::sync::{atomic::Ordering, Arc};

const SEED: u64 = 42;

fn main() -> Result<()> {
    let catalog = Arc::new(PatternCatalog::standard().clone());
    for size in [128, 256, 512] {
        // let the soup settle so that the catalog life-forms show up
        let grid = Arc::new(Grid::random(size, size, 0.2, Some(SEED))?.advance(100));
        println!("size={size}\tpopulation={}", grid.population());

        for workers in [1, 2, 4, 0] {
            WORKER_THREADS.store(workers, Ordering::Relaxed);
            let aggregator = StatsAggregator::new(Arc::clone(&catalog))?;

            let timer = std::time::Instant::now();
            let report = aggregator.aggregate(&grid)?;
            let elapsed = timer.elapsed();
            println!(
                "workers={}\tmatches={}\ttime={}",
                aggregator.workers(),
                report.total(),
                elapsed.as_secs_f64()
            );
        }

        let timer = std::time::Instant::now();
        std::hint::black_box(step(&grid));
        println!("step time={}", timer.elapsed().as_secs_f64());
    }
    Ok(())
}

use crate::{step, GenerationReport, Grid, PatternCatalog, StatsAggregator};
use anyhow::Result;
use std::sync::Arc;

/// A generation of the simulation together with its census.
#[derive(Clone, Debug)]
pub struct Generation {
    /// Zero-based index of the generation.
    pub index: usize,
    /// The field the census was taken on.
    pub grid: Arc<Grid>,
    pub report: GenerationReport,
}

/// Drives a fixed number of generations, taking a census of every
/// generation before stepping to the next one.
///
/// The current field is shared as an immutable snapshot; every step
/// allocates the next field and replaces the snapshot, so generations
/// already handed out are never modified.
///
/// # Example
///
/// ```rust
/// use life_census::{Grid, PatternCatalog, Simulation};
/// use std::sync::Arc;
///
/// let blinker = Grid::from_living_cells(5, 5, [(2, 1), (2, 2), (2, 3)]).unwrap();
/// let catalog = Arc::new(PatternCatalog::standard().clone());
/// let simulation = Simulation::new(blinker, catalog, 3).unwrap();
///
/// for generation in simulation {
///     let generation = generation.unwrap();
///     assert_eq!(generation.report.count("Blinker"), Some(1));
/// }
/// ```
pub struct Simulation {
    grid: Arc<Grid>,
    aggregator: StatsAggregator,
    generation: usize,
    generations: usize,
}

impl Simulation {
    /// Prepares `generations` generations starting from `grid`.
    ///
    /// # Errors
    ///
    /// Returns an error if the census workers could not be started.
    pub fn new(grid: Grid, catalog: Arc<PatternCatalog>, generations: usize) -> Result<Self> {
        let aggregator = StatsAggregator::new(catalog)?;
        log::info!(
            "Simulating {} generations on {}x{} field, {} entries, {} census workers",
            generations,
            grid.width(),
            grid.height(),
            aggregator.catalog().len(),
            aggregator.workers()
        );
        Ok(Self {
            grid: Arc::new(grid),
            aggregator,
            generation: 0,
            generations,
        })
    }

    /// The field of the generation that will be reported next.
    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    /// Number of generations left to report.
    pub fn remaining(&self) -> usize {
        self.generations - self.generation
    }

    /// Reports the current generation and steps to the next one.
    /// Returns `Ok(None)` once all the generations were reported.
    ///
    /// # Errors
    ///
    /// Returns an error if the census failed; the field is not stepped then.
    pub fn next_generation(&mut self) -> Result<Option<Generation>> {
        if self.generation == self.generations {
            return Ok(None);
        }

        let report = self
            .aggregator
            .aggregate(&self.grid)?
            .with_generation(self.generation);
        log::debug!(
            "Generation {}: population {}, {} matches",
            self.generation,
            self.grid.population(),
            report.total()
        );

        let next = Arc::new(step(&self.grid));
        let current = std::mem::replace(&mut self.grid, next);
        let generation = Generation {
            index: self.generation,
            grid: current,
            report,
        };
        self.generation += 1;
        Ok(Some(generation))
    }

    /// Runs all the remaining generations, passing each one to `on_generation`.
    ///
    /// Stops at the first error, either from the census or from the callback.
    pub fn run<F>(mut self, mut on_generation: F) -> Result<()>
    where
        F: FnMut(&Generation) -> Result<()>,
    {
        while let Some(generation) = self.next_generation()? {
            on_generation(&generation)?;
        }
        Ok(())
    }
}

impl Iterator for Simulation {
    type Item = Result<Generation>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_generation().transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

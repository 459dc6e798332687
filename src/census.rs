//! Per-generation frequency statistics of the catalog life-forms.
use crate::{count_occurrences, CatalogEntry, Grid, PatternCatalog, WORKER_THREADS};
use anyhow::{anyhow, Context, Result};
use std::{
    fmt,
    sync::{atomic::Ordering, Arc},
};

/// Number of occurrences of one catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryCount {
    pub name: String,
    pub count: usize,
}

/// Census of a single generation: how many times every catalog entry
/// was found, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// Zero-based index of the generation the census was taken on.
    pub generation: usize,
    counts: Vec<EntryCount>,
    total: usize,
}

impl GenerationReport {
    pub fn new(generation: usize, counts: Vec<EntryCount>) -> Self {
        let total = counts.iter().map(|c| c.count).sum();
        Self {
            generation,
            counts,
            total,
        }
    }

    pub fn with_generation(mut self, generation: usize) -> Self {
        self.generation = generation;
        self
    }

    /// Sum of the counts of all entries.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn counts(&self) -> &[EntryCount] {
        &self.counts
    }

    pub fn count(&self, name: &str) -> Option<usize> {
        self.counts.iter().find(|c| c.name == name).map(|c| c.count)
    }

    /// Share of `name` among all matches, in percent; 0 when nothing matched.
    pub fn percent(&self, name: &str) -> Option<f64> {
        self.count(name).map(|count| self.percent_of(count))
    }

    /// `(name, count, percent)` for every entry, in catalog order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, usize, f64)> + '_ {
        self.counts
            .iter()
            .map(|c| (c.name.as_str(), c.count, self.percent_of(c.count)))
    }

    fn percent_of(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * count as f64 / self.total as f64
        }
    }
}

const SEPARATOR: &str = "-----------------------------------";

impl fmt::Display for GenerationReport {
    /// Renders the census as a table, iterations are numbered from 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Iteration: {}", self.generation + 1)?;
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "| {:<20} | {:<10} | {:<10} |", "Entity", "Count", "Percent")?;
        writeln!(f, "{SEPARATOR}")?;
        for (name, count, percent) in self.rows() {
            writeln!(f, "| {:<20} | {:<10} | {:<10.2}% |", name, count, percent)?;
        }
        writeln!(f, "{SEPARATOR}")
    }
}

/// Total occurrences of `entry` over all of its masks.
///
/// Masks are searched independently: nothing is deduplicated across phases.
pub fn count_entry(grid: &Grid, entry: &CatalogEntry) -> usize {
    entry
        .masks
        .iter()
        .map(|mask| count_occurrences(grid, mask))
        .sum()
}

/// Takes the census of `grid` for every entry of `catalog`, sequentially.
///
/// The returned report has generation index 0, see
/// [`GenerationReport::with_generation`].
pub fn aggregate(grid: &Grid, catalog: &PatternCatalog) -> GenerationReport {
    let counts = catalog
        .all_entries()
        .iter()
        .map(|entry| {
            let count = count_entry(grid, entry);
            log::trace!("{}: {}", entry.name, count);
            EntryCount {
                name: entry.name.clone(),
                count,
            }
        })
        .collect();
    GenerationReport::new(0, counts)
}

/// Takes censuses against a fixed catalog, optionally searching the
/// entries concurrently.
///
/// The worker count is read from [`WORKER_THREADS`] on construction:
/// `1` searches on the calling thread, `0` lets tokio pick the number of
/// workers, anything else spawns that many workers. Reports are identical
/// whatever the setting.
pub struct StatsAggregator {
    catalog: Arc<PatternCatalog>,
    runtime: Option<tokio::runtime::Runtime>,
}

impl StatsAggregator {
    /// # Errors
    ///
    /// Returns an error if the worker threads could not be started.
    pub fn new(catalog: Arc<PatternCatalog>) -> Result<Self> {
        let threads = WORKER_THREADS.load(Ordering::Relaxed);
        let runtime = if threads == 1 {
            None
        } else {
            let mut builder = tokio::runtime::Builder::new_multi_thread();
            if threads > 0 {
                builder.worker_threads(threads as usize);
            }
            Some(builder.build().context("Failed to start census workers")?)
        };
        Ok(Self { catalog, runtime })
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Number of threads the searches run on.
    pub fn workers(&self) -> usize {
        self.runtime
            .as_ref()
            .map_or(1, |rt| rt.metrics().num_workers())
    }

    /// Takes the census of `grid`, see [`aggregate`].
    ///
    /// # Errors
    ///
    /// Returns an error if a concurrent search task panicked.
    pub fn aggregate(&self, grid: &Arc<Grid>) -> Result<GenerationReport> {
        let Some(runtime) = &self.runtime else {
            return Ok(aggregate(grid, &self.catalog));
        };

        runtime.block_on(async {
            let handles: Vec<_> = (0..self.catalog.len())
                .map(|i| {
                    let grid = Arc::clone(grid);
                    let catalog = Arc::clone(&self.catalog);
                    tokio::spawn(async move { count_entry(&grid, &catalog.all_entries()[i]) })
                })
                .collect();

            let mut counts = Vec::with_capacity(handles.len());
            for (entry, handle) in self.catalog.all_entries().iter().zip(handles) {
                let count = handle
                    .await
                    .map_err(|err| anyhow!("Search for \"{}\" failed: {}", entry.name, err))?;
                log::trace!("{}: {}", entry.name, count);
                counts.push(EntryCount {
                    name: entry.name.clone(),
                    count,
                });
            }
            Ok::<_, anyhow::Error>(GenerationReport::new(0, counts))
        })
    }
}

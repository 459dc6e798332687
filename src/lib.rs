#![warn(clippy::all)]

mod catalog;
mod census;
mod grid;
mod loader;
mod mask;
mod matcher;
mod simulation;
mod step;

pub use catalog::{CatalogEntry, PatternCatalog, PatternKind};
pub use census::{aggregate, count_entry, EntryCount, GenerationReport, StatsAggregator};
pub use grid::{Cell, Grid};
pub use loader::{LoadError, Seed};
pub use mask::Mask;
pub use matcher::{count_occurrences, has_occurrence, occurrences};
pub use simulation::{Generation, Simulation};
pub use step::step;

pub const VERSION: &str = "0.1.0";

use std::sync::atomic::AtomicU32;
/// Threads used by [`StatsAggregator`] to search the catalog:
/// 1 searches on the calling thread, 0 lets the runtime decide.
pub static WORKER_THREADS: AtomicU32 = AtomicU32::new(1);

use crate::Mask;
use anyhow::{anyhow, Result};
use rand::{Rng, SeedableRng};
use std::fmt;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Applies the B3/S23 rule to a cell with `neighbors` alive neighbors.
    #[inline]
    pub fn evolve(self, neighbors: u8) -> Cell {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// A rectangular field of cells stored in row-major order.
///
/// The grid is never updated in place by the simulation: [`Grid::step`]
/// builds the next generation from a frozen snapshot and the caller
/// replaces its grid with the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) cells: Vec<Cell>,
}

/// Number of cells of a `width` x `height` field, `None` if it cannot be allocated.
pub(crate) fn cell_count(width: usize, height: usize) -> Option<usize> {
    width
        .checked_mul(height)
        .filter(|&n| n <= isize::MAX as usize)
}

fn too_large(width: usize, height: usize) -> anyhow::Error {
    anyhow!("Grid of {}x{} cells is too large", width, height)
}

impl Grid {
    /// Creates a grid where every cell is dead.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows or exceeds `isize::MAX`.
    pub fn new(width: usize, height: usize) -> Self {
        let Some(len) = cell_count(width, height) else {
            panic!("{}", too_large(width, height));
        };
        Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        }
    }

    /// Creates a grid from the coordinates `(x, y)` of its living cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is too large to allocate or if any
    /// coordinate lies outside `[0, width) x [0, height)`.
    pub fn from_living_cells<I>(width: usize, height: usize, living: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        if cell_count(width, height).is_none() {
            return Err(too_large(width, height));
        }
        let mut grid = Self::new(width, height);
        for (x, y) in living {
            if x >= width || y >= height {
                return Err(anyhow!(
                    "Living cell out of bounds: x = {}, y = {} (grid is {}x{})",
                    x,
                    y,
                    width,
                    height
                ));
            }
            grid.cells[x + y * width] = Cell::Alive;
        }
        Ok(grid)
    }

    /// Fills a grid randomly, each cell being alive with probability `density`.
    ///
    /// # Arguments
    ///
    /// * `seed` - Optional seed for the random number generator.
    ///   If None, seeds from the OS.
    ///
    /// # Errors
    ///
    /// Returns an error if `density` is not within `[0, 1]` or if the grid is
    /// too large to allocate.
    pub fn random(width: usize, height: usize, density: f64, seed: Option<u64>) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(anyhow!("density {} is not within [0, 1]", density));
        }
        let len = cell_count(width, height).ok_or_else(|| too_large(width, height))?;
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_os_rng()
        };
        let cells = (0..len)
            .map(|_| Cell::from(rng.random_bool(density)))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) is out of bounds");
        self.cells[x + y * self.width]
    }

    /// Returns the cells of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates `(x, y)` of the alive cells in row-major order.
    pub fn living_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    /// Copies `mask` verbatim (dead cells included) with its top-left corner at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the mask does not fit inside the grid at that position.
    pub fn stamp(&mut self, mask: &Mask, x: usize, y: usize) -> Result<()> {
        if x + mask.width() > self.width || y + mask.height() > self.height {
            return Err(anyhow!(
                "{}x{} mask does not fit at ({}, {}) into {}x{} grid",
                mask.width(),
                mask.height(),
                x,
                y,
                self.width,
                self.height
            ));
        }
        for dy in 0..mask.height() {
            let start = x + (y + dy) * self.width;
            self.cells[start..start + mask.width()].copy_from_slice(mask.row(dy));
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for &cell in self.row(y) {
                f.write_str(if cell.is_alive() { "*" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

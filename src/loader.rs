//! Reading of seed files.
//!
//! A seed file is plain text: the first line holds the field size `W H`,
//! the second one the number of generations, every following line the
//! coordinates `x y` of one living cell. Blank lines are ignored.
//! Files with the `.gz` extension are decompressed first.
use crate::{grid, Cell, Grid};
use ahash::AHashSet;
use flate2::read::GzDecoder;
use std::{io::Read, path::Path};

/// Reasons a seed file can be rejected for.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid input format at line {line}: {reason}")]
    InvalidInputFormat { line: usize, reason: String },
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
}

fn invalid(line: usize, reason: impl Into<String>) -> LoadError {
    LoadError::InvalidInputFormat {
        line,
        reason: reason.into(),
    }
}

/// Initial state of a simulation as described by a seed file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    pub width: usize,
    pub height: usize,
    pub generations: usize,
    /// Coordinates `(x, y)` of the living cells, all within the field.
    pub living_cells: AHashSet<(usize, usize)>,
}

impl Seed {
    /// Parses the contents of a seed file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidInputFormat`] if a line is missing, holds
    /// the wrong number of fields or a field that is not a non-negative
    /// integer, if the field is empty, or if a cell lies outside of it.
    pub fn parse(data: &str) -> Result<Self, LoadError> {
        let mut lines = data
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line, dims) = lines.next().ok_or_else(|| invalid(1, "missing field size"))?;
        let [width, height] = parse_fields(line, dims, ["width", "height"])?;
        if width == 0 || height == 0 {
            return Err(invalid(
                line,
                format!("field size must be positive, got {}x{}", width, height),
            ));
        }
        if grid::cell_count(width, height).is_none() {
            return Err(invalid(
                line,
                format!("field size {}x{} is too large", width, height),
            ));
        }

        let (line, gens) = lines
            .next()
            .ok_or_else(|| invalid(line + 1, "missing number of generations"))?;
        let [generations] = parse_fields(line, gens, ["generations"])?;

        let mut living_cells = AHashSet::new();
        for (line, cell) in lines {
            let [x, y] = parse_fields(line, cell, ["x", "y"])?;
            if x >= width || y >= height {
                return Err(invalid(
                    line,
                    format!(
                        "cell ({}, {}) lies outside of the {}x{} field",
                        x, y, width, height
                    ),
                ));
            }
            living_cells.insert((x, y));
        }

        Ok(Self {
            width,
            height,
            generations,
            living_cells,
        })
    }

    /// Reads and parses a seed file, gunzipping it if its name ends with `.gz`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let mut raw = std::fs::read(path)?;
        if path.extension().is_some_and(|ext| ext == "gz") {
            let mut data = Vec::new();
            GzDecoder::new(&raw[..]).read_to_end(&mut data)?;
            raw = data;
        }
        let data = String::from_utf8(raw).map_err(|e| {
            let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
            let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
            invalid(line, "line is not valid UTF-8")
        })?;
        Self::parse(&data)
    }

    /// Builds the initial field.
    pub fn grid(&self) -> Grid {
        let mut grid = Grid::new(self.width, self.height);
        for &(x, y) in &self.living_cells {
            grid.cells[x + y * self.width] = Cell::Alive;
        }
        grid
    }
}

fn parse_fields<const N: usize>(
    line: usize,
    text: &str,
    names: [&str; N],
) -> Result<[usize; N], LoadError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() != N {
        return Err(invalid(
            line,
            format!("expected {} fields ({}), got {}", N, names.join(" "), parts.len()),
        ));
    }
    let mut values = [0; N];
    for ((value, part), name) in values.iter_mut().zip(parts).zip(names) {
        *value = part.parse().map_err(|_| {
            invalid(
                line,
                format!("{} is not a non-negative integer: \"{}\"", name, part),
            )
        })?;
    }
    Ok(values)
}

use crate::Cell;
use anyhow::{anyhow, Result};
use std::fmt;

/// An exact pattern to look for in a grid.
///
/// Every cell of the mask must match, dead ones included. Known life-forms
/// are written with a dead border around them, so that a bigger cluster of
/// alive cells is not reported as the smaller life-form it contains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Mask {
    /// Builds a mask from rows of `.` (dead) and `*` (alive) characters.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the rows are empty or of
    /// different lengths, or contain any other character.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(anyhow!("Mask must not be empty"));
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(anyhow!(
                    "Mask row {} has length {}, expected {}",
                    y,
                    row.len(),
                    width
                ));
            }
            for b in row.bytes() {
                cells.push(match b {
                    b'.' => Cell::Dead,
                    b'*' => Cell::Alive,
                    _ => return Err(anyhow!("Invalid mask character: '{}'", b as char)),
                });
            }
        }

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

    /// Number of cells the matcher compares at each anchor.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Number of alive cells required by the mask.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }
}

impl fmt::Display for Mask {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let mask = Mask::from_rows(&[".....", "..*..", ".*.*.", "..*..", "....."]).unwrap();
        assert_eq!((mask.width(), mask.height(), mask.area()), (5, 5, 25));
        assert_eq!(mask.population(), 4);
        assert_eq!(mask.row(2), &[Cell::Dead, Cell::Alive, Cell::Dead, Cell::Alive, Cell::Dead]);
        assert_eq!(mask.to_string(), ".....\n..*..\n.*.*.\n..*..\n.....\n");
    }

    #[test]
    fn test_from_rows_invalid() {
        assert!(Mask::from_rows::<&str>(&[]).is_err());
        assert!(Mask::from_rows(&[""]).is_err());
        assert!(Mask::from_rows(&["...", ".."]).is_err());
        assert!(Mask::from_rows(&["..o"]).is_err());
    }
}

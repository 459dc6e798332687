use crate::Grid;

/// Moore neighborhood without the center.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Computes the next generation of `grid` under B3/S23 with opposite
/// bounds of the field stitched together (torus topology).
///
/// All neighbor counts are taken from `grid`, which is left untouched;
/// the result is a freshly allocated grid of the same size.
///
/// Neighbors are counted per offset: on fields narrower or shorter than
/// 3 cells a wrapped offset can land on the same cell twice, or on the
/// cell itself, and is counted every time.
pub fn step(grid: &Grid) -> Grid {
    let (w, h) = (grid.width, grid.height);
    let mut cells = Vec::with_capacity(grid.cells.len());

    for y in 0..h {
        for x in 0..w {
            let mut neighbors = 0u8;
            for (dx, dy) in NEIGHBOR_OFFSETS {
                let nx = (x as isize + dx).rem_euclid(w as isize) as usize;
                let ny = (y as isize + dy).rem_euclid(h as isize) as usize;
                neighbors += grid.cells[nx + ny * w] as u8;
            }
            cells.push(grid.cells[x + y * w].evolve(neighbors));
        }
    }

    Grid {
        width: w,
        height: h,
        cells,
    }
}

impl Grid {
    /// Returns the next generation, see [`step`].
    pub fn step(&self) -> Grid {
        step(self)
    }

    /// Advances the grid by `generations` steps.
    pub fn advance(&self, generations: usize) -> Grid {
        let mut grid = self.clone();
        for _ in 0..generations {
            grid = step(&grid);
        }
        grid
    }
}

//! Exact sub-grid search.
//!
//! The search is a plain scan over every anchor where the mask fits inside
//! the grid, costing `O(width * height * mask area)` per mask. Matching never
//! wraps around the edges of the grid, unlike [`step`](crate::step()).
use crate::{Grid, Mask};

/// Returns the anchors `(x, y)` (top-left corners) of every exact occurrence
/// of `mask` in `grid`, in row-major order.
///
/// Overlapping occurrences are all reported. A mask bigger than the grid in
/// either dimension has no occurrences.
pub fn occurrences<'a>(
    grid: &'a Grid,
    mask: &'a Mask,
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let (xs, ys) = if mask.width() > grid.width() || mask.height() > grid.height() {
        (0, 0)
    } else {
        (
            grid.width() - mask.width() + 1,
            grid.height() - mask.height() + 1,
        )
    };
    (0..ys)
        .flat_map(move |y| (0..xs).map(move |x| (x, y)))
        .filter(move |&(x, y)| matches_at(grid, mask, x, y))
}

/// Counts the exact occurrences of `mask` in `grid`, one per distinct anchor.
pub fn count_occurrences(grid: &Grid, mask: &Mask) -> usize {
    occurrences(grid, mask).count()
}

/// Returns `true` if `mask` occurs in `grid`, stopping at the first match.
pub fn has_occurrence(grid: &Grid, mask: &Mask) -> bool {
    occurrences(grid, mask).next().is_some()
}

/// The mask must fit at `(x, y)`.
#[inline]
fn matches_at(grid: &Grid, mask: &Mask, x: usize, y: usize) -> bool {
    (0..mask.height()).all(|dy| grid.row(y + dy)[x..x + mask.width()] == *mask.row(dy))
}

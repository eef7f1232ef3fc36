//! Random choices of the selection loop.

use rand::Rng;

use crate::grid::Grid;
use crate::usable::UsabilityIndex;

/// Uniform draw among the minimum-rank group at the front of a sorted index.
///
/// `None` only when the index is empty.
pub(crate) fn pick_min_rank<R: Rng + ?Sized>(
    index: &UsabilityIndex,
    grid: &Grid,
    rng: &mut R,
) -> Option<usize> {
    let group = index.min_rank_group(grid);
    if group.is_empty() {
        return None;
    }
    Some(group[rng.gen_range(0..group.len())])
}

/// Uniform cell of the whole grid, drawn as two independent coordinates.
pub(crate) fn pick_any_cell<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> usize {
    let n = grid.size() as i32;
    let x = rng.gen_range(0..n);
    let y = rng.gen_range(0..n);
    x as usize + y as usize * grid.size()
}

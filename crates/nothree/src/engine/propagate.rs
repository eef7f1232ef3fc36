//! Consequences of a commit: invalidation of collinear cells and rank updates.
//!
//! Both passes walk lattice lines through the newly chosen point `p` with the
//! primitive step towards another point, in both directions, until the walk
//! leaves the grid.

use crate::grid::{Grid, PointState};
use crate::lattice::{line_through, primitive_step, Lattice2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Mark usable cells on both rays of `origin + k*step` as unusable.
///
/// Returns the number of cells that changed state.
pub(crate) fn invalidate_line(grid: &mut Grid, origin: Lattice2, step: Lattice2) -> usize {
    let n = grid.size() as i32;
    let mut newly = 0;
    for q in line_through(origin, step, n) {
        let idx = grid.index_of(q);
        let state = grid.state_mut(idx);
        if matches!(*state, PointState::Usable(_)) {
            *state = PointState::Unusable;
            newly += 1;
        }
    }
    newly
}

/// Invalidate every usable cell collinear with `p` and some cell of `prior`.
///
/// Idempotent and independent of the order of `prior`.
pub(crate) fn invalidate_from(grid: &mut Grid, p: usize, prior: &[usize]) -> usize {
    let origin = grid.point(p).pos();
    let mut newly = 0;
    for &q in prior {
        if let Some(step) = primitive_step(grid.point(q).pos(), origin) {
            newly += invalidate_line(grid, origin, step);
        }
    }
    newly
}

/// Number of usable cells on the line through `origin` and `q`, minus `q` itself.
///
/// `None` when `q` is not usable or coincides with `origin`.
pub(crate) fn rank_increment(grid: &Grid, origin: Lattice2, q: usize) -> Option<u32> {
    let cell = grid.point(q);
    if !cell.is_usable() {
        return None;
    }
    let step = primitive_step(cell.pos(), origin)?;
    let on_line = line_through(origin, step, grid.size() as i32)
        .filter(|&r| grid.point(grid.index_of(r)).is_usable())
        .count();
    // `q` lies on the walk; exclude it from its own count.
    Some(u32::try_from(on_line.saturating_sub(1)).unwrap_or(u32::MAX))
}

/// Increments for every usable cell after committing `p`, in storage order.
#[cfg(not(feature = "parallel"))]
pub(crate) fn rank_increments(grid: &Grid, p: usize) -> Vec<(usize, u32)> {
    let origin = grid.point(p).pos();
    (0..grid.len())
        .filter_map(|q| rank_increment(grid, origin, q).map(|d| (q, d)))
        .collect()
}

/// Increments for every usable cell after committing `p`, in storage order.
#[cfg(feature = "parallel")]
pub(crate) fn rank_increments(grid: &Grid, p: usize) -> Vec<(usize, u32)> {
    let origin = grid.point(p).pos();
    (0..grid.len())
        .into_par_iter()
        .filter_map(|q| rank_increment(grid, origin, q).map(|d| (q, d)))
        .collect()
}

/// Add the collinear-loss increment to every usable cell relative to `p`.
///
/// `p` must already be committed so the walks do not count it.
pub(crate) fn propagate_rank(grid: &mut Grid, p: usize) {
    debug_assert!(grid.point(p).is_committed());
    for (q, delta) in rank_increments(grid, p) {
        if let PointState::Usable(rank) = grid.state_mut(q) {
            *rank = rank.saturating_add(delta);
        }
    }
}

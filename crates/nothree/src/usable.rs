//! Usability index: the usable cells ordered by ascending rank.
//!
//! The index never owns cells; it stores flat grid indices. Its two mutation
//! entry points keep it sorted by construction:
//! - `insert` places a usable cell after every entry of lower or equal rank;
//! - `remove_and_sort` drops entries that stopped being usable and re-sorts by
//!   the current ranks.
//! Sorting is stable, so ties keep their previous relative order. Ties are
//! broken by the caller (uniform draw over `min_rank_group`).

use crate::grid::Grid;

#[derive(Clone, Debug, Default)]
pub struct UsabilityIndex {
    cells: Vec<usize>,
}

impl UsabilityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index over all usable cells of `grid`, in storage order within a rank.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut index = Self {
            cells: Vec::with_capacity(grid.len()),
        };
        for idx in 0..grid.len() {
            index.insert(grid, idx);
        }
        index
    }

    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }

    /// Insert a usable cell. Non-usable cells are ignored.
    pub(crate) fn insert(&mut self, grid: &Grid, idx: usize) {
        let Some(rank) = grid.point(idx).rank() else {
            return;
        };
        let at = self
            .cells
            .partition_point(|&c| grid.point(c).rank().is_some_and(|r| r <= rank));
        self.cells.insert(at, idx);
    }

    /// Drop every entry that is no longer usable, then stable-sort by rank.
    pub(crate) fn remove_and_sort(&mut self, grid: &Grid) {
        self.cells.retain(|&c| grid.point(c).is_usable());
        self.cells
            .sort_by_key(|&c| grid.point(c).rank().unwrap_or(u32::MAX));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat indices in index order.
    #[inline]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Rank at the front, `None` when empty.
    pub fn min_rank(&self, grid: &Grid) -> Option<u32> {
        self.cells.first().and_then(|&c| grid.point(c).rank())
    }

    /// Leading entries sharing the minimum rank (empty when the index is empty).
    pub fn min_rank_group(&self, grid: &Grid) -> &[usize] {
        let Some(min) = self.min_rank(grid) else {
            return &[];
        };
        let m = self
            .cells
            .partition_point(|&c| grid.point(c).rank() == Some(min));
        &self.cells[..m]
    }

    /// True when entries are exactly usable cells in non-decreasing rank order.
    pub fn is_consistent(&self, grid: &Grid) -> bool {
        let ranks: Option<Vec<u32>> = self.cells.iter().map(|&c| grid.point(c).rank()).collect();
        match ranks {
            Some(r) => r.windows(2).all(|w| w[0] <= w[1]) && r.len() == grid.count_usable(),
            None => false,
        }
    }
}

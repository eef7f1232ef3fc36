//! Fixed n×n lattice grid addressed by a flat row-major index.
//!
//! Purpose
//! - Own every `GridPoint` of one trial in a single contiguous `Vec`.
//! - Answer bounds and lookup queries in O(1); everything else in the crate
//!   refers to cells by index only.
//!
//! Layout
//! - `index(x, y) = x + y*n`: `x` varies fastest, so a scan in storage order is
//!   the "rows of `y`, columns of `x`" loop of the rank update.

mod types;

pub use types::{GridPoint, PointState, MAX_SIZE};

use crate::lattice::{in_square, Lattice2};

/// The n×n collection of lattice points of one engine.
#[derive(Clone, Debug)]
pub struct Grid {
    n: usize,
    cells: Vec<GridPoint>,
}

impl Grid {
    /// Allocate an all-usable grid. Callers validate `1 <= n <= MAX_SIZE`.
    pub(crate) fn new(n: usize) -> Self {
        debug_assert!((1..=MAX_SIZE).contains(&n));
        let side = n as i32;
        let mut cells = Vec::with_capacity(n * n);
        for y in 0..side {
            for x in 0..side {
                cells.push(GridPoint::new(x, y));
            }
        }
        Self { n, cells }
    }

    /// Restore every cell to `Usable(0)` in place.
    pub(crate) fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.state = PointState::default();
        }
    }

    /// Side length `n`.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of cells, `n²`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        in_square(Lattice2::new(x, y), self.n as i32)
    }

    /// Flat index of `(x, y)`, `None` when out of bounds.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| x as usize + y as usize * self.n)
    }

    /// Flat index of an in-bounds lattice position.
    #[inline]
    pub(crate) fn index_of(&self, p: Lattice2) -> usize {
        debug_assert!(in_square(p, self.n as i32));
        p.x as usize + p.y as usize * self.n
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&GridPoint> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Cell by flat index. Panics on an out-of-range index.
    #[inline]
    pub fn point(&self, idx: usize) -> &GridPoint {
        &self.cells[idx]
    }

    #[inline]
    pub(crate) fn state_mut(&mut self, idx: usize) -> &mut PointState {
        &mut self.cells[idx].state
    }

    /// All cells in storage order.
    #[inline]
    pub fn points(&self) -> &[GridPoint] {
        &self.cells
    }

    pub fn count_usable(&self) -> usize {
        self.cells.iter().filter(|c| c.is_usable()).count()
    }

    pub fn count_committed(&self) -> usize {
        self.cells.iter().filter(|c| c.is_committed()).count()
    }

    /// Coordinates of committed cells in storage order.
    pub fn committed_coords(&self) -> Vec<(i32, i32)> {
        self.cells
            .iter()
            .filter(|c| c.is_committed())
            .map(|c| (c.x, c.y))
            .collect()
    }
}

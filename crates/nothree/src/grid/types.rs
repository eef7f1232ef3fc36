//! Cell types for the n×n grid.
//!
//! - `PointState`: explicit tagged solver state of one cell.
//! - `GridPoint`: lattice position plus state.

use std::fmt;

use crate::lattice::Lattice2;

/// Largest supported side length. Keeps every coordinate and every rank
/// increment far inside `i32`/`u32`.
pub const MAX_SIZE: usize = 4096;

/// Solver state of one lattice cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointState {
    /// Still selectable; the rank is the accumulated penalty for choosing it.
    Usable(u32),
    /// Collinear with two committed points (or excluded by a symmetry rule).
    Unusable,
    /// Part of the solution.
    Committed,
}

impl Default for PointState {
    fn default() -> Self {
        PointState::Usable(0)
    }
}

/// One lattice position of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
    pub state: PointState,
}

impl GridPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            state: PointState::default(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Lattice2 {
        Lattice2::new(self.x, self.y)
    }

    /// Rank of a usable point, `None` otherwise.
    #[inline]
    pub fn rank(&self) -> Option<u32> {
        match self.state {
            PointState::Usable(r) => Some(r),
            _ => None,
        }
    }

    #[inline]
    pub fn is_usable(&self) -> bool {
        matches!(self.state, PointState::Usable(_))
    }

    #[inline]
    pub fn is_committed(&self) -> bool {
        self.state == PointState::Committed
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            PointState::Usable(r) => write!(f, "(x: {}, y: {}, rank: {r})", self.x, self.y),
            PointState::Unusable => write!(f, "(x: {}, y: {}, unusable)", self.x, self.y),
            PointState::Committed => write!(f, "(x: {}, y: {}, committed)", self.x, self.y),
        }
    }
}

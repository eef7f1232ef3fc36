//! Greedy selection engine: one grid, one usability index, one RNG.
//!
//! Purpose
//! - Drive a single trial from the empty grid to a maximal configuration:
//!   pick a candidate, invalidate the cells it makes collinear with earlier
//!   picks, commit it, update ranks, re-sort the index, repeat.
//!
//! Invariants
//! - Ranks change only inside `commit`, which always ends with
//!   `UsabilityIndex::remove_and_sort`; selection therefore never sees a stale
//!   order.
//! - A usable cell is never on a line through two committed cells, so every
//!   commit keeps the configuration free of collinear triples.
//!
//! Policies
//! - `RankPriority`: minimum rank, uniform tie-break.
//! - `LinearScan`: ranks stay 0, so the tie group is every usable cell.
//! - `DiagonalSymmetric`: as `LinearScan`, plus the mirror `(y, x)` of each
//!   commit; a point on the diagonal instead clears its anti-diagonal.

mod propagate;
mod select;
mod types;

pub use types::{EngineCfg, EngineError, Phase, Policy, TrialOutcome};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::grid::{Grid, GridPoint, PointState, MAX_SIZE};
use crate::lattice::Lattice2;
use crate::usable::UsabilityIndex;

use propagate::{invalidate_from, invalidate_line, propagate_rank};
use select::{pick_any_cell, pick_min_rank};

/// A reusable no-three-in-line search instance for a fixed `n`.
#[derive(Clone, Debug)]
pub struct Engine {
    grid: Grid,
    usable: UsabilityIndex,
    solution: Vec<usize>,
    rng: StdRng,
    policy: Policy,
    phase: Phase,
}

impl Engine {
    /// Allocate an `n`×`n` instance. Fails unless `1 <= n <= MAX_SIZE`.
    pub fn new(n: usize, cfg: EngineCfg) -> Result<Self, EngineError> {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(n, cfg.policy, rng)
    }

    /// Rank-priority instance with a fixed seed.
    pub fn with_seed(n: usize, seed: u64) -> Result<Self, EngineError> {
        Self::new(
            n,
            EngineCfg {
                policy: Policy::RankPriority,
                seed: Some(seed),
            },
        )
    }

    /// Instance driven by a caller-provided generator (e.g. from a `ReplayToken`).
    pub fn with_rng(n: usize, policy: Policy, rng: StdRng) -> Result<Self, EngineError> {
        if n == 0 || n > MAX_SIZE {
            return Err(EngineError::InvalidSize { n });
        }
        let grid = Grid::new(n);
        let usable = UsabilityIndex::from_grid(&grid);
        Ok(Self {
            grid,
            usable,
            solution: Vec::with_capacity(2 * n),
            rng,
            policy,
            phase: Phase::Empty,
        })
    }

    /// Back to the all-usable state without reallocating. The RNG stream continues.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.solution.clear();
        self.usable.clear();
        for idx in 0..self.grid.len() {
            self.usable.insert(&self.grid, idx);
        }
        self.phase = Phase::Empty;
    }

    /// Replace the random generator; takes effect for the next draw.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Run the selection loop to exhaustion and report the result.
    ///
    /// On an exhausted engine this only reports; call `reset` to start over.
    pub fn run_trial(&mut self) -> TrialOutcome {
        tracing::debug!(n = self.size(), policy = %self.policy, "trial start");
        while self.step() != Phase::Exhausted {}
        let outcome = self.outcome();
        tracing::debug!(
            n = outcome.size,
            committed = outcome.committed,
            success = outcome.success,
            "trial exhausted"
        );
        outcome
    }

    /// Perform one transition of the selection loop and return the new phase.
    pub fn step(&mut self) -> Phase {
        match self.phase {
            Phase::Exhausted => {}
            Phase::Empty => {
                let p = pick_any_cell(&self.grid, &mut self.rng);
                self.commit(p);
            }
            Phase::Active => match pick_min_rank(&self.usable, &self.grid, &mut self.rng) {
                Some(p) => self.commit(p),
                // `commit` leaves `Active` only with a non-empty index.
                None => self.phase = Phase::Exhausted,
            },
        }
        self.phase
    }

    /// Commit a specific usable point through the regular pipeline.
    pub fn commit_at(&mut self, x: i32, y: i32) -> Result<(), EngineError> {
        if self.phase == Phase::Exhausted {
            return Err(EngineError::Exhausted);
        }
        let idx = self.grid.index(x, y).ok_or(EngineError::OutOfBounds {
            x,
            y,
            n: self.size(),
        })?;
        if !self.grid.point(idx).is_usable() {
            return Err(EngineError::NotUsable { x, y });
        }
        self.commit(idx);
        Ok(())
    }

    fn commit(&mut self, p: usize) {
        self.commit_one(p);
        if self.policy.mirrors() {
            self.commit_mirror(p);
        }
        self.usable.remove_and_sort(&self.grid);
        self.phase = if self.usable.is_empty() {
            Phase::Exhausted
        } else {
            Phase::Active
        };
    }

    fn commit_one(&mut self, p: usize) {
        let invalidated = invalidate_from(&mut self.grid, p, &self.solution);
        *self.grid.state_mut(p) = PointState::Committed;
        self.solution.push(p);
        if self.policy.tracks_rank() {
            propagate_rank(&mut self.grid, p);
        }
        let pt = self.grid.point(p);
        tracing::trace!(x = pt.x, y = pt.y, invalidated, "commit");
    }

    fn commit_mirror(&mut self, p: usize) {
        let pt = *self.grid.point(p);
        if pt.x == pt.y {
            invalidate_line(&mut self.grid, pt.pos(), Lattice2::new(1, -1));
            return;
        }
        let m = self.grid.index_of(Lattice2::new(pt.y, pt.x));
        if self.grid.point(m).is_usable() {
            self.commit_one(m);
        } else {
            tracing::debug!(x = pt.y, y = pt.x, "mirror already excluded; skipped");
        }
    }

    /// Committed count and success flag for the current state.
    pub fn outcome(&self) -> TrialOutcome {
        TrialOutcome::new(self.size(), self.solution.len())
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Read-only view of the grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Usable points in index order (ascending rank).
    pub fn usable(&self) -> impl Iterator<Item = &GridPoint> + '_ {
        self.usable.cells().iter().map(|&c| self.grid.point(c))
    }

    #[inline]
    pub fn usable_index(&self) -> &UsabilityIndex {
        &self.usable
    }

    /// Committed points in commit order.
    pub fn solution(&self) -> impl Iterator<Item = &GridPoint> + '_ {
        self.solution.iter().map(|&c| self.grid.point(c))
    }

    pub fn solution_coords(&self) -> Vec<(i32, i32)> {
        self.solution().map(|p| (p.x, p.y)).collect()
    }
}

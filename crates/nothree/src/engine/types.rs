//! Engine configuration, phases, outcomes, and errors.

use std::fmt;

use crate::grid::MAX_SIZE;

/// Selection/invalidation policy of an engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Minimum-rank greedy choice with uniform tie-break.
    #[default]
    RankPriority,
    /// Uniform choice among all usable points; ranks are never updated.
    LinearScan,
    /// Uniform choice; every commit of `(a, b)` also handles its mirror `(b, a)`.
    DiagonalSymmetric,
}

impl Policy {
    /// Whether rank propagation runs after each commit.
    #[inline]
    pub fn tracks_rank(self) -> bool {
        matches!(self, Policy::RankPriority)
    }

    #[inline]
    pub fn mirrors(self) -> bool {
        matches!(self, Policy::DiagonalSymmetric)
    }

    pub fn name(self) -> &'static str {
        match self {
            Policy::RankPriority => "rank-priority",
            Policy::LinearScan => "linear-scan",
            Policy::DiagonalSymmetric => "diagonal-symmetric",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Engine configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineCfg {
    pub policy: Policy,
    /// RNG seed; `None` draws one from OS entropy (non-reproducible).
    pub seed: Option<u64>,
}

/// Selection loop state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing committed yet.
    Empty,
    /// At least one commit and at least one usable point left.
    Active,
    /// No usable point left; terminal until `reset`.
    Exhausted,
}

/// Result of a trial (or of the current state of one).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Grid side length `n`.
    pub size: usize,
    /// Number of committed points.
    pub committed: usize,
    /// Success threshold, `2n`.
    pub target: usize,
    /// `committed >= target`.
    pub success: bool,
}

impl TrialOutcome {
    pub(crate) fn new(size: usize, committed: usize) -> Self {
        let target = 2 * size;
        Self {
            size,
            committed,
            target,
            success: committed >= target,
        }
    }
}

/// Errors surfaced by the engine API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Side length outside `1..=MAX_SIZE`.
    InvalidSize { n: usize },
    /// `commit_at` with a position outside the grid.
    OutOfBounds { x: i32, y: i32, n: usize },
    /// `commit_at` on a committed or invalidated point.
    NotUsable { x: i32, y: i32 },
    /// `commit_at` after the trial is exhausted.
    Exhausted,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { n } => {
                write!(f, "invalid grid size {n}: expected 1..={MAX_SIZE}")
            }
            Self::OutOfBounds { x, y, n } => {
                write!(f, "point ({x}, {y}) is outside the {n}x{n} grid")
            }
            Self::NotUsable { x, y } => write!(f, "point ({x}, {y}) is not usable"),
            Self::Exhausted => write!(f, "trial is exhausted; reset before committing"),
        }
    }
}

impl std::error::Error for EngineError {}

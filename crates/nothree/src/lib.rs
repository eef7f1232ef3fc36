//! Randomized greedy search for the no-three-in-line problem.
//!
//! Choose points of an n×n lattice so that no three are collinear. The engine
//! keeps, for every usable point, the number of other usable points that
//! would be lost if it were chosen next, and greedily commits a minimum-rank
//! point (uniform among ties) until nothing can be added. The result is a
//! maximal configuration; `2n` points is the success threshold.
//!
//! Layout
//! - `lattice`: gcd-reduced steps and bounded ray walks.
//! - `grid`: the n×n cells and their `PointState`.
//! - `usable`: usable cells sorted by rank.
//! - `engine`: invalidation, rank propagation, selection loop, policies.
//! - `replay`: reproducible per-trial seeds for batches of trials.
//! - `render`, `verify`: formatting and independent checks.
//!
//! API Policy
//! - There is no stable public API yet; `api` lists the surface the CLI and
//!   benches rely on.

pub mod api;
pub mod engine;
pub mod grid;
pub mod lattice;
pub mod render;
pub mod replay;
pub mod usable;
pub mod verify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use engine::{Engine, EngineCfg, EngineError, Phase, Policy, TrialOutcome};
pub use grid::{Grid, GridPoint, PointState, MAX_SIZE};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::engine::{Engine, EngineCfg, EngineError, Phase, Policy, TrialOutcome};
    pub use crate::grid::{Grid, GridPoint, PointState};
    pub use crate::render::render;
    pub use crate::replay::ReplayToken;
    pub use crate::verify::{find_collinear_triple, is_maximal, is_valid};
}

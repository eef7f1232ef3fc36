//! Curated surface for the CLI, benches, and experiments (UNSTABLE).
//!
//! Breaking changes are allowed; prefer these re-exports so call sites move
//! together when internals are reorganized.

// Engine and its configuration
pub use crate::engine::{Engine, EngineCfg, EngineError, Phase, Policy, TrialOutcome};
// Grid inspection
pub use crate::grid::{Grid, GridPoint, PointState, MAX_SIZE};
pub use crate::usable::UsabilityIndex;
// Batches of reproducible trials
pub use crate::replay::ReplayToken;
// Output and diagnostics
pub use crate::render::render;
pub use crate::verify::{find_collinear_triple, is_diagonal_symmetric, is_maximal, is_valid};

//! JSON report shapes printed by the subcommands, plus build provenance.

use nothree::api::{is_maximal, is_valid, Engine};
use serde::Serialize;
use std::process::Command;

/// One finished (or partially driven) trial.
#[derive(Debug, Serialize)]
pub struct TrialReport {
    pub n: usize,
    pub policy: String,
    pub seed: u64,
    /// Trial index within a batch; `None` for single-engine runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,
    pub committed: usize,
    pub target: usize,
    pub success: bool,
    pub points: Vec<(i32, i32)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<Verification>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Verification {
    pub valid: bool,
    pub maximal: bool,
}

impl TrialReport {
    pub fn from_engine(engine: &Engine, seed: u64, index: Option<u64>, verify: bool) -> Self {
        let out = engine.outcome();
        Self {
            n: out.size,
            policy: engine.policy().to_string(),
            seed,
            index,
            committed: out.committed,
            target: out.target,
            success: out.success,
            points: engine.solution_coords(),
            verified: verify.then(|| Verification {
                valid: is_valid(engine.grid()),
                maximal: is_maximal(engine.grid()),
            }),
        }
    }
}

/// Aggregate of a parallel batch of independent trials.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub n: usize,
    pub policy: String,
    pub seed: u64,
    pub trials: u64,
    pub successes: u64,
    /// Committed counts histogram as `(committed, trials)` pairs, ascending.
    pub sizes: Vec<(usize, u64)>,
    pub best: TrialReport,
}

/// Result of repeated `reset` + `run_trial` on one engine.
#[derive(Debug, Serialize)]
pub struct UntilReport {
    pub attempts: u64,
    pub max_attempts: u64,
    pub last: TrialReport,
}

/// Version block printed by `report`.
pub fn build_info() -> serde_json::Value {
    serde_json::json!({
        "code_rev": current_git_rev(),
        "nothree": nothree::VERSION,
        "cli": env!("CARGO_PKG_VERSION"),
    })
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nothree::api::{EngineCfg, Policy};

    #[test]
    fn trial_report_mirrors_engine() {
        let mut e = Engine::new(
            5,
            EngineCfg {
                policy: Policy::LinearScan,
                seed: Some(3),
            },
        )
        .unwrap();
        e.run_trial();
        let r = TrialReport::from_engine(&e, 3, None, true);
        assert_eq!(r.n, 5);
        assert_eq!(r.policy, "linear-scan");
        assert_eq!(r.points.len(), r.committed);
        assert_eq!(r.target, 10);
        let v = r.verified.unwrap();
        assert!(v.valid && v.maximal);
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("index").is_none());
        assert_eq!(json["points"].as_array().unwrap().len(), r.committed);
    }

    #[test]
    fn build_info_has_versions() {
        let info = build_info();
        assert_eq!(info["nothree"], nothree::VERSION);
        assert!(info["code_rev"].is_string());
    }
}

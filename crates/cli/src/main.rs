use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use nothree::api::{render, Engine, EngineCfg, Phase, Policy};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod report;
mod trials;

use report::TrialReport;

#[derive(Parser, Debug)]
#[command(name = "nothree")]
#[command(about = "Greedy randomized search for no-three-in-line configurations")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Run one trial and print the grid plus a JSON summary
    Solve {
        #[command(flatten)]
        grid: GridArgs,
        /// Stop after this many commits instead of running to exhaustion
        #[arg(long)]
        max_steps: Option<usize>,
        /// Also list the usable points left (only non-empty with --max-steps)
        #[arg(long)]
        show_usable: bool,
    },
    /// Run independent trials in parallel and report the best
    Search {
        #[command(flatten)]
        grid: GridArgs,
        #[arg(long, default_value_t = 64)]
        trials: u64,
    },
    /// Reset and rerun one engine until a trial reaches 2n points
    Until {
        #[command(flatten)]
        grid: GridArgs,
        #[arg(long, default_value_t = 1000)]
        max_attempts: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug)]
struct GridArgs {
    /// Grid side length
    #[arg(long)]
    n: usize,
    /// RNG seed; drawn from entropy and logged when omitted
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = PolicyArg::Rank)]
    policy: PolicyArg,
    /// Check the result independently (validity and maximality)
    #[arg(long)]
    verify: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Rank,
    Linear,
    Diagonal,
}

impl From<PolicyArg> for Policy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Rank => Policy::RankPriority,
            PolicyArg::Linear => Policy::LinearScan,
            PolicyArg::Diagonal => Policy::DiagonalSymmetric,
        }
    }
}

impl GridArgs {
    fn resolve_seed(&self) -> u64 {
        let seed = self.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, explicit = self.seed.is_some(), "seed");
        seed
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            grid,
            max_steps,
            show_usable,
        } => solve(grid, max_steps, show_usable),
        Action::Search { grid, trials } => search(grid, trials),
        Action::Until { grid, max_attempts } => until(grid, max_attempts),
        Action::Report => report(),
    }
}

fn solve(args: GridArgs, max_steps: Option<usize>, show_usable: bool) -> Result<()> {
    let seed = args.resolve_seed();
    let policy = Policy::from(args.policy);
    tracing::info!(n = args.n, %policy, ?max_steps, "solve");
    let mut engine = Engine::new(
        args.n,
        EngineCfg {
            policy,
            seed: Some(seed),
        },
    )
    .with_context(|| format!("cannot create engine for n={}", args.n))?;
    match max_steps {
        None => {
            engine.run_trial();
        }
        Some(limit) => {
            for _ in 0..limit {
                if engine.step() == Phase::Exhausted {
                    break;
                }
            }
        }
    }
    print!("{}", render(engine.grid()));
    let summary = TrialReport::from_engine(&engine, seed, None, args.verify);
    let mut obj = serde_json::to_value(&summary)?;
    obj["phase"] = serde_json::json!(format!("{:?}", engine.phase()));
    if show_usable {
        let usable: Vec<_> = engine
            .usable()
            .map(|p| serde_json::json!({ "x": p.x, "y": p.y, "rank": p.rank() }))
            .collect();
        obj["usable"] = serde_json::Value::Array(usable);
    }
    println!("{}", serde_json::to_string_pretty(&obj)?);
    check(&summary, engine.phase() == Phase::Exhausted)
}

fn search(args: GridArgs, trials: u64) -> Result<()> {
    let seed = args.resolve_seed();
    let policy = Policy::from(args.policy);
    tracing::info!(n = args.n, %policy, trials, "search");
    let (report, engine) = trials::run_batch(args.n, policy, seed, trials, args.verify)
        .context("search failed")?;
    tracing::info!(
        successes = report.successes,
        best = report.best.committed,
        best_index = ?report.best.index,
        "search done"
    );
    print!("{}", render(engine.grid()));
    println!("{}", serde_json::to_string_pretty(&report)?);
    check(&report.best, true)
}

fn until(args: GridArgs, max_attempts: u64) -> Result<()> {
    let seed = args.resolve_seed();
    let policy = Policy::from(args.policy);
    tracing::info!(n = args.n, %policy, max_attempts, "until");
    let (report, engine) = trials::run_until(args.n, policy, seed, max_attempts, args.verify)
        .context("until failed")?;
    tracing::info!(
        attempts = report.attempts,
        success = report.last.success,
        "until done"
    );
    print!("{}", render(engine.grid()));
    println!("{}", serde_json::to_string_pretty(&report)?);
    check(&report.last, true)
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report::build_info())?);
    Ok(())
}

/// Fail the process when `--verify` found a problem.
///
/// Maximality is only meaningful once the trial ran to exhaustion.
fn check(summary: &TrialReport, finished: bool) -> Result<()> {
    if let Some(v) = summary.verified {
        if !v.valid {
            bail!("verification failed: committed points contain a collinear triple");
        }
        if finished && !v.maximal && summary.policy != Policy::DiagonalSymmetric.to_string() {
            bail!("verification failed: configuration is not maximal");
        }
    }
    Ok(())
}

//! Property tests over random sizes, seeds, and policies.

use nothree::api::{
    find_collinear_triple, is_maximal, Engine, EngineCfg, Phase, Policy, ReplayToken,
};
use nothree::lattice::{gcd, primitive_step, Lattice2};
use proptest::prelude::*;

fn policy() -> impl Strategy<Value = Policy> {
    prop_oneof![
        Just(Policy::RankPriority),
        Just(Policy::LinearScan),
        Just(Policy::DiagonalSymmetric),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn trial_is_valid_and_bounded(n in 1usize..=12, seed in any::<u64>(), policy in policy()) {
        let mut e = Engine::new(n, EngineCfg { policy, seed: Some(seed) }).unwrap();
        let out = e.run_trial();
        prop_assert_eq!(e.phase(), Phase::Exhausted);
        prop_assert!(out.committed >= 1);
        prop_assert!(out.committed <= 2 * n);
        prop_assert!(find_collinear_triple(&e.solution_coords()).is_none());
        prop_assert!(e.usable_index().is_empty());
    }

    #[test]
    fn rank_priority_is_maximal(n in 1usize..=9, seed in any::<u64>()) {
        let mut e = Engine::with_seed(n, seed).unwrap();
        e.run_trial();
        prop_assert!(is_maximal(e.grid()));
    }

    #[test]
    fn replay_token_reproduces(n in 2usize..=10, seed in any::<u64>(), index in 0u64..64) {
        let tok = ReplayToken::new(seed, index);
        let mut a = tok.engine(n, Policy::RankPriority).unwrap();
        let mut b = tok.engine(n, Policy::RankPriority).unwrap();
        a.run_trial();
        b.run_trial();
        prop_assert_eq!(a.solution_coords(), b.solution_coords());
    }

    #[test]
    fn primitive_step_is_reduced_and_parallel(
        ax in -50i32..50, ay in -50i32..50, bx in -50i32..50, by in -50i32..50,
    ) {
        let (a, b) = (Lattice2::new(ax, ay), Lattice2::new(bx, by));
        match primitive_step(a, b) {
            None => prop_assert_eq!(a, b),
            Some(s) => {
                prop_assert_eq!(gcd(s.x, s.y), 1);
                let d = b - a;
                let k = gcd(d.x, d.y);
                prop_assert_eq!(s * k, d);
            }
        }
    }
}

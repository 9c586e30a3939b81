//! Property-based tests for weighted draws.
//!
//! # Invariants tested
//!
//! - **Permutation:** a priority draw returns every input entry exactly once.
//! - **Partition order:** every quota member precedes every other entry.
//! - **Dense ranks:** ranks are renumbered `1..=N` over the drawn order.
//! - **Winner membership:** a single draw always returns an input entry.

use potluck_core::Ranking;
use potluck_lottery::{draw_winner, priority_draw};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const QUOTA_THRESHOLD: u32 = 5;

/// Strategy for rankings with unique names, counts in `1..=9`, and arbitrary
/// non-negative probabilities.
fn ranking_strategy() -> impl Strategy<Value = Vec<Ranking>> {
    proptest::collection::vec((1_u32..=9, 0.0_f64..1.0), 0..12).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (vote_count, probability))| Ranking {
                food_name: format!("food-{index}"),
                vote_count,
                probability,
                rank: index + 1,
                voters: Vec::new(),
                likes: 0,
                dislikes: 0,
            })
            .collect()
    })
}

fn sorted_names(rankings: &[Ranking]) -> Vec<String> {
    let mut names: Vec<String> = rankings.iter().map(|r| r.food_name.clone()).collect();
    names.sort_unstable();
    names
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: the priority draw is a permutation of its input.
    #[test]
    fn priority_draw_is_permutation(rankings in ranking_strategy(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let order = priority_draw(&rankings, QUOTA_THRESHOLD, &mut rng);
        prop_assert_eq!(sorted_names(&order), sorted_names(&rankings));
    }

    /// Property: quota members come first and ranks are dense.
    #[test]
    fn quota_members_precede_others(rankings in ranking_strategy(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let order = priority_draw(&rankings, QUOTA_THRESHOLD, &mut rng);

        let flags: Vec<bool> = order.iter().map(|r| r.meets_quota(QUOTA_THRESHOLD)).collect();
        prop_assert!(flags.windows(2).all(|pair| pair.first() >= pair.get(1)));

        let ranks: Vec<usize> = order.iter().map(|r| r.rank).collect();
        let expected: Vec<usize> = (1..=order.len()).collect();
        prop_assert_eq!(ranks, expected);
    }

    /// Property: a single draw returns an entry from the input.
    #[test]
    fn winner_is_an_input_entry(rankings in ranking_strategy(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let winner = draw_winner(&rankings, &mut rng);
        prop_assert_eq!(winner.is_some(), !rankings.is_empty());
        if let Some(entry) = winner {
            prop_assert!(rankings.contains(entry));
        }
    }
}

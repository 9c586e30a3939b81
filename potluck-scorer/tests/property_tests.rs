//! Property-based tests for identity resolution and ranking.
//!
//! # Invariants tested
//!
//! - **Normalisation:** `normalize` is idempotent and yields only lowercase
//!   alphanumerics.
//! - **Similarity:** scores are symmetric, lie in `[0, 1]`, and a name always
//!   matches itself.
//! - **Partition:** grouping assigns every record to exactly one cluster.
//! - **Distribution:** probabilities sum to one whenever some cluster sits
//!   below the quota threshold.
//! - **Quota:** each quota member receives exactly the reserved share divided
//!   by the number of members, and the remaining entries share the rest.
//! - **Ranks:** ranks are dense from 1 and quota members precede the rest.

use potluck_core::test_support::repeated_records;
use potluck_core::{RecommendationRecord, Snapshot};
use potluck_scorer::{
    RankingConfig, build_report, group_recommendations, normalize, similarity,
};
use proptest::prelude::*;

const FOODS: [&str; 8] = ["김밥", "떡볶이", "마라탕", "초밥", "파스타", "쌀국수", "부대찌개", "냉면"];

/// Strategy for short names mixing Hangul, Latin and Thai letters, digits,
/// combining marks, letter-like symbols, spaces and punctuation.
fn name_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex(
        "[가-힣a-zA-Z0-9ก-ฮ\u{0E31}\u{0E34}-\u{0E3A}\u{0300}-\u{036F}\u{093F}Ⓐ-ⓩ !.-]{0,12}",
    )
    .unwrap_or_else(|err| panic!("valid name regex: {err}"))
}

/// Strategy for per-food submission counts over distinct foods.
fn counts_strategy() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(1_usize..=9, 1..=FOODS.len())
}

fn snapshot_from_counts(counts: &[usize]) -> Snapshot {
    let recommendations: Vec<RecommendationRecord> = FOODS
        .iter()
        .zip(counts)
        .enumerate()
        .flat_map(|(group, (food, count))| repeated_records(food, *count, &format!("g{group}-")))
        .collect();
    Snapshot {
        recommendations,
        votes: Vec::new(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: normalising twice changes nothing.
    #[test]
    fn normalize_is_idempotent(name in name_strategy()) {
        let once = normalize(&name);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(once.chars().all(char::is_alphanumeric));
        prop_assert_eq!(once.to_lowercase(), once);
    }

    /// Property: similarity is symmetric and bounded.
    #[test]
    fn similarity_is_symmetric_and_bounded(a in name_strategy(), b in name_strategy()) {
        let forward = similarity(&a, &b);
        let backward = similarity(&b, &a);
        prop_assert_eq!(forward, backward);
        prop_assert!((0.0..=1.0).contains(&forward));
    }

    /// Property: every name is identical to itself.
    #[test]
    fn similarity_to_self_is_one(name in name_strategy()) {
        prop_assert_eq!(similarity(&name, &name), 1.0);
    }

    /// Property: cluster counts add up to the number of records.
    #[test]
    fn grouping_partitions_records(names in proptest::collection::vec(name_strategy(), 0..20)) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let records = potluck_core::test_support::records_from_names(&refs);
        let clusters = group_recommendations(&records, RankingConfig::default().resolver);
        let total: u32 = clusters.iter().map(potluck_core::FoodCluster::count).sum();
        prop_assert_eq!(usize::try_from(total).ok(), Some(records.len()));
    }

    /// Property: probabilities sum to one when a non-quota cluster exists.
    #[test]
    #[expect(
        clippy::float_arithmetic,
        reason = "assertions compare floating-point sums"
    )]
    fn probabilities_sum_to_one(mut counts in counts_strategy()) {
        counts.push(1);
        counts.truncate(FOODS.len());
        if let Some(last) = counts.last_mut() {
            *last = 1;
        }
        let report = build_report(&snapshot_from_counts(&counts), &RankingConfig::default());
        let sum: f64 = report.rankings.iter().map(|r| r.probability).sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum was {sum}");
    }

    /// Property: quota members split the reserved share evenly.
    #[test]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "assertions compare floating-point shares"
    )]
    fn quota_members_split_reserved_share(counts in counts_strategy()) {
        let config = RankingConfig::default();
        let report = build_report(&snapshot_from_counts(&counts), &config);
        let members: Vec<_> = report
            .rankings
            .iter()
            .filter(|r| r.meets_quota(config.quota.threshold))
            .collect();
        for member in &members {
            let expected = config.quota.reserved_share / members.len() as f64;
            prop_assert!((member.probability - expected).abs() < 1e-12);
        }

        let others: Vec<f64> = report
            .rankings
            .iter()
            .filter(|r| !r.meets_quota(config.quota.threshold))
            .map(|r| r.probability)
            .collect();
        if !members.is_empty() && !others.is_empty() {
            // Raw weights never drop below the floor, so the remainder is
            // always rescaled.
            let remainder: f64 = others.iter().sum();
            let expected = 1.0 - config.quota.reserved_share;
            prop_assert!(
                (remainder - expected).abs() < 1e-9,
                "non-quota sum was {remainder}"
            );
        }
    }

    /// Property: ranks run 1..=N and quota members come first.
    #[test]
    fn ranks_are_dense_and_quota_first(counts in counts_strategy()) {
        let config = RankingConfig::default();
        let report = build_report(&snapshot_from_counts(&counts), &config);
        let ranks: Vec<usize> = report.rankings.iter().map(|r| r.rank).collect();
        let expected: Vec<usize> = (1..=report.rankings.len()).collect();
        prop_assert_eq!(ranks, expected);

        let flags: Vec<bool> = report
            .rankings
            .iter()
            .map(|r| r.meets_quota(config.quota.threshold))
            .collect();
        prop_assert!(flags.windows(2).all(|pair| pair.first() >= pair.get(1)));
    }
}

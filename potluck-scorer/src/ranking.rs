//! Turn cluster weights into a ranked probability distribution.
//!
//! Ranking runs as two pure transforms so each can be checked on its own:
//! [`normalise_rankings`] divides raw weights by their total, sorts, and
//! assigns ranks; [`apply_quota_override`] then reserves a fixed share of the
//! probability mass for clusters with enough submissions.

use std::collections::BTreeMap;

use potluck_core::{FoodCluster, Ranking, VoteTally};

use crate::{IdentityResolver, RankingConfigError, RankingWeights};

/// Guaranteed-inclusion rule for well-supported clusters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotaPolicy {
    /// Submission count at which a cluster joins the quota group.
    pub threshold: u32,
    /// Share of total probability split evenly across the quota group.
    pub reserved_share: f64,
}

impl Default for QuotaPolicy {
    fn default() -> Self {
        Self {
            threshold: 5,
            reserved_share: 0.5,
        }
    }
}

impl QuotaPolicy {
    /// Validate the policy and return a copy.
    ///
    /// # Errors
    /// Returns [`RankingConfigError::ZeroQuotaThreshold`] for a zero
    /// threshold and [`RankingConfigError::InvalidQuotaShare`] when the share
    /// lies outside `0.0..=1.0`.
    pub fn validate(self) -> Result<Self, RankingConfigError> {
        if self.threshold == 0 {
            return Err(RankingConfigError::ZeroQuotaThreshold);
        }
        if !(0.0..=1.0).contains(&self.reserved_share) {
            return Err(RankingConfigError::InvalidQuotaShare {
                share: self.reserved_share,
            });
        }
        Ok(self)
    }
}

/// Every tunable used between raw records and the final ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RankingConfig {
    /// Identity check used while grouping.
    pub resolver: IdentityResolver,
    /// Raw weight coefficients.
    pub weights: RankingWeights,
    /// Quota override rule.
    pub quota: QuotaPolicy,
}

impl RankingConfig {
    /// Validate every component and return a copy.
    ///
    /// # Errors
    /// Propagates the first [`RankingConfigError`] raised by a component.
    pub fn validate(self) -> Result<Self, RankingConfigError> {
        Ok(Self {
            resolver: self.resolver.validate()?,
            weights: self.weights.validate()?,
            quota: self.quota.validate()?,
        })
    }
}

/// First stage: weigh clusters, normalise, sort, and rank.
///
/// Votes count toward a cluster only when their food name equals its
/// representative name exactly. Quota members sort first, then probability
/// descending; ties keep cluster order.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "probabilities are weights divided by their total"
)]
pub fn normalise_rankings(
    clusters: &[FoodCluster],
    tallies: &BTreeMap<String, VoteTally>,
    weights: RankingWeights,
    quota_threshold: u32,
) -> Vec<Ranking> {
    let weighed: Vec<(Ranking, f64)> = clusters
        .iter()
        .map(|cluster| {
            let tally = tallies
                .get(cluster.representative_name())
                .copied()
                .unwrap_or_default();
            let weight = weights.raw_weight(cluster.count(), tally.likes, tally.dislikes);
            (unranked_entry(cluster, tally), weight)
        })
        .collect();

    let total_weight: f64 = weighed.iter().map(|(_, weight)| weight).sum();
    let mut rankings: Vec<Ranking> = weighed
        .into_iter()
        .map(|(mut entry, weight)| {
            entry.probability = if total_weight > 0.0 {
                weight / total_weight
            } else {
                0.0
            };
            entry
        })
        .collect();

    rankings.sort_by(|a, b| {
        b.meets_quota(quota_threshold)
            .cmp(&a.meets_quota(quota_threshold))
            .then_with(|| b.probability.total_cmp(&a.probability))
    });
    for (index, entry) in rankings.iter_mut().enumerate() {
        entry.rank = index + 1;
    }
    rankings
}

/// Second stage: reserve `policy.reserved_share` for the quota group.
///
/// Each quota member receives an equal slice of the reserved share. The
/// remaining entries are rescaled to fill the rest in proportion to their
/// first-stage probabilities; when those sum to zero they are left as they
/// are. Ranks and order are untouched.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the override splits and rescales probability mass"
)]
pub fn apply_quota_override(rankings: &[Ranking], policy: QuotaPolicy) -> Vec<Ranking> {
    let quota_members = rankings
        .iter()
        .filter(|entry| entry.meets_quota(policy.threshold))
        .count();
    if quota_members == 0 {
        return rankings.to_vec();
    }

    let member_share = policy.reserved_share / quota_members as f64;
    let remainder_share = 1.0 - policy.reserved_share;
    let remainder_total: f64 = rankings
        .iter()
        .filter(|entry| !entry.meets_quota(policy.threshold))
        .map(|entry| entry.probability)
        .sum();
    log::debug!(
        "quota override: {quota_members} clusters share {}, others rescaled from {remainder_total}",
        policy.reserved_share
    );

    rankings
        .iter()
        .map(|entry| {
            let mut adjusted = entry.clone();
            if entry.meets_quota(policy.threshold) {
                adjusted.probability = member_share;
            } else if remainder_total > 0.0 {
                adjusted.probability = entry.probability / remainder_total * remainder_share;
            }
            adjusted
        })
        .collect()
}

/// Rank clusters by running both stages.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use potluck_core::test_support::repeated_records;
/// use potluck_scorer::{RankingConfig, group_recommendations, rank_clusters};
///
/// let mut records = repeated_records("김밥", 6, "a");
/// records.extend(repeated_records("떡볶이", 2, "b"));
/// let config = RankingConfig::default();
/// let clusters = group_recommendations(&records, config.resolver);
///
/// let rankings = rank_clusters(&clusters, &BTreeMap::new(), &config);
///
/// assert_eq!(rankings[0].food_name, "김밥");
/// assert_eq!(rankings[0].probability, 0.5);
/// assert!((rankings[1].probability - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn rank_clusters(
    clusters: &[FoodCluster],
    tallies: &BTreeMap<String, VoteTally>,
    config: &RankingConfig,
) -> Vec<Ranking> {
    let first_stage = normalise_rankings(clusters, tallies, config.weights, config.quota.threshold);
    apply_quota_override(&first_stage, config.quota)
}

fn unranked_entry(cluster: &FoodCluster, tally: VoteTally) -> Ranking {
    Ranking {
        food_name: cluster.representative_name().to_owned(),
        vote_count: cluster.count(),
        probability: 0.0,
        rank: 0,
        voters: cluster.voters().to_vec(),
        likes: tally.likes,
        dislikes: tally.dislikes,
    }
}

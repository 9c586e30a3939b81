//! Food identity resolution and probabilistic ranking.
//!
//! The crate turns noisy free-text submissions into a lottery-ready ranking:
//! - **Identity resolution** canonicalises names with [`normalize`], scores
//!   pairs with [`similarity`], and groups submissions into
//!   [`FoodCluster`](potluck_core::FoodCluster)s with a first-match
//!   [`IdentityResolver`].
//! - **Ranking** weighs each cluster from its submission count and exact-name
//!   votes, normalises the weights into probabilities, and reserves half of
//!   the probability mass for clusters with five or more submissions.
//!
//! Every function is pure and operates on data owned by the call, so
//! concurrent callers need no coordination.
//!
//! # Examples
//!
//! ```
//! use potluck_core::test_support::{MemorySnapshot, repeated_records};
//! use potluck_scorer::{RankingConfig, report_from_source};
//!
//! let mut records = repeated_records("삼겹살", 5, "a");
//! records.extend(repeated_records("마라탕", 1, "b"));
//! let source = MemorySnapshot::new(records, Vec::new());
//!
//! let report = report_from_source(&source, RankingConfig::default()).unwrap();
//! assert_eq!(report.total_recommendations, 6);
//! assert_eq!(report.unique_foods, 2);
//! assert_eq!(report.rankings[0].food_name, "삼겹살");
//! ```

#![forbid(unsafe_code)]

use potluck_core::{LotteryReport, Snapshot, SnapshotSource};

mod error;
mod grouping;
mod identity;
mod normalize;
mod ranking;
mod weights;

pub use error::{RankingConfigError, ReportError, SubmissionError};
pub use grouping::{ClusterBuilder, group_recommendations, votes_by_food};
pub use identity::{
    DEFAULT_SAME_FOOD_THRESHOLD, IdentityResolver, Submission, find_similar_food, is_same_food,
};
pub use normalize::{CONTAINMENT_SCORE, normalize, similarity};
pub use ranking::{
    QuotaPolicy, RankingConfig, apply_quota_override, normalise_rankings, rank_clusters,
};
pub use weights::{RankingWeights, raw_weight};

/// Build the full lottery report for a snapshot.
///
/// Recommendations are grouped in snapshot order. The configuration is used
/// as given; call [`RankingConfig::validate`] first when it comes from
/// untrusted input.
#[must_use]
pub fn build_report(snapshot: &Snapshot, config: &RankingConfig) -> LotteryReport {
    let clusters = group_recommendations(&snapshot.recommendations, config.resolver);
    let tallies = votes_by_food(&snapshot.votes);
    let rankings = rank_clusters(&clusters, &tallies, config);
    LotteryReport {
        total_recommendations: snapshot.recommendations.len(),
        unique_foods: clusters.len(),
        rankings,
    }
}

/// Validate `config`, read a snapshot from `source`, and build its report.
///
/// # Errors
/// Returns [`ReportError::Config`] for an unusable configuration and
/// [`ReportError::Snapshot`] when the source cannot be read. An unreadable
/// source is never reported as an empty ranking.
pub fn report_from_source<S>(source: &S, config: RankingConfig) -> Result<LotteryReport, ReportError>
where
    S: SnapshotSource + ?Sized,
{
    let validated = config.validate()?;
    let snapshot = source.snapshot()?;
    Ok(build_report(&snapshot, &validated))
}

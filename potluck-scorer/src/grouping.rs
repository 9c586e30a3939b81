//! Partition submissions into identity clusters and tally votes.
//!
//! Grouping is sequential and first-match: each record joins the earliest
//! created cluster whose representative name it matches, otherwise it opens a
//! new cluster. Different input orders can therefore produce different
//! partitions. Vote tallying is exact-string and never fuzzy.

use std::collections::BTreeMap;

use potluck_core::{FoodCluster, RecommendationRecord, VoteRecord, VoteTally};

use crate::IdentityResolver;

/// Builder confined to a single grouping pass.
#[derive(Debug)]
pub struct ClusterBuilder {
    resolver: IdentityResolver,
    clusters: Vec<FoodCluster>,
}

impl ClusterBuilder {
    /// Start an empty pass using `resolver` to compare names.
    #[must_use]
    pub const fn new(resolver: IdentityResolver) -> Self {
        Self {
            resolver,
            clusters: Vec::new(),
        }
    }

    /// Assign `record` to the first matching cluster or open a new one.
    pub fn push(&mut self, record: &RecommendationRecord) {
        let resolver = self.resolver;
        let found = self.clusters.iter_mut().find(|cluster| {
            resolver.is_same_food(cluster.representative_name(), &record.food_name)
        });
        match found {
            Some(cluster) => cluster.absorb(record),
            None => self.clusters.push(FoodCluster::from_record(record)),
        }
    }

    /// Finish the pass, returning clusters in creation order.
    #[must_use]
    pub fn finish(self) -> Vec<FoodCluster> {
        self.clusters
    }
}

/// Group `records`, in the order given, into identity clusters.
///
/// # Examples
///
/// ```
/// use potluck_core::test_support::records_from_names;
/// use potluck_scorer::{IdentityResolver, group_recommendations};
///
/// let records = records_from_names(&["파스타", "라멘", "파 스타"]);
/// let clusters = group_recommendations(&records, IdentityResolver::default());
///
/// assert_eq!(clusters.len(), 2);
/// assert_eq!(clusters[0].representative_name(), "파스타");
/// assert_eq!(clusters[0].count(), 2);
/// ```
#[must_use]
pub fn group_recommendations(
    records: &[RecommendationRecord],
    resolver: IdentityResolver,
) -> Vec<FoodCluster> {
    let mut builder = ClusterBuilder::new(resolver);
    for record in records {
        builder.push(record);
    }
    let clusters = builder.finish();
    log::debug!(
        "grouped {} recommendations into {} clusters",
        records.len(),
        clusters.len()
    );
    clusters
}

/// Tally votes per food name using exact string equality.
#[must_use]
pub fn votes_by_food(votes: &[VoteRecord]) -> BTreeMap<String, VoteTally> {
    let mut tallies: BTreeMap<String, VoteTally> = BTreeMap::new();
    for vote in votes {
        tallies
            .entry(vote.food_name.clone())
            .or_default()
            .record(vote.vote_type);
    }
    tallies
}

//! Ephemeral identity clusters of submissions judged to name the same dish.

use chrono::{DateTime, Utc};

use crate::RecommendationRecord;

/// A group of submissions referring to the same food.
///
/// Clusters are rebuilt from scratch for every computation. The
/// representative name is the raw name of the first record assigned to the
/// cluster and never changes afterwards.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use potluck_core::{FoodCluster, RecommendationRecord};
///
/// let at = Utc.with_ymd_and_hms(2025, 12, 1, 12, 0, 0).unwrap();
/// let first = RecommendationRecord::new("r1", "파스타", "u1", "Mina", at);
/// let second = RecommendationRecord::new("r2", "파 스타", "u2", "Joon", at);
///
/// let mut cluster = FoodCluster::from_record(&first);
/// cluster.absorb(&second);
///
/// assert_eq!(cluster.representative_name(), "파스타");
/// assert_eq!(cluster.count(), 2);
/// assert_eq!(cluster.voters(), ["Mina", "Joon"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodCluster {
    representative_name: String,
    recommender_ids: Vec<String>,
    voters: Vec<String>,
    count: u32,
    latest_tags: Vec<String>,
    latest_timestamp: DateTime<Utc>,
}

impl FoodCluster {
    /// Open a new cluster seeded by `record`.
    #[must_use]
    pub fn from_record(record: &RecommendationRecord) -> Self {
        Self {
            representative_name: record.food_name.clone(),
            recommender_ids: vec![record.recommender_id.clone()],
            voters: vec![record.recommender_name.clone()],
            count: 1,
            latest_tags: record.tags.clone(),
            latest_timestamp: record.created_at,
        }
    }

    /// Add `record` to this cluster.
    ///
    /// The count always grows. A recommender is listed once no matter how
    /// many times they submit. Tags follow the strictly newest submission;
    /// on equal timestamps the earlier record keeps its tags.
    pub fn absorb(&mut self, record: &RecommendationRecord) {
        self.count = self.count.saturating_add(1);
        if !self.recommender_ids.contains(&record.recommender_id) {
            self.recommender_ids.push(record.recommender_id.clone());
            self.voters.push(record.recommender_name.clone());
        }
        if record.created_at > self.latest_timestamp {
            self.latest_timestamp = record.created_at;
            self.latest_tags.clone_from(&record.tags);
        }
    }

    /// Canonical display name: the first raw name assigned to the cluster.
    #[must_use]
    pub fn representative_name(&self) -> &str {
        &self.representative_name
    }

    /// Distinct recommender identifiers in order of first appearance.
    #[must_use]
    pub fn recommender_ids(&self) -> &[String] {
        &self.recommender_ids
    }

    /// Display names of the distinct recommenders, aligned with
    /// [`FoodCluster::recommender_ids`].
    #[must_use]
    pub fn voters(&self) -> &[String] {
        &self.voters
    }

    /// Number of submissions assigned to the cluster.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Tags of the newest submission.
    #[must_use]
    pub fn latest_tags(&self) -> &[String] {
        &self.latest_tags
    }

    /// Timestamp of the newest submission.
    #[must_use]
    pub const fn latest_timestamp(&self) -> DateTime<Utc> {
        self.latest_timestamp
    }
}

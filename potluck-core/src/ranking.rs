//! Probability-labelled ranking entries exposed to the UI and the drawer.

/// One food's position in the lottery.
///
/// `probability` is the share of total probability mass after the quota
/// override. `rank` is 1-based and dense across a ranking list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Ranking {
    /// Representative name of the food's cluster.
    pub food_name: String,
    /// Number of submissions in the cluster.
    pub vote_count: u32,
    /// Share of the total probability mass.
    pub probability: f64,
    /// 1-based position in the list.
    pub rank: usize,
    /// Display names of the distinct recommenders.
    #[cfg_attr(feature = "serde", serde(default))]
    pub voters: Vec<String>,
    /// `like` votes cast on the exact representative name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub likes: u32,
    /// `dislike` votes cast on the exact representative name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dislikes: u32,
}

impl Ranking {
    /// Report whether the entry has at least `threshold` submissions.
    #[must_use]
    pub const fn meets_quota(&self, threshold: u32) -> bool {
        self.vote_count >= threshold
    }
}

/// Rankings together with the aggregate counters shown alongside them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LotteryReport {
    /// Ranked foods, quota members first.
    pub rankings: Vec<Ranking>,
    /// Number of submissions in the snapshot.
    pub total_recommendations: usize,
    /// Number of identity clusters.
    pub unique_foods: usize,
}

impl LotteryReport {
    /// Report whether there is nothing to rank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rankings.is_empty()
    }
}

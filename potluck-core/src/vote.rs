//! Like/dislike votes and the pure decisions made over them.
//!
//! Votes are keyed by the exact stored food name. They are never matched
//! fuzzily, so a vote cast on a different spelling of a clustered food does
//! not count toward that cluster.

use std::fmt;

/// Direction of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum VoteType {
    /// The voter wants this food on the menu.
    Like,
    /// The voter would rather skip this food.
    Dislike,
}

impl VoteType {
    /// Return the wire name of the vote type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored vote. At most one exists per `(food_name, voter_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct VoteRecord {
    /// Canonical food name the vote was cast on.
    pub food_name: String,
    /// Identifier of the voter.
    pub voter_id: String,
    /// Direction of the vote.
    pub vote_type: VoteType,
}

impl VoteRecord {
    /// Construct a vote record.
    pub fn new(
        food_name: impl Into<String>,
        voter_id: impl Into<String>,
        vote_type: VoteType,
    ) -> Self {
        Self {
            food_name: food_name.into(),
            voter_id: voter_id.into(),
            vote_type,
        }
    }
}

/// Like and dislike counts for one food name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoteTally {
    /// Number of `like` votes.
    pub likes: u32,
    /// Number of `dislike` votes.
    pub dislikes: u32,
}

impl VoteTally {
    /// Count one more vote of the given type.
    pub const fn record(&mut self, vote_type: VoteType) {
        match vote_type {
            VoteType::Like => self.likes = self.likes.saturating_add(1),
            VoteType::Dislike => self.dislikes = self.dislikes.saturating_add(1),
        }
    }
}

/// Vote summary for a single food, optionally from one voter's perspective.
///
/// # Examples
///
/// ```
/// use potluck_core::{FoodVoteStatus, VoteRecord, VoteType};
///
/// let votes = vec![
///     VoteRecord::new("라멘", "u1", VoteType::Like),
///     VoteRecord::new("라멘", "u2", VoteType::Dislike),
///     VoteRecord::new("라 멘", "u3", VoteType::Like),
/// ];
/// let status = FoodVoteStatus::collect(&votes, "라멘", Some("u2"));
/// assert_eq!((status.likes, status.dislikes), (1, 1));
/// assert_eq!(status.user_vote, Some(VoteType::Dislike));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FoodVoteStatus {
    /// Food name the summary was collected for.
    pub food_name: String,
    /// Number of `like` votes with an exactly matching food name.
    pub likes: u32,
    /// Number of `dislike` votes with an exactly matching food name.
    pub dislikes: u32,
    /// The requesting voter's current vote, when one was asked for and exists.
    pub user_vote: Option<VoteType>,
}

impl FoodVoteStatus {
    /// Summarise `votes` for `food_name` using exact string equality.
    #[must_use]
    pub fn collect(votes: &[VoteRecord], food_name: &str, voter_id: Option<&str>) -> Self {
        let mut tally = VoteTally::default();
        let mut user_vote = None;
        for vote in votes.iter().filter(|vote| vote.food_name == food_name) {
            tally.record(vote.vote_type);
            if voter_id.is_some_and(|id| id == vote.voter_id) {
                user_vote = Some(vote.vote_type);
            }
        }
        Self {
            food_name: food_name.to_owned(),
            likes: tally.likes,
            dislikes: tally.dislikes,
            user_vote,
        }
    }
}

/// Outcome of a voter pressing like or dislike on a food.
///
/// Pressing the same button twice withdraws the vote; pressing the other
/// button switches it. The storage layer applies the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "action", content = "voteType", rename_all = "lowercase")
)]
pub enum VoteAction {
    /// No vote existed; a new one is stored.
    Created(VoteType),
    /// An opposite vote existed and is replaced.
    Changed(VoteType),
    /// The same vote existed and is withdrawn.
    Removed,
}

impl VoteAction {
    /// Decide what a vote request does given the voter's existing vote.
    ///
    /// # Examples
    ///
    /// ```
    /// use potluck_core::{VoteAction, VoteType};
    ///
    /// assert_eq!(
    ///     VoteAction::decide(Some(VoteType::Like), VoteType::Like),
    ///     VoteAction::Removed
    /// );
    /// ```
    #[must_use]
    pub fn decide(existing: Option<VoteType>, requested: VoteType) -> Self {
        match existing {
            None => Self::Created(requested),
            Some(current) if current == requested => Self::Removed,
            Some(_) => Self::Changed(requested),
        }
    }

    /// Return the vote left in place after the action is applied.
    #[must_use]
    pub const fn resulting_vote(self) -> Option<VoteType> {
        match self {
            Self::Created(vote_type) | Self::Changed(vote_type) => Some(vote_type),
            Self::Removed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, VoteType::Like, VoteAction::Created(VoteType::Like))]
    #[case(None, VoteType::Dislike, VoteAction::Created(VoteType::Dislike))]
    #[case(Some(VoteType::Like), VoteType::Like, VoteAction::Removed)]
    #[case(Some(VoteType::Dislike), VoteType::Dislike, VoteAction::Removed)]
    #[case(Some(VoteType::Like), VoteType::Dislike, VoteAction::Changed(VoteType::Dislike))]
    #[case(Some(VoteType::Dislike), VoteType::Like, VoteAction::Changed(VoteType::Like))]
    fn decides_vote_action(
        #[case] existing: Option<VoteType>,
        #[case] requested: VoteType,
        #[case] expected: VoteAction,
    ) {
        assert_eq!(VoteAction::decide(existing, requested), expected);
    }

    #[rstest]
    fn removed_vote_leaves_nothing() {
        assert_eq!(VoteAction::Removed.resulting_vote(), None);
        assert_eq!(
            VoteAction::Changed(VoteType::Like).resulting_vote(),
            Some(VoteType::Like)
        );
    }

    #[rstest]
    fn status_ignores_near_miss_spellings() {
        let votes = vec![
            VoteRecord::new("파스타", "u1", VoteType::Like),
            VoteRecord::new("파 스타", "u2", VoteType::Like),
            VoteRecord::new("파스타", "u3", VoteType::Dislike),
        ];

        let status = FoodVoteStatus::collect(&votes, "파스타", None);

        assert_eq!(status.likes, 1);
        assert_eq!(status.dislikes, 1);
        assert_eq!(status.user_vote, None);
    }

    #[rstest]
    fn status_reports_missing_user_vote() {
        let votes = vec![VoteRecord::new("초밥", "u1", VoteType::Like)];
        let status = FoodVoteStatus::collect(&votes, "초밥", Some("u9"));
        assert_eq!(status.user_vote, None);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn vote_types_use_lowercase_wire_names() {
        let vote = VoteRecord::new("초밥", "u1", VoteType::Dislike);
        let json = serde_json::to_value(&vote).expect("serialise vote");
        assert_eq!(json["voteType"], "dislike");
        assert_eq!(json["foodName"], "초밥");
    }
}

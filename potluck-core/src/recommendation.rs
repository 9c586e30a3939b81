//! Food submissions as read from the persistence layer.

use chrono::{DateTime, Utc};

/// A single attendee's food submission.
///
/// Records are immutable once created. `food_name` is the raw text as stored,
/// which may already be the canonical name of a similar earlier submission.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use potluck_core::RecommendationRecord;
///
/// let created_at = Utc.with_ymd_and_hms(2025, 12, 1, 12, 0, 0).unwrap();
/// let record = RecommendationRecord::new("r1", "김치찌개", "u1", "Mina", created_at)
///     .with_tags(["한식", "국물"]);
/// assert_eq!(record.food_name, "김치찌개");
/// assert_eq!(record.tags.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RecommendationRecord {
    /// Storage identifier of the submission.
    pub id: String,
    /// Food name exactly as stored.
    pub food_name: String,
    /// Cuisine tags attached when the food was submitted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    /// Identifier of the attendee who submitted the food.
    pub recommender_id: String,
    /// Display name of the attendee who submitted the food.
    pub recommender_name: String,
    /// Submission time.
    pub created_at: DateTime<Utc>,
}

impl RecommendationRecord {
    /// Construct a record without tags.
    pub fn new(
        id: impl Into<String>,
        food_name: impl Into<String>,
        recommender_id: impl Into<String>,
        recommender_name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            food_name: food_name.into(),
            tags: Vec::new(),
            recommender_id: recommender_id.into(),
            recommender_name: recommender_name.into(),
            created_at,
        }
    }

    /// Replace the tags while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

//! Decide whether two submissions name the same food.
//!
//! Matching is first-match over an ordered candidate list, not best-match:
//! the result depends on candidate order.

use crate::{RankingConfigError, SubmissionError, similarity};

/// Default similarity at or above which two names are the same food.
pub const DEFAULT_SAME_FOOD_THRESHOLD: f64 = 0.8;

/// Threshold-based identity check over [`similarity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentityResolver {
    /// Minimum similarity for two names to be treated as the same food.
    pub threshold: f64,
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SAME_FOOD_THRESHOLD,
        }
    }
}

impl IdentityResolver {
    /// Validate the threshold and return a copy.
    ///
    /// # Errors
    /// Returns [`RankingConfigError::InvalidThreshold`] unless the threshold
    /// lies within `0.0..=1.0`.
    pub fn validate(self) -> Result<Self, RankingConfigError> {
        if (0.0..=1.0).contains(&self.threshold) {
            Ok(self)
        } else {
            Err(RankingConfigError::InvalidThreshold {
                threshold: self.threshold,
            })
        }
    }

    /// Report whether `a` and `b` name the same food.
    #[must_use]
    pub fn is_same_food(self, a: &str, b: &str) -> bool {
        similarity(a, b) >= self.threshold
    }

    /// Return the first candidate, in order, that names the same food as
    /// `name`.
    #[must_use]
    pub fn find_similar_food<'a, S>(self, name: &str, candidates: &'a [S]) -> Option<&'a S>
    where
        S: AsRef<str>,
    {
        candidates
            .iter()
            .find(|candidate| self.is_same_food(name, candidate.as_ref()))
    }

    /// Canonicalise a new submission against the names already stored.
    ///
    /// The raw name is trimmed. When an existing name matches, the
    /// submission adopts it so that it adds to that food's count.
    ///
    /// # Errors
    /// Returns [`SubmissionError::EmptyName`] when the trimmed name is empty.
    pub fn resolve_submission<S>(
        self,
        raw_name: &str,
        existing_names: &[S],
    ) -> Result<Submission, SubmissionError>
    where
        S: AsRef<str>,
    {
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            return Err(SubmissionError::EmptyName);
        }
        let matched = self
            .find_similar_food(trimmed, existing_names)
            .map(|name| name.as_ref().to_owned());
        if let Some(existing) = &matched {
            log::debug!("submission {trimmed:?} merged into existing food {existing:?}");
        }
        Ok(Submission {
            food_name: matched.clone().unwrap_or_else(|| trimmed.to_owned()),
            matched,
        })
    }
}

/// A submission after canonicalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Name to store: the matched existing name, or the trimmed input.
    pub food_name: String,
    /// Existing name the submission was merged into, if any.
    pub matched: Option<String>,
}

impl Submission {
    /// Report whether the submission counts toward an existing food.
    #[must_use]
    pub const fn bonus_applied(&self) -> bool {
        self.matched.is_some()
    }
}

/// Report whether `a` and `b` name the same food at the default threshold.
///
/// # Examples
///
/// ```
/// use potluck_scorer::is_same_food;
///
/// assert!(is_same_food("파스타", "파 스타"));
/// assert!(!is_same_food("초밥", "짜장면"));
/// ```
#[must_use]
pub fn is_same_food(a: &str, b: &str) -> bool {
    IdentityResolver::default().is_same_food(a, b)
}

/// Return the first candidate naming the same food as `name` at the default
/// threshold.
///
/// # Examples
///
/// ```
/// use potluck_scorer::find_similar_food;
///
/// assert_eq!(find_similar_food("라멘", &["초밥", "라 멘"]), Some(&"라 멘"));
/// assert_eq!(find_similar_food("라멘", &["초밥"]), None);
/// ```
#[must_use]
pub fn find_similar_food<'a, S>(name: &str, candidates: &'a [S]) -> Option<&'a S>
where
    S: AsRef<str>,
{
    IdentityResolver::default().find_similar_food(name, candidates)
}

//! Raw support weights derived from submission counts and votes.

use crate::RankingConfigError;

/// Tunable coefficients of the raw weight formula.
///
/// `weight = max(floor, count + count^count_exponent
///                      + likes * like_weight - dislikes * dislike_weight)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingWeights {
    /// Exponent of the super-linear bonus on the submission count.
    pub count_exponent: f64,
    /// Weight added per `like` vote.
    pub like_weight: f64,
    /// Weight removed per `dislike` vote.
    pub dislike_weight: f64,
    /// Smallest weight any cluster can have. Must be positive.
    pub floor: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            count_exponent: 1.5,
            like_weight: 0.5,
            dislike_weight: 0.3,
            floor: 0.1,
        }
    }
}

impl RankingWeights {
    /// Validate the coefficients and return a copy.
    ///
    /// # Errors
    /// Returns [`RankingConfigError::InvalidWeights`] when any coefficient is
    /// not finite, a vote weight is negative, or the floor is not positive.
    pub fn validate(self) -> Result<Self, RankingConfigError> {
        let finite = self.count_exponent.is_finite()
            && self.like_weight.is_finite()
            && self.dislike_weight.is_finite()
            && self.floor.is_finite();
        if finite && self.like_weight >= 0.0 && self.dislike_weight >= 0.0 && self.floor > 0.0 {
            Ok(self)
        } else {
            Err(RankingConfigError::InvalidWeights)
        }
    }

    /// Compute the raw weight of a cluster.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "weights blend counts and votes with fractional coefficients"
    )]
    pub fn raw_weight(self, count: u32, likes: u32, dislikes: u32) -> f64 {
        let count_f64 = f64::from(count);
        let weight = count_f64 + count_f64.powf(self.count_exponent)
            + f64::from(likes) * self.like_weight
            - f64::from(dislikes) * self.dislike_weight;
        weight.max(self.floor)
    }
}

/// Compute a cluster's raw weight with the default coefficients.
///
/// # Examples
///
/// ```
/// use potluck_scorer::raw_weight;
///
/// assert!((raw_weight(4, 0, 0) - 12.0).abs() < 1e-9);
/// assert_eq!(raw_weight(0, 0, 1000), 0.1);
/// ```
#[must_use]
pub fn raw_weight(count: u32, likes: u32, dislikes: u32) -> f64 {
    RankingWeights::default().raw_weight(count, likes, dislikes)
}

//! A random source paired with the settings used to draw from it.

use potluck_core::Ranking;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{DrawError, draw_winner, priority_draw};

/// Configuration for [`LotteryDrawer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerConfig {
    /// Submission count at which an entry leads the priority draw.
    pub quota_threshold: u32,
    /// Seed for a reproducible generator; entropy is used when absent.
    pub seed: Option<u64>,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            quota_threshold: 5,
            seed: None,
        }
    }
}

impl DrawerConfig {
    /// Validate the configuration and return a copy.
    ///
    /// # Errors
    /// Returns [`DrawError::ZeroQuotaThreshold`] for a zero threshold.
    pub const fn validate(self) -> Result<Self, DrawError> {
        if self.quota_threshold == 0 {
            return Err(DrawError::ZeroQuotaThreshold);
        }
        Ok(self)
    }
}

/// Draws from rankings with an owned random source.
///
/// The generator is injectable: tests pass a seeded [`ChaCha8Rng`] while
/// callers wanting fresh results use [`LotteryDrawer::from_config`] without a
/// seed.
#[derive(Debug, Clone)]
pub struct LotteryDrawer<R = ChaCha8Rng> {
    rng: R,
    quota_threshold: u32,
}

impl LotteryDrawer<ChaCha8Rng> {
    /// Build a drawer with a generator seeded from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Build a drawer from validated configuration.
    ///
    /// # Errors
    /// Returns [`DrawError::ZeroQuotaThreshold`] for a zero threshold.
    pub fn from_config(config: DrawerConfig) -> Result<Self, DrawError> {
        let validated = config.validate()?;
        let rng = validated
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Ok(Self::new(rng).with_quota_threshold(validated.quota_threshold))
    }
}

impl<R> LotteryDrawer<R>
where
    R: Rng,
{
    /// Wrap `rng` using the default quota threshold.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            quota_threshold: DrawerConfig::default().quota_threshold,
        }
    }

    /// Replace the quota threshold used by [`Self::priority_draw`].
    #[must_use]
    pub const fn with_quota_threshold(mut self, quota_threshold: u32) -> Self {
        self.quota_threshold = quota_threshold;
        self
    }

    /// Quota threshold used by [`Self::priority_draw`].
    #[must_use]
    pub const fn quota_threshold(&self) -> u32 {
        self.quota_threshold
    }

    /// Draw a single winner. See [`draw_winner`].
    pub fn draw_winner<'a>(&mut self, rankings: &'a [Ranking]) -> Option<&'a Ranking> {
        draw_winner(rankings, &mut self.rng)
    }

    /// Produce a full weighted order. See [`priority_draw`].
    #[must_use]
    pub fn priority_draw(&mut self, rankings: &[Ranking]) -> Vec<Ranking> {
        priority_draw(rankings, self.quota_threshold, &mut self.rng)
    }
}

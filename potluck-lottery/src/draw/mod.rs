//! Cumulative weighted sampling over ranking entries.
//!
//! Sampling draws `r` uniformly in `[0, Σ probability)` and selects the first
//! entry whose running cumulative probability reaches `r`. Probabilities are
//! used exactly as labelled, never renormalised.

use potluck_core::Ranking;
use rand::Rng;

/// Draw a single winner, weighted by each entry's probability.
///
/// Returns `None` only for an empty ranking. When rounding keeps the
/// cumulative total below the target the first entry is returned.
///
/// # Examples
///
/// ```
/// use potluck_core::Ranking;
/// use potluck_lottery::draw_winner;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let certain = Ranking {
///     food_name: "김밥".to_owned(),
///     vote_count: 6,
///     probability: 1.0,
///     rank: 1,
///     voters: Vec::new(),
///     likes: 0,
///     dislikes: 0,
/// };
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
///
/// let winner = draw_winner(std::slice::from_ref(&certain), &mut rng);
/// assert_eq!(winner.map(|w| w.food_name.as_str()), Some("김밥"));
/// ```
pub fn draw_winner<'a, R>(rankings: &'a [Ranking], rng: &mut R) -> Option<&'a Ranking>
where
    R: Rng,
{
    pick_index(rankings, rng).and_then(|index| rankings.get(index))
}

/// Shuffle the whole ranking, keeping quota members ahead of the rest.
///
/// Entries with at least `quota_threshold` submissions form the leading
/// partition; each partition is shuffled independently with
/// [`weighted_shuffle`]. Ranks are renumbered `1..=N` over the result.
#[must_use]
pub fn priority_draw<R>(rankings: &[Ranking], quota_threshold: u32, rng: &mut R) -> Vec<Ranking>
where
    R: Rng,
{
    let (must_top, others): (Vec<Ranking>, Vec<Ranking>) = rankings
        .iter()
        .cloned()
        .partition(|entry| entry.meets_quota(quota_threshold));
    log::debug!(
        "priority draw over {} quota members and {} others",
        must_top.len(),
        others.len()
    );

    let mut order = weighted_shuffle(must_top, rng);
    order.extend(weighted_shuffle(others, rng));
    for (index, entry) in order.iter_mut().enumerate() {
        entry.rank = index + 1;
    }
    order
}

/// Weighted sampling without replacement over `entries`.
///
/// Each step picks from the entries still remaining and removes the pick, so
/// the usable total shrinks as the pool empties. Ranks are left untouched.
#[must_use]
pub fn weighted_shuffle<R>(entries: Vec<Ranking>, rng: &mut R) -> Vec<Ranking>
where
    R: Rng,
{
    let mut remaining = entries;
    let mut order = Vec::with_capacity(remaining.len());
    while let Some(index) = pick_index(&remaining, rng) {
        order.push(remaining.remove(index));
    }
    order
}

#[expect(
    clippy::float_arithmetic,
    reason = "sampling accumulates floating-point probabilities"
)]
fn pick_index<R>(entries: &[Ranking], rng: &mut R) -> Option<usize>
where
    R: Rng,
{
    if entries.is_empty() {
        return None;
    }
    let total: f64 = entries.iter().map(|entry| entry.probability).sum();
    let target = if total.is_finite() && total > 0.0 {
        rng.gen_range(0.0..total)
    } else {
        0.0
    };

    let mut cumulative = 0.0;
    for (index, entry) in entries.iter().enumerate() {
        cumulative += entry.probability;
        if cumulative >= target {
            return Some(index);
        }
    }
    log::warn!("cumulative probability {cumulative} never reached {target}; using first entry");
    Some(0)
}

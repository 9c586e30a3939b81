//! Test-only snapshot sources and record builders used by unit, behaviour,
//! and property tests across the workspace.

use std::io;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::{RecommendationRecord, Snapshot, SnapshotError, SnapshotSource, VoteRecord};

/// In-memory `SnapshotSource` returning a fixed copy of its data.
#[derive(Default, Debug, Clone)]
pub struct MemorySnapshot {
    snapshot: Snapshot,
}

impl MemorySnapshot {
    /// Create a source from recommendations and votes.
    #[must_use]
    pub const fn new(recommendations: Vec<RecommendationRecord>, votes: Vec<VoteRecord>) -> Self {
        Self {
            snapshot: Snapshot {
                recommendations,
                votes,
            },
        }
    }
}

impl SnapshotSource for MemorySnapshot {
    fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        Ok(self.snapshot.clone())
    }
}

/// `SnapshotSource` whose backing store is always unreachable.
#[derive(Default, Debug, Copy, Clone)]
pub struct UnavailableSnapshot;

impl SnapshotSource for UnavailableSnapshot {
    fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        Err(SnapshotError::unavailable(
            "unavailable test store",
            io::Error::new(io::ErrorKind::ConnectionRefused, "store offline"),
        ))
    }
}

/// Fixed base time for generated records.
#[must_use]
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 19, 18, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Build records for `names` in order, one minute apart, each from a distinct
/// recommender `u{index}`.
#[must_use]
pub fn records_from_names(names: &[&str]) -> Vec<RecommendationRecord> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| record(index, name, &format!("u{index}")))
        .collect()
}

/// Build `count` records naming `food`, each from a distinct recommender
/// prefixed by `recommender_prefix`.
#[must_use]
pub fn repeated_records(food: &str, count: usize, recommender_prefix: &str) -> Vec<RecommendationRecord> {
    (0..count)
        .map(|index| record(index, food, &format!("{recommender_prefix}{index}")))
        .collect()
}

fn record(index: usize, food: &str, recommender: &str) -> RecommendationRecord {
    let offset = i64::try_from(index).unwrap_or(i64::MAX);
    RecommendationRecord::new(
        format!("{recommender}-{food}-{index}"),
        food,
        recommender,
        recommender.to_uppercase(),
        base_time() + Duration::minutes(offset),
    )
}

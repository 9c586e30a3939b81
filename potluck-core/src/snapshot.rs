//! Read-only snapshots supplied by the persistence collaborator.
//!
//! The engine never talks to storage directly. Callers implement
//! [`SnapshotSource`] over whatever backs the application and hand the engine
//! a point-in-time copy of recommendations and votes.

use thiserror::Error;

use crate::{RecommendationRecord, VoteRecord};

/// A point-in-time copy of all submissions and votes.
///
/// Recommendation order is significant: grouping processes records in the
/// order given here, so sources should supply them chronologically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Snapshot {
    /// Food submissions in processing order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub recommendations: Vec<RecommendationRecord>,
    /// Like/dislike votes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub votes: Vec<VoteRecord>,
}

/// Errors raised while reading a snapshot.
///
/// These are distinct from an empty snapshot: a source that cannot be read
/// must never be reported as "no recommendations yet".
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The backing store could not be reached or read.
    #[error("snapshot data unavailable from {origin}")]
    Unavailable {
        /// Human-readable description of the source.
        origin: String,
        /// Underlying failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The backing store answered with data that could not be decoded.
    #[error("snapshot data from {origin} is malformed")]
    Malformed {
        /// Human-readable description of the source.
        origin: String,
        /// Underlying decoding failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl SnapshotError {
    /// Wrap a read failure from `origin`.
    pub fn unavailable<E>(origin: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Unavailable {
            origin: origin.into(),
            source: source.into(),
        }
    }

    /// Wrap a decoding failure from `origin`.
    pub fn malformed<E>(origin: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Malformed {
            origin: origin.into(),
            source: source.into(),
        }
    }
}

/// Read-only access to the current recommendations and votes.
///
/// # Examples
///
/// ```rust
/// use potluck_core::{Snapshot, SnapshotError, SnapshotSource};
///
/// struct EmptySource;
///
/// impl SnapshotSource for EmptySource {
///     fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
///         Ok(Snapshot::default())
///     }
/// }
///
/// let snapshot = EmptySource.snapshot().unwrap();
/// assert!(snapshot.recommendations.is_empty());
/// ```
pub trait SnapshotSource {
    /// Return a consistent copy of the current data.
    ///
    /// # Errors
    /// Returns [`SnapshotError`] when the data cannot be read or decoded.
    fn snapshot(&self) -> Result<Snapshot, SnapshotError>;
}

impl<S> SnapshotSource for &S
where
    S: SnapshotSource + ?Sized,
{
    fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        (**self).snapshot()
    }
}

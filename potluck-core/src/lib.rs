//! Core domain types for the potluck lottery engine.
//!
//! Attendees submit free-text food names and vote on them. This crate holds
//! the read-only records supplied by the persistence layer, the ephemeral
//! [`FoodCluster`] built while grouping submissions, and the [`Ranking`]
//! entries handed to the UI and the lottery drawer. Nothing here persists
//! between computations: clusters and rankings are rebuilt from a fresh
//! [`Snapshot`] on every call.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cluster;
mod ranking;
mod recommendation;
mod snapshot;
mod vote;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use cluster::FoodCluster;
pub use ranking::{LotteryReport, Ranking};
pub use recommendation::RecommendationRecord;
pub use snapshot::{Snapshot, SnapshotError, SnapshotSource};
pub use vote::{FoodVoteStatus, VoteAction, VoteRecord, VoteTally, VoteType};

//! Error types raised while configuring or running the ranking pipeline.
#![forbid(unsafe_code)]

use potluck_core::SnapshotError;
use thiserror::Error;

/// Errors raised when a ranking configuration is unusable.
#[derive(Debug, Error, PartialEq)]
pub enum RankingConfigError {
    /// The same-food threshold lies outside `0.0..=1.0`.
    #[error("same-food threshold must be within 0.0..=1.0, got {threshold}")]
    InvalidThreshold {
        /// Rejected threshold.
        threshold: f64,
    },
    /// A raw weight coefficient was unusable.
    #[error("ranking weights must be finite and non-negative with a positive floor")]
    InvalidWeights,
    /// The reserved quota share lies outside `0.0..=1.0`.
    #[error("reserved quota share must be within 0.0..=1.0, got {share}")]
    InvalidQuotaShare {
        /// Rejected share.
        share: f64,
    },
    /// A zero quota threshold would place every cluster in the quota group.
    #[error("quota threshold must be at least 1")]
    ZeroQuotaThreshold,
}

/// Errors raised when canonicalising a new submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// The submitted name was empty after trimming.
    #[error("food name must not be empty")]
    EmptyName,
}

/// Errors raised while building a lottery report from a snapshot source.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reading the snapshot failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    /// The ranking configuration was rejected.
    #[error("invalid ranking configuration: {0}")]
    Config(#[from] RankingConfigError),
}

//! Errors raised by the draw session and drawer configuration.

use thiserror::Error;

/// Errors raised when a draw cannot start or finish.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DrawError {
    /// A draw is already in progress.
    #[error("a draw is already in progress")]
    AlreadyDrawing,
    /// The ranking has no entries to draw from.
    #[error("cannot draw from an empty ranking")]
    EmptyRanking,
    /// A result was submitted while no draw was in progress.
    #[error("no draw is in progress")]
    NotDrawing,
    /// The quota threshold must be at least one submission.
    #[error("quota threshold must be at least 1")]
    ZeroQuotaThreshold,
}

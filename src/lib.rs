//! Facade crate for the Potluck lunch-lottery engine.
//!
//! This crate re-exports the data model, the identity and ranking pipeline,
//! and, behind the `lottery` feature, the weighted drawer.

#![forbid(unsafe_code)]

pub use potluck_core::{
    FoodCluster, FoodVoteStatus, LotteryReport, Ranking, RecommendationRecord, Snapshot,
    SnapshotError, SnapshotSource, VoteAction, VoteRecord, VoteTally, VoteType,
};

pub use potluck_scorer::{
    IdentityResolver, QuotaPolicy, RankingConfig, RankingConfigError, RankingWeights,
    ReportError, Submission, SubmissionError, build_report, find_similar_food, is_same_food,
    normalize, raw_weight, report_from_source, similarity,
};

#[cfg(feature = "lottery")]
pub use potluck_lottery::{
    DrawError, DrawSession, DrawState, DrawerConfig, LotteryDrawer, draw_winner, priority_draw,
};

#[cfg(feature = "test-support")]
pub use potluck_core::test_support;

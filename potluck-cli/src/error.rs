//! Error types emitted by the Potluck CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use potluck_lottery::DrawError;
use potluck_scorer::{RankingConfigError, ReportError};
use thiserror::Error;

/// Errors emitted by the Potluck CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The merged ranking configuration was rejected.
    #[error("invalid ranking configuration: {0}")]
    InvalidConfig(#[from] RankingConfigError),
    /// Building the lottery report failed.
    #[error("failed to build lottery report: {0}")]
    Report(#[from] ReportError),
    /// The draw could not run.
    #[error("draw failed: {0}")]
    Draw(#[from] DrawError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

//! Command-line interface for ranking and drawing lunch recommendations.
//!
//! Both subcommands read a JSON snapshot of recommendations and votes:
//! `rank` prints the lottery report, `draw` runs a weighted draw over it.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use potluck_scorer::{QuotaPolicy, RankingConfig};

mod draw;
mod error;
mod rank;
mod snapshot;

pub use error::CliError;

use draw::DrawArgs;
use rank::RankArgs;

const ARG_SNAPSHOT: &str = "snapshot";
const ARG_QUOTA_THRESHOLD: &str = "quota-threshold";
const ARG_SEED: &str = "seed";
const ARG_MODE: &str = "mode";
const ENV_RANK_SNAPSHOT: &str = "POTLUCK_CMDS_RANK_SNAPSHOT";
const ENV_DRAW_SNAPSHOT: &str = "POTLUCK_CMDS_DRAW_SNAPSHOT";

/// Run the Potluck CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the snapshot, or the
/// draw cannot be processed.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => rank::run_rank(args),
        Command::Draw(args) => draw::run_draw(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "potluck",
    about = "Rank team lunch recommendations and draw a winner",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the probability ranking for a snapshot.
    Rank(RankArgs),
    /// Draw a winner or a full priority order from a snapshot.
    Draw(DrawArgs),
}

/// Build the ranking configuration, applying an optional quota override.
fn ranking_config(quota_threshold: Option<u32>) -> Result<RankingConfig, CliError> {
    let defaults = RankingConfig::default();
    let config = RankingConfig {
        quota: QuotaPolicy {
            threshold: quota_threshold.unwrap_or(defaults.quota.threshold),
            ..defaults.quota
        },
        ..defaults
    };
    config.validate().map_err(CliError::from)
}

#[cfg(test)]
mod tests;

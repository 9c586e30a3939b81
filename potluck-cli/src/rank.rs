//! Rank command implementation for the Potluck CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use potluck_core::LotteryReport;
use potluck_scorer::{RankingConfig, report_from_source};
use serde::{Deserialize, Serialize};

use crate::snapshot::JsonFileSnapshot;
use crate::{ARG_QUOTA_THRESHOLD, ARG_SNAPSHOT, CliError, ENV_RANK_SNAPSHOT, ranking_config};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Group the recommendations in a JSON snapshot into foods, \
                 weigh them by support and votes, and print the resulting \
                 probability ranking as JSON.",
    about = "Print the lottery ranking for a snapshot"
)]
#[ortho_config(prefix = "POTLUCK")]
pub(crate) struct RankArgs {
    /// Path to a JSON snapshot of recommendations and votes.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) snapshot: Option<Utf8PathBuf>,
    /// Submission count at which a food joins the guaranteed half.
    #[arg(long = ARG_QUOTA_THRESHOLD, value_name = "count")]
    #[serde(default)]
    pub(crate) quota_threshold: Option<u32>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Snapshot file to read.
    pub(crate) snapshot: Utf8PathBuf,
    /// Validated ranking tunables.
    pub(crate) ranking: RankingConfig,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let snapshot = args.snapshot.ok_or(CliError::MissingArgument {
            field: ARG_SNAPSHOT,
            env: ENV_RANK_SNAPSHOT,
        })?;
        Ok(Self {
            snapshot,
            ranking: ranking_config(args.quota_threshold)?,
        })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_rank(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_rank(config: &RankConfig) -> Result<LotteryReport, CliError> {
    let source = JsonFileSnapshot::new(config.snapshot.clone());
    report_from_source(&source, config.ranking).map_err(CliError::from)
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}

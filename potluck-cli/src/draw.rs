//! Draw command implementation for the Potluck CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use potluck_core::Ranking;
use potluck_lottery::{DrawError, DrawSession, DrawerConfig, LotteryDrawer};
use potluck_scorer::RankingConfig;
use serde::{Deserialize, Serialize};

use crate::rank::{RankConfig, execute_rank, write_json};
use crate::{
    ARG_MODE, ARG_QUOTA_THRESHOLD, ARG_SEED, ARG_SNAPSHOT, CliError, ENV_DRAW_SNAPSHOT,
    ranking_config,
};

/// Which drawing procedure to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum DrawMode {
    /// Pick a single weighted winner.
    Winner,
    /// Produce a full weighted order with quota members first.
    #[default]
    Priority,
}

/// CLI arguments for the `draw` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the recommendations in a JSON snapshot, then draw from \
                 the ranking. Pass a seed to make the draw reproducible.",
    about = "Draw lunch from a snapshot"
)]
#[ortho_config(prefix = "POTLUCK")]
pub(crate) struct DrawArgs {
    /// Path to a JSON snapshot of recommendations and votes.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) snapshot: Option<Utf8PathBuf>,
    /// Seed for a reproducible draw.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Draw a single winner or a full priority order.
    #[arg(long = ARG_MODE, value_enum)]
    #[serde(default)]
    pub(crate) mode: Option<DrawMode>,
    /// Submission count at which a food joins the guaranteed half.
    #[arg(long = ARG_QUOTA_THRESHOLD, value_name = "count")]
    #[serde(default)]
    pub(crate) quota_threshold: Option<u32>,
}

impl DrawArgs {
    pub(crate) fn into_config(self) -> Result<DrawConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DrawConfig::try_from(merged)
    }
}

/// Resolved `draw` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DrawConfig {
    /// Snapshot file to read.
    pub(crate) snapshot: Utf8PathBuf,
    /// Validated ranking tunables.
    pub(crate) ranking: RankingConfig,
    /// Drawer seed and quota threshold.
    pub(crate) drawer: DrawerConfig,
    /// Procedure to run.
    pub(crate) mode: DrawMode,
}

impl TryFrom<DrawArgs> for DrawConfig {
    type Error = CliError;

    fn try_from(args: DrawArgs) -> Result<Self, Self::Error> {
        let snapshot = args.snapshot.ok_or(CliError::MissingArgument {
            field: ARG_SNAPSHOT,
            env: ENV_DRAW_SNAPSHOT,
        })?;
        let ranking = ranking_config(args.quota_threshold)?;
        let drawer = DrawerConfig {
            quota_threshold: ranking.quota.threshold,
            seed: args.seed,
        }
        .validate()?;
        Ok(Self {
            snapshot,
            ranking,
            drawer,
            mode: args.mode.unwrap_or_default(),
        })
    }
}

/// JSON payload printed by the `draw` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub(crate) enum DrawOutcome {
    /// The single weighted winner.
    Winner {
        /// Winning entry with its original rank.
        winner: Ranking,
    },
    /// The full drawn order, re-ranked from one.
    Priority {
        /// Entries in drawn order.
        order: Vec<Ranking>,
    },
}

pub(crate) fn run_draw(args: DrawArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_draw_with(args, &mut stdout)
}

pub(crate) fn run_draw_with(args: DrawArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let outcome = execute_draw(&config)?;
    write_json(writer, &outcome)
}

pub(crate) fn execute_draw(config: &DrawConfig) -> Result<DrawOutcome, CliError> {
    let report = execute_rank(&RankConfig {
        snapshot: config.snapshot.clone(),
        ranking: config.ranking,
    })?;
    let mut drawer = LotteryDrawer::from_config(config.drawer)?;
    let mut session = DrawSession::new();

    let outcome = match config.mode {
        DrawMode::Priority => DrawOutcome::Priority {
            order: session.run(&mut drawer, &report.rankings)?.to_vec(),
        },
        DrawMode::Winner => {
            session.begin(&report.rankings)?;
            let winner = drawer
                .draw_winner(&report.rankings)
                .cloned()
                .ok_or(DrawError::EmptyRanking)?;
            session.complete(vec![winner.clone()])?;
            DrawOutcome::Winner { winner }
        }
    };
    log::debug!("draw finished in {:?} mode", config.mode);
    Ok(outcome)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<DrawConfig, CliError> {
    let merged = DrawArgs::merge_from_layers(layers).map_err(CliError::from)?;
    DrawConfig::try_from(merged)
}

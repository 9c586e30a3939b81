//! Weighted lottery draws over a probability-labelled ranking.
//!
//! Two sampling procedures read the final `probability` of each
//! [`Ranking`](potluck_core::Ranking):
//! - [`draw_winner`] picks a single entry by cumulative sampling.
//! - [`priority_draw`] produces a full weighted shuffle without replacement,
//!   keeping quota members ahead of everyone else.
//!
//! Both take the random source as a parameter so tests can supply a seeded
//! generator. [`LotteryDrawer`] bundles a generator with its configuration and
//! [`DrawSession`] tracks the `ready → drawing → result → ready` cycle of a
//! presentation layer.

#![forbid(unsafe_code)]

mod draw;
mod drawer;
mod error;
mod session;

pub use draw::{draw_winner, priority_draw, weighted_shuffle};
pub use drawer::{DrawerConfig, LotteryDrawer};
pub use error::DrawError;
pub use session::{DrawSession, DrawState};

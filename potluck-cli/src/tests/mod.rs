//! Shared test harness modules for the Potluck CLI.

use super::*;

mod helpers;
mod steps;

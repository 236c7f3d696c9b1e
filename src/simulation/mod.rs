//! Batch simulation and aggregation.
//!
//! - `runner`: Parallel batches, win tallies, per-ruleset reports
//! - `bootstrap`: Resampled means over completed games

pub mod bootstrap;
pub mod runner;

pub use bootstrap::{bootstrap, BootstrapSummary};
pub use runner::{run_all, run_ruleset, simulate_batch, RulesetReport, WinTally};

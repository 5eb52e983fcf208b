//! Campaign balance simulator for Monte Carlo analysis.
//!
//! Runs thousands of headless playthroughs under a simple autopilot to
//! measure win rates, death levels, and potion economy. The autopilot
//! drives the same `run_campaign` loop the interactive game uses, so its
//! numbers match real gameplay behavior.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, RunRecord};

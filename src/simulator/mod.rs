//! Headless balance simulator.
//!
//! Plays many seeded runs with a scripted autopilot to see how long a
//! competent player survives under a given [`RunnerConfig`](crate::config::RunnerConfig).
//! Uses the real tick pipeline from [`crate::runner`], so results match play.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::decide;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};

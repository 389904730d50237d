//! Simulation configuration.

use crate::config::RunnerConfig;
use crate::runner::Variant;

/// Configuration for a batch of simulated runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to play
    pub num_runs: u32,

    /// Base seed; run `i` uses `seed + i` (None = random per run)
    pub seed: Option<u64>,

    /// Ticks after which a surviving run is stopped
    pub max_ticks_per_run: u64,

    pub variant: Variant,

    /// Game parameters shared by every run
    pub runner: RunnerConfig,

    /// Output level (0 = no text report, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            max_ticks_per_run: 60 * 60 * 5,
            variant: Variant::Coins,
            runner: RunnerConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small batch for a quick sanity check.
    pub fn quick() -> Self {
        Self {
            num_runs: 20,
            max_ticks_per_run: 60 * 60,
            ..Default::default()
        }
    }
}

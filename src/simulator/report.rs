//! Simulation report generation.

use serde::Serialize;

/// Outcome of a single simulated run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub seed: u64,
    pub score: u32,
    pub ticks_survived: u64,
    pub final_speed: f64,
    /// True if the run was still alive at the tick limit.
    pub timed_out: bool,
}

/// Aggregated results from multiple simulated runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,

    pub avg_score: f64,
    pub max_score: u32,
    pub avg_ticks_survived: f64,
    pub median_ticks_survived: u64,
    pub avg_final_speed: f64,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let runs_timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;
        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let max_score = runs.iter().map(|r| r.score).max().unwrap_or(0);
        let avg_ticks_survived =
            runs.iter().map(|r| r.ticks_survived as f64).sum::<f64>() / divisor;
        let avg_final_speed = runs.iter().map(|r| r.final_speed).sum::<f64>() / divisor;

        let mut ticks: Vec<u64> = runs.iter().map(|r| r.ticks_survived).collect();
        ticks.sort_unstable();
        let median_ticks_survived = ticks.get(ticks.len() / 2).copied().unwrap_or(0);

        Self {
            num_runs,
            runs_timed_out,
            avg_score,
            max_score,
            avg_ticks_survived,
            median_ticks_survived,
            avg_final_speed,
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} survived to the tick limit\n\n",
            self.num_runs, self.runs_timed_out
        ));

        report.push_str("── SCORE ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:           {:.1}\n", self.avg_score));
        report.push_str(&format!("  Best Score:          {}\n\n", self.max_score));

        report.push_str("── SURVIVAL ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Ticks:           {:.0} ({:.1}s)\n",
            self.avg_ticks_survived,
            self.avg_ticks_survived * crate::runner::TICK_SECONDS
        ));
        report.push_str(&format!(
            "  Median Ticks:        {}\n",
            self.median_ticks_survived
        ));
        report.push_str(&format!(
            "  Avg Final Speed:     {:.3} rows/tick\n",
            self.avg_final_speed
        ));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

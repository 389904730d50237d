//! Plays simulated runs through the real tick pipeline.

use super::autopilot::decide;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::runner::{process_command, step, GameState};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = match config.seed {
            Some(seed) => seed.wrapping_add(run_idx as u64),
            None => rand::random(),
        };

        let stats = simulate_single_run(config, seed);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} (seed={}) - score {}, {} ticks{}",
                run_idx + 1,
                config.num_runs,
                seed,
                stats.score,
                stats.ticks_survived,
                if stats.timed_out { ", timed out" } else { "" }
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Play one run with the autopilot until it crashes or hits the tick limit.
pub fn simulate_single_run(config: &SimConfig, seed: u64) -> RunStats {
    let mut game = GameState::with_seed(config.variant, config.runner.clone(), seed);

    while !game.is_game_over() && game.frame_count < config.max_ticks_per_run {
        if let Some(command) = decide(&game) {
            process_command(&mut game, command);
        }
        step(&mut game);
        game.drain_events();
    }

    tracing::debug!(seed, score = game.score, frames = game.frame_count, "simulated run");

    RunStats {
        seed,
        score: game.score,
        ticks_survived: game.frame_count,
        final_speed: game.speed,
        timed_out: !game.is_game_over(),
    }
}

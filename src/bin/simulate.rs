//! Balance simulator CLI.
//!
//! Plays seeded runs with the autopilot and reports how long they last.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 200 coin-variant runs
//!   cargo run --bin simulate -- -n 50 --classic   # 50 classic runs
//!   cargo run --bin simulate -- --seed 42         # Reproducible batch

use lane_runner::config::RunnerConfig;
use lane_runner::runner::Variant;
use lane_runner::simulator::{run_simulation, SimConfig};
use std::env;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    if config.verbosity >= 1 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              LANE RUNNER BALANCE SIMULATOR                    ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Runs:           {}", config.num_runs);
        println!("  Variant:        {}", config.variant.name());
        println!("  Max Ticks:      {}", config.max_ticks_per_run);
        println!("  Initial Speed:  {}", config.runner.initial_speed);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = run_simulation(&config);

    if config.verbosity >= 1 {
        println!("{}", report.to_text());
    }

    if args.iter().any(|a| a == "--json") {
        println!("{}", report.to_json());
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    // The preset only sets the batch size, so explicit flags win in any order
    let mut config = if args.iter().any(|a| a == "--quick") {
        SimConfig::quick()
    } else {
        SimConfig::default()
    };
    let defaults = config.clone();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(defaults.num_runs);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run =
                        args[i + 1].parse().unwrap_or(defaults.max_ticks_per_run);
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    match RunnerConfig::load(Path::new(&args[i + 1])) {
                        Ok(runner) => config.runner = runner,
                        Err(e) => {
                            eprintln!("{}", e);
                            std::process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "--classic" => {
                config.variant = Variant::Classic;
            }
            "--coins" => {
                config.variant = Variant::Coins;
            }
            "-v" | "--verbose" => {
                // Bare -v means per-run output
                match args.get(i + 1).and_then(|a| a.parse().ok()) {
                    Some(level) => {
                        config.verbosity = level;
                        i += 1;
                    }
                    None => config.verbosity = 2,
                }
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" | "--json" => {}
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Lane Runner Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of runs (default: 200)");
    println!("    -s, --seed <S>      Base seed for reproducibility");
    println!("    -t, --ticks <T>     Max ticks per run (default: 18,000)");
    println!("    -c, --config <F>    Load game parameters from a JSON file");
    println!("    --classic           Play the obstacle-only variant");
    println!("    --coins             Play the coin variant (default)");
    println!("    --quick             Quick check (20 runs, 1 minute each)");
    println!("    -v, --verbose [L]   Output level: 0 = JSON only, 1 = summary,");
    println!("                        2 = every run (default with bare -v)");
    println!("    --json              Also print the report as JSON");
    println!("    -h, --help          Show this help");
}

mod input;
mod tick_events;
mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use lane_runner::build_info;
use lane_runner::config::{self, RunnerConfig, LOG_FILE};
use lane_runner::runner::{self, GameState, Variant};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tick_events::{apply_game_events, Hud};

/// How long to wait for input before drawing the next frame.
const FRAME_POLL_MS: u64 = 16;

/// Parsed command line.
struct CliOptions {
    variant: Variant,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
}

fn print_help() {
    println!("Lane Runner - Terminal Endless Runner\n");
    println!("Usage: lane-runner [options]\n");
    println!("Options:");
    println!("  --classic        Dodge obstacles, score by obstacles passed (default)");
    println!("  --coins          Dodge obstacles, score by coins collected");
    println!("  --seed N         Fixed seed for the spawn sequence");
    println!("  --config PATH    Load tuning from a JSON file");
    println!("  --version, -v    Show version information");
    println!("  --help, -h       Show this help message");
    println!();
    println!("Controls: ←/→ or A/D change lane, Space/↑/W jump, M music, R restart, Q quit");
}

fn fail_usage(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'lane-runner --help' for usage.");
    std::process::exit(1);
}

fn parse_args() -> CliOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = CliOptions {
        variant: Variant::Classic,
        seed: None,
        config_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--classic" => options.variant = Variant::Classic,
            "--coins" => options.variant = Variant::Coins,
            "--seed" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(seed) => options.seed = Some(seed),
                    None => fail_usage("--seed needs a number"),
                }
            }
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => options.config_path = Some(PathBuf::from(path)),
                    None => fail_usage("--config needs a path"),
                }
            }
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => fail_usage(&format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    options
}

fn load_config(options: &CliOptions) -> RunnerConfig {
    match &options.config_path {
        Some(path) => match RunnerConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => RunnerConfig::load_default().unwrap_or_else(|e| {
            eprintln!("Warning: {} (using defaults)", e);
            tracing::warn!(error = %e, "falling back to default config");
            RunnerConfig::default()
        }),
    }
}

fn main() -> io::Result<()> {
    let options = parse_args();

    // The game still runs without a log file, but say so before raw mode
    let logging = config::data_path(LOG_FILE)
        .and_then(|log_path| lane_runner::logging::init(&log_path));
    if let Err(e) = logging {
        eprintln!("Warning: logging disabled ({})", e);
    }

    let runner_config = load_config(&options);
    let mut game = match options.seed {
        Some(seed) => GameState::with_seed(options.variant, runner_config, seed),
        None => GameState::new(options.variant, runner_config),
    };
    tracing::info!(
        variant = options.variant.name(),
        seed = ?options.seed,
        version = %build_info::version_line(),
        "starting run"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, &mut game);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    tracing::info!(
        score = game.score(),
        high_score = game.high_score(),
        "session ended"
    );
    println!("Best score this session: {}", game.high_score());

    Ok(())
}

/// Main loop: draw, read input, advance the simulation by wall-clock time.
fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut GameState,
) -> io::Result<()> {
    let mut hud = Hud::default();
    let mut last_frame = Instant::now();

    loop {
        let snapshot = game.snapshot();
        terminal.draw(|frame| ui::draw(frame, &snapshot, &hud))?;

        // Drain every pending key so held keys don't queue up
        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            while event::poll(Duration::from_millis(0))? {
                if let Event::Key(key_event) = event::read()? {
                    if let Some(command) = input::map_key(key_event) {
                        runner::process_command(game, command);
                    }
                }
            }
        }

        if game.quit_requested {
            return Ok(());
        }

        let elapsed_ms = last_frame.elapsed().as_millis() as u64;
        last_frame = Instant::now();
        runner::tick(game, elapsed_ms);
        hud.update(elapsed_ms);

        let events = game.drain_events();
        if apply_game_events(&mut hud, &events, game.music_on()) {
            let backend = terminal.backend_mut();
            backend.write_all(b"\x07")?;
            backend.flush()?;
        }
    }
}

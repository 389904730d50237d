//! Tracing setup. The terminal is in raw mode while the game runs, so log
//! output goes to a file instead of stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter (e.g. `lane_runner=debug`).
pub const LOG_ENV: &str = "LANE_RUNNER_LOG";

/// Install a global subscriber appending to `path`.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

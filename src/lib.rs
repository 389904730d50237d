//! Lane Runner - Terminal Endless Runner Library
//!
//! This module exposes the simulation core for testing and for the
//! headless simulator. The terminal front-end lives in the binary.

pub mod build_info;
pub mod config;
pub mod logging;
pub mod runner;
pub mod simulator;

pub use config::{ConfigError, RunnerConfig};
pub use runner::{Command, GameEvent, GameState, RunnerSnapshot, Variant};

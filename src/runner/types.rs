//! Lane Runner data structures.
//!
//! The play field is seen from above. Lanes run across the lateral axis, one
//! unit wide each. Entities appear at the far edge of the track (`y = 0`) and
//! scroll toward the player near the bottom (`y` grows). Jumping lifts the
//! player along a third, elevation axis.

use super::events::GameEvent;
use super::player::Player;
use super::spawner::Spawner;
use crate::config::RunnerConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Number of lanes. Lane indices are `0..LANE_COUNT`.
pub const LANE_COUNT: usize = 3;

/// The lane the player starts in.
pub const START_LANE: usize = 1;

/// Track depth in rows. Entities past this are off-screen.
pub const FIELD_DEPTH: f64 = 24.0;

/// Track position of the player's front edge.
pub const PLAYER_ROW: f64 = 20.0;

/// Player footprint and body size.
pub const PLAYER_WIDTH: f64 = 0.7;
pub const PLAYER_DEPTH: f64 = 1.0;
pub const PLAYER_HEIGHT: f64 = 1.0;

/// Obstacle footprint and height. A jump must lift the player's feet above
/// `OBSTACLE_HEIGHT` to clear one.
pub const OBSTACLE_WIDTH: f64 = 0.8;
pub const OBSTACLE_DEPTH: f64 = 1.0;
pub const OBSTACLE_HEIGHT: f64 = 1.0;

/// Coin footprint and height. Coins float low, so a high jump skips them.
pub const COIN_WIDTH: f64 = 0.4;
pub const COIN_DEPTH: f64 = 0.5;
pub const COIN_HEIGHT: f64 = 0.6;

/// Ground elevation.
pub const GROUND_LEVEL: f64 = 0.0;

/// Which of the two games is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Obstacles only. Score counts obstacles that scroll past.
    Classic,
    /// Obstacles and coins. Score counts collected coins.
    Coins,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Classic, Variant::Coins];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Coins => "Coins",
        }
    }

    /// True if the spawner may produce coins.
    pub fn has_coins(&self) -> bool {
        matches!(self, Self::Coins)
    }
}

/// Run state machine. `GameOver` only leaves via restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    GameOver,
}

/// A single obstacle on the track.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub lane: usize,
    /// Track position of the far edge (rows from the far boundary).
    pub y: f64,
    /// Whether the obstacle has scrolled past the player (Classic scoring).
    pub passed: bool,
}

impl Obstacle {
    /// A fresh obstacle just beyond the far boundary.
    pub fn spawn(lane: usize) -> Self {
        Self {
            lane,
            y: -OBSTACLE_DEPTH,
            passed: false,
        }
    }
}

/// A collectible coin on the track.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub lane: usize,
    pub y: f64,
    pub collected: bool,
}

impl Coin {
    /// A fresh coin just beyond the far boundary.
    pub fn spawn(lane: usize) -> Self {
        Self {
            lane,
            y: -COIN_DEPTH,
            collected: false,
        }
    }
}

/// Main game state. Owns every entity; passed explicitly to the tick.
#[derive(Debug, Clone)]
pub struct GameState {
    pub variant: Variant,
    pub config: RunnerConfig,
    pub phase: GamePhase,

    // -- Entities --
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,

    // -- Scoring --
    pub score: u32,
    /// Best score this session. Survives restarts, never written to disk.
    pub high_score: u32,
    /// Current scroll speed in rows/tick.
    pub speed: f64,

    // -- Timing --
    /// Simulation ticks since the run started.
    pub frame_count: u64,
    /// Sub-tick time accumulator (milliseconds).
    pub accumulated_time_ms: u64,

    // -- Front-end flags --
    pub music_on: bool,
    pub quit_requested: bool,

    pub(crate) spawner: Spawner,
    pub(crate) rng: StdRng,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new run with an entropy-seeded RNG.
    pub fn new(variant: Variant, config: RunnerConfig) -> Self {
        Self::with_rng(variant, config, StdRng::from_entropy())
    }

    /// Create a new run whose spawn sequence is fully determined by `seed`.
    pub fn with_seed(variant: Variant, config: RunnerConfig, seed: u64) -> Self {
        Self::with_rng(variant, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(variant: Variant, config: RunnerConfig, rng: StdRng) -> Self {
        Self {
            variant,
            phase: GamePhase::Running,
            player: Player::new(&config),
            obstacles: Vec::new(),
            coins: Vec::new(),
            score: 0,
            high_score: 0,
            speed: config.initial_speed,
            frame_count: 0,
            accumulated_time_ms: 0,
            music_on: true,
            quit_requested: false,
            spawner: Spawner::new(&config, variant),
            rng,
            events: Vec::new(),
            config,
        }
    }

    /// Reset the run to its initial values. High score, music flag, variant,
    /// config and RNG stream carry over. Undrained events are kept.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Running;
        self.player = Player::new(&self.config);
        self.obstacles.clear();
        self.coins.clear();
        self.score = 0;
        self.speed = self.config.initial_speed;
        self.frame_count = 0;
        self.accumulated_time_ms = 0;
        self.quit_requested = false;
        self.events.push(GameEvent::Restarted);
        tracing::info!(variant = self.variant.name(), "run restarted");
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn music_on(&self) -> bool {
        self.music_on
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take every event emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

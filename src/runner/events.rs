//! Discrete notifications emitted by the simulation.
//!
//! The core never plays sounds or draws effects. The front-end drains these
//! once per frame and decides how to react.

/// A single event produced by a tick or a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A coin was picked up. `score` is the new total.
    CoinCollected { score: u32 },

    /// An obstacle scrolled past the player (Classic variant).
    ObstacleCleared { score: u32 },

    /// The player hit an obstacle.
    GameOver {
        score: u32,
        high_score: u32,
        new_record: bool,
    },

    /// Background music was switched on or off.
    MusicToggled { on: bool },

    /// The run was reset to its initial state.
    Restarted,
}

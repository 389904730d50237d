//! The endless-runner simulation.
//!
//! The player runs in one of three lanes while obstacles (and, in the coin
//! variant, coins) scroll toward them. Everything here is single-threaded and
//! UI-agnostic: the front-end feeds [`Command`]s in, calls [`tick`] with the
//! elapsed time and reads a [`RunnerSnapshot`] plus drained [`GameEvent`]s out.

pub mod collision;
pub mod events;
pub mod logic;
pub mod player;
pub mod snapshot;
pub mod spawner;
pub mod types;

pub use events::GameEvent;
pub use logic::*;
pub use player::{LaneShift, Player};
pub use snapshot::{EntityView, PlayerView, RunnerSnapshot};
pub use types::*;

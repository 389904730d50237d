//! Terminal rendering. Reads a [`RunnerSnapshot`] each frame and never
//! touches the game state directly.

mod game_common;
pub mod runner_scene;

use crate::tick_events::Hud;
use lane_runner::runner::RunnerSnapshot;
use ratatui::Frame;

/// Draw one frame of the game.
pub fn draw(frame: &mut Frame, snapshot: &RunnerSnapshot, hud: &Hud) {
    let area = frame.size();
    runner_scene::render_runner_scene(frame, area, snapshot, hud);
}

//! Scripted player used by the simulator.
//!
//! Strategy: sidestep an obstacle coming down the current lane if a
//! neighbouring lane is clear, otherwise time a jump over it. With nothing to
//! dodge, drift toward the nearest reachable coin.

use crate::runner::{
    Command, GameState, LANE_COUNT, OBSTACLE_DEPTH, PLAYER_DEPTH, PLAYER_ROW, TICK_SECONDS,
};

/// How far ahead (in ticks of travel) an obstacle counts as a threat.
const LOOKAHEAD_TICKS: f64 = 24.0;

/// Ticks before contact at which a jump is launched.
const JUMP_LEAD_TICKS: f64 = 7.0;

/// Pick the next command for `game`, if any.
pub fn decide(game: &GameState) -> Option<Command> {
    if game.is_game_over() || game.player.is_jumping {
        return None;
    }

    let lane = game.player.lane;
    let speed = game.speed.max(f64::EPSILON);
    let danger_from = PLAYER_ROW - speed * LOOKAHEAD_TICKS;

    if let Some(contact) = ticks_until_contact(game, lane, danger_from) {
        if let Some(target) = clear_neighbour(game, lane, danger_from) {
            return Some(shift_toward(lane, target));
        }
        // Rising above obstacle height takes a few ticks, so launch early
        if contact <= JUMP_LEAD_TICKS.max(rise_ticks(game)) {
            return Some(Command::Jump);
        }
        return None;
    }

    // Nothing to dodge: chase a coin in a safe neighbouring lane
    let coin_lane = game
        .coins
        .iter()
        .filter(|c| !c.collected && c.y < PLAYER_ROW && c.lane != lane)
        .filter(|c| c.lane.abs_diff(lane) == 1)
        .filter(|c| lane_is_clear(game, c.lane, danger_from))
        .max_by(|a, b| a.y.total_cmp(&b.y))
        .map(|c| c.lane)?;
    Some(shift_toward(lane, coin_lane))
}

/// Ticks until the nearest threatening obstacle in `lane` touches the player.
fn ticks_until_contact(game: &GameState, lane: usize, danger_from: f64) -> Option<f64> {
    game.obstacles
        .iter()
        .filter(|o| o.lane == lane && o.y < PLAYER_ROW + PLAYER_DEPTH)
        .filter(|o| o.y + OBSTACLE_DEPTH > danger_from)
        .map(|o| ((PLAYER_ROW - (o.y + OBSTACLE_DEPTH)) / game.speed).max(0.0))
        .min_by(|a, b| a.total_cmp(b))
}

fn lane_is_clear(game: &GameState, lane: usize, danger_from: f64) -> bool {
    ticks_until_contact(game, lane, danger_from).is_none()
}

fn clear_neighbour(game: &GameState, lane: usize, danger_from: f64) -> Option<usize> {
    let left = lane.checked_sub(1);
    let right = (lane + 1 < LANE_COUNT).then_some(lane + 1);
    [left, right]
        .into_iter()
        .flatten()
        .find(|&l| lane_is_clear(game, l, danger_from))
}

/// Ticks the jump needs to lift the player's feet above obstacle height.
fn rise_ticks(game: &GameState) -> f64 {
    let v = game.player.jump_impulse;
    let g = game.player.gravity;
    let h = crate::runner::OBSTACLE_HEIGHT;
    let disc = v * v - 2.0 * g * h;
    if disc <= 0.0 {
        return 0.0;
    }
    ((v - disc.sqrt()) / g) / TICK_SECONDS
}

fn shift_toward(from: usize, to: usize) -> Command {
    if to < from {
        Command::MoveLeft
    } else {
        Command::MoveRight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunnerConfig;
    use crate::runner::{Coin, Obstacle, Variant, START_LANE};

    fn quiet_game() -> GameState {
        let config = RunnerConfig {
            spawn_chance: 0.0,
            ..RunnerConfig::default()
        };
        GameState::with_seed(Variant::Coins, config, 11)
    }

    fn obstacle(lane: usize, y: f64) -> Obstacle {
        Obstacle {
            lane,
            y,
            passed: false,
        }
    }

    #[test]
    fn test_idle_on_empty_track() {
        assert_eq!(decide(&quiet_game()), None);
    }

    #[test]
    fn test_sidesteps_into_clear_lane() {
        let mut game = quiet_game();
        game.obstacles.push(obstacle(START_LANE, PLAYER_ROW - 4.0));
        game.obstacles.push(obstacle(START_LANE - 1, PLAYER_ROW - 4.0));
        assert_eq!(decide(&game), Some(Command::MoveRight));
    }

    #[test]
    fn test_jumps_when_boxed_in() {
        let mut game = quiet_game();
        for lane in 0..LANE_COUNT {
            game.obstacles.push(obstacle(lane, PLAYER_ROW - 2.0));
        }
        assert_eq!(decide(&game), Some(Command::Jump));
    }

    #[test]
    fn test_waits_to_jump_when_obstacle_far() {
        let mut game = quiet_game();
        for lane in 0..LANE_COUNT {
            game.obstacles.push(obstacle(lane, PLAYER_ROW - 5.5));
        }
        assert_eq!(decide(&game), None);
    }

    #[test]
    fn test_chases_neighbouring_coin() {
        let mut game = quiet_game();
        game.coins.push(Coin {
            lane: START_LANE + 1,
            y: 10.0,
            collected: false,
        });
        assert_eq!(decide(&game), Some(Command::MoveRight));
    }

    #[test]
    fn test_rise_ticks_with_defaults() {
        // Feet pass obstacle height 0.1s after takeoff with the defaults
        let ticks = rise_ticks(&quiet_game());
        assert!((ticks - 0.1 / TICK_SECONDS).abs() < 1e-6);
    }
}

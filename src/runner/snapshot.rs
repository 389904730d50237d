//! Read-only view of a run, rebuilt by the renderer every frame.

use super::types::{GamePhase, GameState, Variant};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerView {
    pub lane: usize,
    pub elevation: f64,
    pub is_jumping: bool,
    pub alive: bool,
}

/// Position of an obstacle or coin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntityView {
    pub lane: usize,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunnerSnapshot {
    pub variant: Variant,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub obstacles: Vec<EntityView>,
    pub coins: Vec<EntityView>,
    pub score: u32,
    pub high_score: u32,
    pub speed: f64,
    pub frame_count: u64,
    pub music_on: bool,
}

impl RunnerSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

impl GameState {
    /// Capture everything the renderer needs for one frame.
    pub fn snapshot(&self) -> RunnerSnapshot {
        RunnerSnapshot {
            variant: self.variant,
            phase: self.phase,
            player: PlayerView {
                lane: self.player.lane,
                elevation: self.player.elevation,
                is_jumping: self.player.is_jumping,
                alive: self.player.alive,
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| EntityView {
                    lane: o.lane,
                    y: o.y,
                })
                .collect(),
            coins: self
                .coins
                .iter()
                .filter(|c| !c.collected)
                .map(|c| EntityView {
                    lane: c.lane,
                    y: c.y,
                })
                .collect(),
            score: self.score,
            high_score: self.high_score,
            speed: self.speed,
            frame_count: self.frame_count,
            music_on: self.music_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::RunnerConfig;
    use crate::runner::types::{Coin, GameState, Obstacle, Variant};

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut game = GameState::with_seed(Variant::Coins, RunnerConfig::default(), 3);
        game.obstacles.push(Obstacle {
            lane: 2,
            y: 5.0,
            passed: false,
        });
        game.coins.push(Coin {
            lane: 0,
            y: 7.5,
            collected: false,
        });
        game.coins.push(Coin {
            lane: 1,
            y: 8.0,
            collected: true,
        });
        game.score = 4;

        let snap = game.snapshot();
        assert_eq!(snap.variant, Variant::Coins);
        assert_eq!(snap.player.lane, game.player.lane);
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].lane, 2);
        assert_eq!(snap.coins.len(), 1);
        assert!((snap.coins[0].y - 7.5).abs() < f64::EPSILON);
        assert_eq!(snap.score, 4);
        assert!(!snap.is_game_over());
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let game = GameState::with_seed(Variant::Classic, RunnerConfig::default(), 3);
        let json = serde_json::to_string(&game.snapshot()).unwrap();
        assert!(json.contains("\"variant\":\"Classic\""));
        assert!(json.contains("\"phase\":\"Running\""));
    }
}

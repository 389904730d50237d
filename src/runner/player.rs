//! Player controller: lane shifts, jumping and vertical integration.

use super::collision::{Hitbox, Rect};
use super::types::{
    GROUND_LEVEL, LANE_COUNT, PLAYER_DEPTH, PLAYER_HEIGHT, PLAYER_ROW, PLAYER_WIDTH, START_LANE,
};
use crate::config::RunnerConfig;

/// Direction of a lane change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneShift {
    Left,
    Right,
}

impl LaneShift {
    fn delta(self) -> isize {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

/// The runner.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Current lane, always `< LANE_COUNT`.
    pub lane: usize,
    /// Height of the player's feet above the ground. Never below `GROUND_LEVEL`.
    pub elevation: f64,
    /// Current vertical velocity in units/s (positive = upward).
    pub jump_velocity: f64,
    pub is_jumping: bool,
    pub alive: bool,

    // -- Cached physics parameters --
    pub jump_impulse: f64,
    pub gravity: f64,
}

impl Player {
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            lane: START_LANE,
            elevation: GROUND_LEVEL,
            jump_velocity: 0.0,
            is_jumping: false,
            alive: true,
            jump_impulse: config.jump_velocity,
            gravity: config.gravity,
        }
    }

    /// Shift one lane. Ignored mid-jump or at the outer lanes.
    /// Returns true if the lane changed.
    pub fn move_lane(&mut self, shift: LaneShift) -> bool {
        if self.is_jumping {
            return false;
        }
        let target = self.lane as isize + shift.delta();
        if target < 0 || target >= LANE_COUNT as isize {
            return false;
        }
        self.lane = target as usize;
        true
    }

    /// Start a jump. Ignored if already airborne. Returns true if a jump began.
    pub fn jump(&mut self) -> bool {
        if self.is_jumping {
            return false;
        }
        self.is_jumping = true;
        self.jump_velocity = self.jump_impulse;
        true
    }

    /// Advance vertical motion by `dt` seconds. Landing snaps the player to
    /// exactly `GROUND_LEVEL` and clears the jump state.
    pub fn update(&mut self, dt: f64) {
        if !self.is_jumping {
            return;
        }

        self.elevation += self.jump_velocity * dt;
        self.jump_velocity -= self.gravity * dt;

        if self.elevation <= GROUND_LEVEL {
            self.elevation = GROUND_LEVEL;
            self.jump_velocity = 0.0;
            self.is_jumping = false;
        }
    }

    /// Collision box: the lane-centered footprint at `PLAYER_ROW`, lifted by
    /// the current elevation.
    pub fn hitbox(&self) -> Hitbox {
        Hitbox {
            footprint: Rect::centered_in_lane(self.lane, PLAYER_ROW, PLAYER_WIDTH, PLAYER_DEPTH),
            bottom: self.elevation,
            top: self.elevation + PLAYER_HEIGHT,
        }
    }
}

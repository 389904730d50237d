//! Periodic obstacle and coin spawning.

use super::types::{Coin, Obstacle, Variant, LANE_COUNT};
use crate::config::RunnerConfig;
use rand::Rng;

/// Something the spawner produced this tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Spawn {
    Obstacle(Obstacle),
    Coin(Coin),
}

impl Spawn {
    pub fn lane(&self) -> usize {
        match self {
            Self::Obstacle(o) => o.lane,
            Self::Coin(c) => c.lane,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Obstacle(_) => "obstacle",
            Self::Coin(_) => "coin",
        }
    }
}

/// Fires every `interval_ticks` frames and rolls for a new entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Spawner {
    pub interval_ticks: u64,
    pub spawn_chance: f64,
    /// Zero when the variant has no coins.
    pub coin_chance: f64,
}

impl Spawner {
    pub fn new(config: &RunnerConfig, variant: Variant) -> Self {
        Self {
            interval_ticks: config.spawn_interval_ticks.max(1),
            spawn_chance: config.spawn_chance.clamp(0.0, 1.0),
            coin_chance: if variant.has_coins() {
                config.coin_chance.clamp(0.0, 1.0)
            } else {
                0.0
            },
        }
    }

    /// True on the frames the spawner fires. Frame 0 never fires.
    pub fn fires_on(&self, frame: u64) -> bool {
        frame > 0 && frame % self.interval_ticks == 0
    }

    /// Roll for a spawn at `frame`. The new entity sits in a uniformly random
    /// lane just beyond the far boundary.
    pub fn tick<R: Rng>(&self, frame: u64, rng: &mut R) -> Option<Spawn> {
        if !self.fires_on(frame) {
            return None;
        }
        if !rng.gen_bool(self.spawn_chance) {
            return None;
        }

        let lane = rng.gen_range(0..LANE_COUNT);
        if self.coin_chance > 0.0 && rng.gen_bool(self.coin_chance) {
            Some(Spawn::Coin(Coin::spawn(lane)))
        } else {
            Some(Spawn::Obstacle(Obstacle::spawn(lane)))
        }
    }
}

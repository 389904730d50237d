//! Axis-aligned collision between the player and track entities.

use super::player::Player;
use super::types::{
    Coin, Obstacle, COIN_DEPTH, COIN_HEIGHT, COIN_WIDTH, GROUND_LEVEL, OBSTACLE_DEPTH,
    OBSTACLE_HEIGHT, OBSTACLE_WIDTH,
};

/// Rectangle on the lateral (x) / track (y) plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle horizontally centered in `lane`, leading edge at `y`.
    pub fn centered_in_lane(lane: usize, y: f64, width: f64, height: f64) -> Self {
        let x = lane as f64 + (1.0 - width) / 2.0;
        Self::new(x, y, width, height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True if the interiors overlap. Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A footprint plus an elevation span `[bottom, top]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub footprint: Rect,
    pub bottom: f64,
    pub top: f64,
}

impl Hitbox {
    pub fn intersects(&self, other: &Hitbox) -> bool {
        self.footprint.intersects(&other.footprint)
            && self.bottom < other.top
            && other.bottom < self.top
    }

    /// Stretch the footprint back along the track by `distance`, covering
    /// every row the box passed through while scrolling that far.
    pub fn swept_back(self, distance: f64) -> Hitbox {
        let distance = distance.max(0.0);
        Hitbox {
            footprint: Rect {
                y: self.footprint.y - distance,
                height: self.footprint.height + distance,
                ..self.footprint
            },
            ..self
        }
    }
}

pub fn obstacle_hitbox(obstacle: &Obstacle) -> Hitbox {
    Hitbox {
        footprint: Rect::centered_in_lane(obstacle.lane, obstacle.y, OBSTACLE_WIDTH, OBSTACLE_DEPTH),
        bottom: GROUND_LEVEL,
        top: GROUND_LEVEL + OBSTACLE_HEIGHT,
    }
}

pub fn coin_hitbox(coin: &Coin) -> Hitbox {
    Hitbox {
        footprint: Rect::centered_in_lane(coin.lane, coin.y, COIN_WIDTH, COIN_DEPTH),
        bottom: GROUND_LEVEL,
        top: GROUND_LEVEL + COIN_HEIGHT,
    }
}

/// Index of the first obstacle the player touched, if any. `scrolled` is how
/// far entities moved this tick; the check covers the whole distance so a
/// fast obstacle can't skip over the player's row between ticks.
pub fn first_obstacle_hit(
    player: &Player,
    obstacles: &[Obstacle],
    scrolled: f64,
) -> Option<usize> {
    let player_box = player.hitbox();
    obstacles
        .iter()
        .position(|o| player_box.intersects(&obstacle_hitbox(o).swept_back(scrolled)))
}

/// Mark every touched, uncollected coin as collected, sweeping over the
/// `scrolled` distance like [`first_obstacle_hit`]. Returns how many were
/// collected by this call.
pub fn collect_coins(player: &Player, coins: &mut [Coin], scrolled: f64) -> u32 {
    let player_box = player.hitbox();
    let mut collected = 0;
    for coin in coins.iter_mut().filter(|c| !c.collected) {
        if player_box.intersects(&coin_hitbox(coin).swept_back(scrolled)) {
            coin.collected = true;
            collected += 1;
        }
    }
    collected
}

//! Lane Runner game logic: commands, the fixed-step driver and the per-tick
//! update pipeline.

use super::collision::{collect_coins, first_obstacle_hit};
use super::events::GameEvent;
use super::player::LaneShift;
use super::spawner::Spawn;
use super::types::{GamePhase, GameState, Variant, FIELD_DEPTH, PLAYER_DEPTH, PLAYER_ROW};

/// Physics tick interval in milliseconds (~60 FPS).
pub const TICK_MS: u64 = 16;

/// Seconds of simulated time per tick, used for jump integration.
pub const TICK_SECONDS: f64 = TICK_MS as f64 / 1000.0;

/// Longest wall-clock gap fed into the accumulator per call.
const MAX_FRAME_MS: u64 = 100;

/// UI-agnostic input commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Jump,
    Restart,
    Quit,
    ToggleMusic,
}

/// Apply a command. Movement is ignored once the run is over; restart,
/// music and quit work in any phase.
pub fn process_command(game: &mut GameState, command: Command) {
    match command {
        Command::MoveLeft | Command::MoveRight | Command::Jump
            if game.phase == GamePhase::GameOver => {}
        Command::MoveLeft => {
            game.player.move_lane(LaneShift::Left);
        }
        Command::MoveRight => {
            game.player.move_lane(LaneShift::Right);
        }
        Command::Jump => {
            game.player.jump();
        }
        Command::Restart => game.reset(),
        Command::Quit => game.quit_requested = true,
        Command::ToggleMusic => {
            game.music_on = !game.music_on;
            game.events.push(GameEvent::MusicToggled { on: game.music_on });
            tracing::debug!(on = game.music_on, "music toggled");
        }
    }
}

/// Advance the run by `dt_ms` of wall-clock time, stepping in fixed
/// `TICK_MS` increments. Returns true if at least one step ran.
pub fn tick(game: &mut GameState, dt_ms: u64) -> bool {
    if game.phase == GamePhase::GameOver {
        return false;
    }

    // Clamp so a stall (suspended terminal, debugger) can't fast-forward
    game.accumulated_time_ms += dt_ms.min(MAX_FRAME_MS);
    let mut changed = false;

    while game.accumulated_time_ms >= TICK_MS {
        game.accumulated_time_ms -= TICK_MS;
        step(game);
        changed = true;

        if game.phase == GamePhase::GameOver {
            game.accumulated_time_ms = 0;
            break;
        }
    }

    changed
}

/// One simulation tick. No-op once the run is over.
pub fn step(game: &mut GameState) {
    if game.phase == GamePhase::GameOver {
        return;
    }

    game.frame_count += 1;

    // 1. Player vertical motion
    game.player.update(TICK_SECONDS);

    // 2. Spawner
    if let Some(spawn) = game.spawner.tick(game.frame_count, &mut game.rng) {
        tracing::debug!(
            frame = game.frame_count,
            lane = spawn.lane(),
            kind = spawn.kind(),
            "spawned"
        );
        match spawn {
            Spawn::Obstacle(obstacle) => game.obstacles.push(obstacle),
            Spawn::Coin(coin) => game.coins.push(coin),
        }
    }

    // 3. Scroll
    let speed = game.speed;
    for obstacle in &mut game.obstacles {
        obstacle.y += speed;
    }
    for coin in &mut game.coins {
        coin.y += speed;
    }

    // 4. Collisions over the distance just scrolled: obstacles end the run
    //    before any coin is counted
    if first_obstacle_hit(&game.player, &game.obstacles, speed).is_some() {
        end_run(game);
        return;
    }

    let collected = collect_coins(&game.player, &mut game.coins, speed);
    for _ in 0..collected {
        game.score += 1;
        game.events.push(GameEvent::CoinCollected { score: game.score });
    }

    // 5. Classic scoring: obstacles fully behind the player
    if game.variant == Variant::Classic {
        let player_back = PLAYER_ROW + PLAYER_DEPTH;
        for obstacle in game.obstacles.iter_mut().filter(|o| !o.passed) {
            if obstacle.y >= player_back {
                obstacle.passed = true;
                game.score += 1;
                game.events
                    .push(GameEvent::ObstacleCleared { score: game.score });
            }
        }
    }

    // 6. Prune off-screen and collected entities
    game.obstacles.retain(|o| o.y < FIELD_DEPTH);
    game.coins.retain(|c| !c.collected && c.y < FIELD_DEPTH);

    // 7. Difficulty ramp
    game.speed = ramped_speed(
        game.config.initial_speed,
        game.config.speed_increment,
        game.config.speed_ramp_interval,
        game.frame_count,
    );
}

/// Scroll speed after `frames` ticks: a fixed increment per completed
/// interval, unbounded.
pub fn ramped_speed(initial: f64, increment: f64, interval: u64, frames: u64) -> f64 {
    let steps = frames / interval.max(1);
    initial + increment * steps as f64
}

fn end_run(game: &mut GameState) {
    game.player.alive = false;
    game.phase = GamePhase::GameOver;

    let new_record = game.score > game.high_score;
    if new_record {
        game.high_score = game.score;
    }

    game.events.push(GameEvent::GameOver {
        score: game.score,
        high_score: game.high_score,
        new_record,
    });
    tracing::info!(
        variant = game.variant.name(),
        score = game.score,
        high_score = game.high_score,
        frames = game.frame_count,
        "run ended"
    );
}

//! Behavioral tests for the runner simulation, driven only through the
//! public API: commands in, ticks, snapshots and drained events out.
//!
//! Uses seeded ChaCha8Rng for random input sequences.

use lane_runner::runner::collision::obstacle_hitbox;
use lane_runner::runner::{
    process_command, ramped_speed, step, tick, Coin, Command, GameEvent, GamePhase, GameState,
    Obstacle, Player, Variant, FIELD_DEPTH, GROUND_LEVEL, LANE_COUNT, TICK_MS,
};
use lane_runner::RunnerConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A run with the spawner silenced so each test places its own entities.
fn quiet_game(variant: Variant) -> GameState {
    let config = RunnerConfig {
        spawn_chance: 0.0,
        ..RunnerConfig::default()
    };
    GameState::with_seed(variant, config, 2024)
}

fn obstacle(lane: usize, y: f64) -> Obstacle {
    Obstacle {
        lane,
        y,
        passed: false,
    }
}

fn coin(lane: usize, y: f64) -> Coin {
    Coin {
        lane,
        y,
        collected: false,
    }
}

fn run_steps(game: &mut GameState, count: usize) {
    for _ in 0..count {
        step(game);
    }
}

// ── Lanes ───────────────────────────────────────────────────────────

#[test]
fn test_lane_stays_in_range_under_random_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut game = quiet_game(Variant::Classic);
    let commands = [Command::MoveLeft, Command::MoveRight, Command::Jump];

    for _ in 0..5_000 {
        let command = commands[rng.gen_range(0..commands.len())];
        process_command(&mut game, command);
        step(&mut game);
        assert!(game.player.lane < LANE_COUNT);
    }
}

#[test]
fn test_lane_change_blocked_mid_jump() {
    let mut game = quiet_game(Variant::Classic);
    process_command(&mut game, Command::Jump);
    step(&mut game);
    let lane = game.player.lane;

    process_command(&mut game, Command::MoveLeft);
    assert_eq!(game.player.lane, lane);

    while game.player.is_jumping {
        step(&mut game);
    }
    process_command(&mut game, Command::MoveLeft);
    assert_eq!(game.player.lane, lane - 1);
}

// ── Jumping ─────────────────────────────────────────────────────────

#[test]
fn test_jump_lands_exactly_on_ground_for_any_step() {
    for dt in [0.001, 0.01, 0.016, 0.033, 0.05, 0.1] {
        let mut player = Player::new(&RunnerConfig::default());
        assert!(player.jump());

        let mut steps = 0;
        while player.is_jumping {
            player.update(dt);
            assert!(player.elevation >= GROUND_LEVEL, "sank below ground at dt={}", dt);
            steps += 1;
            assert!(steps < 100_000, "never landed at dt={}", dt);
        }

        assert_eq!(player.elevation, GROUND_LEVEL, "dt={}", dt);
        assert_eq!(player.jump_velocity, 0.0, "dt={}", dt);
    }
}

#[test]
fn test_jump_clears_obstacle_and_scores_in_classic() {
    let mut game = quiet_game(Variant::Classic);
    // Overlaps the player's row from tick 37 to tick 43
    game.obstacles.push(obstacle(1, 10.0));

    run_steps(&mut game, 30);
    process_command(&mut game, Command::Jump);
    run_steps(&mut game, 13);
    assert!(game.player.alive);
    assert_eq!(game.score, 0);

    step(&mut game);
    assert!(game.player.alive);
    assert_eq!(game.score, 1);
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::ObstacleCleared { score: 1 }]
    );
}

// ── Collision ───────────────────────────────────────────────────────

#[test]
fn test_run_ends_on_first_overlapping_tick() {
    let mut game = quiet_game(Variant::Classic);
    game.obstacles.push(obstacle(1, 10.0));

    loop {
        let mut ahead = game.obstacles[0].clone();
        ahead.y += game.speed;
        let will_hit = obstacle_hitbox(&ahead).intersects(&game.player.hitbox());

        step(&mut game);
        assert_eq!(game.player.alive, !will_hit, "frame {}", game.frame_count);
        if will_hit {
            break;
        }
        assert!(game.frame_count < 1_000);
    }

    // Front edges touch at tick 36 (y = 19), first overlap is tick 37
    assert_eq!(game.frame_count, 37);
    assert_eq!(game.obstacles[0].y, 19.25);
    assert!(game.is_game_over());
}

#[test]
fn test_obstacle_in_lane_always_ends_run_at_high_speed() {
    for speed in [2.0, 2.5, 3.3, 5.0, 12.0] {
        for offset in 0..10 {
            let config = RunnerConfig {
                spawn_chance: 0.0,
                initial_speed: speed,
                speed_increment: 0.0,
                ..RunnerConfig::default()
            };
            let mut game = GameState::with_seed(Variant::Classic, config, 11);
            let start = -1.0 - speed * offset as f64 / 10.0;
            game.obstacles.push(obstacle(1, start));

            while !game.obstacles.is_empty() && !game.is_game_over() {
                step(&mut game);
            }

            assert!(
                game.is_game_over(),
                "speed {} start {} slipped past the player",
                speed,
                start
            );
            assert_eq!(game.score, 0);
        }
    }
}

#[test]
fn test_default_ramp_cannot_outrun_collision() {
    let mut game = quiet_game(Variant::Coins);
    // Jump far ahead on the default ramp, past two rows per tick
    game.frame_count = 60_000;
    game.speed = ramped_speed(
        game.config.initial_speed,
        game.config.speed_increment,
        game.config.speed_ramp_interval,
        game.frame_count,
    );
    assert!(game.speed >= 2.0);

    game.obstacles.push(obstacle(1, 10.0));
    while !game.obstacles.is_empty() && !game.is_game_over() {
        step(&mut game);
    }
    assert!(game.is_game_over());
    assert!(!game.player.alive);
}

#[test]
fn test_fast_coin_is_collected() {
    let config = RunnerConfig {
        spawn_chance: 0.0,
        initial_speed: 1.5,
        ..RunnerConfig::default()
    };
    let mut game = GameState::with_seed(Variant::Coins, config, 3);
    // Touches the player's front edge, then lands fully behind it
    game.coins.push(coin(1, 19.5 - 1.5));

    run_steps(&mut game, 2);
    assert_eq!(game.score, 1);
    assert_eq!(game.drain_events(), vec![GameEvent::CoinCollected { score: 1 }]);
}

#[test]
fn test_obstacle_in_other_lane_is_harmless() {
    let mut game = quiet_game(Variant::Coins);
    game.obstacles.push(obstacle(0, 10.0));
    game.obstacles.push(obstacle(2, 12.0));

    run_steps(&mut game, 120);
    assert!(game.player.alive);
    assert!(game.obstacles.is_empty());
}

#[test]
fn test_game_over_freezes_the_field() {
    let mut game = quiet_game(Variant::Coins);
    game.obstacles.push(obstacle(1, 19.0));
    game.coins.push(coin(0, 5.0));
    step(&mut game);
    assert!(game.is_game_over());
    assert!(!game.player.alive);

    let frozen = game.snapshot();
    for command in [Command::MoveLeft, Command::MoveRight, Command::Jump] {
        process_command(&mut game, command);
    }
    assert!(!tick(&mut game, 1_000));
    step(&mut game);

    assert_eq!(game.snapshot(), frozen);
    assert_eq!(game.phase, GamePhase::GameOver);
}

// ── Coins ───────────────────────────────────────────────────────────

#[test]
fn test_coin_counts_exactly_once() {
    let mut game = quiet_game(Variant::Coins);
    game.coins.push(coin(1, 19.5));

    step(&mut game);
    assert_eq!(game.score, 1);
    assert_eq!(game.drain_events(), vec![GameEvent::CoinCollected { score: 1 }]);
    assert!(game.snapshot().coins.is_empty());

    run_steps(&mut game, 20);
    assert_eq!(game.score, 1);
    assert!(game.drain_events().is_empty());
}

#[test]
fn test_high_jump_skips_coin() {
    let mut game = quiet_game(Variant::Coins);
    process_command(&mut game, Command::Jump);
    run_steps(&mut game, 10);
    assert!(game.player.elevation > 1.0);

    game.coins.push(coin(1, 19.5));
    step(&mut game);
    assert_eq!(game.score, 0);
}

// ── Pruning ─────────────────────────────────────────────────────────

#[test]
fn test_offscreen_entity_pruned_once_and_never_returns() {
    let mut game = quiet_game(Variant::Coins);
    game.obstacles.push(obstacle(0, FIELD_DEPTH - 0.1));
    game.coins.push(coin(2, FIELD_DEPTH - 0.1));

    step(&mut game);
    assert!(game.obstacles.is_empty());
    assert!(game.coins.is_empty());

    for _ in 0..500 {
        step(&mut game);
        assert!(game.obstacles.is_empty());
        assert!(game.coins.is_empty());
    }
}

#[test]
fn test_spawned_obstacles_scroll_onto_field_and_stay_bounded() {
    let mut game = GameState::with_seed(Variant::Classic, RunnerConfig::default(), 5);
    // Hover well above everything so the run can't end
    game.player.is_jumping = true;
    game.player.jump_velocity = 0.0;
    game.player.elevation = 50.0;
    game.player.gravity = 0.0;

    let mut furthest = f64::MIN;
    for _ in 0..400 {
        step(&mut game);
        for o in &game.obstacles {
            assert!(o.y < FIELD_DEPTH);
            furthest = furthest.max(o.y);
        }
    }
    assert!(game.player.alive);
    assert!(furthest > 0.0, "nothing ever scrolled onto the field");
}

// ── Difficulty and timing ───────────────────────────────────────────

#[test]
fn test_speed_follows_ramp_formula() {
    let mut game = quiet_game(Variant::Classic);
    let config = game.config.clone();

    for _ in 0..1_500 {
        step(&mut game);
        let expected = ramped_speed(
            config.initial_speed,
            config.speed_increment,
            config.speed_ramp_interval,
            game.frame_count,
        );
        assert!((game.speed - expected).abs() < 1e-12);
    }

    let two_steps = config.initial_speed + 2.0 * config.speed_increment;
    assert!((game.speed - two_steps).abs() < 1e-12);
}

#[test]
fn test_fixed_step_accumulator() {
    let mut game = quiet_game(Variant::Classic);

    assert!(!tick(&mut game, TICK_MS - 1));
    assert_eq!(game.frame_count, 0);

    assert!(tick(&mut game, 1));
    assert_eq!(game.frame_count, 1);

    // Long stalls are clamped rather than replayed in full
    tick(&mut game, 60_000);
    assert!(game.frame_count <= 1 + 100 / TICK_MS);
}

// ── Restart ─────────────────────────────────────────────────────────

#[test]
fn test_restart_keeps_high_score() {
    let mut game = quiet_game(Variant::Coins);
    game.coins.push(coin(1, 19.5));
    step(&mut game);
    game.obstacles.push(obstacle(1, 19.0));
    step(&mut game);
    assert!(game.is_game_over());
    assert_eq!(game.high_score, 1);

    let events = game.drain_events();
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            score: 1,
            high_score: 1,
            new_record: true,
        })
    );

    process_command(&mut game, Command::Restart);
    assert!(!game.is_game_over());
    assert!(game.player.alive);
    assert_eq!(game.score, 0);
    assert_eq!(game.high_score, 1);
    assert_eq!(game.frame_count, 0);
    assert_eq!(game.drain_events(), vec![GameEvent::Restarted]);

    // A worse run does not lower the record
    game.obstacles.push(obstacle(1, 19.0));
    step(&mut game);
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::GameOver {
            score: 0,
            high_score: 1,
            new_record: false,
        }]
    );
}

#[test]
fn test_music_toggle_survives_restart() {
    let mut game = quiet_game(Variant::Classic);
    process_command(&mut game, Command::ToggleMusic);
    assert!(!game.music_on());
    process_command(&mut game, Command::Restart);
    assert!(!game.music_on());
}

// ── Determinism ─────────────────────────────────────────────────────

#[test]
fn test_same_seed_same_run() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let seed: u64 = rng.gen();
    let mut a = GameState::with_seed(Variant::Coins, RunnerConfig::default(), seed);
    let mut b = GameState::with_seed(Variant::Coins, RunnerConfig::default(), seed);

    for _ in 0..3_000 {
        let command = match rng.gen_range(0..10) {
            0 => Some(Command::MoveLeft),
            1 => Some(Command::MoveRight),
            2 => Some(Command::Jump),
            _ => None,
        };
        if let Some(command) = command {
            process_command(&mut a, command);
            process_command(&mut b, command);
        }
        step(&mut a);
        step(&mut b);
        assert_eq!(a.snapshot(), b.snapshot());
        if a.is_game_over() {
            break;
        }
    }
    assert_eq!(a.drain_events(), b.drain_events());
}

use game_core::*;
use glam::Vec2;
use hecs::World;
use rand::{Rng, SeedableRng};

fn idle() -> FrameInput {
    FrameInput::new()
}

fn place_player(round: &mut Round, pos: Vec2, vel_y: f32) {
    for (_e, player) in round.world_mut().query_mut::<&mut Player>() {
        player.body.pos = pos;
        player.body.vel_y = vel_y;
        player.body.on_ground = false;
    }
}

#[test]
fn test_no_collision_far_apart() {
    let config = Config::new();
    let map = GameMap::new(&config);
    let mut world = World::new();
    let mut time = Time::new();
    let mut score = Score::new();
    let mut events = Events::new();
    let mut rng = GameRng::new(1);
    let mut seq = SpawnSequence::new();

    let player = create_player(&mut world, Vec2::new(50.0, 460.0), config.player_size);
    world.get::<&mut Player>(player).unwrap().body.vel_y = 5.0;
    create_enemy(&mut world, Vec2::new(400.0, 470.0), &config, seq.next_order());

    let verdict = step(
        &mut world,
        &mut time,
        &map,
        &config,
        &idle(),
        &mut score,
        &mut events,
        &mut rng,
        &mut seq,
    );

    assert_eq!(verdict, Verdict::Continue);
    assert_eq!(score.points, 0);
    assert!(!events.fatal_hit);
    assert_eq!(time.tick, 1);

    let body = world.get::<&Player>(player).unwrap().body;
    assert_eq!(body.pos.y, 460.0, "Falling player lands on the ground");
    assert!(body.on_ground);
}

#[test]
fn test_idle_player_is_walked_into() {
    let mut round = Round::new(Config::new(), 42).unwrap();

    let mut ended_at = None;
    for _ in 0..300 {
        let report = round.tick(&idle());
        if report.game_over {
            ended_at = Some(round.snapshot().tick);
            break;
        }
    }

    // First enemy walks left 2 units per tick from x=400 and its hit-box
    // reaches the player's at x < 82
    assert_eq!(ended_at, Some(160));
    assert_eq!(round.score(), 0);
    assert_eq!(round.snapshot().enemies.len(), 2, "Nothing removed on death");
    assert!(round.events().fatal_hit);
}

#[test]
fn test_stomp_through_full_tick() {
    let mut round = Round::new(Config::new(), 42).unwrap();
    round.tick(&idle());

    // First enemy is at x=398 and will be at 396 after the next patrol step
    place_player(&mut round, Vec2::new(393.0, 440.0), 5.0);
    let report = round.tick(&idle());

    assert!(!report.game_over);
    assert_eq!(round.score(), 100);
    assert_eq!(round.events().stomps, 1);

    let snap = round.snapshot();
    assert_eq!(snap.player_vel_y, -7.5);
    assert_eq!(snap.enemies.len(), 2, "Stomped enemy replaced one for one");
    assert_eq!(snap.enemies[0].x, 646.0, "Untouched enemy moves to the front");
    assert!((200.0..=600.0).contains(&snap.enemies[1].x));
}

#[test]
fn test_jump_arc_returns_to_ground() {
    let mut round = Round::new(Config::new(), 42).unwrap();
    round.tick(&idle());
    assert!(round.snapshot().player_on_ground);

    let jump = FrameInput {
        jump: true,
        ..FrameInput::new()
    };
    round.tick(&jump);
    let apex_start = round.snapshot();
    assert!(!apex_start.player_on_ground);
    assert!(apex_start.player.y < 460.0);

    let mut landed_after = None;
    for i in 0..60 {
        round.tick(&jump);
        if round.snapshot().player_on_ground {
            landed_after = Some(i);
            break;
        }
    }
    assert!(landed_after.is_some(), "Player should come back down");
    assert_eq!(round.snapshot().player.y, 460.0);
}

#[test]
fn test_invariants_hold_under_random_input() {
    let config = Config::new();
    let rest_y = config.player_rest_y();
    let max_x = config.player_max_x();
    let mut round = Round::new(config, 7).unwrap();
    let mut input_rng = rand::rngs::StdRng::seed_from_u64(2024);

    for _ in 0..5000 {
        let input = FrameInput {
            left: input_rng.gen_bool(0.3),
            right: input_rng.gen_bool(0.4),
            jump: input_rng.gen_bool(0.1),
            restart: true,
            quit: false,
        };
        let before = round.snapshot();
        round.tick(&input);
        let snap = round.snapshot();

        assert!(snap.player.y <= rest_y, "Player sank below ground");
        if snap.player.y == rest_y {
            assert!(snap.player_on_ground, "Resting on ground implies on_ground");
        }
        assert!(snap.player.x >= 0.0 && snap.player.x <= max_x);
        if !before.game_over {
            assert!(snap.score >= before.score, "Score never decreases in a round");
        }
        assert_eq!(snap.score % 100, 0);
    }
}

#[test]
fn test_same_seed_same_game() {
    let script = |i: u32| FrameInput {
        right: i % 90 < 45,
        left: i % 90 >= 60,
        jump: i % 17 == 0,
        restart: true,
        quit: false,
    };

    let mut a = Round::new(Config::new(), 99).unwrap();
    let mut b = Round::new(Config::new(), 99).unwrap();
    for i in 0..3000 {
        a.tick(&script(i));
        b.tick(&script(i));
        assert_eq!(a.snapshot(), b.snapshot(), "Diverged at tick {i}");
    }
}

pub mod components;
pub mod config;
pub mod error;
pub mod map;
pub mod params;
pub mod resources;
pub mod round;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::ConfigError;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use round::*;
pub use snapshot::*;
pub use systems::Verdict;

use hecs::World;
use log::trace;
use systems::*;

/// Run one tick of the platformer simulation
///
/// Integration is per tick: the constants in `Config` are per-tick amounts,
/// so the caller controls pacing and the result never depends on wall time.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    input: &FrameInput,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    seq: &mut SpawnSequence,
) -> Verdict {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest input (held keys -> player intent)
    ingest_input(world, input);

    // 2. Move player: walk, jump, then gravity
    move_player(world, map, config, events);

    // 3. Patrol enemies
    patrol_enemies(world, map, config);

    // 4. Stomp or die
    let verdict = resolve_collisions(world, config, score, events, rng, seq);

    time.advance();
    trace!("tick {} -> {:?}", time.tick, verdict);

    verdict
}

/// Helper to create the player entity
pub fn create_player(world: &mut World, pos: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((Player::new(pos, size), PlayerIntent::new()))
}

/// Helper to create an enemy walking in the configured default direction
pub fn create_enemy(
    world: &mut World,
    pos: glam::Vec2,
    config: &Config,
    order: SpawnOrder,
) -> hecs::Entity {
    world.spawn((
        Enemy::new(pos, config.enemy_direction, config.enemy_size),
        order,
    ))
}

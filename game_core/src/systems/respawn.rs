use glam::Vec2;
use hecs::{Entity, World};
use log::debug;

use crate::resources::*;
use crate::{create_enemy, create_player, Config, GameMap};

/// Drop a fresh enemy at a random x inside the respawn band
///
/// It rests on the ground, walks in the default direction and goes to the
/// back of the collection order.
pub fn spawn_replacement_enemy(
    world: &mut World,
    config: &Config,
    rng: &mut GameRng,
    seq: &mut SpawnSequence,
    events: &mut Events,
) -> Entity {
    let x = rng.respawn_x(config);
    let pos = Vec2::new(x, config.enemy_rest_y());
    let entity = create_enemy(world, pos, config, seq.next_order());
    events.enemies_spawned += 1;
    debug!("replacement enemy spawned at x={x}");
    entity
}

/// Populate an empty world with the player and the default enemies
pub fn spawn_round_entities(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    seq: &mut SpawnSequence,
) -> Entity {
    let player = create_player(world, map.player_spawn, config.player_size);
    for &pos in &map.enemy_spawns {
        create_enemy(world, pos, config, seq.next_order());
    }
    player
}

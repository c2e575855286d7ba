use hecs::{Entity, World};
use log::{debug, info};

use crate::systems::respawn::spawn_replacement_enemy;
use crate::systems::scoring::award_stomp;
use crate::{
    Aabb, Config, Enemy, Events, GameRng, KinematicBody, Player, Score, SpawnOrder, SpawnSequence,
};

/// Outcome of one collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Fatal,
}

/// Falling onto the enemy from clearly above it
pub fn is_stomp(body: &KinematicBody, enemy: &Enemy, config: &Config) -> bool {
    body.vel_y > 0.0 && body.pos.y < enemy.pos.y - config.stomp_y_threshold
}

/// Player hit-box, shrunk so grazing contact does not count
pub fn player_hitbox(body: &KinematicBody, config: &Config) -> Aabb {
    Aabb::from_top_left(body.pos, body.size).inset(config.player_hitbox_inset)
}

pub fn enemy_hitbox(enemy: &Enemy, config: &Config) -> Aabb {
    Aabb::from_top_left(enemy.pos, enemy.size).inset(config.enemy_hitbox_inset)
}

/// Check the player against every live enemy, in spawn order
///
/// A stomp removes the enemy, scores, bounces the player and drops in a
/// replacement. Any other overlap is fatal and ends the pass immediately,
/// even if a later enemy would have been stomped. The bounce is already in
/// effect for enemies checked after a stomp. Replacements spawned during
/// the pass are first checked on the next tick.
pub fn resolve_collisions(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    seq: &mut SpawnSequence,
) -> Verdict {
    // Collect player and enemy data without holding borrows
    let player_data = {
        let mut player_query = world.query::<&Player>();
        player_query
            .iter()
            .next()
            .map(|(entity, player)| (entity, player.body))
    };

    let (player_entity, mut body) = match player_data {
        Some(data) => data,
        None => return Verdict::Continue, // No player in world
    };

    let mut enemies: Vec<(Entity, SpawnOrder, Enemy)> = world
        .query::<(&SpawnOrder, &Enemy)>()
        .iter()
        .map(|(entity, (order, enemy))| (entity, *order, *enemy))
        .collect();
    enemies.sort_by_key(|(_, order, _)| *order);

    // The player does not move during the pass, only its velocity changes
    let player_box = player_hitbox(&body, config);

    for (entity, _order, enemy) in enemies {
        if !player_box.overlaps(&enemy_hitbox(&enemy, config)) {
            continue;
        }

        if is_stomp(&body, &enemy, config) {
            if let Err(err) = world.despawn(entity) {
                debug!("stomped enemy {:?} already gone: {}", entity, err);
            }
            award_stomp(score, config, events);

            body.vel_y = -config.stomp_bounce_speed;
            if let Ok(mut player) = world.get::<&mut Player>(player_entity) {
                player.body.vel_y = body.vel_y;
            }

            debug!(
                "stomped enemy at x={:.1}, score={}",
                enemy.pos.x, score.points
            );
            spawn_replacement_enemy(world, config, rng, seq, events);
        } else {
            events.fatal_hit = true;
            info!(
                "player hit by enemy at x={:.1} (player vel_y={:.1})",
                enemy.pos.x, body.vel_y
            );
            return Verdict::Fatal;
        }
    }

    Verdict::Continue
}

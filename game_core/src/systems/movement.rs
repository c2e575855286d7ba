use hecs::World;
use log::trace;

use crate::components::*;
use crate::resources::*;
use crate::systems::physics::integrate_body;
use crate::{Config, GameMap};

/// Apply the player's intent, then gravity
///
/// Horizontal moves are gated by the arena walls rather than clamped. The
/// jump is only taken from the ground and happens before gravity, so the
/// first airborne tick already includes one step of gravity.
pub fn move_player(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    for (_entity, (player, intent)) in world.query_mut::<(&mut Player, &PlayerIntent)>() {
        let body = &mut player.body;

        if intent.left && body.pos.x > 0.0 {
            body.pos.x -= config.move_speed;
        }
        if intent.right && body.pos.x < map.max_x(body.size) {
            body.pos.x += config.move_speed;
        }

        if intent.jump && body.on_ground {
            body.vel_y = -config.jump_speed;
            body.on_ground = false;
            events.jumped = true;
            trace!("player jumped from x={:.1}", body.pos.x);
        }

        integrate_body(body, config.gravity, map.ground_line);
    }
}

/// Walk every enemy one step and turn it around at the walls
///
/// Position is not clamped: an enemy may end a tick slightly past a wall and
/// walks back on the next one.
pub fn patrol_enemies(world: &mut World, map: &GameMap, config: &Config) {
    for (_entity, enemy) in world.query_mut::<&mut Enemy>() {
        enemy.pos.x += enemy.direction * config.patrol_speed;
        if enemy.pos.x <= 0.0 || enemy.pos.x >= map.max_x(enemy.size) {
            enemy.direction = -enemy.direction;
        }
    }
}

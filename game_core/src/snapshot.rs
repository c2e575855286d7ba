//! Read-only view of a round for the presentation layer

use hecs::World;
use serde::Serialize;

use crate::{Enemy, Player, SpawnOrder};

/// Square entity as drawn on screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSnapshot {
    pub tick: u64,
    pub player: BodySnapshot,
    pub player_vel_y: f32,
    pub player_on_ground: bool,
    pub enemies: Vec<BodySnapshot>, // collection order
    pub score: u32,
    pub game_over: bool,
}

impl RoundSnapshot {
    /// Read the world. Enemies are listed in spawn order.
    pub fn capture(world: &World, tick: u64, score: u32, game_over: bool) -> Self {
        let (player, player_vel_y, player_on_ground) = world
            .query::<&Player>()
            .iter()
            .next()
            .map(|(_e, player)| {
                let body = player.body;
                (
                    BodySnapshot {
                        x: body.pos.x,
                        y: body.pos.y,
                        size: body.size,
                    },
                    body.vel_y,
                    body.on_ground,
                )
            })
            .unwrap_or((
                BodySnapshot {
                    x: 0.0,
                    y: 0.0,
                    size: 0.0,
                },
                0.0,
                false,
            ));

        let mut enemies: Vec<(SpawnOrder, BodySnapshot)> = world
            .query::<(&SpawnOrder, &Enemy)>()
            .iter()
            .map(|(_e, (order, enemy))| {
                (
                    *order,
                    BodySnapshot {
                        x: enemy.pos.x,
                        y: enemy.pos.y,
                        size: enemy.size,
                    },
                )
            })
            .collect();
        enemies.sort_by_key(|(order, _)| *order);

        Self {
            tick,
            player,
            player_vel_y,
            player_on_ground,
            enemies: enemies.into_iter().map(|(_, body)| body).collect(),
            score,
            game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_enemy, create_player, Config};
    use glam::Vec2;

    #[test]
    fn test_capture_lists_enemies_in_spawn_order() {
        let config = Config::new();
        let mut world = World::new();
        create_player(&mut world, Vec2::new(50.0, 460.0), config.player_size);
        create_enemy(&mut world, Vec2::new(650.0, 470.0), &config, SpawnOrder(3));
        create_enemy(&mut world, Vec2::new(400.0, 470.0), &config, SpawnOrder(1));

        let snap = RoundSnapshot::capture(&world, 7, 200, false);

        assert_eq!(snap.tick, 7);
        assert_eq!(snap.score, 200);
        assert!(!snap.game_over);
        assert_eq!(
            snap.player,
            BodySnapshot {
                x: 50.0,
                y: 460.0,
                size: 40.0
            }
        );
        let xs: Vec<f32> = snap.enemies.iter().map(|e| e.x).collect();
        assert_eq!(xs, vec![400.0, 650.0]);
    }

    #[test]
    fn test_capture_empty_world() {
        let world = World::new();
        let snap = RoundSnapshot::capture(&world, 0, 0, true);
        assert!(snap.enemies.is_empty());
        assert_eq!(snap.player.size, 0.0);
        assert!(snap.game_over);
    }
}

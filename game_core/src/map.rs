use glam::Vec2;

use crate::config::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square box from its top-left corner (screen coordinates)
    pub fn from_top_left(pos: Vec2, size: f32) -> Self {
        Self::new(pos, pos + Vec2::splat(size))
    }

    /// Shrink the box by `margin` on every side
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(margin),
            max: self.max - Vec2::splat(margin),
        }
    }

    /// Strict overlap test: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Arena layout derived from the configuration
#[derive(Debug, Clone)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
    pub ground_line: f32,
    pub player_spawn: Vec2,
    pub enemy_spawns: Vec<Vec2>,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        let enemy_y = config.enemy_rest_y();
        Self {
            width: config.arena_width,
            height: config.arena_height,
            ground_line: config.ground_line(),
            player_spawn: Vec2::new(config.player_spawn_x, config.player_rest_y()),
            enemy_spawns: config
                .enemy_spawn_xs
                .iter()
                .map(|&x| Vec2::new(x, enemy_y))
                .collect(),
        }
    }

    /// Upper x bound for an entity of the given size
    pub fn max_x(&self, size: f32) -> f32 {
        self.width - size
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::from_top_left(Vec2::new(0.0, 0.0), 10.0);
        let b = Aabb::from_top_left(Vec2::new(5.0, 5.0), 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_overlap() {
        let a = Aabb::from_top_left(Vec2::new(0.0, 0.0), 10.0);
        let right = Aabb::from_top_left(Vec2::new(10.0, 0.0), 10.0);
        let below = Aabb::from_top_left(Vec2::new(0.0, 10.0), 10.0);
        assert!(!a.overlaps(&right), "Shared vertical edge is not an overlap");
        assert!(!a.overlaps(&below), "Shared horizontal edge is not an overlap");
    }

    #[test]
    fn test_aabb_inset() {
        let hitbox = Aabb::from_top_left(Vec2::new(50.0, 460.0), 40.0).inset(5.0);
        assert_eq!(hitbox.min, Vec2::new(55.0, 465.0));
        assert_eq!(hitbox.max, Vec2::new(85.0, 495.0));
    }

    #[test]
    fn test_map_spawns() {
        let map = GameMap::default();
        assert_eq!(map.ground_line, 500.0);
        assert_eq!(map.player_spawn, Vec2::new(50.0, 460.0));
        assert_eq!(
            map.enemy_spawns,
            vec![Vec2::new(400.0, 470.0), Vec2::new(650.0, 470.0)]
        );
    }
}

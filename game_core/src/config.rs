use crate::error::{ConfigError, Result};
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub ground_height: f32,
    pub player_size: f32,
    pub player_spawn_x: f32,
    pub move_speed: f32,
    pub jump_speed: f32,
    pub gravity: f32,
    pub player_hitbox_inset: f32,
    pub enemy_size: f32,
    pub enemy_spawn_xs: Vec<f32>,
    pub enemy_direction: f32,
    pub patrol_speed: f32,
    pub enemy_hitbox_inset: f32,
    pub respawn_margin: f32,
    pub stomp_bonus: u32,
    pub stomp_y_threshold: f32,
    pub stomp_bounce_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            ground_height: Params::GROUND_HEIGHT,
            player_size: Params::PLAYER_SIZE,
            player_spawn_x: Params::PLAYER_SPAWN_X,
            move_speed: Params::MOVE_SPEED,
            jump_speed: Params::JUMP_SPEED,
            gravity: Params::GRAVITY,
            player_hitbox_inset: Params::PLAYER_HITBOX_INSET,
            enemy_size: Params::ENEMY_SIZE,
            enemy_spawn_xs: Params::ENEMY_SPAWN_XS.to_vec(),
            enemy_direction: Params::ENEMY_DIRECTION,
            patrol_speed: Params::PATROL_SPEED,
            enemy_hitbox_inset: Params::ENEMY_HITBOX_INSET,
            respawn_margin: Params::RESPAWN_MARGIN,
            stomp_bonus: Params::STOMP_BONUS,
            stomp_y_threshold: Params::STOMP_Y_THRESHOLD,
            stomp_bounce_speed: Params::STOMP_BOUNCE_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Y of the ground surface (origin is top-left, y grows downward)
    pub fn ground_line(&self) -> f32 {
        self.arena_height - self.ground_height
    }

    /// Y at which a grounded player rests
    pub fn player_rest_y(&self) -> f32 {
        self.ground_line() - self.player_size
    }

    /// Y at which enemies patrol
    pub fn enemy_rest_y(&self) -> f32 {
        self.ground_line() - self.enemy_size
    }

    pub fn player_max_x(&self) -> f32 {
        self.arena_width - self.player_size
    }

    pub fn enemy_max_x(&self) -> f32 {
        self.arena_width - self.enemy_size
    }

    /// Inclusive whole-unit band replacement enemies are dropped into
    pub fn respawn_x_range(&self) -> (i32, i32) {
        let lo = self.respawn_margin.ceil() as i32;
        let hi = (self.arena_width - self.respawn_margin).floor() as i32;
        (lo, hi)
    }

    /// Check that the simulation can honour its invariants with these values
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("player_size", self.player_size),
            ("enemy_size", self.enemy_size),
            ("move_speed", self.move_speed),
            ("jump_speed", self.jump_speed),
            ("gravity", self.gravity),
            ("patrol_speed", self.patrol_speed),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.ground_height < 0.0 || self.ground_height >= self.arena_height {
            return Err(ConfigError::GroundOutsideArena {
                ground_height: self.ground_height,
                arena_height: self.arena_height,
            });
        }

        for (what, size) in [("player", self.player_size), ("enemy", self.enemy_size)] {
            if size >= self.arena_width {
                return Err(ConfigError::TooWide {
                    what,
                    size,
                    arena_width: self.arena_width,
                });
            }
        }

        let (lo, hi) = self.respawn_x_range();
        if self.respawn_margin < 0.0 || lo > hi {
            return Err(ConfigError::EmptyRespawnBand {
                margin: self.respawn_margin,
                arena_width: self.arena_width,
            });
        }

        if self.enemy_direction != 1.0 && self.enemy_direction != -1.0 {
            return Err(ConfigError::BadDirection(self.enemy_direction));
        }

        Ok(())
    }
}

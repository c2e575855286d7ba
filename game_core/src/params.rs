/// Game tuning parameters for the platformer
///
/// All speeds and accelerations are per tick, not per second.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 100.0;

    // Player
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_SPAWN_X: f32 = 50.0;
    pub const MOVE_SPEED: f32 = 5.0;
    pub const JUMP_SPEED: f32 = 15.0;
    pub const GRAVITY: f32 = 0.8;
    pub const PLAYER_HITBOX_INSET: f32 = 5.0;

    // Enemy
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_SPAWN_XS: [f32; 2] = [400.0, 650.0];
    pub const ENEMY_DIRECTION: f32 = -1.0;
    pub const PATROL_SPEED: f32 = 2.0;
    pub const ENEMY_HITBOX_INSET: f32 = 3.0;
    pub const RESPAWN_MARGIN: f32 = 200.0; // keep replacements away from the walls

    // Stomp
    pub const STOMP_BONUS: u32 = 100;
    pub const STOMP_Y_THRESHOLD: f32 = 10.0;
    pub const STOMP_BOUNCE_SPEED: f32 = Self::JUMP_SPEED / 2.0;

    // Loop
    pub const TICK_RATE: u32 = 60;
}

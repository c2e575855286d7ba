use glam::Vec2;

/// Position + vertical velocity for anything that falls onto the ground line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    pub pos: Vec2, // top-left corner
    pub vel_y: f32,
    pub on_ground: bool,
    pub size: f32,
}

impl KinematicBody {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel_y: 0.0,
            on_ground: false,
            size,
        }
    }
}

/// Player component - the controllable character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub body: KinematicBody,
}

impl Player {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            body: KinematicBody::new(pos, size),
        }
    }
}

/// Movement intent for the player, rebuilt from input every tick
///
/// Left and right are kept separately: holding both moves the player only
/// in the direction that is not blocked by a wall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl PlayerIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Enemy component - patrols back and forth along the ground
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub pos: Vec2, // top-left corner
    pub direction: f32, // -1 or 1
    pub size: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, direction: f32, size: f32) -> Self {
        Self {
            pos,
            direction,
            size,
        }
    }
}

/// Stable position of an enemy in the live collection
///
/// Entity ids are recycled by the world, so iteration order is taken from
/// this sequence number instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpawnOrder(pub u64);

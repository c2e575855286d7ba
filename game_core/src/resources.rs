use rand::Rng;

use crate::components::SpawnOrder;
use crate::config::Config;

/// Simulation clock, counted in whole ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    pub tick: u64,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Round score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Whole-unit x inside the respawn band, bounds inclusive
    pub fn respawn_x(&mut self, config: &Config) -> f32 {
        let (lo, hi) = config.respawn_x_range();
        self.0.gen_range(lo..=hi) as f32
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Hands out increasing spawn orders so enemies keep a stable ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnSequence {
    next: u64,
}

impl SpawnSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_order(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.next);
        self.next += 1;
        order
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub jumped: bool,
    pub stomps: u32,
    pub enemies_spawned: u32,
    pub fatal_hit: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.jumped = false;
        self.stomps = 0;
        self.enemies_spawned = 0;
        self.fatal_hit = false;
    }
}

/// Keys held during one tick, sampled once by the presentation layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub restart: bool,
    pub quit: bool,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }
}

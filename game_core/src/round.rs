//! Round State Machine
//!
//! Owns the world and drives it one tick at a time between `Playing` and
//! `GameOver`.

use hecs::World;
use log::info;

use crate::error::Result;
use crate::systems::{spawn_round_entities, Verdict};
use crate::{
    step, Config, Events, FrameInput, GameMap, GameRng, RoundSnapshot, Score, SpawnSequence, Time,
};

/// Round states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    FatalCollision,
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: RoundState,
    pub to_state: RoundState,
    pub action: RoundAction,
}

impl RoundState {
    /// Get next state for a given action (if valid)
    pub fn next(self, action: RoundAction) -> Option<RoundState> {
        match (self, action) {
            (RoundState::Playing, RoundAction::FatalCollision) => Some(RoundState::GameOver),
            (RoundState::GameOver, RoundAction::Restart) => Some(RoundState::Playing),

            // Invalid transition
            _ => None,
        }
    }
}

/// What happened on one call to `Round::tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub restarted: bool,
    pub simulated: bool,
    pub game_over: bool,
}

/// One playthrough plus everything needed to restart it
pub struct Round {
    world: World,
    time: Time,
    map: GameMap,
    config: Config,
    score: Score,
    events: Events,
    rng: GameRng,
    seq: SpawnSequence,
    state: RoundState,
}

impl Round {
    /// Build a fresh round. Only the respawn positions depend on `seed`.
    pub fn new(config: Config, seed: u64) -> Result<Self> {
        config.validate()?;

        let map = GameMap::new(&config);
        let mut round = Self {
            world: World::new(),
            time: Time::new(),
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            seq: SpawnSequence::new(),
            state: RoundState::Playing,
        };
        round.reset();
        Ok(round)
    }

    /// Discard every entity and start over from the fixed spawns
    ///
    /// Valid from any state. The random generator is not reseeded, so later
    /// respawn positions continue the same sequence.
    pub fn reset(&mut self) {
        self.world.clear();
        self.seq = SpawnSequence::new();
        spawn_round_entities(&mut self.world, &self.map, &self.config, &mut self.seq);

        self.time = Time::new();
        self.score = Score::new();
        self.events = Events::new();
        self.state = RoundState::Playing;
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: RoundAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.state.next(action) {
            if action == RoundAction::Restart {
                self.reset();
            }
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Advance one tick
    ///
    /// Restart is only honoured after game over; the restarted round is then
    /// simulated in the same tick. While game over nothing moves.
    pub fn tick(&mut self, input: &FrameInput) -> TickReport {
        let mut report = TickReport {
            restarted: false,
            simulated: false,
            game_over: self.is_game_over(),
        };

        if input.restart && self.transition(RoundAction::Restart).success {
            info!("round restarted");
            report.restarted = true;
        }

        if self.state == RoundState::GameOver {
            return report;
        }

        let verdict = step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            &mut self.seq,
        );
        report.simulated = true;

        if verdict == Verdict::Fatal {
            self.transition(RoundAction::FatalCollision);
            info!(
                "game over at tick {} with score {}",
                self.time.tick, self.score.points
            );
        }

        report.game_over = self.is_game_over();
        report
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::capture(
            &self.world,
            self.time.tick,
            self.score.points,
            self.is_game_over(),
        )
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == RoundState::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score.points
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable world access for scenario setup
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

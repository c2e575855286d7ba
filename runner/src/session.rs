//! The outer tick loop: sample input, advance the round, repeat

use game_core::{Round, RoundSnapshot};
use log::{debug, info};
use serde::Serialize;

use crate::autopilot::InputSource;
use crate::clock::TickClock;

/// Totals over every round played in one session
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionSummary {
    pub ticks: u64,
    pub finished_rounds: Vec<u32>, // score of each round that ended in game over
    pub best_score: u32,
    pub quit_requested: bool,
}

/// Drive `round` until the input source quits or `max_ticks` run out
///
/// Quit is checked once per tick, before the round advances.
pub fn run(
    round: &mut Round,
    input: &mut dyn InputSource,
    max_ticks: u64,
    mut clock: Option<&mut TickClock>,
) -> (SessionSummary, RoundSnapshot) {
    let mut summary = SessionSummary::default();
    let mut snapshot = round.snapshot();

    while summary.ticks < max_ticks {
        let frame = input.next_input(&snapshot);
        if frame.quit {
            summary.quit_requested = true;
            break;
        }

        let was_over = round.is_game_over();
        let report = round.tick(&frame);
        summary.ticks += 1;

        if report.game_over && (report.restarted || !was_over) {
            let score = round.score();
            info!(
                "round {} over: score={}",
                summary.finished_rounds.len() + 1,
                score
            );
            summary.finished_rounds.push(score);
            summary.best_score = summary.best_score.max(score);
        }

        let events = round.events();
        if report.simulated && events.stomps > 0 {
            debug!("stomp! score={}", round.score());
        }

        snapshot = round.snapshot();

        if let Some(clock) = clock.as_deref_mut() {
            clock.wait();
        }
    }

    // A round still running when the loop stops counts toward the best score
    summary.best_score = summary.best_score.max(round.score());
    (summary, snapshot)
}

use crate::{Config, Events, Score};

/// Credit a successful stomp
pub fn award_stomp(score: &mut Score, config: &Config, events: &mut Events) {
    score.add(config.stomp_bonus);
    events.stomps += 1;
}

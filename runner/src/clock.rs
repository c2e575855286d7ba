//! Fixed-rate loop pacing

use std::time::{Duration, Instant};

/// Sleeps so that consecutive `wait` calls are one tick period apart
///
/// Only paces the loop. The simulation advances by whole ticks regardless
/// of how late a tick starts.
pub struct TickClock {
    period: Duration,
    next: Instant,
}

impl TickClock {
    pub fn new(rate_hz: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / rate_hz.max(1) as f64);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Block until the next tick is due
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            // Fell behind: don't try to catch up with a burst of ticks
            self.next = now + self.period;
        }
    }
}

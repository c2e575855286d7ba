//! Headless driver for the platformer simulation
//!
//! Stands in for the window/keyboard front end: an autopilot supplies the
//! keys each tick and the outcome is logged.

mod autopilot;
mod clock;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Config, Params, Round};
use log::info;

use autopilot::Autopilot;
use clock::TickClock;

#[derive(Parser)]
#[command(name = "platformer")]
#[command(about = "Run the stomp platformer with a scripted player", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for enemy respawn positions
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Stop after this many ticks
    #[arg(long, default_value_t = 36_000)]
    max_ticks: u64,

    /// Restart this many times after game over before quitting
    #[arg(long, default_value_t = 3)]
    rounds: u32,

    /// Pace the loop at the real tick rate instead of as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Print the session summary and final frame as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut round =
        Round::new(Config::default(), cli.seed).context("invalid game configuration")?;
    let mut pilot = Autopilot::new(cli.rounds);
    let mut clock = cli.realtime.then(|| TickClock::new(Params::TICK_RATE));

    info!(
        "starting: seed={}, max_ticks={}, restarts={}, arena={}x{}",
        cli.seed,
        cli.max_ticks,
        cli.rounds,
        round.config().arena_width,
        round.config().arena_height
    );

    let (summary, last_frame) =
        session::run(&mut round, &mut pilot, cli.max_ticks, clock.as_mut());

    if cli.json {
        let out = serde_json::json!({
            "summary": summary,
            "last_frame": last_frame,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("failed to encode session as JSON")?
        );
    } else {
        println!(
            "ticks={} rounds={} best_score={} scores={:?}",
            summary.ticks,
            summary.finished_rounds.len(),
            summary.best_score,
            summary.finished_rounds
        );
    }

    Ok(())
}

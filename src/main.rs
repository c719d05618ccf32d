//! Pegfall headless runner
//!
//! Drives the game core with the autoplayer, one tick per frame, and reports
//! how the rounds went. Presentation is left to whatever embeds the library.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use pegfall::autoplay::AutoPlayer;
use pegfall::sim::GameEvent;
use pegfall::{AudioManager, GameController, Settings};

#[derive(Debug, Parser)]
#[command(name = "pegfall", about = "Run the peg-breaker core headless")]
struct Args {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Peg layout seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
    /// Frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// Print the final snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

fn run(args: Args) -> Result<()> {
    if args.frames == 0 {
        return Err(anyhow!("frames must be > 0"));
    }

    let settings = Settings::load_or_default(args.config.as_deref())
        .with_context(|| format!("loading settings from {:?}", args.config))?;
    let seed = args
        .seed
        .or(settings.seed)
        .unwrap_or_else(rand::random::<u64>);
    log::info!("Pegfall starting with seed {seed}");

    let audio = AudioManager::new(&settings.audio);
    let mut game = GameController::new(settings.game, seed, audio);
    let mut player = AutoPlayer::new(seed);

    let mut launches = 0u64;
    let mut best_score = 0u32;
    for _ in 0..args.frames {
        player.plan(&game.snapshot());
        for event in game.frame(&player) {
            if matches!(event, GameEvent::Launched { .. }) {
                launches += 1;
            }
        }
        best_score = best_score.max(game.state().score);
    }

    log::info!(
        "{} frames: {} launches, {} rounds won, {} rounds lost, best score {}, {} sounds played",
        args.frames,
        launches,
        game.rounds_won(),
        game.rounds_lost(),
        best_score,
        game.audio().played()
    );

    if args.snapshot {
        let json = serde_json::to_string_pretty(&game.snapshot())
            .context("serializing final snapshot")?;
        println!("{json}");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(Args::parse())
}

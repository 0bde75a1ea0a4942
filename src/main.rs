//! Greed entry point
//!
//! Builds the cast and hands control to the director, either in the
//! terminal or headless for a fixed number of ticks.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use greed::GameConfig;
use greed::platform::{HeadlessVideo, ScriptedKeyboard, TerminalKeyboard, TerminalVideo};
use greed::sim::{Cast, Director, populate_cast};

#[derive(Parser, Debug)]
#[command(name = "greed")]
#[command(about = "Catch the gems, dodge the rocks")]
struct Cli {
    /// JSON config file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of artifacts
    #[arg(long)]
    artifacts: Option<usize>,

    /// Draw the cell grid
    #[arg(long)]
    debug: bool,

    /// Run without a terminal for this many ticks
    #[arg(long, value_name = "TICKS")]
    headless: Option<u64>,

    /// After a headless run, print score and cast as JSON
    #[arg(long, requires = "headless")]
    dump: bool,
}

#[derive(Serialize)]
struct RunSummary<'a> {
    seed: u64,
    ticks: u64,
    score: i64,
    fall_velocity: i32,
    cast: &'a Cast,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(count) = cli.artifacts {
        config.artifact_count = count;
    }
    config.debug |= cli.debug;
    config.validate().context("Invalid configuration")?;

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    log::info!("Greed starting with seed {}", seed);

    let mut cast = populate_cast(&config, seed);
    // Separate stream for respawn columns
    let director_seed = seed.wrapping_add(1);

    match cli.headless {
        Some(ticks) => {
            let mut keyboard = ScriptedKeyboard::idle();
            let mut video = HeadlessVideo::new(&config, ticks);
            let mut director = Director::new(&mut keyboard, &mut video, director_seed);
            director.start_game(&mut cast).context("Headless run failed")?;

            let summary = RunSummary {
                seed,
                ticks: director.ticks(),
                score: director.score(),
                fall_velocity: director.fall_velocity().y(),
                cast: &cast,
            };
            if cli.dump {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("ticks: {} score: {}", summary.ticks, summary.score);
            }
        }
        None => {
            let mut video = TerminalVideo::new(&config);
            let mut keyboard = TerminalKeyboard::new(config.cell_size, video.close_handle());
            let mut director = Director::new(&mut keyboard, &mut video, director_seed);
            director.start_game(&mut cast).context("Game loop failed")?;
            let score = director.score();
            println!("Final score: {}", score);
        }
    }

    Ok(())
}

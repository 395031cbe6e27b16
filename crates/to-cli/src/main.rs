//! Tuple Out dice game
//!
//! Main entry point for the console game.

mod console;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use to_core::{Console, Game, GameConfig, GameRng, GameSummary};

use crate::console::{ReplayConsole, StdConsole};

/// Tuple Out: roll, pair up, and outscore everyone
#[derive(Parser, Debug)]
#[command(name = "tuple-out")]
#[command(author, version, about = "Tuple Out - a console dice game", long_about = None)]
struct Args {
    /// Player name, in turn order (repeat for each player)
    #[arg(short = 'p', long = "player")]
    players: Vec<String>,

    /// Rounds before the final roll phase
    #[arg(short = 't', long = "turns")]
    turns: Option<u32>,

    /// Dice rolled per turn
    #[arg(long = "dice")]
    dice: Option<usize>,

    /// Faces per die
    #[arg(long = "sides")]
    sides: Option<u32>,

    /// JSON config file; other flags override its values
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Seed for reproducible dice
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Answer prompts from a file instead of stdin
    #[arg(long = "replay")]
    replay: Option<PathBuf>,

    /// Print the final summary as JSON
    #[arg(long = "json")]
    json: bool,

    /// Verbose diagnostics on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// Merge the config file (or defaults) with command-line overrides
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GameConfig::default(),
        };

        if !self.players.is_empty() {
            config.players = self.players.clone();
        }
        if let Some(turns) = self.turns {
            config.max_turns = turns;
        }
        if let Some(dice) = self.dice {
            config.dice_count = dice;
        }
        if let Some(sides) = self.sides {
            config.sides = sides;
        }
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Play one game to completion on `console`
fn play(config: GameConfig, rng: GameRng, console: &mut dyn Console) -> Result<GameSummary> {
    tracing::debug!(seed = rng.seed(), ?config, "starting game");
    let mut game = Game::new(config, rng)?;
    Ok(game.run(console)?)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.game_config()?;
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let mut console: Box<dyn Console> = match &args.replay {
        Some(path) => Box::new(
            ReplayConsole::open(path)
                .with_context(|| format!("opening replay file {}", path.display()))?,
        ),
        None => Box::new(StdConsole),
    };

    let summary = play(config, rng, console.as_mut())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

//! Game configuration
//!
//! All rule parameters live in one immutable [`GameConfig`] handed to the
//! game at construction.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_PLAYERS, DICE_COUNT, DICE_SIDES, MAX_TURNS};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least one player is required")]
    NoPlayers,

    #[error("max turns must be at least 1")]
    ZeroTurns,

    #[error("dice count must be at least 1")]
    ZeroDice,

    #[error("dice must have at least 1 side")]
    ZeroSides,

    #[error("{dice_count} dice with {sides} sides over {max_turns} turns can overflow a u32 score")]
    ScoreOverflow {
        dice_count: usize,
        sides: u32,
        max_turns: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rule parameters for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Dice rolled per turn
    pub dice_count: usize,
    /// Faces per die
    pub sides: u32,
    /// Rounds before the final roll phase
    pub max_turns: u32,
    /// Players in turn order; this order also breaks ties
    pub players: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dice_count: DICE_COUNT,
            sides: DICE_SIDES,
            max_turns: MAX_TURNS,
            players: DEFAULT_PLAYERS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl GameConfig {
    pub fn new(players: Vec<String>, max_turns: u32) -> Self {
        Self {
            players,
            max_turns,
            ..Self::default()
        }
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Reject configurations the game cannot be played with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.max_turns == 0 {
            return Err(ConfigError::ZeroTurns);
        }
        if self.dice_count == 0 {
            return Err(ConfigError::ZeroDice);
        }
        if self.sides == 0 {
            return Err(ConfigError::ZeroSides);
        }
        if self.max_possible_score().is_none_or(|max| max > u64::from(u32::MAX)) {
            return Err(ConfigError::ScoreOverflow {
                dice_count: self.dice_count,
                sides: self.sides,
                max_turns: self.max_turns,
            });
        }
        Ok(())
    }

    /// Upper bound on one player's total score, `None` if it overflows u64.
    ///
    /// Each turn banks at most `dice_count / 2` pairs, and the final roll sums
    /// at most `max(max_turns * dice_count / 2, dice_count)` faces, so
    /// `sides * dice_count * (max_turns + 1)` covers both.
    pub fn max_possible_score(&self) -> Option<u64> {
        u64::from(self.sides)
            .checked_mul(u64::try_from(self.dice_count).ok()?)?
            .checked_mul(u64::from(self.max_turns) + 1)
    }

    /// Names that appear more than once. Allowed, but usually a typo.
    pub fn duplicate_players(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dups = Vec::new();
        for name in &self.players {
            if !seen.insert(name.as_str()) && !dups.contains(&name.as_str()) {
                dups.push(name.as_str());
            }
        }
        dups
    }
}

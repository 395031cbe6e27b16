//! Game errors

use thiserror::Error;

use crate::config::ConfigError;
use crate::gameloop::Phase;

/// Errors that stop a game
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Console IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before a valid choice was entered")]
    InputClosed,

    #[error("Unrecognized choice: {0}")]
    Choice(#[from] strum::ParseError),

    #[error("No winner: the game has no players")]
    NoWinner,

    #[error("Operation needs the {expected} phase, game is in the {actual} phase")]
    WrongPhase { expected: Phase, actual: Phase },
}

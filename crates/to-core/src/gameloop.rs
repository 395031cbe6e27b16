//! Main game loop
//!
//! A game moves through three phases: a fixed number of rounds in which every
//! player takes one turn, a single final roll per player, and completion.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::console::Console;
use crate::error::GameError;
use crate::final_roll::resolve_final;
use crate::rng::DiceRoller;
use crate::turn::play_turn;

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    #[strum(serialize = "round")]
    RoundInProgress,
    #[strum(serialize = "final roll")]
    FinalPhase,
    #[strum(serialize = "complete")]
    Complete,
}

/// Per-player running state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    /// Turn scores plus the final roll score once it is resolved
    pub score: u32,
    /// Fixed dice collected over all turns (and the final top-up)
    pub fixed_dice: Vec<u32>,
    /// Score of the final roll, once resolved
    pub final_score: Option<u32>,
}

impl PlayerState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            fixed_dice: Vec::new(),
            final_score: None,
        }
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub rounds: u32,
    pub players: Vec<PlayerState>,
    pub winner: String,
    pub winning_score: u32,
}

/// Index of the highest score. Ties go to the earliest index.
pub fn select_winner(scores: &[u32]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            Some(b) if scores[b] >= score => {}
            _ => best = Some(i),
        }
    }
    best
}

/// One game of Tuple Out
#[derive(Debug)]
pub struct Game<R> {
    config: GameConfig,
    roller: R,
    players: Vec<PlayerState>,
    round: u32,
    phase: Phase,
}

impl<R: DiceRoller> Game<R> {
    /// Start a game. Fails if the configuration is unplayable.
    pub fn new(config: GameConfig, roller: R) -> Result<Self, GameError> {
        config.validate()?;
        for name in config.duplicate_players() {
            tracing::warn!(player = name, "player name appears more than once");
        }

        let players = config.players.iter().map(PlayerState::new).collect();
        Ok(Self {
            config,
            roller,
            players,
            round: 0,
            phase: Phase::RoundInProgress,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rounds completed so far
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Players in turn order
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        tracing::debug!(from = %self.phase, to = %phase, round = self.round, "phase change");
        self.phase = phase;
    }

    /// Give every player one turn, in order.
    pub fn play_round<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), GameError> {
        self.expect_phase(Phase::RoundInProgress)?;

        for player in &mut self.players {
            console.print("")?;
            console.print(&format!("{0} {1}'s Turn {0}", "=".repeat(10), player.name))?;

            let outcome = play_turn(&player.name, &self.config, &mut self.roller, console)?;
            let turn_score = outcome.score();
            player.fixed_dice.extend_from_slice(&outcome.fixed_dice);
            player.score += turn_score;

            console.print(&format!("{}: Turn score: {}", player.name, turn_score))?;
            console.print(&format!("{}: Total score: {}", player.name, player.score))?;
        }

        self.round += 1;
        console.print("")?;
        console.print(&format!("After {} turns: {}", self.round, self.standings()))?;

        if self.round >= self.config.max_turns {
            self.set_phase(Phase::FinalPhase);
        }
        Ok(())
    }

    /// Resolve every player's final roll, add it to their score and announce
    /// the winner.
    pub fn final_phase<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), GameError> {
        self.expect_phase(Phase::FinalPhase)?;

        console.print("")?;
        console.print("Final roll phase:")?;
        for player in &mut self.players {
            let result = resolve_final(
                &player.name,
                &mut player.fixed_dice,
                &self.config,
                &mut self.roller,
                console,
            )?;
            player.final_score = Some(result.score);
            player.score += result.score;
        }

        self.set_phase(Phase::Complete);

        if let Some(winner) = self.winner()? {
            console.print("")?;
            console.print(&format!(
                "The winner is {} with {} points!",
                winner.name, winner.score
            ))?;
        }
        Ok(())
    }

    /// Highest total score; the earliest player wins a tie.
    pub fn winner(&self) -> Result<Option<&PlayerState>, GameError> {
        self.expect_phase(Phase::Complete)?;
        let scores: Vec<u32> = self.players.iter().map(|p| p.score).collect();
        Ok(select_winner(&scores).map(|i| &self.players[i]))
    }

    /// Final standings of a completed game.
    ///
    /// `NoWinner` cannot happen for a game built by [`Game::new`], which
    /// rejects an empty player list.
    pub fn summary(&self) -> Result<GameSummary, GameError> {
        let winner = self.winner()?.ok_or(GameError::NoWinner)?;
        Ok(GameSummary {
            rounds: self.round,
            players: self.players.clone(),
            winner: winner.name.clone(),
            winning_score: winner.score,
        })
    }

    /// Play the whole game from the current phase to completion.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<GameSummary, GameError> {
        while self.phase == Phase::RoundInProgress {
            self.play_round(console)?;
        }
        if self.phase == Phase::FinalPhase {
            self.final_phase(console)?;
        }
        self.summary()
    }

    fn standings(&self) -> String {
        self.players
            .iter()
            .map(|p| format!("{}: {}", p.name, p.score))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

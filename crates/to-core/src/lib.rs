//! to-core: Core game logic for the Tuple Out dice game
//!
//! This crate contains all game logic with no terminal dependencies.
//! Console I/O goes through the [`Console`] trait and dice through
//! [`DiceRoller`], so a whole game can be driven from tests.

pub mod config;
pub mod console;
pub mod dice;
pub mod final_roll;
pub mod turn;

mod consts;
mod error;
mod gameloop;
mod rng;

pub use config::{ConfigError, GameConfig};
pub use console::{Console, RerollChoice, ScriptedConsole};
pub use consts::*;
pub use error::GameError;
pub use gameloop::{Game, GameSummary, Phase, PlayerState, select_winner};
pub use rng::{DiceRoller, GameRng};

/// Deterministic dice for tests, shared by unit and integration tests.
#[doc(hidden)]
pub mod testing {
    use std::collections::VecDeque;

    use crate::rng::DiceRoller;

    /// Dice that come up in a preset order
    ///
    /// # Panics
    ///
    /// Rolling past the last preset face, or a face outside `1..=sides`,
    /// panics so a miscounted test fails loudly.
    #[derive(Debug, Default)]
    pub struct LoadedDice {
        faces: VecDeque<u32>,
    }

    impl LoadedDice {
        pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
            Self {
                faces: faces.into_iter().collect(),
            }
        }

        /// Faces not yet rolled
        pub fn remaining(&self) -> usize {
            self.faces.len()
        }
    }

    impl DiceRoller for LoadedDice {
        fn roll_die(&mut self, sides: u32) -> u32 {
            let Some(face) = self.faces.pop_front() else {
                panic!("loaded dice exhausted");
            };
            assert!((1..=sides).contains(&face), "face {face} out of range");
            face
        }
    }
}

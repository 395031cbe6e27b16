//! Console abstraction and validated prompts
//!
//! The game never touches stdin/stdout directly. Front ends implement
//! [`Console`]; tests use [`ScriptedConsole`].

use std::collections::VecDeque;
use std::io;

use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::consts::INVALID_CHOICE;
use crate::error::GameError;

/// Line-oriented player console
pub trait Console {
    /// Show one line of game output
    fn print(&mut self, line: &str) -> io::Result<()>;

    /// Show `prompt` and read one line. `None` means input is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Answer to the reroll question
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, IntoStaticStr)]
pub enum RerollChoice {
    #[strum(serialize = "y")]
    Reroll,
    #[strum(serialize = "n")]
    Keep,
}

impl RerollChoice {
    /// Accepted tokens, in prompt order
    pub fn tokens() -> Vec<&'static str> {
        Self::iter().map(<&'static str>::from).collect()
    }
}

/// Trim and lowercase a raw answer
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Ask until the normalized answer is one of `valid`.
///
/// Invalid answers are reported and asked again; only closed input or a
/// console error ends the loop early.
pub fn prompt<C: Console + ?Sized>(
    console: &mut C,
    message: &str,
    valid: &[&str],
) -> Result<String, GameError> {
    loop {
        let Some(raw) = console.read_line(message)? else {
            return Err(GameError::InputClosed);
        };
        let answer = normalize(&raw);
        if valid.contains(&answer.as_str()) {
            return Ok(answer);
        }
        tracing::debug!(answer = %answer, "rejected choice");
        console.print(INVALID_CHOICE)?;
    }
}

/// Ask `player` whether to reroll their non-fixed dice.
pub fn ask_reroll<C: Console + ?Sized>(
    console: &mut C,
    player: &str,
) -> Result<RerollChoice, GameError> {
    let tokens = RerollChoice::tokens();
    let message = format!(
        "{}, do you want to reroll non-fixed dice? ({}): ",
        player,
        tokens.join("/")
    );
    let answer = prompt(console, &message, &tokens)?;
    Ok(answer.parse()?)
}

/// In-memory console fed from a fixed list of answers.
///
/// Everything shown is kept in `transcript`, prompts included.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// True if any shown line contains `needle`
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, line: &str) -> io::Result<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.transcript.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

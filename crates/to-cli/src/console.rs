//! Terminal consoles

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use to_core::Console;

/// Interactive stdin/stdout console
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn print(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{}", line)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            writeln!(stdout)?;
            return Ok(None);
        }
        Ok(Some(input))
    }
}

/// Console that answers prompts from a recorded file
///
/// Blank lines and `#` comments are skipped. Each replayed answer is echoed
/// after its prompt so the output reads like an interactive session.
#[derive(Debug)]
pub struct ReplayConsole<W = io::Stdout> {
    answers: VecDeque<String>,
    out: W,
}

impl ReplayConsole {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), io::stdout())
    }
}

impl<W: Write> ReplayConsole<W> {
    pub fn from_reader(reader: impl BufRead, out: W) -> io::Result<Self> {
        let mut answers = VecDeque::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            answers.push_back(trimmed.to_string());
        }
        Ok(Self { answers, out })
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Where game output went
    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Console for ReplayConsole<W> {
    fn print(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let answer = self.answers.pop_front();
        match &answer {
            Some(a) => writeln!(self.out, "{}{}", prompt, a)?,
            None => tracing::warn!("replay answers exhausted"),
        }
        Ok(answer)
    }
}

use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::error::Result;

/// Line-oriented interaction with the user: progress output and blocking prompts.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<std::io::StdinLock<'static>, std::io::Stdout> {
    /// A console on the process' stdin and stdout.
    pub fn stdio() -> Self {
        Console::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    #[allow(missing_docs)]
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Writes `prompt` without a newline and reads one trimmed line.
    ///
    /// End of input reads as an empty line.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Gives back the output, so tests can inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Where configuration values such as `DISCOGS_KEY` are looked up.
pub trait Environment {
    /// The value of `name`, with an empty value treated as unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).filter(|value| !value.is_empty()).cloned()
    }
}

//! Presenter fed from a fixed list of answers.
//!
//! Everything narrated is recorded in a transcript so tests can assert on it. With
//! echo enabled the transcript is also printed, which is how `wump2 --script FILE`
//! replays a recorded session.

use std::collections::{HashSet, VecDeque};

use log::trace;

use super::{parse_int, preview_input, Presenter};
use crate::game::errors::{InputError, PresenterError};

#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
    assets: Vec<String>,
    missing: HashSet<String>,
    echo: bool,
}

impl ScriptedPresenter {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPresenter {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// One answer per line; `#` comment lines and blank lines are skipped.
    pub fn from_script(script: &str) -> Self {
        Self::new(
            script
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }

    /// Treat these asset names as absent.
    pub fn with_missing_assets<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing.extend(names.into_iter().map(Into::into));
        self
    }

    /// Print narration and answers to stdout as they happen.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Asset names rendered so far, in order.
    pub fn assets_shown(&self) -> &[String] {
        &self.assets
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// True if any narrated line contains `needle`.
    pub fn said(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }

    /// Number of narrated lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.transcript.iter().filter(|l| l.contains(needle)).count()
    }

    fn next_line(&mut self) -> Option<String> {
        let line = self.inputs.pop_front()?;
        trace!("scripted input: {}", preview_input(&line));
        if self.echo {
            println!("> {}", line);
        }
        Some(line)
    }
}

impl Presenter for ScriptedPresenter {
    fn narrate(&mut self, text: &str) {
        if self.echo {
            println!("{}", text);
        }
        self.transcript.push(text.to_string());
    }

    fn render_asset(&mut self, name: &str, _pause_secs: u64) -> Result<(), PresenterError> {
        if self.missing.contains(name) {
            return Err(PresenterError::AssetUnavailable {
                name: name.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "scripted as missing"),
            });
        }
        if self.echo {
            println!("[{}]", name);
        }
        self.assets.push(name.to_string());
        Ok(())
    }

    fn read_int(&mut self) -> Result<i64, InputError> {
        match self.next_line() {
            Some(line) => parse_int(&line),
            None => Err(InputError::Closed),
        }
    }

    fn read_ack(&mut self) {
        let _ = self.next_line();
    }
}

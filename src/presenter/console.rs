//! Console presenter: narration to a terminal, answers from a line reader, and
//! ASCII-art assets loaded from plain text files.
//!
//! Assets live in `<assets_dir>/<name>` (no extension, e.g. `assets/spider.rotate`).
//! The screen is cleared with an ANSI escape before each asset when enabled, and the
//! configured pause scale stretches or disables the narrative pauses.

use std::fs;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use log::{debug, trace};

use super::{parse_int, preview_input, Presenter};
use crate::config::PresentationConfig;
use crate::game::errors::{InputError, PresenterError};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

pub struct ConsolePresenter<R = BufReader<Stdin>, W = Stdout> {
    input: R,
    output: W,
    assets_dir: PathBuf,
    clear_screen: bool,
    pause_scale: f32,
}

impl ConsolePresenter {
    /// Presenter on the process's stdin/stdout.
    pub fn stdio(config: &PresentationConfig) -> Self {
        ConsolePresenter::new(BufReader::new(io::stdin()), io::stdout(), config)
    }
}

impl<R: BufRead, W: Write> ConsolePresenter<R, W> {
    pub fn new(input: R, output: W, config: &PresentationConfig) -> Self {
        ConsolePresenter {
            input,
            output,
            assets_dir: PathBuf::from(&config.assets_dir),
            clear_screen: config.clear_screen,
            pause_scale: config.pause_scale.max(0.0),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Consume the presenter and hand back the output (tests inspect it).
    pub fn into_output(self) -> W {
        self.output
    }

    fn pause(&self, secs: u64) {
        let scaled = secs as f32 * self.pause_scale;
        if scaled > 0.0 {
            thread::sleep(Duration::from_secs_f32(scaled));
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                trace!("console input: {}", preview_input(&line));
                Some(line)
            }
            Err(e) => {
                debug!("console read failed: {}", e);
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Presenter for ConsolePresenter<R, W> {
    fn narrate(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }

    fn render_asset(&mut self, name: &str, pause_secs: u64) -> Result<(), PresenterError> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        let path = self.assets_dir.join(name);
        let art = fs::read_to_string(&path).map_err(|source| PresenterError::AssetUnavailable {
            name: name.to_string(),
            source,
        })?;
        for line in art.lines() {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()?;
        self.pause(pause_secs);
        Ok(())
    }

    fn read_int(&mut self) -> Result<i64, InputError> {
        match self.read_line() {
            Some(line) => parse_int(&line),
            None => Err(InputError::Closed),
        }
    }

    fn read_ack(&mut self) {
        let _ = self.read_line();
    }
}

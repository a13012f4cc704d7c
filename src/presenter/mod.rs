//! # Presentation layer
//!
//! The game core never prints or reads directly. It narrates through a [`Presenter`],
//! which owns the console (or a script) and the ASCII-art assets.
//!
//! - [`console`] - stdout/stdin with asset files on disk
//! - [`scripted`] - queued input lines and a recorded transcript, used by tests and `--script`
//!
//! Input is line based: one answer per line, the first whitespace separated token is
//! the answer. Anything that is not a whole number is an [`InputError::Invalid`],
//! which every prompt treats as a rejected choice.

use log::warn;

use crate::game::errors::{InputError, PresenterError};

pub mod console;
pub mod scripted;

pub use console::ConsolePresenter;
pub use scripted::ScriptedPresenter;

/// Narrative side effects and raw input for the game core.
pub trait Presenter {
    /// Display one line of text.
    fn narrate(&mut self, text: &str);

    /// Display a named asset, then pause for `pause_secs` seconds (0 = no pause).
    fn render_asset(&mut self, name: &str, pause_secs: u64) -> Result<(), PresenterError>;

    /// Read one line and parse it as an integer.
    fn read_int(&mut self) -> Result<i64, InputError>;

    /// Read and discard one line ("press to continue").
    fn read_ack(&mut self);

    /// Render an asset, reporting a missing one instead of failing.
    fn show(&mut self, name: &str, pause_secs: u64) {
        if let Err(e) = self.render_asset(name, pause_secs) {
            warn!("asset '{}' unavailable: {}", name, e);
            self.narrate(&format!("Error: Could not open asset {}", name));
        }
    }
}

/// Parse a player's line the way every prompt expects it.
pub fn parse_int(line: &str) -> Result<i64, InputError> {
    let token = line.split_whitespace().next().unwrap_or("");
    token
        .parse::<i64>()
        .map_err(|_| InputError::Invalid(preview_input(line)))
}

/// Escape and shorten raw input so it stays on one log line.
pub(crate) fn preview_input(s: &str) -> String {
    const MAX_PREVIEW: usize = 40;
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 4);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

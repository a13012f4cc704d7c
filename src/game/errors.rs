use thiserror::Error;

/// Problems reading a player's answer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The line was not a whole number. Callers treat this as a rejected choice.
    #[error("not a number: {0:?}")]
    Invalid(String),

    /// Input ended (stdin closed or script exhausted).
    #[error("input closed")]
    Closed,
}

/// Problems rendering narration.
#[derive(Debug, Error)]
pub enum PresenterError {
    /// A named ASCII-art asset could not be read. Never fatal.
    #[error("could not open asset {name}: {source}")]
    AssetUnavailable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected level jump from the game menu.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectLevelError {
    #[error("no such level: {requested} (levels 0..{available})")]
    OutOfRange { requested: i64, available: usize },
}

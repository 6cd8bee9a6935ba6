//! Error types surfaced by the duel engine.
//!
//! Malformed selections never show up here: the choice protocol recovers from
//! them locally by re-prompting. What remains are the two fatal families the
//! process exit contract distinguishes:
//!
//! - **Configuration**: the roster or a character record cannot support a duel.
//! - **Input closed**: the console reached end-of-input while a prompt was open.

use crate::magic::Dimension;

/// Process exit status for a configuration failure.
pub const EXIT_CONFIG: u8 = 2;

/// Process exit status when the input stream closes mid-prompt.
pub const EXIT_INPUT_CLOSED: u8 = 3;

/// Process exit status for any other I/O failure.
pub const EXIT_IO: u8 = 1;

/// Validation failures for a single magic profile.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("missing entry for dimension '{0}'")]
    MissingDimension(Dimension),

    #[error("unknown dimension '{0}'")]
    UnknownDimension(String),

    #[error("dimension '{0}' is listed more than once")]
    DuplicateDimension(Dimension),

    #[error("dimension '{dimension}' declares negative amount {amount}")]
    NegativeAmount { dimension: Dimension, amount: i64 },

    #[error("dimension '{dimension}' amount {amount} exceeds the supported maximum")]
    AmountOverflow { dimension: Dimension, amount: i64 },
}

/// Roster or character data that cannot support a duel.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("a duel needs at least 2 characters, found {found}")]
    RosterTooSmall { found: usize },

    #[error("character '{0}' is not in the roster")]
    UnknownCharacter(String),

    #[error("character '{id}' is invalid: {reason}")]
    InvalidCharacter { id: String, reason: ProfileError },

    #[error("neither '{player}' nor '{opponent}' can cast any spell")]
    NoCastableDimensions { player: String, opponent: String },
}

/// Errors that abort a running match.
#[derive(Debug, thiserror::Error)]
pub enum DuelError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("input stream closed")]
    InputClosed,

    #[error("prompt '{prompt}' has no options to choose from")]
    NoOptions { prompt: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DuelError {
    /// Exit status the process should report for this failure.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => EXIT_CONFIG,
            Self::InputClosed => EXIT_INPUT_CLOSED,
            Self::NoOptions { .. } | Self::Io(_) => EXIT_IO,
        }
    }
}

pub type Result<T> = std::result::Result<T, DuelError>;

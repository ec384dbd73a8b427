//! Error types for the shells around the generator.
//!
//! The generator itself is total; everything here belongs to input handling,
//! persistence and the clipboard.

use thiserror::Error;

use crate::validate::LENGTH_PROMPT;

/// Rejected length input. Both variants render as the same user prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("{}", LENGTH_PROMPT)]
    NotANumber(String),

    #[error("{}", LENGTH_PROMPT)]
    OutOfRange(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Too many passwords: {0} (at most {1})")]
    CountTooLarge(usize, usize),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),

    #[error(transparent)]
    Length(#[from] LengthError),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Write(String),
}

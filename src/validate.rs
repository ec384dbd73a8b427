//! Length input policy shared by the TUI and CLI.
//!
//! Out-of-range and non-numeric input never reaches the generator; callers
//! show [`LENGTH_PROMPT`] instead.

use crate::error::LengthError;

pub const MIN_LENGTH: i32 = 1;
pub const MAX_LENGTH: i32 = 16;

pub const LENGTH_PROMPT: &str = "Enter length (1-16)";

/// Parse a user-supplied length, accepting only `MIN_LENGTH..=MAX_LENGTH`.
pub fn parse_length(input: &str) -> Result<i32, LengthError> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| LengthError::NotANumber(trimmed.to_string()))?;

    match i32::try_from(value) {
        Ok(length) if in_range(length) => Ok(length),
        _ => Err(LengthError::OutOfRange(value)),
    }
}

/// Whether an already-numeric length (e.g. from the settings file) is usable.
pub fn in_range(length: i32) -> bool {
    (MIN_LENGTH..=MAX_LENGTH).contains(&length)
}

/// Whether the length field may take `candidate` as its new text.
/// Empty is allowed so the user can clear and retype.
pub fn accepts_edit(candidate: &str) -> bool {
    candidate.is_empty()
        || (!candidate.contains(char::is_whitespace) && parse_length(candidate).is_ok())
}

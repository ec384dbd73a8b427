//! Generation parameters for a single password request.

use crate::settings::Settings;

/// Length and character-class toggles for one call to [`super::generate`].
///
/// `length` is signed: values at or below zero produce an empty password
/// rather than an error. Range limits are the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: i32,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl GenerationConfig {
    /// Config with every class enabled.
    pub fn all(length: i32) -> Self {
        Self {
            length,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }

    /// True when no class flag is set (the generator falls back to all classes).
    pub fn selects_nothing(&self) -> bool {
        !(self.include_uppercase
            || self.include_lowercase
            || self.include_numbers
            || self.include_symbols)
    }

    /// Number of characters the generator will produce.
    pub fn output_len(&self) -> usize {
        usize::try_from(self.length).unwrap_or(0)
    }
}

impl From<&Settings> for GenerationConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            length: settings.length,
            include_uppercase: settings.include_uppercase,
            include_lowercase: true,
            include_numbers: settings.include_numbers,
            include_symbols: settings.include_symbols,
        }
    }
}

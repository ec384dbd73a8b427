//! Persisted generation defaults.
//!
//! Only the length and class toggles are stored; generated passwords never
//! touch disk.

mod file;

use std::path::PathBuf;

use crate::error::SettingsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub length: i32,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        file::load_from(&file::get_path())
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        file::save_to(&file::get_path(), self)
    }

    /// Location of the settings file.
    pub fn path() -> PathBuf {
        file::get_path()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 8,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

//! Settings file persistence.
//!
//! One line: `length,uppercase,numbers,symbols`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::SettingsError;

const FIELDS: usize = 4;

pub fn save_to(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    write(path, settings).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn write(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{}\n",
        settings.length,
        settings.include_uppercase,
        settings.include_numbers,
        settings.include_symbols,
    );

    file.write_all(data.as_bytes())
}

/// Load settings from `path`. A missing file yields defaults; malformed
/// fields fall back to their default one by one.
pub fn load_from(path: &Path) -> Result<Settings, SettingsError> {
    let mut settings = Settings::default();

    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(settings),
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let line = contents.lines().next().unwrap_or("").trim();
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();

    if parts.len() == FIELDS {
        settings.length = parts[0].parse().unwrap_or(settings.length);
        settings.include_uppercase = parts[1].parse().unwrap_or(settings.include_uppercase);
        settings.include_numbers = parts[2].parse().unwrap_or(settings.include_numbers);
        settings.include_symbols = parts[3].parse().unwrap_or(settings.include_symbols);
    } else if !line.is_empty() {
        tracing::warn!(path = %path.display(), "ignoring malformed settings line");
    }

    Ok(settings)
}

/// `$PASSGEN_CONFIG`, else `$HOME/.config/passgen/settings`.
pub fn get_path() -> PathBuf {
    if let Ok(path) = env::var("PASSGEN_CONFIG")
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/passgen/settings", home))
}

//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{self, ErrorKind};
use std::process::ExitCode;

use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::ParseError;
use crate::pass::{self, GenerationConfig};
use crate::settings::Settings;
use crate::tui::print_help;
use crate::validate::{self, LENGTH_PROMPT};

/// Early exit with the code to return from `main`.
#[derive(Debug)]
pub struct Done(pub ExitCode);

/// Application context for CLI mode.
pub struct Context {
    pub flags: CliFlags,
    pub config: GenerationConfig,
    clipboard: Option<SystemClipboard>,
}

impl Context {
    /// Parse arguments and resolve the generation config on top of the
    /// defaults (or saved settings with `-s`).
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        let settings = if flags.saved {
            load_saved()
        } else {
            Settings::default()
        };

        let config = resolve(&flags, &settings);
        Ok(Self {
            flags,
            config,
            clipboard: None,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.handle_save();
        self.handle_clipboard()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done(ExitCode::SUCCESS));
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Err(Done(ExitCode::SUCCESS));
        }
        Ok(())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        let settings = Settings {
            length: self.config.length,
            include_uppercase: self.config.include_uppercase,
            include_numbers: self.config.include_numbers,
            include_symbols: self.config.include_symbols,
        };
        match settings.save_to_file() {
            Ok(()) => prompts::settings_saved(&Settings::path().display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    fn handle_clipboard(&mut self) -> Result<(), Done> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match SystemClipboard::new() {
            Ok(c) => {
                self.clipboard = Some(c);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                if prompts::clipboard_fallback_prompt() {
                    Ok(())
                } else {
                    Err(Done(ExitCode::SUCCESS))
                }
            }
        }
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), Done> {
        let count = self.flags.number.unwrap_or(1);

        if let Some(clipboard) = self.clipboard.as_mut() {
            let mut passwords = pass::generate_joined(&self.config, count);
            let copied = clipboard.copy(&passwords);
            passwords.zeroize();
            return match copied {
                Ok(()) => {
                    prompts::clipboard_copied();
                    Ok(())
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    Err(Done(ExitCode::FAILURE))
                }
            };
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match pass::generate_batch(&self.config, count, &mut out) {
            Ok(()) => Ok(()),
            // Piped into `head` and the like.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
            Err(e) => {
                prompts::error(&format!("Failed to write passwords: {}", e));
                Err(Done(ExitCode::FAILURE))
            }
        }
    }
}

/// Saved settings, with a length outside 1-16 replaced by the default
/// the same way the interactive screen does.
fn load_saved() -> Settings {
    let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {}", e));
        Settings::default()
    });
    if !validate::in_range(settings.length) {
        tracing::warn!(length = settings.length, "saved length out of range");
        prompts::warn(&format!(
            "Saved length {} ignored: {}",
            settings.length, LENGTH_PROMPT
        ));
        settings.length = Settings::default().length;
    }
    settings
}

/// Layer flags over settings. Lowercase is on unless `--no-lower`.
pub fn resolve(flags: &CliFlags, settings: &Settings) -> GenerationConfig {
    let mut config = GenerationConfig::from(settings);
    if let Some(length) = flags.length {
        config.length = length;
    }
    config.include_uppercase &= !flags.no_upper;
    config.include_lowercase &= !flags.no_lower;
    config.include_numbers &= !flags.no_numbers;
    config.include_symbols &= !flags.no_symbols;
    config
}

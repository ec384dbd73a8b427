//! Interactive shell state.
//!
//! Plain fields updated by explicit handlers. Rendering and key handling live
//! in `tui`; this module never touches the terminal.

mod field;

use zeroize::Zeroize;

pub use field::Field;

use crate::clipboard::{COPIED, Clipboard};
use crate::pass;
use crate::settings::Settings;
use crate::validate::{self, LENGTH_PROMPT};

/// Shown before the first generation.
pub const INITIAL_DISPLAY: &str = "Set Length : 1-16";

pub const NOTHING_TO_COPY: &str = "Nothing to copy";

/// User intents, decoupled from key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FocusNext,
    FocusPrev,
    Activate,
    Input(char),
    Backspace,
    ClearInput,
    Generate,
    Copy,
    Save,
    Quit,
}

pub enum LoopAction {
    Break,
    Continue,
}

pub struct App {
    pub length_input: String,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub focus: Field,
    pub display: String,
    pub password: Option<String>,
    pub status: Option<String>,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        let length_input = if validate::in_range(settings.length) {
            settings.length.to_string()
        } else {
            Settings::default().length.to_string()
        };

        Self {
            length_input,
            include_uppercase: settings.include_uppercase,
            include_numbers: settings.include_numbers,
            include_symbols: settings.include_symbols,
            focus: Field::Length,
            display: INITIAL_DISPLAY.to_string(),
            password: None,
            status: None,
        }
    }

    /// Dispatch one action. `Save` persists through `save`, so tests can
    /// observe it without touching the real settings file.
    pub fn apply<C, S>(&mut self, action: Action, clipboard: &mut C, save: S) -> LoopAction
    where
        C: Clipboard,
        S: FnOnce(&Settings) -> Result<(), String>,
    {
        self.status = None;
        match action {
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Activate => self.activate(clipboard),
            Action::Input(c) => self.input_char(c),
            Action::Backspace => self.backspace(),
            Action::ClearInput => self.clear_input(),
            Action::Generate => self.generate(),
            Action::Copy => self.copy(clipboard),
            Action::Save => {
                self.status = Some(match save(&self.settings()) {
                    Ok(()) => "Settings saved".to_string(),
                    Err(e) => format!("Error saving settings: {e}"),
                });
            }
            Action::Quit => return LoopAction::Break,
        }
        LoopAction::Continue
    }

    pub fn activate<C: Clipboard>(&mut self, clipboard: &mut C) {
        match self.focus {
            Field::Length => self.generate(),
            Field::Uppercase | Field::Symbols | Field::Numbers => self.toggle(self.focus),
            Field::Generate => self.generate(),
            Field::Copy => self.copy(clipboard),
        }
    }

    pub fn toggle(&mut self, field: Field) {
        match field {
            Field::Uppercase => self.include_uppercase = !self.include_uppercase,
            Field::Symbols => self.include_symbols = !self.include_symbols,
            Field::Numbers => self.include_numbers = !self.include_numbers,
            _ => {}
        }
    }

    pub fn is_on(&self, field: Field) -> bool {
        match field {
            Field::Uppercase => self.include_uppercase,
            Field::Symbols => self.include_symbols,
            Field::Numbers => self.include_numbers,
            _ => false,
        }
    }

    /// Append a keystroke to the length field if the result is still a
    /// valid (or empty) length. Anything else is dropped.
    pub fn input_char(&mut self, c: char) {
        let mut candidate = self.length_input.clone();
        candidate.push(c);
        if validate::accepts_edit(&candidate) {
            self.length_input = candidate;
        }
    }

    pub fn backspace(&mut self) {
        let mut candidate = self.length_input.clone();
        candidate.pop();
        if validate::accepts_edit(&candidate) {
            self.length_input = candidate;
        }
    }

    pub fn clear_input(&mut self) {
        self.length_input.clear();
    }

    /// Validate the length field and, if it passes, replace the displayed
    /// password with a fresh one. Lowercase is always part of the charset.
    pub fn generate(&mut self) {
        self.forget_password();

        let length = match validate::parse_length(&self.length_input) {
            Ok(length) => length,
            Err(e) => {
                tracing::debug!(input = %self.length_input, error = ?e, "rejected length");
                self.display = LENGTH_PROMPT.to_string();
                return;
            }
        };

        let password = pass::generate_password(
            length,
            self.include_uppercase,
            true,
            self.include_numbers,
            self.include_symbols,
        );
        self.display = password.clone();
        self.password = Some(password);
    }

    pub fn copy<C: Clipboard>(&mut self, clipboard: &mut C) {
        let Some(password) = self.password.as_deref() else {
            self.status = Some(NOTHING_TO_COPY.to_string());
            return;
        };

        self.status = Some(match clipboard.copy(password) {
            Ok(()) => COPIED.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                format!("Clipboard error: {e}")
            }
        });
    }

    /// Current toggles and length as persistable settings.
    /// An invalid length field keeps the default.
    pub fn settings(&self) -> Settings {
        Settings {
            length: validate::parse_length(&self.length_input)
                .unwrap_or(Settings::default().length),
            include_uppercase: self.include_uppercase,
            include_numbers: self.include_numbers,
            include_symbols: self.include_symbols,
        }
    }

    fn forget_password(&mut self) {
        if let Some(mut old) = self.password.take() {
            old.zeroize();
        }
        self.display.zeroize();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.forget_password();
    }
}

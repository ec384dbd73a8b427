//! Interactive TUI.

mod input;
mod render;
mod text;

use crossterm::event::{self, Event};

pub use text::print_help;

use crate::app::{App, LoopAction};
use crate::cli::prompts;
use crate::clipboard::LazyClipboard;
use crate::settings::Settings;
use crate::terminal::{ScreenGuard, clear};

/// Run TUI interactive mode.
pub fn run() {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {}", e));
        Settings::default()
    });

    let mut app = App::new(&settings);
    let mut clipboard = LazyClipboard::default();

    let mut guard = match ScreenGuard::new() {
        Ok(g) => g,
        Err(e) => {
            prompts::error(&format!("Interactive mode unavailable: {}", e));
            return;
        }
    };

    loop {
        clear();
        render::render(&app).print();

        match event::read() {
            Ok(Event::Key(key)) => {
                let Some(action) = input::action_for(key) else {
                    continue;
                };
                let step = app.apply(action, &mut clipboard, |s| {
                    s.save_to_file().map_err(|e| e.to_string())
                });
                if let LoopAction::Break = step {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "terminal read failed");
                break;
            }
        }
    }

    guard.restore();
}

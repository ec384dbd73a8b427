//! Screen layout for the interactive generator.

use crate::app::{App, Field};
use crate::clipboard::COPIED;
use crate::terminal::{BOLD, DIM, Frame, GREEN, RED, RESET, REVERSE};

use super::input::LEGEND;

const CURSOR: &str = "\u{203a}";

/// Lay out the whole screen for the current state.
pub fn render(app: &App) -> Frame {
    let mut frame = Frame::new();

    frame.top("Password Generator").line("");
    if app.password.is_some() {
        frame.line_center(&format!("{BOLD}{}{RESET}", app.display));
    } else {
        frame.line_center(&app.display);
    }
    frame.line("").rule();

    for field in Field::ORDER {
        frame.line(&control_line(app, field));
    }

    frame.rule();
    match app.status.as_deref() {
        Some(status) if status == COPIED => frame.line(&format!("{GREEN}{status}{RESET}")),
        Some(status) => frame.line(&format!("{RED}{status}{RESET}")),
        None => frame.line(""),
    };
    frame.bottom();

    for legend in LEGEND {
        frame.raw(&format!("{DIM}{legend}{RESET}"));
    }
    frame
}

fn control_line(app: &App, field: Field) -> String {
    let focused = app.focus == field;
    let marker = if focused { CURSOR } else { " " };
    let label = if focused {
        format!("{REVERSE}{}{RESET}", field.label())
    } else {
        field.label().to_string()
    };

    match field {
        Field::Length => format!("{marker} {label} [{:^4}]", app.length_input),
        f if f.is_toggle() => {
            let state = if app.is_on(f) { "ON " } else { "OFF" };
            format!("{marker} {label} [{state}]")
        }
        _ => format!("{marker} [ {label} ]"),
    }
}

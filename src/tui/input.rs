//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Action;

/// Map a key press to an [`Action`]. Releases, repeats of non-editing keys
/// and unbound keys map to `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let action = match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Action::Quit,
        KeyCode::Char('u') if ctrl => Action::ClearInput,
        _ if ctrl => return None,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Up | KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Down | KeyCode::Tab => Action::FocusNext,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
        KeyCode::Backspace | KeyCode::Delete => Action::Backspace,
        KeyCode::Char(c) if c.is_ascii_digit() => Action::Input(c),
        KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('s') => Action::Save,
        _ => return None,
    };
    Some(action)
}

/// Key legend shown under the panel.
pub const LEGEND: &[&str] = &[
    "\u{2191}/\u{2193} move  Enter/Space select  0-9 length",
    "g generate  c copy  s save  Ctrl+U clear  q quit",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn quitting() {
        assert_eq!(action_for(ctrl('c')), Some(Action::Quit));
        assert_eq!(action_for(ctrl('q')), Some(Action::Quit));
        assert_eq!(action_for(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for(key(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn ctrl_c_is_not_copy() {
        assert_eq!(action_for(key(KeyCode::Char('c'))), Some(Action::Copy));
        assert_ne!(action_for(ctrl('c')), Some(Action::Copy));
        assert_eq!(action_for(ctrl('g')), None);
    }

    #[test]
    fn editing_and_navigation() {
        assert_eq!(action_for(key(KeyCode::Char('7'))), Some(Action::Input('7')));
        assert_eq!(action_for(key(KeyCode::Backspace)), Some(Action::Backspace));
        assert_eq!(action_for(ctrl('u')), Some(Action::ClearInput));
        assert_eq!(action_for(key(KeyCode::Tab)), Some(Action::FocusNext));
        assert_eq!(action_for(key(KeyCode::Up)), Some(Action::FocusPrev));
        assert_eq!(action_for(key(KeyCode::Enter)), Some(Action::Activate));
        assert_eq!(action_for(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn releases_are_ignored() {
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(action_for(release), None);
    }
}

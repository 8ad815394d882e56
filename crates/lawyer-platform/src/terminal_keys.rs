//! Crossterm key event normalization.
//!
//! Converts crossterm `KeyEvent`s into the [`KeyCombo`] form used by the
//! [`KeybindRegistry`](crate::input::KeybindRegistry).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::KeyCombo;
use crate::keymap::normalize_key_name;

/// Convert a terminal key event into a lookup combo.
///
/// Returns `None` for release events and keys that have no keybind
/// spelling (media keys, bare modifier presses).
pub fn combo_from_key_event(event: &KeyEvent) -> Option<KeyCombo> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let key = match event.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => normalize_key_name(&c.to_string()),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Esc => "Escape".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::BackTab => "BackTab".into(),
        KeyCode::Backspace => "Backspace".into(),
        KeyCode::Delete => "Delete".into(),
        KeyCode::Up => "Up".into(),
        KeyCode::Down => "Down".into(),
        KeyCode::Left => "Left".into(),
        KeyCode::Right => "Right".into(),
        KeyCode::Home => "Home".into(),
        KeyCode::End => "End".into(),
        KeyCode::PageUp => "PageUp".into(),
        KeyCode::PageDown => "PageDown".into(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return None,
    };

    let m = event.modifiers;
    Some(KeyCombo::from_parts(
        m.contains(KeyModifiers::CONTROL),
        m.contains(KeyModifiers::ALT),
        m.contains(KeyModifiers::SHIFT),
        m.contains(KeyModifiers::SUPER),
        key,
    ))
}

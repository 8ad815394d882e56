use lawyer_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parses a keybind string such as `"Ctrl+O"`, `"Alt+Shift+N"` or
/// `"Enter"` into a [`KeyBind`].
///
/// Modifier aliases:
/// - `"Ctrl"` / `"Control"` -> `Ctrl`
/// - `"Alt"` / `"Option"` / `"Opt"` -> `Alt`
/// - `"Cmd"` / `"Command"` -> `Super` on macOS, `Ctrl` elsewhere
/// - `"Super"` / `"Win"` / `"Meta"` -> `Super`
///
/// The final token is always the key, even if it spells a modifier name.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(PlatformError::NotSupported("empty keybind string".into()));
    }

    // A lone "+" (or a trailing "++") names the plus key itself.
    let (body, plus_key) = match s.strip_suffix("++") {
        Some(rest) => (rest, true),
        None if s == "+" => ("", true),
        None => (s, false),
    };

    let mut tokens: Vec<&str> = if body.is_empty() {
        Vec::new()
    } else {
        body.split('+').map(str::trim).collect()
    };

    let key_token = if plus_key {
        "+"
    } else {
        tokens
            .pop()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| PlatformError::NotSupported("keybind has no key component".into()))?
    };

    let mut modifiers = Vec::new();
    for token in tokens {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::NotSupported(format!("unrecognized modifier: {token}"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

pub(crate) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Super)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

/// Canonical spelling for a key token: single characters are upper-cased,
/// named keys get a fixed capitalization.
pub(crate) fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        "plus" => "+".into(),
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backtab" => "BackTab".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        "up" => "Up".into(),
        "down" => "Down".into(),
        "left" => "Left".into(),
        "right" => "Right".into(),
        "home" => "Home".into(),
        "end" => "End".into(),
        "pageup" | "pgup" => "PageUp".into(),
        "pagedown" | "pgdn" => "PageDown".into(),
        _ if token.chars().count() == 1 => token.to_uppercase(),
        _ => {
            let mut chars = lower.chars();
            match chars.next() {
                Some(c) => format!("{}{}", c.to_uppercase(), chars.as_str()),
                None => lower,
            }
        }
    }
}

use super::types::{KeyBind, Modifier};

/// Renders a [`KeyBind`] for the help line.
///
/// macOS terminals get the familiar modifier glyphs; everywhere else the
/// parts are joined with `+`.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mut parts: Vec<String> = kb.modifiers.iter().map(|m| display_modifier(*m)).collect();
    parts.push(display_key(&kb.key));

    if cfg!(target_os = "macos") {
        parts.join("")
    } else {
        parts.join("+")
    }
}

fn display_modifier(modifier: Modifier) -> String {
    let label = if cfg!(target_os = "macos") {
        match modifier {
            Modifier::Ctrl => "\u{2303}",
            Modifier::Alt => "\u{2325}",
            Modifier::Shift => "\u{21E7}",
            Modifier::Super => "\u{2318}",
        }
    } else {
        match modifier {
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::Super => "Super",
        }
    };
    label.to_string()
}

fn display_key(key: &str) -> String {
    match key {
        "Escape" => "Esc".into(),
        "PageUp" => "PgUp".into(),
        "PageDown" => "PgDn".into(),
        "Enter" if cfg!(target_os = "macos") => "\u{21A9}".into(),
        other => other.to_string(),
    }
}

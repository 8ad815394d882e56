//! Human-readable keybind strings: parsing and display.

mod display;
mod parse;
mod types;

pub use display::keybind_to_display;
pub use parse::parse_keybind;
pub(crate) use parse::normalize_key_name;
pub use types::{KeyBind, Modifier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ctrl_letter() {
        let kb = parse_keybind("Ctrl+O").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(kb.key, "O");
    }

    #[test]
    fn parse_lowercase_letter_is_uppercased() {
        let kb = parse_keybind("ctrl+u").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(kb.key, "U");
    }

    #[test]
    fn parse_multiple_modifiers_in_order() {
        let kb = parse_keybind("Alt+Shift+N").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Alt, Modifier::Shift]);
        assert_eq!(kb.key, "N");
    }

    #[test]
    fn parse_option_is_alt() {
        let kb = parse_keybind("Option+Period").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Alt]);
        assert_eq!(kb.key, ".");
    }

    #[test]
    fn parse_cmd_depends_on_platform() {
        let kb = parse_keybind("Cmd+N").unwrap();
        if cfg!(target_os = "macos") {
            assert_eq!(kb.modifiers, vec![Modifier::Super]);
        } else {
            assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        }
    }

    #[test]
    fn parse_bare_named_keys() {
        assert_eq!(parse_keybind("Enter").unwrap().key, "Enter");
        assert_eq!(parse_keybind("return").unwrap().key, "Enter");
        assert_eq!(parse_keybind("Esc").unwrap().key, "Escape");
        assert_eq!(parse_keybind("pgup").unwrap().key, "PageUp");
        assert_eq!(parse_keybind("F5").unwrap().key, "F5");
        assert!(parse_keybind("Enter").unwrap().modifiers.is_empty());
    }

    #[test]
    fn parse_plus_key() {
        let kb = parse_keybind("Ctrl++").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(kb.key, "+");
        assert_eq!(parse_keybind("+").unwrap().key, "+");
    }

    #[test]
    fn parse_rejects_empty_and_dangling() {
        assert!(parse_keybind("").is_err());
        assert!(parse_keybind("   ").is_err());
        assert!(parse_keybind("Ctrl+").is_err());
    }

    #[test]
    fn parse_rejects_unknown_modifier() {
        let err = parse_keybind("Hyper+K").unwrap_err().to_string();
        assert!(err.contains("unrecognized modifier: Hyper"));
    }

    #[test]
    fn repeated_modifiers_collapse() {
        let kb = parse_keybind("Ctrl+Control+T").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
    }

    #[test]
    fn display_joins_parts() {
        let kb = parse_keybind("Ctrl+Shift+T").unwrap();
        let display = keybind_to_display(&kb);
        if cfg!(target_os = "macos") {
            assert_eq!(display, "\u{2303}\u{21E7}T");
        } else {
            assert_eq!(display, "Ctrl+Shift+T");
        }
    }

    #[test]
    fn display_shortens_named_keys() {
        assert_eq!(keybind_to_display(&parse_keybind("Esc").unwrap()), "Esc");
        assert_eq!(
            keybind_to_display(&parse_keybind("PageDown").unwrap()),
            "PgDn"
        );
    }
}

pub mod crash_report;
pub mod input;
pub mod keymap;
pub mod paths;
pub mod terminal_keys;

pub use input::{KeyCombo, KeybindRegistry};
pub use keymap::{KeyBind, Modifier};
pub use paths::{
    config_dir, config_file, crash_report_dir, data_dir, ensure_dirs, log_dir, log_file,
};
pub use terminal_keys::combo_from_key_event;

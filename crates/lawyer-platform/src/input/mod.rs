//! Keybind registry: maps parsed `KeyBind` values to runtime `Action`s.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
#[cfg(test)]
pub(crate) use key_combo::{MOD_CTRL, MOD_SHIFT};
pub use registry::KeybindRegistry;

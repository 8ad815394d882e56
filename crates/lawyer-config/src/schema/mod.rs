//! Configuration schema types for the AI Lawyer client.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod chat;
mod keybind_config;
mod notifications;
mod palette;
mod system;
mod upload;

pub use api::*;
pub use chat::*;
pub use keybind_config::*;
pub use notifications::*;
pub use palette::*;
pub use system::*;
pub use upload::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LawyerConfig {
    pub api: ApiConfig,
    pub chat: ChatConfig,
    pub upload: UploadConfig,
    pub notifications: NotificationConfig,
    pub colors: ColorConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

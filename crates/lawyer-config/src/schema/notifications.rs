use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Toast-style notification behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Seconds a notification stays visible (valid range: 1-60).
    pub ttl_secs: u32,
    /// Maximum queued notifications (valid range: 1-64).
    pub capacity: u32,
}

impl NotificationConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(u64::from(self.ttl_secs))
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 5,
            capacity: 8,
        }
    }
}

//! Document upload configuration types.

use lawyer_common::UploadKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Preselected upload kind ("temp" or "permanent").
    pub default_kind: UploadKind,
    /// Largest file accepted before sending, in MiB (valid range: 1-1024).
    pub max_file_size_mb: u32,
}

impl UploadConfig {
    pub fn max_file_size_bytes(&self) -> u64 {
        u64::from(self.max_file_size_mb) * 1024 * 1024
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            default_kind: UploadKind::Temp,
            max_file_size_mb: 50,
        }
    }
}

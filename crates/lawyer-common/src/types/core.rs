use serde::{Deserialize, Serialize};
use std::fmt;

/// Author of a chat message. Serialized the way the backend expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an attached document goes: this session only, or the shared index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadKind {
    #[default]
    Temp,
    Permanent,
}

impl UploadKind {
    /// Backend route for this kind of upload.
    pub fn endpoint(&self) -> &'static str {
        match self {
            UploadKind::Temp => "/upload-temp",
            UploadKind::Permanent => "/upload-permanent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UploadKind::Temp => "Temp",
            UploadKind::Permanent => "Permanent",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            UploadKind::Temp => UploadKind::Permanent,
            UploadKind::Permanent => UploadKind::Temp,
        }
    }
}

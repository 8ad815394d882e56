//! Request and response bodies exchanged with the backend.

use lawyer_common::{ChatRole, SessionId};
use serde::{Deserialize, Serialize};

/// One prior turn as the backend expects it in `chat_history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: ChatRole,
    pub content: String,
}

/// Body of `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub chat_history: Vec<HistoryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Reply to `POST /upload-temp`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TempUploadResponse {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply to `POST /upload-permanent`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PermanentUploadResponse {
    pub filename: String,
    pub vector_count: u64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /clear-session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClearSessionRequest {
    pub session_id: SessionId,
}

/// Either upload reply, tagged by which endpoint produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Temp(TempUploadResponse),
    Permanent(PermanentUploadResponse),
}

/// A document ready to be sent as the multipart `file` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPayload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

use std::path::PathBuf;

/// Failure of a call to the legal-assistant backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (refused, timed out, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status. `detail` is already the
    /// text meant for the user.
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("session is busy with another request")]
    Busy,

    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The staged file could not be read back for sending.
    #[error("{0}")]
    Document(String),
}

impl ApiError {
    /// The text surfaced in the conversation or in a notification.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Network(msg)
            | ApiError::Parse(msg)
            | ApiError::Config(msg)
            | ApiError::Document(msg) => msg.clone(),
            ApiError::Status { detail, .. } => detail.clone(),
            ApiError::Busy => "A request is already in progress".into(),
        }
    }
}

/// Reasons a local file cannot be staged for upload.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("Invalid file type. Please select a PDF or TXT file.")]
    UnsupportedType(PathBuf),

    #[error("file is too large ({size} bytes, limit {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<DocumentError> for ApiError {
    fn from(err: DocumentError) -> Self {
        ApiError::Document(err.to_string())
    }
}

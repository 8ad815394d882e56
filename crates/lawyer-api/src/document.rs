//! Local checks on a document before it is staged or sent.
//!
//! Only PDF and plain-text files are accepted. The extension decides the
//! type; `mime_guess` supplies the content type sent in the multipart form.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::DocumentError;
use crate::types::DocumentPayload;

/// MIME types the backend can ingest.
pub const ACCEPTED_MIME_TYPES: &[&str] = &["application/pdf", "text/plain"];

/// A file that passed [`validate_document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDocument {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: String,
    pub size: u64,
}

/// Check that `path` names a readable PDF or TXT file no larger than
/// `max_bytes`.
pub fn validate_document(path: &Path, max_bytes: u64) -> Result<ValidatedDocument, DocumentError> {
    let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DocumentError::NotFound(path.to_path_buf()),
        _ => DocumentError::Io(e),
    })?;
    if !metadata.is_file() {
        return Err(DocumentError::NotAFile(path.to_path_buf()));
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| DocumentError::UnsupportedType(path.to_path_buf()))?
        .to_string();

    let mime = accepted_mime(path)
        .ok_or_else(|| DocumentError::UnsupportedType(path.to_path_buf()))?;

    let size = metadata.len();
    if size > max_bytes {
        return Err(DocumentError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    Ok(ValidatedDocument {
        path: path.to_path_buf(),
        file_name,
        mime,
        size,
    })
}

/// Validate again and read the file for sending. The file may have changed
/// since it was staged.
pub async fn load_document(path: &Path, max_bytes: u64) -> Result<DocumentPayload, DocumentError> {
    let doc = validate_document(path, max_bytes)?;
    let bytes = tokio::fs::read(&doc.path).await?;
    tracing::debug!(file = %doc.file_name, size = bytes.len(), "document loaded");
    Ok(DocumentPayload {
        file_name: doc.file_name,
        mime: doc.mime,
        bytes,
    })
}

fn accepted_mime(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    if ext != "pdf" && ext != "txt" {
        return None;
    }
    let mime = mime_guess::from_ext(&ext).first()?;
    let essence = mime.essence_str();
    ACCEPTED_MIME_TYPES
        .contains(&essence)
        .then(|| essence.to_string())
}

//! Client library for the AI Lawyer backend.
//!
//! - [`LegalApi`]: the four backend calls (`/ask`, the two upload
//!   endpoints, `/clear-session`) behind an async trait
//! - [`HttpApiClient`]: reqwest implementation with per-endpoint timeouts
//! - [`document`]: local checks before a file is staged
//! - [`ChatSession`]: conversation state, staged upload, and the backend
//!   session id

pub mod client;
pub mod document;
pub mod error;
pub mod session;
pub mod types;

use async_trait::async_trait;
use lawyer_common::{SessionId, UploadKind};

pub use client::{ApiClientConfig, HttpApiClient};
pub use document::{load_document, validate_document, ValidatedDocument};
pub use error::{ApiError, DocumentError};
pub use session::{AskTicket, ChatMessage, ChatSession, PendingUpload, UploadTicket};
pub use types::{
    AskRequest, AskResponse, DocumentPayload, HistoryEntry, PermanentUploadResponse,
    TempUploadResponse, UploadOutcome,
};

#[async_trait]
pub trait LegalApi: Send + Sync {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, ApiError>;

    async fn upload_temp(&self, document: DocumentPayload)
        -> Result<TempUploadResponse, ApiError>;

    async fn upload_permanent(
        &self,
        document: DocumentPayload,
    ) -> Result<PermanentUploadResponse, ApiError>;

    /// Ask the backend to drop the temporary documents of a session.
    async fn clear_session(&self, session_id: &SessionId) -> Result<(), ApiError>;

    /// Route a document to the endpoint matching `kind`.
    async fn upload(
        &self,
        kind: UploadKind,
        document: DocumentPayload,
    ) -> Result<UploadOutcome, ApiError> {
        match kind {
            UploadKind::Temp => self.upload_temp(document).await.map(UploadOutcome::Temp),
            UploadKind::Permanent => self
                .upload_permanent(document)
                .await
                .map(UploadOutcome::Permanent),
        }
    }
}

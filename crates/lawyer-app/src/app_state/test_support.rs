//! In-memory backend and app builder shared by the app and UI tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;

use lawyer_api::{
    ApiError, AskRequest, AskResponse, DocumentPayload, LegalApi, PermanentUploadResponse,
    TempUploadResponse,
};
use lawyer_common::SessionId;
use lawyer_config::LawyerConfig;
use lawyer_platform::input::KeybindRegistry;

use super::core::ChatApp;
use super::event::Event;

pub(crate) const TEMP_SESSION: &str = "3f2a9c1e-77aa-4bd0-9e21-5c6d7e8f9a0b";

#[derive(Default)]
pub(crate) struct FakeApi {
    pub fail_ask: bool,
    pub asked: Mutex<Vec<AskRequest>>,
    pub cleared: Mutex<Vec<SessionId>>,
}

#[async_trait]
impl LegalApi for FakeApi {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, ApiError> {
        self.asked.lock().unwrap().push(request.clone());
        if self.fail_ask {
            return Err(ApiError::Status {
                status: 500,
                detail: "An error occurred on the server (status: 500).".into(),
            });
        }
        Ok(AskResponse {
            answer: format!("Answer to: {} (Source: lease.pdf)", request.question),
        })
    }

    async fn upload_temp(&self, document: DocumentPayload) -> Result<TempUploadResponse, ApiError> {
        Ok(TempUploadResponse {
            session_id: Some(TEMP_SESSION.into()),
            filename: Some(document.file_name),
            message: None,
        })
    }

    async fn upload_permanent(
        &self,
        document: DocumentPayload,
    ) -> Result<PermanentUploadResponse, ApiError> {
        Ok(PermanentUploadResponse {
            filename: document.file_name,
            vector_count: 12,
            message: None,
        })
    }

    async fn clear_session(&self, session_id: &SessionId) -> Result<(), ApiError> {
        self.cleared.lock().unwrap().push(session_id.clone());
        Ok(())
    }
}

/// A `ChatApp` with default config wired to `api`, plus the receiving
/// end of its event channel.
pub(crate) fn test_app(api: Arc<FakeApi>) -> (ChatApp, mpsc::UnboundedReceiver<Event>) {
    let config = LawyerConfig::default();
    let registry = KeybindRegistry::from_config(&config.keybinds);
    let (tx, rx) = mpsc::unbounded_channel();
    (ChatApp::new(config, registry, api, tx), rx)
}

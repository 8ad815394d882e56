//! Tests for conversation state transitions.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use lawyer_common::{ChatRole, NotificationLevel, SessionId, UploadKind};

use super::*;
use crate::types::{
    AskRequest, AskResponse, DocumentPayload, PermanentUploadResponse, TempUploadResponse,
    UploadOutcome,
};
use crate::{ApiError, LegalApi};

const GREETING: &str = "Hello! I am your AI Legal Assistant. How can I help you today?";
const RESET: &str = "New session started. Previous temporary files are cleared.";

/// Records every call and answers from canned results.
#[derive(Default)]
struct FakeApi {
    asks: Mutex<Vec<AskRequest>>,
    uploads: Mutex<Vec<(String, String)>>,
    fail_ask: Option<ApiError>,
    fail_upload: Option<ApiError>,
    temp_session: Option<String>,
}

#[async_trait]
impl LegalApi for FakeApi {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, ApiError> {
        self.asks.lock().unwrap().push(request.clone());
        match &self.fail_ask {
            Some(e) => Err(e.clone()),
            None => Ok(AskResponse {
                answer: format!("Answer to: {}", request.question),
            }),
        }
    }

    async fn upload_temp(&self, document: DocumentPayload) -> Result<TempUploadResponse, ApiError> {
        self.uploads
            .lock()
            .unwrap()
            .push(("temp".into(), document.file_name.clone()));
        if let Some(e) = &self.fail_upload {
            return Err(e.clone());
        }
        Ok(TempUploadResponse {
            session_id: self.temp_session.clone(),
            filename: Some(document.file_name),
            message: Some("ok".into()),
        })
    }

    async fn upload_permanent(
        &self,
        document: DocumentPayload,
    ) -> Result<PermanentUploadResponse, ApiError> {
        self.uploads
            .lock()
            .unwrap()
            .push(("permanent".into(), document.file_name.clone()));
        if let Some(e) = &self.fail_upload {
            return Err(e.clone());
        }
        Ok(PermanentUploadResponse {
            filename: document.file_name,
            vector_count: 128,
            message: None,
        })
    }

    async fn clear_session(&self, _session_id: &SessionId) -> Result<(), ApiError> {
        Ok(())
    }
}

fn session() -> ChatSession {
    ChatSession::new(GREETING, RESET)
}

fn write_doc(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"The tenant shall pay rent monthly.").unwrap();
    path
}

#[test]
fn starts_with_greeting_only() {
    let s = session();
    assert_eq!(s.messages().len(), 1);
    assert_eq!(s.messages()[0].role, ChatRole::Assistant);
    assert_eq!(s.messages()[0].text, GREETING);
    assert!(s.session_id().is_none());
    assert!(s.pending_upload().is_none());
    assert_eq!(s.upload_kind(), UploadKind::Temp);
    assert!(!s.is_loading());
}

#[test]
fn blank_input_is_ignored() {
    let mut s = session();
    assert!(s.begin_ask("").is_none());
    assert!(s.begin_ask("   \n").is_none());
    assert_eq!(s.messages().len(), 1);
    assert!(!s.is_loading());
}

#[test]
fn begin_ask_appends_user_message_and_excludes_greeting() {
    let mut s = session();
    let ticket = s.begin_ask("What is adverse possession?").unwrap();

    assert!(s.is_loading());
    assert_eq!(s.messages().len(), 2);
    assert_eq!(s.messages()[1], ChatMessage::user("What is adverse possession?"));

    let req = &ticket.request;
    assert_eq!(req.question, "What is adverse possession?");
    assert_eq!(req.chat_history.len(), 1);
    assert_eq!(req.chat_history[0].role, ChatRole::User);
    assert_eq!(req.chat_history[0].content, "What is adverse possession?");
    assert!(req.session_id.is_none());
}

#[test]
fn second_ask_is_refused_while_first_in_flight() {
    let mut s = session();
    let _first = s.begin_ask("one").unwrap();
    assert!(s.begin_ask("two").is_none());
    assert_eq!(s.user_turns(), 1);
}

#[test]
fn dropping_a_ticket_releases_loading() {
    let mut s = session();
    let ticket = s.begin_ask("one").unwrap();
    drop(ticket);
    assert!(!s.is_loading());
    assert!(s.begin_ask("two").is_some());
}

#[test]
fn finish_ask_appends_answer() {
    let mut s = session();
    let ticket = s.begin_ask("q").unwrap();
    let msg = s
        .finish_ask(ticket, Ok(AskResponse { answer: "A (Source: lease.pdf)".into() }))
        .unwrap();
    assert_eq!(msg.role, ChatRole::Assistant);
    assert_eq!(msg.text, "A (Source: lease.pdf)");
    assert!(!s.is_loading());
}

#[test]
fn failed_ask_becomes_visible_error_message() {
    let mut s = session();
    let ticket = s.begin_ask("q").unwrap();
    let err = ApiError::Status {
        status: 500,
        detail: "An error occurred on the server (status: 500).".into(),
    };
    let msg = s.finish_ask(ticket, Err(err)).unwrap();
    assert_eq!(
        msg.text,
        "❌ **Error:** An error occurred on the server (status: 500).. Please ensure the backend server is running."
    );
    assert!(!s.is_loading());
}

#[test]
fn history_includes_previous_turns() {
    let mut s = session();
    let t = s.begin_ask("first").unwrap();
    s.finish_ask(t, Ok(AskResponse { answer: "reply".into() }));

    let t = s.begin_ask("second").unwrap();
    let roles: Vec<ChatRole> = t.request.chat_history.iter().map(|h| h.role).collect();
    assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant, ChatRole::User]);
    assert_eq!(t.request.chat_history[1].content, "reply");
}

#[test]
fn stage_rejects_invalid_type_and_keeps_previous() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_doc(dir.path(), "lease.pdf");
    let bad = write_doc(dir.path(), "photo.jpg");

    let mut s = session();
    s.stage_upload(&good, 1024).unwrap();
    let err = s.stage_upload(&bad, 1024).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid file type. Please select a PDF or TXT file."
    );
    assert_eq!(s.pending_upload().unwrap().file_name, "lease.pdf");
}

#[test]
fn toggle_and_remove() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(dir.path(), "notes.txt");

    let mut s = session();
    assert!(s.begin_upload().is_none());
    s.stage_upload(&path, 1024).unwrap();
    assert_eq!(s.toggle_upload_kind(), UploadKind::Permanent);
    assert_eq!(s.toggle_upload_kind(), UploadKind::Temp);
    s.set_upload_kind(UploadKind::Permanent);
    assert_eq!(s.upload_kind(), UploadKind::Permanent);

    let removed = s.remove_upload().unwrap();
    assert_eq!(removed.file_name, "notes.txt");
    assert!(s.pending_upload().is_none());
}

#[tokio::test]
async fn temp_upload_grants_session_used_by_later_asks() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(dir.path(), "lease.pdf");
    let api = FakeApi {
        temp_session: Some("3f2a9c1e-77aa-4bd0-9e21-0a1b2c3d4e5f".into()),
        ..Default::default()
    };

    let mut s = session();
    s.ask(&api, "before upload").await.unwrap();
    s.stage_upload(&path, 1024).unwrap();

    let note = s.upload(&api).await.unwrap();
    assert_eq!(note.level, NotificationLevel::Success);
    assert_eq!(
        note.message(),
        "✅ File ready for this session. Session ID: 3f2a9c1e..."
    );
    assert!(s.pending_upload().is_none());
    assert!(!s.is_uploading());

    s.ask(&api, "first after upload").await.unwrap();
    s.ask(&api, "second after upload").await.unwrap();

    let asks = api.asks.lock().unwrap();
    assert_eq!(asks.len(), 3);
    assert!(asks[0].session_id.is_none());
    let expected = SessionId::from_backend("3f2a9c1e-77aa-4bd0-9e21-0a1b2c3d4e5f");
    assert_eq!(asks[1].session_id, expected);
    assert_eq!(asks[2].session_id, expected);
}

#[tokio::test]
async fn permanent_upload_reports_vectors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(dir.path(), "statute.txt");
    let api = FakeApi::default();

    let mut s = session().with_upload_kind(UploadKind::Permanent);
    s.stage_upload(&path, 1024).unwrap();
    let note = s.upload(&api).await.unwrap();

    assert_eq!(
        note.message(),
        "✅ \"statute.txt\" permanently added. Vectors: 128."
    );
    assert!(s.session_id().is_none());
    assert_eq!(
        api.uploads.lock().unwrap().as_slice(),
        &[("permanent".to_string(), "statute.txt".to_string())]
    );
}

#[tokio::test]
async fn temp_upload_without_session_id_warns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(dir.path(), "lease.pdf");
    let api = FakeApi::default();

    let mut s = session();
    s.stage_upload(&path, 1024).unwrap();
    let note = s.upload(&api).await.unwrap();
    assert_eq!(note.level, NotificationLevel::Warning);
    assert!(s.session_id().is_none());
}

#[tokio::test]
async fn failed_upload_keeps_file_staged() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(dir.path(), "lease.pdf");
    let api = FakeApi {
        fail_upload: Some(ApiError::Status {
            status: 500,
            detail: "HTTP error! status: 500".into(),
        }),
        ..Default::default()
    };

    let mut s = session();
    s.stage_upload(&path, 1024).unwrap();
    let note = s.upload(&api).await.unwrap();
    assert_eq!(note.level, NotificationLevel::Error);
    assert_eq!(note.message(), "Upload failed: HTTP error! status: 500");
    assert!(s.pending_upload().is_some());
    assert!(!s.is_uploading());
}

#[tokio::test]
async fn staged_file_deleted_before_upload_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(dir.path(), "lease.pdf");
    let api = FakeApi::default();

    let mut s = session();
    s.stage_upload(&path, 1024).unwrap();
    std::fs::remove_file(&path).unwrap();

    let note = s.upload(&api).await.unwrap();
    assert_eq!(note.level, NotificationLevel::Error);
    assert!(note.message().starts_with("Upload failed: file not found"));
    assert!(api.uploads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn network_failure_renders_error_without_panicking() {
    let api = FakeApi {
        fail_ask: Some(ApiError::Network("Could not connect to http://127.0.0.1:8000".into())),
        ..Default::default()
    };
    let mut s = session();
    let msg = s.ask(&api, "hello").await.unwrap();
    assert!(msg.text.starts_with("❌ **Error:** Could not connect"));
    assert_eq!(s.messages().len(), 3);
}

#[tokio::test]
async fn reset_clears_everything_and_returns_old_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(dir.path(), "lease.pdf");
    let api = FakeApi {
        temp_session: Some("sess-42".into()),
        ..Default::default()
    };

    let mut s = session();
    s.stage_upload(&path, 1024).unwrap();
    s.upload(&api).await.unwrap();
    s.ask(&api, "question").await.unwrap();
    s.stage_upload(&path, 1024).unwrap();
    s.set_upload_kind(UploadKind::Permanent);

    let old = s.reset();
    assert_eq!(old, SessionId::from_backend("sess-42"));
    assert_eq!(s.messages().len(), 1);
    assert_eq!(s.messages()[0].text, RESET);
    assert!(s.session_id().is_none());
    assert!(s.pending_upload().is_none());
    // The kind selection is a preference, not conversation state.
    assert_eq!(s.upload_kind(), UploadKind::Permanent);
    assert!(s.reset().is_none());
}

#[test]
fn results_after_reset_are_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(dir.path(), "lease.pdf");

    let mut s = session();
    let ask = s.begin_ask("stale question").unwrap();
    s.stage_upload(&path, 1024).unwrap();
    let upload = s.begin_upload().unwrap();

    s.reset();
    assert!(!s.is_loading());
    assert!(!s.is_uploading());

    assert!(s
        .finish_ask(ask, Ok(AskResponse { answer: "late".into() }))
        .is_none());
    let outcome = UploadOutcome::Temp(TempUploadResponse {
        session_id: Some("late-session".into()),
        filename: None,
        message: None,
    });
    assert!(s.finish_upload(upload, Ok(outcome)).is_none());

    assert_eq!(s.messages().len(), 1);
    assert!(s.session_id().is_none());
    assert_eq!(s.take_abandoned_session(), SessionId::from_backend("late-session"));
    assert!(s.take_abandoned_session().is_none());
}

#[test]
fn stale_failed_upload_leaves_nothing_to_clear() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(dir.path(), "lease.pdf");

    let mut s = session();
    s.stage_upload(&path, 1024).unwrap();
    let upload = s.begin_upload().unwrap();
    s.reset();

    let err = ApiError::Network("Could not connect".into());
    assert!(s.finish_upload(upload, Err(err)).is_none());
    assert!(s.take_abandoned_session().is_none());
}

#[test]
fn new_conversation_can_ask_while_stale_request_runs() {
    let mut s = session();
    let stale = s.begin_ask("old").unwrap();
    s.reset();
    let fresh = s.begin_ask("new").unwrap();
    drop(stale);
    assert!(s.is_loading(), "stale ticket must not release the new flag");
    drop(fresh);
    assert!(!s.is_loading());
}

#[test]
fn resumed_session_id_is_sent_with_the_first_ask() {
    let id = SessionId::from_backend("sess-resumed").unwrap();
    let mut s = session().with_session_id(id.clone());
    let ticket = s.begin_ask("Is the lease valid?").unwrap();
    assert_eq!(ticket.request.session_id, Some(id));
}

//! Non-interactive commands: `ask`, `upload`, `config`.

use std::path::Path;
use std::process::ExitCode;

use lawyer_api::{ChatSession, LegalApi};
use lawyer_common::{LawyerError, NotificationLevel, SessionId, UploadKind};
use lawyer_config::LawyerConfig;

use crate::build_api_client;

fn new_session(config: &LawyerConfig) -> ChatSession {
    ChatSession::new(
        config.chat.greeting.as_str(),
        config.chat.new_session_message.as_str(),
    )
    .with_upload_kind(config.upload.default_kind)
}

pub async fn ask(
    config: &LawyerConfig,
    question: &str,
    session_id: Option<&str>,
) -> Result<ExitCode, LawyerError> {
    let client = build_api_client(config).map_err(|e| LawyerError::Api(e.display_message()))?;
    let ok = ask_with(&client, new_session(config), question, session_id).await?;
    Ok(exit_code(ok))
}

/// Print the answer on stdout, or the error text on stderr.
/// Returns whether the backend answered.
pub(crate) async fn ask_with(
    api: &dyn LegalApi,
    mut session: ChatSession,
    question: &str,
    session_id: Option<&str>,
) -> Result<bool, LawyerError> {
    if let Some(id) = session_id.and_then(SessionId::from_backend) {
        session = session.with_session_id(id);
    }
    let ticket = session
        .begin_ask(question)
        .ok_or_else(|| LawyerError::Other("question must not be empty".into()))?;

    let result = ticket.perform(api).await;
    let failed = result.is_err();
    if let Err(e) = &result {
        tracing::warn!("ask failed: {e}");
    }

    match session.finish_ask(ticket, result) {
        Some(message) if failed => {
            eprintln!("{}", message.text);
            Ok(false)
        }
        Some(message) => {
            println!("{}", message.text);
            Ok(true)
        }
        None => Ok(false),
    }
}

pub async fn upload(
    config: &LawyerConfig,
    file: &Path,
    permanent: bool,
) -> Result<ExitCode, LawyerError> {
    let client = build_api_client(config).map_err(|e| LawyerError::Api(e.display_message()))?;
    let kind = if permanent {
        UploadKind::Permanent
    } else {
        UploadKind::Temp
    };
    let ok = upload_with(
        &client,
        new_session(config),
        file,
        kind,
        config.upload.max_file_size_bytes(),
    )
    .await;
    Ok(exit_code(ok))
}

pub(crate) async fn upload_with(
    api: &dyn LegalApi,
    mut session: ChatSession,
    file: &Path,
    kind: UploadKind,
    max_bytes: u64,
) -> bool {
    if let Err(e) = session.stage_upload(file, max_bytes) {
        eprintln!("Upload failed: {e}");
        return false;
    }
    session.set_upload_kind(kind);

    let Some(notification) = session.upload(api).await else {
        return false;
    };
    if notification.level == NotificationLevel::Error {
        eprintln!("{}", notification.message());
        return false;
    }

    println!("{}", notification.message());
    if let Some(id) = session.session_id() {
        println!("session_id: {id}");
    }
    true
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

pub fn print_config(config: &LawyerConfig) -> ExitCode {
    println!("{}", lawyer_config::config_to_json(config));
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use lawyer_api::{
        ApiError, AskRequest, AskResponse, DocumentPayload, PermanentUploadResponse,
        TempUploadResponse,
    };

    use super::*;

    #[derive(Default)]
    struct RecordingApi {
        asked: Mutex<Vec<AskRequest>>,
        fail: bool,
    }

    #[async_trait]
    impl LegalApi for RecordingApi {
        async fn ask(&self, request: &AskRequest) -> Result<AskResponse, ApiError> {
            self.asked.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(ApiError::Network("Could not connect to http://127.0.0.1:8000".into()));
            }
            Ok(AskResponse {
                answer: "A tort is a civil wrong.".into(),
            })
        }

        async fn upload_temp(
            &self,
            _document: DocumentPayload,
        ) -> Result<TempUploadResponse, ApiError> {
            Ok(TempUploadResponse {
                session_id: Some("sess-cli".into()),
                filename: None,
                message: Some("ok".into()),
            })
        }

        async fn upload_permanent(
            &self,
            document: DocumentPayload,
        ) -> Result<PermanentUploadResponse, ApiError> {
            Ok(PermanentUploadResponse {
                filename: document.file_name,
                vector_count: 3,
                message: None,
            })
        }

        async fn clear_session(&self, _session_id: &SessionId) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn session() -> ChatSession {
        ChatSession::new("hi", "reset")
    }

    #[tokio::test]
    async fn ask_passes_session_id() {
        let api = RecordingApi::default();
        let ok = ask_with(&api, session(), "What is a tort?", Some("sess-9"))
            .await
            .unwrap();
        assert!(ok);

        let asked = api.asked.lock().unwrap();
        assert_eq!(asked.len(), 1);
        assert_eq!(asked[0].session_id.as_ref().map(|s| s.as_str()), Some("sess-9"));
        assert_eq!(asked[0].chat_history.len(), 1);
    }

    #[tokio::test]
    async fn failed_ask_exits_nonzero() {
        let api = RecordingApi {
            fail: true,
            ..Default::default()
        };
        let ok = ask_with(&api, session(), "anything", None).await.unwrap();
        assert!(!ok);
    }

    #[tokio::test]
    async fn blank_question_is_an_error() {
        let api = RecordingApi::default();
        assert!(ask_with(&api, session(), "  ", None).await.is_err());
        assert!(api.asked.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn upload_rejects_unsupported_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.docx");
        std::fs::write(&path, b"x").unwrap();

        let api = RecordingApi::default();
        assert!(!upload_with(&api, session(), &path, UploadKind::Temp, 1024).await);
    }

    #[tokio::test]
    async fn permanent_upload_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statute.txt");
        std::fs::write(&path, b"Section 1.").unwrap();

        let api = RecordingApi::default();
        assert!(upload_with(&api, session(), &path, UploadKind::Permanent, 1024).await);
    }
}

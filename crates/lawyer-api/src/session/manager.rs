//! `ChatSession` state and its synchronous transitions.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lawyer_common::{ChatRole, Notification, SessionId, UploadKind};
use tracing::{debug, info};

use crate::document::validate_document;
use crate::error::DocumentError;
use crate::types::{AskRequest, AskResponse, HistoryEntry, UploadOutcome};
use crate::ApiError;

use super::types::{AskTicket, BusyGuard, ChatMessage, PendingUpload, UploadTicket};

/// In-memory conversation with the backend.
///
/// The first message is always a display-only assistant message (the
/// greeting, or the reset notice) and is never sent as history.
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    reset_message: String,
    session_id: Option<SessionId>,
    pending: Option<PendingUpload>,
    upload_kind: UploadKind,
    loading: Arc<AtomicBool>,
    uploading: Arc<AtomicBool>,
    /// Bumped by `reset`; tickets from an older generation are ignored.
    generation: u64,
    /// Session granted to a temp upload that finished after a reset.
    abandoned: Option<SessionId>,
}

impl ChatSession {
    pub fn new(greeting: impl Into<String>, reset_message: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting)],
            reset_message: reset_message.into(),
            session_id: None,
            pending: None,
            upload_kind: UploadKind::default(),
            loading: Arc::new(AtomicBool::new(false)),
            uploading: Arc::new(AtomicBool::new(false)),
            generation: 0,
            abandoned: None,
        }
    }

    pub fn with_upload_kind(mut self, kind: UploadKind) -> Self {
        self.upload_kind = kind;
        self
    }

    /// Continue a backend session started elsewhere (e.g. by an earlier run).
    pub fn with_session_id(mut self, id: SessionId) -> Self {
        self.session_id = Some(id);
        self
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn pending_upload(&self) -> Option<&PendingUpload> {
        self.pending.as_ref()
    }

    pub fn upload_kind(&self) -> UploadKind {
        self.upload_kind
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading.load(Ordering::Acquire)
    }

    // -- Asking --

    /// Append the user's message and build the `/ask` request.
    ///
    /// Returns `None` for blank input or while another ask is in flight.
    pub fn begin_ask(&mut self, input: &str) -> Option<AskTicket> {
        if input.trim().is_empty() {
            return None;
        }
        let guard = BusyGuard::acquire(&self.loading).ok()?;

        self.messages.push(ChatMessage::user(input));
        let chat_history = self
            .messages
            .iter()
            .skip(1)
            .map(|m| HistoryEntry {
                role: m.role,
                content: m.text.clone(),
            })
            .collect();

        let request = AskRequest {
            question: input.to_string(),
            chat_history,
            session_id: self.session_id.clone(),
        };
        debug!(
            history = request.chat_history.len(),
            has_session = request.session_id.is_some(),
            "ask started"
        );

        Some(AskTicket {
            generation: self.generation,
            request,
            _guard: guard,
        })
    }

    /// Record the outcome of an ask. Returns the appended assistant
    /// message, or `None` if the conversation was reset meanwhile.
    pub fn finish_ask(
        &mut self,
        ticket: AskTicket,
        result: Result<AskResponse, ApiError>,
    ) -> Option<&ChatMessage> {
        if ticket.generation != self.generation {
            debug!("dropping answer for a conversation that was reset");
            return None;
        }

        let text = match result {
            Ok(response) => response.answer,
            Err(e) => format!(
                "❌ **Error:** {}. Please ensure the backend server is running.",
                e.display_message()
            ),
        };
        self.messages.push(ChatMessage::assistant(text));
        drop(ticket);
        self.messages.last()
    }

    // -- Documents --

    /// Validate and stage a file, replacing any previously staged one.
    pub fn stage_upload(
        &mut self,
        path: impl AsRef<Path>,
        max_bytes: u64,
    ) -> Result<&PendingUpload, DocumentError> {
        let doc = validate_document(path.as_ref(), max_bytes)?;
        debug!(file = %doc.file_name, size = doc.size, "document staged");
        Ok(&*self.pending.insert(PendingUpload {
            path: doc.path,
            file_name: doc.file_name,
            size: doc.size,
            max_bytes,
        }))
    }

    pub fn remove_upload(&mut self) -> Option<PendingUpload> {
        self.pending.take()
    }

    pub fn set_upload_kind(&mut self, kind: UploadKind) {
        self.upload_kind = kind;
    }

    pub fn toggle_upload_kind(&mut self) -> UploadKind {
        self.upload_kind = self.upload_kind.toggled();
        self.upload_kind
    }

    /// Start uploading the staged file with the current kind.
    ///
    /// Returns `None` when nothing is staged or an upload is in flight.
    pub fn begin_upload(&mut self) -> Option<UploadTicket> {
        let pending = self.pending.as_ref()?;
        let guard = BusyGuard::acquire(&self.uploading).ok()?;
        debug!(file = %pending.file_name, kind = self.upload_kind.label(), "upload started");

        Some(UploadTicket {
            generation: self.generation,
            kind: self.upload_kind,
            path: pending.path.clone(),
            file_name: pending.file_name.clone(),
            max_bytes: pending.max_bytes,
            _guard: guard,
        })
    }

    /// Record the outcome of an upload and describe it for the user.
    ///
    /// A failed upload leaves the file staged so it can be retried.
    pub fn finish_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<UploadOutcome, ApiError>,
    ) -> Option<Notification> {
        if ticket.generation != self.generation {
            debug!("dropping upload result for a conversation that was reset");
            if let Ok(UploadOutcome::Temp(resp)) = result {
                self.abandoned = resp.session_id.and_then(SessionId::from_backend);
            }
            return None;
        }

        let notification = match result {
            Ok(UploadOutcome::Temp(resp)) => {
                self.clear_staged(&ticket);
                match resp.session_id.and_then(SessionId::from_backend) {
                    Some(id) => {
                        info!(session = %id.short(), "temporary document accepted");
                        let body = format!(
                            "✅ File ready for this session. Session ID: {}",
                            id.short()
                        );
                        self.session_id = Some(id);
                        Notification::success("Upload", body)
                    }
                    None => Notification::warning(
                        "Upload",
                        "File uploaded, but the server did not return a session ID.",
                    ),
                }
            }
            Ok(UploadOutcome::Permanent(resp)) => {
                self.clear_staged(&ticket);
                info!(file = %resp.filename, vectors = resp.vector_count, "document indexed");
                Notification::success(
                    "Upload",
                    format!(
                        "✅ \"{}\" permanently added. Vectors: {}.",
                        resp.filename, resp.vector_count
                    ),
                )
            }
            Err(e) => {
                Notification::error("Upload", format!("Upload failed: {}", e.display_message()))
            }
        };
        Some(notification)
    }

    /// Start a fresh conversation.
    ///
    /// Returns the abandoned session id so the caller can clear it on the
    /// server. Requests still in flight finish into the void.
    pub fn reset(&mut self) -> Option<SessionId> {
        self.messages = vec![ChatMessage::assistant(self.reset_message.clone())];
        self.pending = None;
        self.loading = Arc::new(AtomicBool::new(false));
        self.uploading = Arc::new(AtomicBool::new(false));
        self.generation = self.generation.wrapping_add(1);
        info!("conversation reset");
        self.session_id.take()
    }

    /// Backend session issued to a conversation that was reset before the
    /// upload finished. The caller may clear it on the server.
    pub fn take_abandoned_session(&mut self) -> Option<SessionId> {
        self.abandoned.take()
    }

    /// Number of messages a user has sent in this conversation.
    pub fn user_turns(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == ChatRole::User)
            .count()
    }

    // Only forget the staged file if it is the one that was sent.
    fn clear_staged(&mut self, ticket: &UploadTicket) {
        if self
            .pending
            .as_ref()
            .is_some_and(|p| p.path == ticket.path)
        {
            self.pending = None;
        }
    }
}

//! Background tasks for backend calls.
//!
//! Each task owns its ticket and hands it back with the result, so the
//! busy flag stays held until the UI loop has applied the outcome.

use std::sync::Arc;

use lawyer_api::{AskTicket, UploadTicket};
use lawyer_common::SessionId;

use super::core::ChatApp;
use super::event::Event;
use super::types::AppEvent;

impl ChatApp {
    pub(crate) fn spawn_ask(&self, ticket: AskTicket) {
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = ticket.perform(api.as_ref()).await;
            if let Err(e) = &result {
                tracing::warn!("ask failed: {e}");
            }
            let _ = events.send(Event::App(AppEvent::AskFinished { ticket, result }));
        });
    }

    pub(crate) fn spawn_upload(&self, ticket: UploadTicket) {
        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = ticket.perform(api.as_ref()).await;
            if let Err(e) = &result {
                tracing::warn!(file = %ticket.file_name, "upload failed: {e}");
            }
            let _ = events.send(Event::App(AppEvent::UploadFinished { ticket, result }));
        });
    }

    /// Best effort: a failure is only logged.
    pub(crate) fn spawn_clear_session(&self, session_id: SessionId) {
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            match api.clear_session(&session_id).await {
                Ok(()) => tracing::info!(session = %session_id.short(), "server session cleared"),
                Err(e) => tracing::warn!(
                    session = %session_id.short(),
                    "could not clear server session: {e}"
                ),
            }
        });
    }
}

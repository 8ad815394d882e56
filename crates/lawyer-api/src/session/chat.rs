//! Async helpers that run a full request through a [`LegalApi`].

use lawyer_common::Notification;

use crate::document::load_document;
use crate::types::{AskResponse, UploadOutcome};
use crate::{ApiError, LegalApi};

use super::manager::ChatSession;
use super::types::{AskTicket, ChatMessage, UploadTicket};

impl AskTicket {
    /// Send the ticket's request.
    pub async fn perform(&self, api: &dyn LegalApi) -> Result<AskResponse, ApiError> {
        api.ask(&self.request).await
    }
}

impl UploadTicket {
    /// Read the staged file and send it to the endpoint for its kind.
    pub async fn perform(&self, api: &dyn LegalApi) -> Result<UploadOutcome, ApiError> {
        let document = load_document(&self.path, self.max_bytes).await?;
        api.upload(self.kind, document).await
    }
}

impl ChatSession {
    /// Ask a question and wait for the answer (or the error message) to be
    /// appended. Returns `None` if the input was ignored.
    pub async fn ask(&mut self, api: &dyn LegalApi, input: &str) -> Option<&ChatMessage> {
        let ticket = self.begin_ask(input)?;
        let result = ticket.perform(api).await;
        self.finish_ask(ticket, result)
    }

    /// Upload the staged file. Returns `None` if nothing is staged.
    pub async fn upload(&mut self, api: &dyn LegalApi) -> Option<Notification> {
        let ticket = self.begin_upload()?;
        let result = ticket.perform(api).await;
        self.finish_upload(ticket, result)
    }
}

//! Conversation state.
//!
//! A `ChatSession` holds the visible messages, the staged document, the
//! upload kind selection, and the backend session id. Requests are split
//! into `begin_*` (mutates state, returns a ticket) and `finish_*` (applies
//! the result) so the network call can run on another task.

mod chat;
mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::ChatSession;
pub use types::{AskTicket, ChatMessage, PendingUpload, UploadTicket};

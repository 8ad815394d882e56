//! Session value types, request tickets, and the busy guard.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lawyer_common::{ChatRole, UploadKind};

use crate::types::AskRequest;
use crate::ApiError;

/// One entry in the visible conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// A validated file waiting for the user to press upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
    /// Limit the file was validated against; re-checked when it is read.
    pub max_bytes: u64,
}

/// Proof that an ask was started. Hand it back to
/// [`ChatSession::finish_ask`](super::ChatSession::finish_ask) with the result.
///
/// Dropping a ticket without finishing it releases the in-flight flag.
#[derive(Debug)]
pub struct AskTicket {
    pub(crate) generation: u64,
    pub request: AskRequest,
    pub(crate) _guard: BusyGuard,
}

/// Proof that an upload was started; see [`AskTicket`].
#[derive(Debug)]
pub struct UploadTicket {
    pub(crate) generation: u64,
    pub kind: UploadKind,
    pub path: PathBuf,
    pub file_name: String,
    pub max_bytes: u64,
    pub(crate) _guard: BusyGuard,
}

/// Guard that clears a busy flag on drop, so the flag is released even if
/// the request future is cancelled or its ticket is lost.
#[derive(Debug)]
pub(crate) struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    /// Attempt to take the flag. Returns `Err` if it is already held.
    pub(crate) fn acquire(flag: &Arc<AtomicBool>) -> Result<Self, ApiError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(ApiError::Busy);
        }
        Ok(Self {
            flag: Arc::clone(flag),
        })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

//! Internal types and constants for the app state module.

use std::time::Duration;

use lawyer_api::{ApiError, AskResponse, AskTicket, UploadOutcome, UploadTicket};

/// How often the UI ticks (spinner frames, notification expiry).
pub(crate) const TICK_RATE: Duration = Duration::from_millis(100);

/// Results delivered back to the UI loop by request tasks.
#[derive(Debug)]
pub(crate) enum AppEvent {
    AskFinished {
        ticket: AskTicket,
        result: Result<AskResponse, ApiError>,
    },
    UploadFinished {
        ticket: UploadTicket,
        result: Result<UploadOutcome, ApiError>,
    },
}

/// What the input line is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum InputMode {
    /// Composing a question.
    #[default]
    Chat,
    /// Typing the path of a document to attach.
    AttachPath,
}

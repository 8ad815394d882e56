use serde::{Deserialize, Serialize};

/// Every user-triggerable action in the chat client.
///
/// Keybinds and the help line both resolve to an `Action`.
/// The app dispatcher matches on this enum to route to the chat session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Conversation --
    SendMessage,
    NewSession,

    // -- Documents --
    AttachFile,
    RemoveFile,
    ToggleUploadKind,
    Upload,

    // -- Message list --
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollToBottom,

    // -- App --
    Quit,

    // -- Noop --
    None,
}

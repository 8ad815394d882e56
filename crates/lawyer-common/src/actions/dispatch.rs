use super::Action;

impl Action {
    /// Human-readable label for the help line.
    pub fn label(&self) -> &'static str {
        match self {
            Action::SendMessage => "Send",
            Action::NewSession => "New Session",
            Action::AttachFile => "Attach File",
            Action::RemoveFile => "Remove File",
            Action::ToggleUploadKind => "Temp/Permanent",
            Action::Upload => "Upload File",
            Action::ScrollUp(_) => "Scroll Up",
            Action::ScrollDown(_) => "Scroll Down",
            Action::ScrollToBottom => "Scroll to Bottom",
            Action::Quit => "Quit",
            Action::None => "None",
        }
    }

    /// Actions listed in the help line, in display order.
    pub fn help_actions() -> Vec<Action> {
        vec![
            Action::SendMessage,
            Action::AttachFile,
            Action::Upload,
            Action::ToggleUploadKind,
            Action::RemoveFile,
            Action::NewSession,
            Action::Quit,
        ]
    }

    /// Whether this action only makes sense while a file is staged.
    pub fn needs_staged_file(&self) -> bool {
        matches!(
            self,
            Action::RemoveFile | Action::ToggleUploadKind | Action::Upload
        )
    }
}

//! Action dispatch: routes a resolved `Action` to the chat session.

use std::path::PathBuf;

use lawyer_common::{Action, Notification};

use super::core::ChatApp;
use super::types::InputMode;

impl ChatApp {
    /// Execute a single action.
    pub(crate) fn dispatch(&mut self, action: Action) {
        if action.needs_staged_file() && self.session.pending_upload().is_none() {
            tracing::debug!("{action:?} ignored: no file attached");
            return;
        }

        match action {
            Action::SendMessage if self.mode == InputMode::AttachPath => self.submit_path(),
            Action::SendMessage => self.send_message(),
            Action::NewSession => self.new_session(),
            Action::AttachFile => {
                self.path_input.clear();
                self.mode = InputMode::AttachPath;
            }
            Action::RemoveFile => {
                if let Some(removed) = self.session.remove_upload() {
                    tracing::debug!(file = %removed.file_name, "attachment removed");
                }
            }
            Action::ToggleUploadKind => {
                if !self.session.is_uploading() {
                    self.session.toggle_upload_kind();
                }
            }
            Action::Upload => self.start_upload(),
            Action::ScrollUp(n) => self.scroll_offset = self.scroll_offset.saturating_add(n),
            Action::ScrollDown(n) => self.scroll_offset = self.scroll_offset.saturating_sub(n),
            Action::ScrollToBottom => self.follow_newest(),
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_exit = true;
            }
            Action::None => {}
        }
    }

    fn send_message(&mut self) {
        let Some(ticket) = self.session.begin_ask(self.input.text()) else {
            return;
        };
        self.input.clear();
        self.follow_newest();
        self.spawn_ask(ticket);
    }

    fn start_upload(&mut self) {
        if let Some(ticket) = self.session.begin_upload() {
            self.spawn_upload(ticket);
        }
    }

    fn new_session(&mut self) {
        let previous = self.session.reset();
        self.path_input.clear();
        self.mode = InputMode::Chat;
        self.follow_newest();
        self.notify(Notification::info("Session", "New session started."));

        if let Some(id) = previous {
            if self.config.api.clear_session_on_reset {
                self.spawn_clear_session(id);
            }
        }
    }

    /// Validate the typed path and stage it for upload.
    ///
    /// On failure the prompt stays open so the path can be corrected.
    pub(crate) fn submit_path(&mut self) {
        let Some(path) = expand_path(self.path_input.text()) else {
            self.mode = InputMode::Chat;
            return;
        };

        let max_bytes = self.config.upload.max_file_size_bytes();
        let staged = self
            .session
            .stage_upload(&path, max_bytes)
            .map(|p| p.file_name.clone());
        match staged {
            Ok(file_name) => {
                tracing::info!(file = %file_name, "document attached");
                self.path_input.clear();
                self.mode = InputMode::Chat;
            }
            Err(e) => {
                tracing::warn!("cannot attach {}: {e}", path.display());
                self.notify(Notification::error("Attach", e.to_string()));
            }
        }
    }
}

const QUOTES: &[char] = &['"', '\''];

/// Trim, drop surrounding quotes (dragged-in paths), expand `~/`.
fn expand_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix(QUOTES)
        .and_then(|s| s.strip_suffix(QUOTES))
        .unwrap_or(trimmed)
        .trim();
    if unquoted.is_empty() {
        return None;
    }
    if let Some(rest) = unquoted.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Some(home.join(rest));
        }
    }
    Some(PathBuf::from(unquoted))
}

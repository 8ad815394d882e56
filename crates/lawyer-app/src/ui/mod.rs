//! Terminal rendering for the chat.
//!
//! Layout, top to bottom: header, notification line, conversation,
//! attached-document panel (only while a file is staged), input, help.

mod footer;
mod header;
mod markdown;
mod messages;
mod notification;
mod theme;
mod wrap;


use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::app_state::ChatApp;

pub(crate) use theme::Theme;

/// Spinner frames shown while an upload is running.
pub(crate) const SPINNER: [&str; 10] = [
    "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
];

pub(crate) fn draw(frame: &mut Frame, app: &mut ChatApp) {
    let upload_height = if app.session.pending_upload().is_some() {
        3
    } else {
        0
    };
    let [header, notice, conversation, upload, input, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(upload_height),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    header::render(frame, header, app);
    notification::render(frame, notice, app);
    messages::render(frame, conversation, app);
    if upload_height > 0 {
        footer::render_upload(frame, upload, app);
    }
    footer::render_input(frame, input, app);
    footer::render_help(frame, help, app);
}

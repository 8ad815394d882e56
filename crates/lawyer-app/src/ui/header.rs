use lawyer_common::Action;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app_state::ChatApp;

/// Title, current session id, and the new-session hint.
pub(super) fn render(frame: &mut Frame, area: Rect, app: &ChatApp) {
    let theme = &app.theme;
    let muted = Style::new().fg(theme.muted);

    let session = match app.session.session_id() {
        Some(id) => Span::styled(id.short(), Style::new().fg(theme.success)),
        None => Span::styled("None", muted),
    };
    let title = Line::from(vec![
        Span::styled(
            " ⚖ AI Lawyer",
            Style::new().fg(theme.border).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Session ID: ", muted),
        session,
    ]);
    frame.render_widget(Paragraph::new(title), area);

    if let Some(key) = app.registry.keybind_for_action(&Action::NewSession) {
        let hint = Line::from(vec![
            Span::styled(format!("[{key}] "), Style::new().fg(theme.border)),
            Span::styled("New Session ", muted),
        ]);
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Right), area);
    }
}

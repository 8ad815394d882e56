use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app_state::ChatApp;

/// Newest unexpired notification, coloured by level.
pub(super) fn render(frame: &mut Frame, area: Rect, app: &mut ChatApp) {
    let Some(notification) = app.notifications.latest() else {
        return;
    };
    let style = Style::new().fg(app.theme.for_level(notification.level));
    let line = Line::from(Span::styled(format!(" {}", notification.message()), style));
    frame.render_widget(Paragraph::new(line), area);
}

//! The conversation view.

use lawyer_common::ChatRole;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app_state::ChatApp;

use super::markdown::{highlight_citations, render_markdown, MarkdownStyle};
use super::wrap::wrap_lines;

const INDENT: &str = "  ";

/// Every row of the conversation at `width`, oldest first.
pub(super) fn conversation_lines(app: &ChatApp, width: u16) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let body_width = width.saturating_sub(INDENT.len() as u16);
    let citation = Style::new()
        .fg(theme.citation)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for message in app.session.messages() {
        let (label, color) = match message.role {
            ChatRole::User => ("You", theme.user),
            ChatRole::Assistant => ("AI Lawyer", theme.assistant),
        };
        lines.push(Line::from(Span::styled(
            label,
            Style::new().fg(color).add_modifier(Modifier::BOLD),
        )));

        let style = MarkdownStyle {
            text: Style::new().fg(color),
            accent: theme.border,
            muted: theme.muted,
        };
        let mut body = render_markdown(&message.text, style);
        if message.role == ChatRole::Assistant {
            body = body
                .into_iter()
                .map(|line| highlight_citations(line, citation))
                .collect();
        }
        for row in wrap_lines(&body, body_width) {
            let mut spans = vec![Span::raw(INDENT)];
            spans.extend(row.spans);
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
    }

    if app.session.is_loading() {
        let dots = ".".repeat(app.frame % 4);
        lines.push(Line::from(vec![
            Span::styled(
                "AI Lawyer",
                Style::new().fg(theme.assistant).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" is typing{dots}"),
                Style::new().fg(theme.muted).add_modifier(Modifier::ITALIC),
            ),
        ]));
    } else {
        lines.pop();
    }
    lines
}

/// Render the newest rows that fit, shifted up by the scroll offset.
pub(super) fn render(frame: &mut Frame, area: Rect, app: &mut ChatApp) {
    let block = Block::bordered()
        .border_style(Style::new().fg(app.theme.border))
        .title(" Conversation ");
    let inner = block.inner(area);
    let lines = conversation_lines(app, inner.width);

    let height = usize::from(inner.height);
    let max_offset = lines.len().saturating_sub(height);
    let offset = usize::from(app.scroll_offset).min(max_offset);
    app.scroll_offset = u16::try_from(offset).unwrap_or(u16::MAX);
    app.page_height = inner.height;

    let start = max_offset - offset;
    let visible: Vec<Line<'static>> = lines.into_iter().skip(start).take(height).collect();

    let block = if offset > 0 {
        block.title_bottom(
            Line::styled(format!(" ↓ {offset} more "), Style::new().fg(app.theme.muted))
                .right_aligned(),
        )
    } else {
        block
    };
    frame.render_widget(Paragraph::new(visible).block(block), area);
}

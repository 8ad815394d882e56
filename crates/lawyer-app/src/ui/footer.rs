//! Attached-document panel, input line, and help line.

use lawyer_common::{Action, UploadKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app_state::{ChatApp, InputMode};

use super::SPINNER;

/// Human-readable file size.
pub(super) fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

pub(super) fn render_upload(frame: &mut Frame, area: Rect, app: &ChatApp) {
    let Some(pending) = app.session.pending_upload() else {
        return;
    };
    let theme = &app.theme;
    let muted = Style::new().fg(theme.muted);
    let selected_kind = app.session.upload_kind();

    let radio = |kind: UploadKind| {
        if kind == selected_kind {
            Span::styled(
                format!("(●) {}", kind.label()),
                Style::new().fg(theme.border).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("( ) {}", kind.label()), muted)
        }
    };

    let status = if app.session.is_uploading() {
        Span::styled(
            format!("{} Uploading...", SPINNER[app.frame % SPINNER.len()]),
            Style::new().fg(theme.warning),
        )
    } else {
        let key = app
            .registry
            .keybind_for_action(&Action::Upload)
            .unwrap_or_default();
        Span::styled(format!("[{key}] Upload"), Style::new().fg(theme.success))
    };

    let line = Line::from(vec![
        Span::styled(pending.file_name.clone(), Style::new().fg(theme.assistant)),
        Span::styled(format!(" ({})", format_size(pending.size)), muted),
        Span::raw("   "),
        radio(UploadKind::Temp),
        Span::raw("  "),
        radio(UploadKind::Permanent),
        Span::raw("   "),
        status,
    ]);
    let block = Block::bordered()
        .border_style(muted)
        .title(" Attached document ");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

pub(super) fn render_input(frame: &mut Frame, area: Rect, app: &ChatApp) {
    let theme = &app.theme;
    let muted = Style::new().fg(theme.muted);

    let (title, line, placeholder) = match app.mode {
        InputMode::Chat => (
            " Ask a legal question ",
            &app.input,
            "Type your question...",
        ),
        InputMode::AttachPath => (
            " Attach a PDF or TXT file (Enter to attach, Esc to cancel) ",
            &app.path_input,
            "/path/to/document.pdf",
        ),
    };
    let disabled = app.mode == InputMode::Chat && app.session.is_loading();

    let block = Block::bordered()
        .title(title)
        .border_style(if disabled { muted } else { Style::new().fg(theme.border) });
    let inner = block.inner(area);

    if disabled {
        let waiting = Span::styled(
            "Waiting for the answer...",
            muted.add_modifier(Modifier::ITALIC),
        );
        frame.render_widget(Paragraph::new(Line::from(waiting)).block(block), area);
        return;
    }

    if line.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(placeholder, muted)).block(block),
            area,
        );
        frame.set_cursor_position((inner.x, inner.y));
        return;
    }

    let cursor_x = u16::try_from(Span::raw(line.before_cursor()).width()).unwrap_or(u16::MAX);
    let h_scroll = cursor_x.saturating_sub(inner.width.saturating_sub(1));
    frame.render_widget(
        Paragraph::new(line.text())
            .style(Style::new().fg(theme.user))
            .scroll((0, h_scroll))
            .block(block),
        area,
    );
    frame.set_cursor_position((inner.x + cursor_x - h_scroll, inner.y));
}

/// Key hints for the configured bindings, in help order.
pub(super) fn help_line(app: &ChatApp) -> Line<'static> {
    let theme = &app.theme;
    let key_style = Style::new().fg(theme.border);
    let muted = Style::new().fg(theme.muted);

    let mut spans = vec![Span::raw(" ")];
    for action in Action::help_actions() {
        let Some(key) = app.registry.keybind_for_action(&action) else {
            continue;
        };
        spans.push(Span::styled(key, key_style));
        spans.push(Span::styled(format!(" {}  ", action.label()), muted));
    }
    spans.push(Span::styled("↑↓/PgUp/PgDn", key_style));
    spans.push(Span::styled(" Scroll", muted));
    Line::from(spans)
}

pub(super) fn render_help(frame: &mut Frame, area: Rect, app: &ChatApp) {
    frame.render_widget(Paragraph::new(help_line(app)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
    }
}

//! Markdown to styled terminal lines.
//!
//! Soft line breaks are kept as real breaks, the way chat answers are
//! usually written. Citations of the form `(Source: file.pdf)` can be
//! highlighted after rendering.

use std::sync::LazyLock;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use regex::Regex;

static CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(Source: ([^)]+)\)").unwrap());

/// Styles used while rendering one message.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MarkdownStyle {
    pub text: Style,
    pub accent: Color,
    pub muted: Color,
}

/// Container a `Start` event opened; popped by the matching `End`.
#[derive(Debug)]
enum Block {
    Paragraph,
    Heading,
    Inline,
    Link(String),
    List,
    Item,
    CodeBlock,
    Quote,
    Other,
}

struct Renderer {
    style: MarkdownStyle,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    open: Vec<Block>,
    styles: Vec<Style>,
    /// Next number for each open list; `None` for bullet lists.
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    in_code_block: bool,
    /// Visible text of the link being rendered.
    link_text: Option<String>,
}

impl Renderer {
    fn new(style: MarkdownStyle) -> Self {
        Self {
            style,
            lines: Vec::new(),
            current: Vec::new(),
            open: Vec::new(),
            styles: vec![style.text],
            lists: Vec::new(),
            quote_depth: 0,
            in_code_block: false,
            link_text: None,
        }
    }

    fn current_style(&self) -> Style {
        self.styles.last().copied().unwrap_or(self.style.text)
    }

    fn push_style(&mut self, f: impl FnOnce(Style) -> Style) {
        let next = f(self.current_style());
        self.styles.push(next);
    }

    fn pop_style(&mut self) {
        if self.styles.len() > 1 {
            self.styles.pop();
        }
    }

    fn push_text(&mut self, text: &str, style: Style) {
        if !text.is_empty() {
            self.current.push(Span::styled(text.to_string(), style));
        }
    }

    /// Finish the line being built, adding the quote gutter if needed.
    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let mut spans = Vec::with_capacity(self.current.len() + 1);
        if self.quote_depth > 0 {
            spans.push(Span::styled(
                "│ ".repeat(self.quote_depth),
                Style::new().fg(self.style.muted),
            ));
        }
        spans.append(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    /// Separate blocks with one empty line, never two.
    fn blank(&mut self) {
        self.flush();
        if self.lines.last().is_some_and(|l| l.width() > 0) {
            self.lines.push(Line::default());
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let block = match tag {
            Tag::Paragraph => Block::Paragraph,
            Tag::Heading { level, .. } => {
                self.flush();
                let accent = self.style.accent;
                self.push_style(|s| {
                    let s = s.fg(accent).add_modifier(Modifier::BOLD);
                    if level == HeadingLevel::H1 {
                        s.add_modifier(Modifier::UNDERLINED)
                    } else {
                        s
                    }
                });
                Block::Heading
            }
            Tag::Emphasis => {
                self.push_style(|s| s.add_modifier(Modifier::ITALIC));
                Block::Inline
            }
            Tag::Strong => {
                self.push_style(|s| s.add_modifier(Modifier::BOLD));
                Block::Inline
            }
            Tag::Strikethrough => {
                self.push_style(|s| s.add_modifier(Modifier::CROSSED_OUT));
                Block::Inline
            }
            Tag::Link { dest_url, .. } => {
                let accent = self.style.accent;
                self.push_style(|s| s.fg(accent).add_modifier(Modifier::UNDERLINED));
                self.link_text = Some(String::new());
                Block::Link(dest_url.into_string())
            }
            Tag::List(start) => {
                self.flush();
                self.lists.push(start);
                Block::List
            }
            Tag::Item => {
                self.flush();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let m = format!("{n}. ");
                        *n += 1;
                        m
                    }
                    _ => "• ".to_string(),
                };
                let indent = "  ".repeat(depth);
                let muted = Style::new().fg(self.style.muted);
                self.push_text(&format!("{indent}{marker}"), muted);
                Block::Item
            }
            Tag::CodeBlock(_) => {
                self.flush();
                self.in_code_block = true;
                Block::CodeBlock
            }
            Tag::BlockQuote(_) => {
                self.flush();
                self.quote_depth += 1;
                Block::Quote
            }
            _ => Block::Other,
        };
        self.open.push(block);
    }

    fn end(&mut self) {
        let Some(block) = self.open.pop() else {
            return;
        };
        match block {
            Block::Paragraph => {
                // Paragraphs inside list items stay tight
                if matches!(self.open.last(), Some(Block::Item)) {
                    self.flush();
                } else {
                    self.blank();
                }
            }
            Block::Heading => {
                self.pop_style();
                self.blank();
            }
            Block::Inline => self.pop_style(),
            Block::Link(url) => {
                self.pop_style();
                let text = self.link_text.take().unwrap_or_default();
                // Autolinks already show their target
                if !url.is_empty() && text.trim() != url {
                    let muted = self.current_style().fg(self.style.muted);
                    self.push_text(&format!(" ({url})"), muted);
                }
            }
            Block::List => {
                self.flush();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank();
                }
            }
            Block::Item => self.flush(),
            Block::CodeBlock => {
                self.in_code_block = false;
                self.blank();
            }
            Block::Quote => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.blank();
            }
            Block::Other => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(link) = self.link_text.as_mut() {
            link.push_str(text);
        }
        if !self.in_code_block {
            self.push_text(text, self.current_style());
            return;
        }
        let code = Style::new().fg(self.style.accent);
        for line in text.lines() {
            self.push_text(&format!("  {line}"), code);
            self.flush();
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        while self.lines.last().is_some_and(|l| l.width() == 0) {
            self.lines.pop();
        }
        self.lines
    }
}

/// Render markdown into lines. Nothing is wrapped here.
pub(crate) fn render_markdown(source: &str, style: MarkdownStyle) -> Vec<Line<'static>> {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut r = Renderer::new(style);

    for event in Parser::new_ext(source, options) {
        match event {
            Event::Start(tag) => r.start(tag),
            Event::End(_) => r.end(),
            Event::Text(t) => r.text(&t),
            Event::Code(code) => {
                let s = r.current_style().fg(style.accent);
                r.push_text(&format!("`{code}`"), s);
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                let s = r.current_style();
                r.push_text(html.trim_end_matches('\n'), s);
            }
            Event::SoftBreak | Event::HardBreak => r.flush(),
            Event::Rule => {
                r.flush();
                r.lines
                    .push(Line::styled("─".repeat(24), Style::new().fg(style.muted)));
                r.blank();
            }
            Event::TaskListMarker(done) => {
                let s = r.current_style();
                r.push_text(if done { "[x] " } else { "[ ] " }, s);
            }
            _ => {}
        }
    }
    r.finish()
}

/// Restyle every `(Source: ...)` citation in `line`.
///
/// Matching runs over the whole line, so a citation split across spans
/// by emphasis or underscores is still found.
pub(crate) fn highlight_citations(line: Line<'static>, citation: Style) -> Line<'static> {
    let plain: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
    let ranges: Vec<(usize, usize)> = CITATION
        .find_iter(&plain)
        .map(|m| (m.start(), m.end()))
        .collect();
    if ranges.is_empty() {
        return line;
    }

    let mut out: Vec<Span<'static>> = Vec::new();
    let mut offset = 0;
    for span in line.spans {
        let content = span.content.as_ref();
        let span_start = offset;
        let span_end = offset + content.len();
        offset = span_end;

        // Cut the span wherever a citation starts or ends inside it
        let mut cuts = vec![span_start];
        for &(s, e) in &ranges {
            for b in [s, e] {
                if b > span_start && b < span_end {
                    cuts.push(b);
                }
            }
        }
        cuts.push(span_end);
        cuts.sort_unstable();
        cuts.dedup();

        for pair in cuts.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a == b {
                continue;
            }
            let piece = &content[a - span_start..b - span_start];
            let inside = ranges.iter().any(|&(s, e)| a >= s && b <= e);
            let style = if inside {
                span.style.patch(citation)
            } else {
                span.style
            };
            out.push(Span::styled(piece.to_string(), style));
        }
    }
    Line::from(out).style(line.style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> MarkdownStyle {
        MarkdownStyle {
            text: Style::new(),
            accent: Color::Cyan,
            muted: Color::Gray,
        }
    }

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn paragraphs_are_separated_by_one_blank_line() {
        let lines = render_markdown("First.\n\nSecond.", style());
        assert_eq!(plain(&lines), vec!["First.", "", "Second."]);
    }

    #[test]
    fn soft_breaks_become_line_breaks() {
        let lines = render_markdown("line one\nline two", style());
        assert_eq!(plain(&lines), vec!["line one", "line two"]);
    }

    #[test]
    fn strong_text_is_bold() {
        let lines = render_markdown("a **binding** contract", style());
        let bold = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "binding")
            .unwrap();
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn lists_get_markers() {
        let lines = render_markdown("- offer\n- acceptance\n\n1. first\n2. second", style());
        let text = plain(&lines);
        assert!(text.contains(&"• offer".to_string()));
        assert!(text.contains(&"• acceptance".to_string()));
        assert!(text.contains(&"1. first".to_string()));
        assert!(text.contains(&"2. second".to_string()));
    }

    #[test]
    fn code_blocks_are_indented() {
        let lines = render_markdown("```\nfn main() {}\n```", style());
        assert_eq!(plain(&lines), vec!["  fn main() {}"]);
    }

    #[test]
    fn headings_are_bold_and_accented() {
        let lines = render_markdown("## Liability\n\nText", style());
        assert_eq!(plain(&lines)[0], "Liability");
        let span = &lines[0].spans[0];
        assert_eq!(span.style.fg, Some(Color::Cyan));
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn link_target_follows_its_text() {
        let lines = render_markdown("See [Rule 12](https://law.example/r12) now.", style());
        assert_eq!(plain(&lines), vec!["See Rule 12 (https://law.example/r12) now."]);
        let target = lines[0]
            .spans
            .iter()
            .find(|s| s.content.contains("https://"))
            .unwrap();
        assert_eq!(target.style.fg, Some(Color::Gray));
        assert!(!target.style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn autolink_is_not_repeated() {
        let lines = render_markdown("<https://law.example/r12>", style());
        assert_eq!(plain(&lines), vec!["https://law.example/r12"]);
    }

    #[test]
    fn quotes_get_a_gutter() {
        let lines = render_markdown("> quoted clause", style());
        assert_eq!(plain(&lines), vec!["│ quoted clause"]);
    }

    #[test]
    fn no_trailing_blank_lines() {
        let lines = render_markdown("Only.\n\n", style());
        assert_eq!(plain(&lines), vec!["Only."]);
    }

    #[test]
    fn citation_is_highlighted() {
        let citation = Style::new().fg(Color::Magenta);
        let line = Line::from("See clause 4 (Source: lease.pdf) for details.");
        let out = highlight_citations(line, citation);

        let cited: Vec<_> = out
            .spans
            .iter()
            .filter(|s| s.style.fg == Some(Color::Magenta))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(cited, vec!["(Source: lease.pdf)"]);
        let all: String = out.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(all, "See clause 4 (Source: lease.pdf) for details.");
    }

    #[test]
    fn citation_across_spans_is_highlighted() {
        let citation = Style::new().fg(Color::Magenta);
        let line = Line::from(vec![
            Span::raw("x (Source: my"),
            Span::styled("_contract", Style::new().add_modifier(Modifier::ITALIC)),
            Span::raw(".pdf) y"),
        ]);
        let out = highlight_citations(line, citation);
        let cited: String = out
            .spans
            .iter()
            .filter(|s| s.style.fg == Some(Color::Magenta))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(cited, "(Source: my_contract.pdf)");
        // The italic part keeps its own modifier
        assert!(out
            .spans
            .iter()
            .any(|s| s.content == "_contract" && s.style.add_modifier.contains(Modifier::ITALIC)));
    }

    #[test]
    fn two_citations_on_one_line() {
        let citation = Style::new().fg(Color::Magenta);
        let line = Line::from("(Source: a.pdf) and (Source: b.txt)");
        let out = highlight_citations(line, citation);
        let cited: Vec<_> = out
            .spans
            .iter()
            .filter(|s| s.style.fg == Some(Color::Magenta))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(cited, vec!["(Source: a.pdf)", "(Source: b.txt)"]);
    }

    #[test]
    fn line_without_citation_is_unchanged() {
        let line = Line::from("Nothing cited (see above).");
        let out = highlight_citations(line.clone(), Style::new().fg(Color::Magenta));
        assert_eq!(out, line);
    }
}

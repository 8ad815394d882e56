//! Word wrapping for styled lines.
//!
//! Wrapping happens before scrolling so the message view knows exactly how
//! many rows the conversation takes.

use ratatui::text::{Line, Span};

fn str_width(s: &str) -> usize {
    Span::raw(s).width()
}

/// Split into alternating runs of whitespace and non-whitespace.
fn tokens(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev_ws: Option<bool> = None;
    for (i, c) in s.char_indices() {
        let ws = c.is_whitespace();
        if prev_ws.is_some_and(|p| p != ws) {
            out.push(&s[start..i]);
            start = i;
        }
        prev_ws = Some(ws);
    }
    if start < s.len() {
        out.push(&s[start..]);
    }
    out
}

struct Wrapper {
    width: usize,
    out: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    used: usize,
}

impl Wrapper {
    fn break_line(&mut self) {
        while self
            .current
            .last()
            .is_some_and(|s| s.content.chars().all(char::is_whitespace))
        {
            self.current.pop();
        }
        self.out.push(Line::from(std::mem::take(&mut self.current)));
        self.used = 0;
    }

    fn push(&mut self, text: &str, span: &Span<'_>, width: usize) {
        self.current.push(Span::styled(text.to_string(), span.style));
        self.used += width;
    }

    fn word(&mut self, word: &str, span: &Span<'_>) {
        let w = str_width(word);
        if self.used + w <= self.width {
            self.push(word, span, w);
            return;
        }
        if w <= self.width {
            self.break_line();
            self.push(word, span, w);
            return;
        }
        // Longer than a whole row: hard split
        let mut chunk = String::new();
        let mut chunk_w = 0;
        for c in word.chars() {
            let cw = str_width(c.encode_utf8(&mut [0; 4]));
            if self.used + chunk_w + cw > self.width {
                if !chunk.is_empty() {
                    self.push(&chunk, span, chunk_w);
                    chunk.clear();
                    chunk_w = 0;
                }
                if self.used > 0 {
                    self.break_line();
                }
            }
            chunk.push(c);
            chunk_w += cw;
        }
        if !chunk.is_empty() {
            self.push(&chunk, span, chunk_w);
        }
    }

    fn space(&mut self, space: &str, span: &Span<'_>) {
        let w = str_width(space);
        if self.used + w <= self.width {
            self.push(space, span, w);
        } else if self.used > 0 {
            // Whitespace at a break is dropped
            self.break_line();
        }
    }
}

/// Wrap one line to `width` columns, preferring breaks between words.
pub(crate) fn wrap_line(line: &Line<'static>, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    if width == 0 || line.width() <= width {
        return vec![line.clone()];
    }

    let mut w = Wrapper {
        width,
        out: Vec::new(),
        current: Vec::new(),
        used: 0,
    };
    for span in &line.spans {
        for token in tokens(&span.content) {
            if token.starts_with(char::is_whitespace) {
                w.space(token, span);
            } else {
                w.word(token, span);
            }
        }
    }
    if !w.current.is_empty() {
        w.break_line();
    }
    w.out
}

pub(crate) fn wrap_lines(lines: &[Line<'static>], width: u16) -> Vec<Line<'static>> {
    lines.iter().flat_map(|l| wrap_line(l, width)).collect()
}

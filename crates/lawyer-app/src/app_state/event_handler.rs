//! Turning terminal and request events into state changes.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use lawyer_common::Action;
use lawyer_platform::combo_from_key_event;

use super::core::ChatApp;
use super::event::Event;
use super::input_line::InputLine;
use super::types::{AppEvent, InputMode};

impl ChatApp {
    pub(crate) fn handle_event(&mut self, event: Event) {
        match event {
            Event::Tick => self.frame = self.frame.wrapping_add(1),
            Event::Terminal(CrosstermEvent::Key(key)) => self.handle_key(key),
            Event::Terminal(CrosstermEvent::Paste(text)) => self.handle_paste(&text),
            Event::Terminal(_) => {}
            Event::App(app_event) => self.handle_app_event(app_event),
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AskFinished { ticket, result } => {
                if self.session.finish_ask(ticket, result).is_some() {
                    self.follow_newest();
                }
            }
            AppEvent::UploadFinished { ticket, result } => {
                if let Some(notification) = self.session.finish_upload(ticket, result) {
                    self.notify(notification);
                }
                if let Some(id) = self.session.take_abandoned_session() {
                    if self.config.api.clear_session_on_reset {
                        self.spawn_clear_session(id);
                    }
                }
            }
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if self.mode == InputMode::AttachPath && self.handle_path_key(&key) {
            return;
        }

        // Configured keybinds take precedence over text entry
        if let Some(combo) = combo_from_key_event(&key) {
            if let Some(action) = self.registry.lookup(&combo).cloned() {
                self.dispatch(action);
                return;
            }
        }

        if self.mode == InputMode::Chat {
            if let Some(action) = self.scroll_action(&key) {
                self.dispatch(action);
                return;
            }
            if self.session.is_loading() {
                return;
            }
        }

        edit_line(self.active_input(), &key);
    }

    fn handle_paste(&mut self, text: &str) {
        if self.mode == InputMode::Chat && self.session.is_loading() {
            return;
        }
        self.active_input().insert_str(text);
    }

    /// Enter and Esc while typing a path.
    fn handle_path_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                self.submit_path();
                true
            }
            KeyCode::Esc => {
                self.path_input.clear();
                self.mode = InputMode::Chat;
                true
            }
            _ => false,
        }
    }

    fn scroll_action(&self, key: &KeyEvent) -> Option<Action> {
        let step = self.config.chat.scroll_step;
        let page = self.page_height.saturating_sub(1).max(1);
        match key.code {
            KeyCode::Up => Some(Action::ScrollUp(step)),
            KeyCode::Down => Some(Action::ScrollDown(step)),
            KeyCode::PageUp => Some(Action::ScrollUp(page)),
            KeyCode::PageDown => Some(Action::ScrollDown(page)),
            KeyCode::End if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ScrollToBottom)
            }
            KeyCode::Esc => Some(Action::ScrollToBottom),
            _ => None,
        }
    }

    fn active_input(&mut self) -> &mut InputLine {
        match self.mode {
            InputMode::Chat => &mut self.input,
            InputMode::AttachPath => &mut self.path_input,
        }
    }
}

fn edit_line(line: &mut InputLine, key: &KeyEvent) {
    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
    match key.code {
        KeyCode::Char(c) if plain => line.insert(c),
        KeyCode::Backspace => line.backspace(),
        KeyCode::Delete => line.delete(),
        KeyCode::Left => line.move_left(),
        KeyCode::Right => line.move_right(),
        KeyCode::Home => line.move_home(),
        KeyCode::End => line.move_end(),
        _ => {}
    }
}

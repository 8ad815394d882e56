//! ChatApp struct definition and constructor.

use std::sync::Arc;

use tokio::sync::mpsc;

use lawyer_api::{ChatSession, LegalApi};
use lawyer_common::notifications::{Notification, NotificationQueue};
use lawyer_config::LawyerConfig;
use lawyer_platform::input::KeybindRegistry;

use crate::ui::Theme;

use super::event::Event;
use super::input_line::InputLine;
use super::types::InputMode;

/// Top-level application state, owned by the UI loop.
pub struct ChatApp {
    pub(crate) config: LawyerConfig,
    pub(crate) registry: KeybindRegistry,
    pub(crate) session: ChatSession,
    pub(crate) notifications: NotificationQueue,
    pub(crate) theme: Theme,

    // Input
    pub(crate) mode: InputMode,
    pub(crate) input: InputLine,
    pub(crate) path_input: InputLine,

    /// Rows scrolled up from the newest message; 0 follows the conversation.
    pub(crate) scroll_offset: u16,
    /// Height of the message viewport at the last draw.
    pub(crate) page_height: u16,
    /// Advances every tick; drives the spinner and typing dots.
    pub(crate) frame: usize,

    // Backend
    pub(crate) api: Arc<dyn LegalApi>,
    pub(crate) events: mpsc::UnboundedSender<Event>,

    pub(crate) should_exit: bool,
}

impl ChatApp {
    pub(crate) fn new(
        config: LawyerConfig,
        registry: KeybindRegistry,
        api: Arc<dyn LegalApi>,
        events: mpsc::UnboundedSender<Event>,
    ) -> Self {
        let session = ChatSession::new(
            config.chat.greeting.as_str(),
            config.chat.new_session_message.as_str(),
        )
        .with_upload_kind(config.upload.default_kind);
        let notifications = NotificationQueue::new(config.notifications.capacity as usize);
        let theme = Theme::from_config(&config.colors);

        Self {
            config,
            registry,
            session,
            notifications,
            theme,
            mode: InputMode::default(),
            input: InputLine::default(),
            path_input: InputLine::default(),
            scroll_offset: 0,
            page_height: 0,
            frame: 0,
            api,
            events,
            should_exit: false,
        }
    }

    /// Queue a notification with the configured lifetime.
    pub(crate) fn notify(&mut self, notification: Notification) {
        let ttl = self.config.notifications.ttl();
        self.notifications.push(notification.with_ttl(ttl));
    }

    pub(crate) fn follow_newest(&mut self) {
        self.scroll_offset = 0;
    }
}

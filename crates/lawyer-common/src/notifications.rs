use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default lifetime of a notification before it disappears.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// Severity level for in-app notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient status message shown above the conversation.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    fn with_level(
        level: NotificationLevel,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
            created_at: Instant::now(),
            ttl: DEFAULT_TTL,
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Info, title, body)
    }

    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Success, title, body)
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Warning, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Error, title, body)
    }

    /// Override the time-to-live (the config decides how long messages stay up).
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns `true` if this notification has exceeded its TTL.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    /// The text shown to the user.
    pub fn message(&self) -> &str {
        &self.body
    }
}

/// A bounded queue of in-app notifications that auto-evicts expired entries.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    /// Creates a new queue with the given maximum capacity.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a notification, evicting expired entries first.
    /// If still at capacity after eviction, the oldest entry is removed.
    pub fn push(&mut self, notification: Notification) {
        self.evict_expired();
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// Returns all currently visible (non-expired) notifications.
    pub fn visible(&mut self) -> Vec<&Notification> {
        self.evict_expired();
        self.items.iter().collect()
    }

    /// The newest visible notification, if any.
    pub fn latest(&mut self) -> Option<&Notification> {
        self.evict_expired();
        self.items.back()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of notifications currently in the queue (including expired).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn evict_expired(&mut self) {
        self.items.retain(|n| !n.is_expired());
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(8)
    }
}

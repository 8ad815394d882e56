//! Terminal event pump.
//!
//! A background task merges ticks and crossterm input into one channel;
//! request tasks push their results into the same channel.

use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures_util::{FutureExt, StreamExt};
use lawyer_common::LawyerError;
use tokio::sync::mpsc;

use super::types::{AppEvent, TICK_RATE};

#[derive(Debug)]
pub(crate) enum Event {
    /// Emitted on a regular schedule.
    Tick,
    Terminal(CrosstermEvent),
    App(AppEvent),
}

pub(crate) struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create the channel and spawn the task that reads the terminal.
    pub(crate) fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let task = EventTask::new(sender.clone());
        tokio::spawn(task.run());
        Self { sender, receiver }
    }

    pub(crate) fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    pub(crate) async fn next(&mut self) -> Result<Event, LawyerError> {
        self.receiver
            .recv()
            .await
            .ok_or_else(|| LawyerError::Ui("event channel closed".into()))
    }
}

struct EventTask {
    sender: mpsc::UnboundedSender<Event>,
}

impl EventTask {
    fn new(sender: mpsc::UnboundedSender<Event>) -> Self {
        Self { sender }
    }

    async fn run(self) {
        let mut reader = EventStream::new();
        let mut tick = tokio::time::interval(TICK_RATE);
        loop {
            let tick_delay = tick.tick();
            let terminal_event = reader.next().fuse();
            tokio::select! {
                _ = self.sender.closed() => break,
                _ = tick_delay => self.send(Event::Tick),
                maybe = terminal_event => match maybe {
                    Some(Ok(evt)) => self.send(Event::Terminal(evt)),
                    Some(Err(e)) => tracing::warn!("terminal read error: {e}"),
                    None => break,
                },
            }
        }
        tracing::debug!("event task stopped");
    }

    fn send(&self, event: Event) {
        let _ = self.sender.send(event);
    }
}

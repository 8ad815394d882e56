//! Interactive chat: application state and the terminal event loop.
//!
//! A single task owns [`ChatApp`]; network calls run on spawned tasks and
//! report back through the event channel.

mod core;
mod dispatch;
mod event;
mod event_handler;
mod input_line;
mod request_task;
mod run;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::core::ChatApp;
pub(crate) use types::InputMode;
pub use run::run_chat;

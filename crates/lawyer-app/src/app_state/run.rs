//! Terminal setup and the draw/handle loop.

use std::sync::Arc;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use lawyer_common::LawyerError;
use lawyer_config::LawyerConfig;
use lawyer_platform::input::KeybindRegistry;

use crate::{build_api_client, ui};

use super::core::ChatApp;
use super::event::EventHandler;

/// Run the interactive chat until the user quits.
pub async fn run_chat(config: LawyerConfig) -> Result<(), LawyerError> {
    let api = build_api_client(&config).map_err(|e| LawyerError::Api(e.display_message()))?;

    let registry = KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let mut terminal = ratatui::try_init()?;
    if let Err(e) = execute!(std::io::stdout(), EnableBracketedPaste) {
        tracing::debug!("bracketed paste unavailable: {e}");
    }

    let events = EventHandler::new();
    let app = ChatApp::new(config, registry, Arc::new(api), events.sender());
    let result = app.run(&mut terminal, events).await;

    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();
    result
}

impl ChatApp {
    async fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        mut events: EventHandler,
    ) -> Result<(), LawyerError> {
        tracing::info!("Entering event loop");
        while !self.should_exit {
            terminal.draw(|frame| ui::draw(frame, &mut self))?;
            let event = events.next().await?;
            self.handle_event(event);
        }
        Ok(())
    }
}

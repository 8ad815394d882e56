use clap::{Parser, Subcommand};

/// AI Lawyer: a terminal client for the legal assistant backend.
#[derive(Parser, Debug)]
#[command(name = "ai-lawyer", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Backend base URL override (takes precedence over config and environment).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive chat (default).
    Chat,

    /// Ask a single question and print the answer.
    Ask {
        question: String,

        /// Reuse a session id returned by an earlier temporary upload.
        #[arg(long)]
        session_id: Option<String>,
    },

    /// Upload a PDF or TXT document.
    Upload {
        file: String,

        /// Add the document to the shared knowledge base instead of this session.
        #[arg(long)]
        permanent: bool,
    },

    /// Print the effective configuration as JSON.
    Config,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }

    /// Whether the run takes over the terminal.
    pub fn is_interactive(&self) -> bool {
        self.command() == Command::Chat
    }
}

pub fn parse() -> Args {
    Args::parse()
}

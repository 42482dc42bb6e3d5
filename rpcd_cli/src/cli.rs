//! Command-line definition.

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "rpcd-cli",
    version,
    about = "rpcd client",
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Show this usage.
    #[arg(short = '?', long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Set host.
    #[arg(short = 'h', long, env = "RPCD_HOST", default_value = "localhost")]
    pub host: String,

    /// Set port.
    #[arg(short = 'p', long, env = "RPCD_PORT", default_value_t = 8080)]
    pub port: u16,

    /// API base URL, overrides host and port.
    #[arg(long, env = "RPCD_API")]
    pub api: Option<String>,

    /// Print the raw JSON replies.
    #[arg(long)]
    pub json: bool,

    /// Debug logging.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub action: Option<Action>,
}

impl Cli {
    pub fn base_url(&self) -> String {
        match &self.api {
            Some(api) => api.clone(),
            None => format!("http://{}:{}", self.host, self.port),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// List commands or layouts.
    List {
        /// `commands` or `layouts`
        target: Option<String>,
    },
    /// Applies the given layout.
    Apply {
        layout: Option<String>,
        /// Display the layout belongs to.
        #[arg(short, long)]
        display: Option<String>,
    },
    /// Runs the given command. Every argument is in format key=value.
    Run {
        command: Option<String>,
        arguments: Vec<String>,
        /// Run command in fullscreen.
        #[arg(short, long)]
        fullscreen: bool,
        /// Run in given frame.
        #[arg(short = 'F', long)]
        frame: Option<u32>,
        /// Display of the frame.
        #[arg(short, long)]
        display: Option<String>,
    },
    /// Stop the given command.
    Stop { command: Option<String> },
    /// Move a running command to a frame of its display.
    Move {
        command: Option<String>,
        frame: Option<u32>,
    },
    /// Resets the server.
    Reset,
    /// Print the state of the server.
    State,
    /// Poll the state until interrupted.
    Watch {
        /// Seconds between polls.
        #[arg(long, default_value_t = 5)]
        interval: u64,
    },
}

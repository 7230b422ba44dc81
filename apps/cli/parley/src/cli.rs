//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "parley")]
#[command(about = "Parley - send and read messages from the terminal", long_about = None)]
pub struct Cli {
    /// Directory holding config.json, the token store and parley.log
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Server origin, overriding config and PARLEY_BASE_URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Log in and store the session token
    Login { username: String, password: String },

    /// Create an account (does not log in)
    Register { username: String, password: String },

    /// End the session
    Logout,

    /// List users you can message
    Users,

    /// Show your messages
    Messages,

    /// Send a message to a user's message token
    Send {
        #[arg(value_name = "RECIPIENT_TOKEN")]
        recipient: String,
        message: String,
    },

    /// Navigate to a client path such as /messages or /send-message/{token}
    Open { path: String },

    /// Show session and connection details
    Status,

    /// Save server settings to config.json and show the saved config
    Config {
        /// Server origin to save
        #[arg(long, value_name = "URL")]
        server: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
    },
}

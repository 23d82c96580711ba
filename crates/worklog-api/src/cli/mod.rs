//! CLI command definitions for the `worklog` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod categories;
pub mod chat;
pub mod telegram;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Log installation and removal work through a button-driven chat.
#[derive(Parser)]
#[command(name = "worklog", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Talk to the bot in this terminal.
    Chat {
        /// User id to chat as. Entries are kept per user.
        #[arg(short, long, default_value = "1")]
        user: i64,

        /// Keep custom categories in memory instead of the category file.
        #[arg(long)]
        ephemeral: bool,
    },

    /// Run the bot against the Telegram Bot API (long polling).
    Telegram {
        /// Bot token issued by @BotFather.
        #[arg(long, env = "WORKLOG_TELEGRAM_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Inspect or extend the persisted category list.
    #[command(alias = "cat")]
    Categories {
        #[command(subcommand)]
        action: categories::CategoryCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Default log filter for the chosen verbosity; `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,worklog_core=debug,worklog_infra=debug,worklog=debug",
            _ => "trace",
        }
    }
}

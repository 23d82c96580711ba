//! Infrastructure layer for the worklog bot.
//!
//! Contains implementations of the ports defined in `worklog-core`: the
//! JSON-file category repository, plus the `config.toml` loader, data
//! directory resolution, and the Telegram Bot API client.

pub mod category;
pub mod config;
pub mod filesystem;
pub mod telegram;

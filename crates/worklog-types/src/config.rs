//! Global configuration types for the worklog bot.
//!
//! `GlobalConfig` represents the top-level `config.toml` in the data
//! directory. Every field has a default so an empty or missing file works.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Categories offered before the user has added any of their own.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Сервер", "Кроссировка", "Облако", "Конструктив"];

/// Top-level configuration.
///
/// Loaded from `~/.worklog/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Where the category list is persisted. Relative paths are resolved
    /// against the data directory; `None` means `{data_dir}/categories.json`.
    #[serde(default)]
    pub categories_file: Option<PathBuf>,

    /// Seed list used when no category file exists yet.
    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,

    #[serde(default)]
    pub telegram: TelegramConfig,
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            categories_file: None,
            default_categories: default_categories(),
            telegram: TelegramConfig::default(),
        }
    }
}

/// Settings for the Telegram long-polling transport.
///
/// The bot token is deliberately not here; it comes from the command line or
/// the `WORKLOG_TELEGRAM_TOKEN` environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Long-poll timeout passed to `getUpdates`, in seconds.
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,

    /// Pause after a failed poll before trying again, in seconds.
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
}

fn default_api_base_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_poll_timeout_secs() -> u64 {
    30
}

fn default_retry_delay_secs() -> u64 {
    5
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            poll_timeout_secs: default_poll_timeout_secs(),
            retry_delay_secs: default_retry_delay_secs(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Opaque identifier of a chat user.
///
/// Wraps a 64-bit integer because that is what chat platforms hand out
/// (Telegram user ids do not fit in 32 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A finalized work-log record.
///
/// Created only when a dialogue completes with every field collected.
/// Never edited afterwards; the only mutation is deletion from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub owner: UserId,
    /// Display text, e.g. "Монтаж 3 Сервера".
    pub text: String,
    /// Optional URL attached at the last dialogue step.
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(owner: UserId, text: impl Into<String>, link: Option<String>) -> Self {
        Self {
            owner,
            text: text.into(),
            link,
            created_at: Utc::now(),
        }
    }

    /// Single-line rendering used in confirmations and summaries.
    pub fn display_line(&self) -> String {
        match &self.link {
            Some(link) => format!("{} - {}", self.text, link),
            None => self.text.clone(),
        }
    }
}

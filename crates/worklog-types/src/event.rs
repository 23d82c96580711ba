//! Inbound dialogue events and their callback-data wire format.
//!
//! Button presses travel as short strings (`add`, `work_montage`,
//! `category_Сервер`, `remove_0`, ...). `Callback` implements `Display` and
//! `FromStr` for that format so every transport encodes buttons the same way.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::dialogue::WorkType;

/// Callback value of the "custom category" button.
pub const CUSTOM_CATEGORY_TOKEN: &str = "custom";

/// Top-level menu and cancellation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    Add,
    Delete,
    Final,
    Clear,
    Cancel,
    CancelDelete,
}

impl MenuAction {
    fn as_str(&self) -> &'static str {
        match self {
            MenuAction::Add => "add",
            MenuAction::Delete => "delete",
            MenuAction::Final => "final",
            MenuAction::Clear => "clear",
            MenuAction::Cancel => "cancel",
            MenuAction::CancelDelete => "cancel_delete",
        }
    }
}

/// Choice made on the category menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryChoice {
    Existing(String),
    Custom,
}

/// A button press.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Callback {
    Menu(MenuAction),
    WorkType(WorkType),
    Category(CategoryChoice),
    SkipLink,
    /// Delete the entry at this zero-based position.
    Remove(usize),
}

impl fmt::Display for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Menu(action) => f.write_str(action.as_str()),
            Callback::WorkType(wt) => write!(f, "work_{}", wt.token()),
            Callback::Category(CategoryChoice::Custom) => {
                write!(f, "category_{CUSTOM_CATEGORY_TOKEN}")
            }
            Callback::Category(CategoryChoice::Existing(name)) => write!(f, "category_{name}"),
            Callback::SkipLink => f.write_str("skip_link"),
            Callback::Remove(index) => write!(f, "remove_{index}"),
        }
    }
}

impl FromStr for Callback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let menu = match s {
            "add" => Some(MenuAction::Add),
            "delete" => Some(MenuAction::Delete),
            "final" => Some(MenuAction::Final),
            "clear" => Some(MenuAction::Clear),
            "cancel" => Some(MenuAction::Cancel),
            "cancel_delete" => Some(MenuAction::CancelDelete),
            _ => None,
        };
        if let Some(action) = menu {
            return Ok(Callback::Menu(action));
        }
        if s == "skip_link" {
            return Ok(Callback::SkipLink);
        }

        if let Some(token) = s.strip_prefix("work_") {
            return token.parse().map(Callback::WorkType);
        }
        if let Some(name) = s.strip_prefix("category_") {
            let choice = if name == CUSTOM_CATEGORY_TOKEN {
                CategoryChoice::Custom
            } else {
                CategoryChoice::Existing(name.to_string())
            };
            return Ok(Callback::Category(choice));
        }
        if let Some(index) = s.strip_prefix("remove_") {
            return index
                .parse()
                .map(Callback::Remove)
                .map_err(|_| format!("invalid remove index: '{index}'"));
        }

        Err(format!("unknown callback data: '{s}'"))
    }
}

/// Anything a user can send to the dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The `/start` command.
    Start,
    Callback(Callback),
    /// Free text message.
    Text(String),
}

impl Event {
    /// Classify a chat message: `/start` (with optional `@botname` suffix or
    /// arguments) is the start command, anything else is free text.
    pub fn from_message(text: &str) -> Self {
        let first = text.split_whitespace().next().unwrap_or("");
        let command = first.split('@').next().unwrap_or("");
        if command == "/start" {
            Event::Start
        } else {
            Event::Text(text.to_string())
        }
    }
}

impl From<Callback> for Event {
    fn from(callback: Callback) -> Self {
        Event::Callback(callback)
    }
}

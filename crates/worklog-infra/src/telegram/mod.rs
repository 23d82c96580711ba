//! Telegram Bot API transport.
//!
//! [`TelegramClient`] speaks HTTPS to the Bot API; the free functions here
//! translate between Bot API payloads and dialogue events/replies.

pub mod client;
pub mod types;

pub use client::TelegramClient;

use tracing::warn;

use worklog_types::entry::UserId;
use worklog_types::event::{Callback, Event};
use worklog_types::reply::{Button, Keyboard};

use types::{InlineKeyboardButton, InlineKeyboardMarkup, Update};

/// Bot API limit on `callback_data`, in bytes.
pub const MAX_CALLBACK_DATA_BYTES: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("{method} rejected ({code:?}): {description}")]
    Api {
        method: String,
        code: Option<i64>,
        description: String,
    },

    #[error("unexpected response: {0}")]
    Deserialization(String),
}

/// An update reduced to what the dialogue needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Inbound {
    pub user: UserId,
    pub chat_id: i64,
    pub event: Event,
}

/// Map an update to a dialogue event.
///
/// Returns `None` for updates the bot does not react to: non-text messages,
/// messages without a sender, callbacks with unknown data or without the
/// originating chat.
pub fn inbound_from_update(update: &Update) -> Option<Inbound> {
    if let Some(message) = &update.message {
        let from = message.from.as_ref()?;
        let text = message.text.as_deref()?;
        return Some(Inbound {
            user: UserId(from.id),
            chat_id: message.chat.id,
            event: Event::from_message(text),
        });
    }

    let query = update.callback_query.as_ref()?;
    let chat_id = query.message.as_ref()?.chat.id;
    let data = query.data.as_deref()?;
    match data.parse::<Callback>() {
        Ok(callback) => Some(Inbound {
            user: UserId(query.from.id),
            chat_id,
            event: Event::Callback(callback),
        }),
        Err(err) => {
            warn!(update_id = update.update_id, %err, "ignoring unknown callback data");
            None
        }
    }
}

/// Whether a button's callback data fits the Bot API limit.
fn fits_callback_limit(button: &Button) -> bool {
    button.callback.to_string().len() <= MAX_CALLBACK_DATA_BYTES
}

/// Labels of the buttons [`inline_keyboard`] has to leave out.
pub fn oversized_buttons(keyboard: &Keyboard) -> Vec<&str> {
    keyboard
        .buttons()
        .filter(|button| !fits_callback_limit(button))
        .map(|button| button.label.as_str())
        .collect()
}

/// Line appended to a message whose keyboard lost buttons, so the user
/// knows those choices exist but cannot be pressed in Telegram.
pub fn hidden_buttons_notice(labels: &[&str]) -> Option<String> {
    if labels.is_empty() {
        return None;
    }
    Some(format!(
        "Слишком длинные названия, кнопки не показаны: {}",
        labels.join(", ")
    ))
}

/// Convert a reply keyboard to Bot API markup.
///
/// Buttons whose callback data exceeds the Bot API limit are left out; one
/// oversized button would otherwise make Telegram reject the whole message.
pub fn inline_keyboard(keyboard: &Keyboard) -> InlineKeyboardMarkup {
    let inline_keyboard = keyboard
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .filter(|button| fits_callback_limit(button))
                .map(|button| InlineKeyboardButton {
                    text: button.label.clone(),
                    callback_data: button.callback.to_string(),
                })
                .collect::<Vec<_>>()
        })
        .filter(|row| !row.is_empty())
        .collect();

    InlineKeyboardMarkup { inline_keyboard }
}

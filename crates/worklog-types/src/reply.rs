//! Outbound replies: one text payload plus an optional button keyboard.

use serde::{Deserialize, Serialize};

use crate::event::Callback;

/// A selectable choice shown under a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub callback: Callback,
}

impl Button {
    pub fn new(label: impl Into<String>, callback: Callback) -> Self {
        Self {
            label: label.into(),
            callback,
        }
    }
}

/// Buttons laid out in rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn new(rows: Vec<Vec<Button>>) -> Self {
        Self { rows }
    }

    /// Buttons in reading order (row by row).
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// What the dialogue says back after handling one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MenuAction;

    #[test]
    fn test_buttons_in_reading_order() {
        let kb = Keyboard::new(vec![
            vec![
                Button::new("a", Callback::Menu(MenuAction::Add)),
                Button::new("b", Callback::Menu(MenuAction::Delete)),
            ],
            vec![Button::new("c", Callback::SkipLink)],
        ]);
        let labels: Vec<&str> = kb.buttons().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_plain_reply_omits_keyboard_in_json() {
        let json = serde_json::to_value(Reply::text("Сколько штук?")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "Сколько штук?" }));
    }
}

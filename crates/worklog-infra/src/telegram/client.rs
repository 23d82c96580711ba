//! TelegramClient: thin async wrapper over the Bot API methods the bot uses.
//!
//! The bot token is embedded in every method URL, so it is kept in a
//! [`SecretString`] and request errors are stripped of their URL before
//! they are turned into [`TelegramError`]s.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;

use worklog_types::reply::Keyboard;

use super::types::{AnswerCallbackQuery, ApiResponse, GetUpdates, SendMessage, Update};
use super::{inline_keyboard, TelegramError};

/// Extra time on top of the long-poll timeout before the HTTP request gives up.
const HTTP_GRACE: Duration = Duration::from_secs(10);

pub struct TelegramClient {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
}

impl TelegramClient {
    pub fn new(
        token: SecretString,
        base_url: impl Into<String>,
        poll_timeout: Duration,
    ) -> Result<Self, TelegramError> {
        let client = reqwest::Client::builder()
            .timeout(poll_timeout + HTTP_GRACE)
            .build()
            .map_err(|e| TelegramError::Http(e.without_url().to_string()))?;

        Ok(Self {
            client,
            token,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.base_url, self.token.expose_secret())
    }

    /// Long-poll for updates after `offset`.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TelegramError> {
        let body = GetUpdates {
            offset,
            timeout: timeout_secs,
            allowed_updates: vec!["message".to_string(), "callback_query".to_string()],
        };
        self.call("getUpdates", &body).await
    }

    /// Send `text` to `chat_id`, optionally with an inline keyboard.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), TelegramError> {
        let body = SendMessage {
            chat_id,
            text: text.to_string(),
            reply_markup: keyboard.map(inline_keyboard),
        };
        let _: serde_json::Value = self.call("sendMessage", &body).await?;
        Ok(())
    }

    /// Dismiss the loading indicator on a pressed button.
    pub async fn answer_callback_query(&self, id: &str) -> Result<(), TelegramError> {
        let body = AnswerCallbackQuery {
            callback_query_id: id.to_string(),
        };
        let _: bool = self.call("answerCallbackQuery", &body).await?;
        Ok(())
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T, TelegramError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await
            .map_err(|e| TelegramError::Http(e.without_url().to_string()))?;

        let status = response.status();
        let envelope: ApiResponse<T> = response.json().await.map_err(|e| {
            TelegramError::Deserialization(format!(
                "{method} (HTTP {status}): {}",
                e.without_url()
            ))
        })?;

        if !envelope.ok {
            return Err(TelegramError::Api {
                method: method.to_string(),
                code: envelope.error_code,
                description: envelope
                    .description
                    .unwrap_or_else(|| format!("HTTP {status}")),
            });
        }

        envelope
            .result
            .ok_or_else(|| TelegramError::Deserialization(format!("{method}: missing result")))
    }
}

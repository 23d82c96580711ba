//! Telegram long-polling runner.
//!
//! Polls `getUpdates`, feeds each message or button press to the dialogue
//! worker and sends the reply back to the originating chat. Transport
//! failures are logged and polling resumes after `retry_delay_secs`.

use std::time::Duration;

use console::style;
use secrecy::SecretString;
use tracing::{debug, error, info, warn};

use worklog_core::dialogue::DialogueHandle;
use worklog_infra::telegram::types::Update;
use worklog_infra::telegram::{
    hidden_buttons_notice, inbound_from_update, oversized_buttons, TelegramClient,
};
use worklog_types::error::DialogueError;

use crate::state::AppState;

pub async fn run_telegram(state: &AppState, token: SecretString, quiet: bool) -> anyhow::Result<()> {
    let settings = &state.config.telegram;
    let client = TelegramClient::new(
        token,
        settings.api_base_url.as_str(),
        Duration::from_secs(settings.poll_timeout_secs),
    )?;
    let retry_delay = Duration::from_secs(settings.retry_delay_secs);

    if !quiet {
        println!(
            "  {} worklog Telegram bot polling {}",
            style("⚡").bold(),
            style(&settings.api_base_url).cyan()
        );
        println!("  {}", style("Press Ctrl+C to stop").dim());
    }
    info!(poll_timeout_secs = settings.poll_timeout_secs, "telegram polling started");

    let shutdown = crate::shutdown_signal();
    tokio::pin!(shutdown);

    let mut offset: Option<i64> = None;
    loop {
        let polled = tokio::select! {
            _ = &mut shutdown => break,
            polled = client.get_updates(offset, settings.poll_timeout_secs) => polled,
        };

        match polled {
            Ok(updates) => {
                for update in updates {
                    offset = Some(update.update_id + 1);
                    process_update(&state.dialogue, &client, &update).await?;
                }
            }
            Err(e) => {
                warn!(error = %e, retry_in_secs = retry_delay.as_secs(), "getUpdates failed");
                tokio::select! {
                    _ = &mut shutdown => break,
                    _ = tokio::time::sleep(retry_delay) => {}
                }
            }
        }
    }

    info!("telegram polling stopped");
    if !quiet {
        println!("\n  Bot stopped.");
    }
    Ok(())
}

/// Handle one update. Only a dead dialogue worker is fatal.
async fn process_update(
    dialogue: &DialogueHandle,
    client: &TelegramClient,
    update: &Update,
) -> Result<(), DialogueError> {
    if let Some(query) = &update.callback_query {
        if let Err(e) = client.answer_callback_query(&query.id).await {
            warn!(error = %e, "answerCallbackQuery failed");
        }
    }

    let Some(inbound) = inbound_from_update(update) else {
        debug!(update_id = update.update_id, "update ignored");
        return Ok(());
    };

    match dialogue.handle(inbound.user, inbound.event).await {
        Ok(Some(reply)) => {
            let hidden = reply.keyboard.as_ref().map(oversized_buttons).unwrap_or_default();
            let text = match hidden_buttons_notice(&hidden) {
                Some(notice) => {
                    info!(user = %inbound.user, buttons = ?hidden, "buttons hidden from keyboard");
                    format!("{}\n\n{notice}", reply.text)
                }
                None => reply.text.clone(),
            };
            if let Err(e) = client
                .send_message(inbound.chat_id, &text, reply.keyboard.as_ref())
                .await
            {
                error!(user = %inbound.user, error = %e, "sendMessage failed");
            }
        }
        Ok(None) => debug!(user = %inbound.user, "event not applicable in current stage"),
        Err(DialogueError::Category(e)) => {
            error!(user = %inbound.user, error = %e, "category storage failed");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

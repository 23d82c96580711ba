//! Main chat loop.
//!
//! Reads lines, turns them into dialogue events, sends them to the worker
//! and prints the replies. The last keyboard shown stays pressable until a
//! new one replaces it.

use std::io::Write;

use console::style;
use rustyline_async::SharedWriter;
use tracing::{error, info};

use worklog_types::entry::UserId;
use worklog_types::error::DialogueError;
use worklog_types::event::Event;
use worklog_types::reply::Keyboard;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::{button_at, render_reply};

/// Run the interactive chat loop as `user`.
pub async fn run_chat_loop(state: &AppState, user: UserId) -> anyhow::Result<()> {
    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, mut writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    print_welcome_banner(
        &mut writer,
        user,
        &state.categories_file.display().to_string(),
    )?;
    info!(%user, "chat session started");

    let mut keyboard: Option<Keyboard> = None;
    send(state, user, Event::Start, &mut keyboard, &mut writer).await?;

    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                writeln!(writer, "\n  {}", style("Press Ctrl+D to exit, or keep going.").dim())?;
                continue;
            }
            InputEvent::Message(text) if text.is_empty() => continue,
            InputEvent::Message(text) => text,
        };

        let event = match commands::parse(&text) {
            None => Event::Text(text),
            Some(ChatCommand::Start) => Event::Start,
            Some(ChatCommand::Press(n)) => {
                match keyboard.as_ref().and_then(|kb| button_at(kb, n)) {
                    Some(button) => Event::Callback(button.callback.clone()),
                    None => {
                        writeln!(
                            writer,
                            "\n  {} No button {n} on the current menu.\n",
                            style("?").yellow().bold()
                        )?;
                        continue;
                    }
                }
            }
            Some(ChatCommand::Help) => {
                commands::print_help(&mut writer)?;
                continue;
            }
            Some(ChatCommand::Exit) => break,
            Some(ChatCommand::Unknown(name)) => {
                writeln!(
                    writer,
                    "\n  {} Unknown command: {}. Type /help for available commands.\n",
                    style("?").yellow().bold(),
                    style(name).dim()
                )?;
                continue;
            }
        };

        send(state, user, event, &mut keyboard, &mut writer).await?;
    }

    writeln!(writer, "\n  {}", style("Session ended.").dim())?;
    chat_input.flush();
    info!(%user, "chat session ended");
    Ok(())
}

/// Deliver one event and print the outcome.
///
/// Storage failures are reported and the chat goes on; a stopped worker
/// ends the loop.
async fn send(
    state: &AppState,
    user: UserId,
    event: Event,
    keyboard: &mut Option<Keyboard>,
    writer: &mut SharedWriter,
) -> anyhow::Result<()> {
    match state.dialogue.handle(user, event).await {
        Ok(Some(reply)) => {
            writer.write_all(render_reply(&reply).as_bytes())?;
            if let Some(kb) = reply.keyboard {
                *keyboard = Some(kb);
            }
        }
        Ok(None) => {
            writeln!(
                writer,
                "\n  {}\n",
                style("(nothing to do with that right now)").dim()
            )?;
        }
        Err(DialogueError::Category(e)) => {
            error!(%user, error = %e, "category storage failed");
            writeln!(
                writer,
                "\n  {} Category storage error: {e}\n",
                style("!").red().bold()
            )?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

//! Interactive terminal chat with the bot.
//!
//! Replies are printed with their buttons numbered; `/N` presses button N.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;

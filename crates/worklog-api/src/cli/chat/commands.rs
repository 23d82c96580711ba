//! Slash command parsing for the chat loop.
//!
//! Commands start with `/`. A bare number presses the button with that
//! number on the most recent keyboard.

use std::io::Write;

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Exit the chat session.
    Exit,
    /// Send `/start` to the bot.
    Start,
    /// Press the button with this 1-based number.
    Press(usize),
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    let cmd = trimmed.strip_prefix('/')?;
    let cmd = cmd.split_whitespace().next().unwrap_or("").to_lowercase();

    if !cmd.is_empty() && cmd.bytes().all(|b| b.is_ascii_digit()) {
        return Some(match cmd.parse::<usize>() {
            Ok(n) if n > 0 => ChatCommand::Press(n),
            _ => ChatCommand::Unknown(format!("/{cmd}")),
        });
    }

    match cmd.as_str() {
        "help" | "h" | "?" => Some(ChatCommand::Help),
        "exit" | "quit" | "q" => Some(ChatCommand::Exit),
        "start" => Some(ChatCommand::Start),
        _ => Some(ChatCommand::Unknown(format!("/{cmd}"))),
    }
}

/// Print the help text listing all available commands.
pub fn print_help(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", style("Available commands:").bold())?;
    writeln!(out)?;
    writeln!(out, "  {}      {}", style("/N").cyan(), "Press button N of the last menu")?;
    writeln!(out, "  {}  {}", style("/start").cyan(), "Show the main menu")?;
    writeln!(out, "  {}   {}", style("/help").cyan(), "Show this help message")?;
    writeln!(out, "  {}   {}", style("/exit").cyan(), "End the chat session")?;
    writeln!(out)?;
    writeln!(out, "  {}", style("Anything else is sent to the bot as text.").dim())?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_press() {
        assert_eq!(parse("/1"), Some(ChatCommand::Press(1)));
        assert_eq!(parse("  /12 "), Some(ChatCommand::Press(12)));
    }

    #[test]
    fn test_parse_press_zero_is_unknown() {
        assert_eq!(parse("/0"), Some(ChatCommand::Unknown("/0".to_string())));
    }

    #[test]
    fn test_parse_start() {
        assert_eq!(parse("/start"), Some(ChatCommand::Start));
        assert_eq!(parse("/START"), Some(ChatCommand::Start));
    }

    #[test]
    fn test_parse_help_and_exit() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("https://example.com/1"), None);
        assert_eq!(parse("5"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}

//! Welcome banner display for chat sessions.

use std::io::Write;

use console::style;

use worklog_types::entry::UserId;

/// Print the banner shown when a chat session starts.
pub fn print_welcome_banner(out: &mut impl Write, user: UserId, categories_file: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {} {}", "🛠", style("worklog").cyan().bold())?;
    writeln!(out, "  {}", style("Учёт монтажа и демонтажа").dim())?;
    writeln!(out)?;
    writeln!(out, "  {}  {}", style("User:").bold(), style(user).dim())?;
    writeln!(out, "  {}  {}", style("Categories:").bold(), style(categories_file).dim())?;
    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        style("Type /N to press button N, /help for commands, Ctrl+D to exit").dim()
    )?;
    writeln!(out, "  {}", style("---").dim())?;
    writeln!(out)
}

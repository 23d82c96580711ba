//! Terminal rendering of bot replies.
//!
//! Keyboards are flattened into numbered buttons, one keyboard row per
//! line, so they can be pressed with `/N`.

use console::style;

use worklog_types::reply::{Button, Keyboard, Reply};

/// Format a reply for the terminal, ending with a newline.
pub fn render_reply(reply: &Reply) -> String {
    let mut out = String::new();
    out.push('\n');
    for line in reply.text.lines() {
        out.push_str(&format!("  {} {}\n", style("│").cyan(), line));
    }

    if let Some(keyboard) = &reply.keyboard {
        out.push('\n');
        let mut number = 0;
        for row in &keyboard.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|button| {
                    number += 1;
                    format!("{} {}", style(format!("[{number}]")).yellow().bold(), button.label)
                })
                .collect();
            out.push_str(&format!("  {}\n", cells.join("   ")));
        }
    }

    out.push('\n');
    out
}

/// The button numbered `n` (1-based, reading order).
pub fn button_at(keyboard: &Keyboard, n: usize) -> Option<&Button> {
    n.checked_sub(1).and_then(|i| keyboard.buttons().nth(i))
}

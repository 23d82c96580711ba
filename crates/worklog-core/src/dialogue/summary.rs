use worklog_types::entry::LogEntry;

/// Render entries as a numbered list (`1) ...`), blank line between items.
///
/// Links are appended as ` - {link}` only when present. Returns an empty
/// string for an empty slice; callers show their own "nothing here" text.
pub fn render_summary(entries: &[LogEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}) {}", i + 1, entry.display_line()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

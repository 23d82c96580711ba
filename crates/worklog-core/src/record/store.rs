use std::collections::HashMap;

use worklog_types::entry::{LogEntry, UserId};
use worklog_types::error::RecordError;

/// Ordered log entries keyed by owner.
///
/// Positions are the user-facing handle for deletion, so each list keeps
/// insertion order and closes gaps on removal. Lives for the process only.
#[derive(Debug, Default)]
pub struct RecordStore {
    entries: HashMap<UserId, Vec<LogEntry>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the end of `user`'s list, creating the list if needed.
    pub fn append(&mut self, user: UserId, entry: LogEntry) {
        self.entries.entry(user).or_default().push(entry);
    }

    /// Entries of `user` in insertion order (empty if none).
    pub fn list(&self, user: UserId) -> &[LogEntry] {
        self.entries.get(&user).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, user: UserId) -> usize {
        self.list(user).len()
    }

    pub fn is_empty(&self, user: UserId) -> bool {
        self.len(user) == 0
    }

    /// Remove and return the entry at `index`; later entries shift down by one.
    pub fn remove_at(&mut self, user: UserId, index: usize) -> Result<LogEntry, RecordError> {
        let len = self.len(user);
        match self.entries.get_mut(&user) {
            Some(list) if index < list.len() => Ok(list.remove(index)),
            _ => Err(RecordError::IndexOutOfRange { index, len }),
        }
    }

    /// Drop every entry of `user`.
    pub fn clear(&mut self, user: UserId) {
        self.entries.insert(user, Vec::new());
    }
}

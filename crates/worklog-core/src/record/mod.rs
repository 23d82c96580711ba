//! Per-user, in-memory storage of finalized log entries.

pub mod store;

pub use store::RecordStore;

//! Shared domain types for the worklog bot.
//!
//! This crate contains the types used across the workspace: log entries,
//! dialogue stages and sessions, inbound events, outbound replies, global
//! configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod dialogue;
pub mod entry;
pub mod error;
pub mod event;
pub mod reply;

//! Business logic and repository trait definitions for the worklog bot.
//!
//! This crate defines the category storage "port" that the infrastructure
//! layer implements, plus everything with real decision logic: numeral
//! agreement, the per-user record store, and the dialogue state machine.
//! It depends only on `worklog-types` -- never on `worklog-infra` or any
//! filesystem/network crate.

pub mod category;
pub mod dialogue;
pub mod inflect;
pub mod record;

//! REST API request handlers.

pub mod categories;
pub mod entries;
pub mod events;

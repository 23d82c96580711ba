//! The "add record" conversation and the menus around it.
//!
//! - `engine` -- `DialogueEngine`, the per-user state machine plus the stores it owns
//! - `keyboard` -- button layouts for every prompt
//! - `summary` -- numbered summary rendering
//! - `worker` -- single-task event loop and the cloneable `DialogueHandle`

pub mod engine;
pub mod keyboard;
pub mod summary;
pub mod worker;

pub use engine::DialogueEngine;
pub use worker::{spawn_dialogue_worker, DialogueHandle};

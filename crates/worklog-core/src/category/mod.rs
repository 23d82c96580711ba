//! Category list persistence port and the registry service built on it.
//!
//! `CategoryRepository` is implemented in `worklog-infra` (JSON file) and by
//! `InMemoryCategoryRepository` here for tests and ephemeral runs.

pub mod memory;
pub mod registry;
pub mod repository;

pub use memory::InMemoryCategoryRepository;
pub use registry::CategoryRegistry;
pub use repository::CategoryRepository;

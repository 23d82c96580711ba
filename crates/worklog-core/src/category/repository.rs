//! Category list storage trait.
//!
//! Defines the interface for persisting the shared category list.
//! Implementations live in worklog-infra.

use worklog_types::error::CategoryError;

/// Trait for loading and overwriting the persisted category list.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait CategoryRepository: Send + Sync {
    /// Load the stored list. Returns `None` if nothing has been stored yet.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<Vec<String>>, CategoryError>> + Send;

    /// Replace the stored list. Readers never observe a partially written list.
    fn save(
        &self,
        categories: &[String],
    ) -> impl std::future::Future<Output = Result<(), CategoryError>> + Send;
}

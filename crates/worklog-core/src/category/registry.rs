//! Category registry service.
//!
//! Wraps a `CategoryRepository` with the seed fallback and the
//! deduplicating "add if absent" rule. The list is re-read from storage on
//! every call so edits made by another process (or by hand) show up in the
//! next menu.

use tracing::{debug, info};

use worklog_types::error::CategoryError;

use super::repository::CategoryRepository;

/// Ordered, duplicate-free list of service categories.
pub struct CategoryRegistry<R: CategoryRepository> {
    repo: R,
    defaults: Vec<String>,
}

impl<R: CategoryRepository> CategoryRegistry<R> {
    /// Create a registry over `repo`, falling back to `defaults` when nothing
    /// has been persisted yet.
    pub fn new(repo: R, defaults: Vec<String>) -> Self {
        Self {
            repo,
            defaults: dedup(defaults),
        }
    }

    /// Access the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Current category list in display order.
    pub async fn load(&self) -> Result<Vec<String>, CategoryError> {
        match self.repo.load().await? {
            Some(stored) => Ok(dedup(stored)),
            None => {
                debug!("no stored categories, using defaults");
                Ok(self.defaults.clone())
            }
        }
    }

    /// Overwrite the stored list (duplicates dropped, first occurrence wins).
    pub async fn save(&self, categories: &[String]) -> Result<(), CategoryError> {
        self.repo.save(&dedup(categories.to_vec())).await
    }

    /// Append `name` and persist, unless an identical entry already exists.
    ///
    /// Membership is an exact, case-sensitive comparison. Returns whether
    /// the list changed.
    pub async fn add_if_absent(&self, name: &str) -> Result<bool, CategoryError> {
        let mut categories = self.load().await?;
        if categories.iter().any(|c| c == name) {
            return Ok(false);
        }
        categories.push(name.to_string());
        self.repo.save(&categories).await?;
        info!(category = name, total = categories.len(), "category added");
        Ok(true)
    }
}

fn dedup(categories: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(categories.len());
    for category in categories {
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::InMemoryCategoryRepository;

    fn defaults() -> Vec<String> {
        vec!["Сервер".to_string(), "Облако".to_string()]
    }

    #[tokio::test]
    async fn test_load_falls_back_to_defaults() {
        let registry = CategoryRegistry::new(InMemoryCategoryRepository::new(), defaults());
        assert_eq!(registry.load().await.unwrap(), defaults());
        // Falling back does not write anything
        assert!(registry.repository().stored().is_none());
    }

    #[tokio::test]
    async fn test_load_prefers_stored_list() {
        let repo = InMemoryCategoryRepository::with_categories(vec!["Стойка".to_string()]);
        let registry = CategoryRegistry::new(repo, defaults());
        assert_eq!(registry.load().await.unwrap(), vec!["Стойка"]);
    }

    #[tokio::test]
    async fn test_add_if_absent_appends_and_persists() {
        let registry = CategoryRegistry::new(InMemoryCategoryRepository::new(), defaults());

        assert!(registry.add_if_absent("Стойка").await.unwrap());

        assert_eq!(
            registry.repository().stored(),
            Some(vec![
                "Сервер".to_string(),
                "Облако".to_string(),
                "Стойка".to_string()
            ])
        );
    }

    #[tokio::test]
    async fn test_add_same_name_twice_persists_once() {
        let registry = CategoryRegistry::new(InMemoryCategoryRepository::new(), defaults());

        assert!(registry.add_if_absent("Стойка").await.unwrap());
        assert!(!registry.add_if_absent("Стойка").await.unwrap());

        let stored = registry.repository().stored().unwrap();
        assert_eq!(stored.iter().filter(|c| *c == "Стойка").count(), 1);
    }

    #[tokio::test]
    async fn test_membership_is_case_sensitive() {
        let registry = CategoryRegistry::new(InMemoryCategoryRepository::new(), defaults());
        assert!(registry.add_if_absent("сервер").await.unwrap());
        assert_eq!(registry.load().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_existing_default_is_not_written() {
        let registry = CategoryRegistry::new(InMemoryCategoryRepository::new(), defaults());
        assert!(!registry.add_if_absent("Облако").await.unwrap());
        assert!(registry.repository().stored().is_none());
    }

    #[tokio::test]
    async fn test_duplicates_are_dropped_on_load_and_save() {
        let repo = InMemoryCategoryRepository::with_categories(vec![
            "a".to_string(),
            "b".to_string(),
            "a".to_string(),
        ]);
        let registry = CategoryRegistry::new(repo, defaults());
        assert_eq!(registry.load().await.unwrap(), vec!["a", "b"]);

        registry
            .save(&["x".to_string(), "x".to_string(), "y".to_string()])
            .await
            .unwrap();
        assert_eq!(
            registry.repository().stored(),
            Some(vec!["x".to_string(), "y".to_string()])
        );
    }
}

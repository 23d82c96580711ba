use std::sync::Mutex;

use worklog_types::error::CategoryError;

use super::repository::CategoryRepository;

/// Category repository that keeps the list in process memory.
///
/// Backs `worklog chat --ephemeral` and the core test suites.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    stored: Mutex<Option<Vec<String>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already persisted list.
    pub fn with_categories(categories: Vec<String>) -> Self {
        Self {
            stored: Mutex::new(Some(categories)),
        }
    }

    /// Snapshot of what is currently stored.
    pub fn stored(&self) -> Option<Vec<String>> {
        self.stored.lock().ok().and_then(|guard| guard.clone())
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    async fn load(&self) -> Result<Option<Vec<String>>, CategoryError> {
        let guard = self
            .stored
            .lock()
            .map_err(|e| CategoryError::Io(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, categories: &[String]) -> Result<(), CategoryError> {
        let mut guard = self
            .stored
            .lock()
            .map_err(|e| CategoryError::Io(e.to_string()))?;
        *guard = Some(categories.to_vec());
        Ok(())
    }
}

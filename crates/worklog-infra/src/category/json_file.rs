//! Category list stored as a pretty-printed JSON array.
//!
//! ```json
//! [
//!     "Сервер",
//!     "Кроссировка"
//! ]
//! ```
//!
//! Non-ASCII text is written as-is (serde_json never escapes it). Writes go
//! to a sibling temp file that is then renamed over the target, so a reader
//! sees either the old list or the new one.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use worklog_core::category::CategoryRepository;
use worklog_types::error::CategoryError;

/// `CategoryRepository` backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileCategoryRepository {
    path: PathBuf,
}

impl JsonFileCategoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Four-space indented JSON array.
fn to_pretty_json(categories: &[String]) -> Result<String, CategoryError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    categories
        .serialize(&mut ser)
        .map_err(|e| CategoryError::Serialize(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| CategoryError::Serialize(e.to_string()))
}

impl CategoryRepository for JsonFileCategoryRepository {
    async fn load(&self) -> Result<Option<Vec<String>>, CategoryError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no category file");
                return Ok(None);
            }
            Err(err) => {
                return Err(CategoryError::Io(format!(
                    "{}: {err}",
                    self.path.display()
                )));
            }
        };

        let categories: Vec<String> = serde_json::from_str(&content)
            .map_err(|e| CategoryError::Parse(format!("{}: {e}", self.path.display())))?;
        Ok(Some(categories))
    }

    async fn save(&self, categories: &[String]) -> Result<(), CategoryError> {
        let json = to_pretty_json(categories)?;
        let io_err = |e: std::io::Error| CategoryError::Io(format!("{}: {e}", self.path.display()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, json).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        debug!(path = %self.path.display(), count = categories.len(), "categories saved");
        Ok(())
    }
}

//! Data directory layout.
//!
//! Everything the bot writes lives under one directory:
//! `config.toml` and (by default) `categories.json`.

use std::path::{Path, PathBuf};

/// File name of the global configuration inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Default file name of the persisted category list.
pub const CATEGORIES_FILE: &str = "categories.json";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `WORKLOG_DATA_DIR` environment variable
/// 2. `~/.worklog`
/// 3. `.worklog` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("WORKLOG_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".worklog");
    }

    PathBuf::from(".worklog")
}

/// Path of the category list: the configured override (resolved against
/// `data_dir` when relative) or `{data_dir}/categories.json`.
pub fn categories_path(data_dir: &Path, configured: Option<&Path>) -> PathBuf {
    match configured {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => data_dir.join(path),
        None => data_dir.join(CATEGORIES_FILE),
    }
}

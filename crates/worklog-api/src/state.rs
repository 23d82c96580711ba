//! Application state wiring the dialogue worker to its storage.
//!
//! AppState is shared by every front end (terminal chat, Telegram runner,
//! REST API). It owns the handle to the single dialogue worker; cloning the
//! state clones the handle, not the engine.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use worklog_core::category::{CategoryRegistry, InMemoryCategoryRepository};
use worklog_core::dialogue::{spawn_dialogue_worker, DialogueEngine, DialogueHandle};
use worklog_infra::category::JsonFileCategoryRepository;
use worklog_infra::config::{load_global_config, resolve_categories_file};
use worklog_infra::filesystem::resolve_data_dir;
use worklog_types::config::GlobalConfig;

/// Category registry pinned to the JSON file repository.
pub type ConcreteCategoryRegistry = CategoryRegistry<JsonFileCategoryRepository>;

#[derive(Clone)]
pub struct AppState {
    pub dialogue: DialogueHandle,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
    pub categories_file: PathBuf,
}

impl AppState {
    /// Resolve the data directory, load `config.toml`, start the worker.
    ///
    /// With `ephemeral`, the worker keeps custom categories in memory and
    /// never touches the category file.
    pub async fn init(ephemeral: bool) -> anyhow::Result<Self> {
        Self::with_data_dir(&resolve_data_dir(), ephemeral).await
    }

    pub async fn with_data_dir(data_dir: &Path, ephemeral: bool) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;

        let config = load_global_config(data_dir).await;
        let categories_file = resolve_categories_file(data_dir, &config);
        tracing::debug!(
            data_dir = %data_dir.display(),
            categories = %categories_file.display(),
            "state initialized"
        );

        // Each worker stops by itself once the last handle is dropped
        let dialogue = if ephemeral {
            let registry = CategoryRegistry::new(
                InMemoryCategoryRepository::new(),
                config.default_categories.clone(),
            );
            spawn_dialogue_worker(DialogueEngine::new(registry)).0
        } else {
            let registry = build_registry(&categories_file, &config);
            spawn_dialogue_worker(DialogueEngine::new(registry)).0
        };

        Ok(Self {
            dialogue,
            config: Arc::new(config),
            data_dir: data_dir.to_path_buf(),
            categories_file,
        })
    }

    /// A registry over the configured category file.
    ///
    /// Used directly by the `categories` commands; the dialogue worker owns
    /// its own instance.
    pub fn category_registry(&self) -> ConcreteCategoryRegistry {
        build_registry(&self.categories_file, &self.config)
    }
}

fn build_registry(path: &Path, config: &GlobalConfig) -> ConcreteCategoryRegistry {
    CategoryRegistry::new(
        JsonFileCategoryRepository::new(path),
        config.default_categories.clone(),
    )
}

use std::path::{Path, PathBuf};

use anyhow::Context;
use ov_config::OvConfig;
use ov_store::Registry;

use crate::cli::GlobalFlags;

/// Shared application resources loaded once at startup.
pub struct AppContext {
    pub config: OvConfig,
    pub store_path: PathBuf,
    pub registry: Registry,
}

impl AppContext {
    /// Load the registry from the resolved store path. A missing store file
    /// yields a freshly seeded registry.
    pub fn load(config: OvConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let store_path = resolve_store_path(&config, flags);
        let registry = Registry::load(&store_path)
            .with_context(|| format!("failed to load store at {}", store_path.display()))?;

        Ok(Self {
            config,
            store_path,
            registry,
        })
    }

    /// Persist the registry back to the store file.
    pub fn save(&self) -> anyhow::Result<()> {
        ensure_parent_dir(&self.store_path)?;
        self.registry
            .save(&self.store_path)
            .with_context(|| format!("failed to save store at {}", self.store_path.display()))
    }
}

/// `--store` wins over `store.path` from config.
#[must_use]
pub fn resolve_store_path(config: &OvConfig, flags: &GlobalFlags) -> PathBuf {
    flags
        .store
        .as_ref()
        .map_or_else(|| config.store.path_buf(), PathBuf::from)
}

/// Create the parent directory of `path` if it has one and it is missing.
pub fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))
        }
        _ => Ok(()),
    }
}

use anyhow::Context;
use ov_config::OvConfig;
use ov_core::responses::InitResponse;
use ov_store::Registry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::{ensure_parent_dir, resolve_store_path};
use crate::output::output;

/// Handle `ovt init`.
pub fn handle(args: &InitArgs, config: &OvConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store_path = resolve_store_path(config, flags);
    let exists = store_path.exists();

    let registry = if exists && !args.force {
        tracing::info!(path = %store_path.display(), "store already exists; leaving it untouched");
        Registry::load(&store_path)
            .with_context(|| format!("failed to load store at {}", store_path.display()))?
    } else {
        let registry = Registry::seeded();
        ensure_parent_dir(&store_path)?;
        registry
            .save(&store_path)
            .with_context(|| format!("failed to write store at {}", store_path.display()))?;
        if exists {
            tracing::warn!(path = %store_path.display(), "re-seeded existing store");
        }
        registry
    };

    let response = InitResponse {
        store_path: store_path.display().to_string(),
        created: !exists || args.force,
        families: registry.families().map(|family| family.id.clone()).collect(),
    };
    output(&response, flags.format)
}

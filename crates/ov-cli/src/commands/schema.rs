use ov_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `ovt schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    match args.type_name.as_deref() {
        Some(name) if !args.list => {
            let schema = registry.get(name).ok_or_else(|| {
                anyhow::anyhow!("unknown schema type '{name}' (see `ovt schema --list`)")
            })?;
            output(schema, flags.format)
        }
        _ => output(&registry.list(), flags.format),
    }
}

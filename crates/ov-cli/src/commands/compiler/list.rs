use ov_core::entities::CompilerVersion;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    family: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);

    let versions: Vec<&CompilerVersion> = match family {
        Some(family) => {
            if ctx.registry.family(family).is_none() {
                anyhow::bail!("unknown compiler family '{family}'");
            }
            ctx.registry.versions(family).collect()
        }
        None => ctx.registry.all_versions().collect(),
    };
    let rows = versions
        .into_iter()
        .take(limit)
        .collect::<Vec<_>>();

    output(&rows, flags.format)
}

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    family: &str,
    version: &str,
    binary: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let registered = ctx
        .registry
        .register_compiler_version(family, version, binary)?;
    ctx.save()?;

    output(&registered, flags.format)
}

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Print the comparison, then fail the command if the binary changed.
pub fn run(
    family: &str,
    version: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let result = ctx.registry.check_integrity(family, version)?;
    output(&result, flags.format)?;

    if !result.matches {
        anyhow::bail!(
            "binary for {family} {version} no longer matches its registered hash ({})",
            result.binary_path
        );
    }
    Ok(())
}

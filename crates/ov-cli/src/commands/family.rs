use ov_core::entities::CompilerFamily;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FamilyCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ovt family`.
pub fn handle(
    action: &FamilyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FamilyCommands::List => {
            let families: Vec<&CompilerFamily> = ctx.registry.families().collect();
            output(&families, flags.format)
        }
    }
}

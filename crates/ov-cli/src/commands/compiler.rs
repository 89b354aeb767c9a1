#[path = "compiler/check.rs"]
mod check;
#[path = "compiler/list.rs"]
mod list;
#[path = "compiler/register.rs"]
mod register;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CompilerCommands;
use crate::context::AppContext;

/// Handle `ovt compiler`.
pub fn handle(
    action: &CompilerCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CompilerCommands::Register {
            family,
            version,
            binary,
        } => register::run(family, version, binary, ctx, flags),
        CompilerCommands::List { family, limit } => {
            list::run(family.as_deref(), *limit, ctx, flags)
        }
        CompilerCommands::Check { family, version } => check::run(family, version, ctx, flags),
    }
}

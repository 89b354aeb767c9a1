#[path = "verify/get.rs"]
mod get;
#[path = "verify/list.rs"]
mod list;
#[path = "verify/record.rs"]
mod record;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VerifyCommands;
use crate::context::AppContext;

/// Handle `ovt verify`.
pub fn handle(
    action: &VerifyCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        VerifyCommands::Record {
            id,
            family,
            version,
            level,
            evidence,
        } => record::run(id, family, version, level, evidence.clone(), ctx, flags),
        VerifyCommands::List {
            family,
            version,
            level,
            limit,
        } => list::run(
            family.as_deref(),
            version.as_deref(),
            level.as_deref(),
            *limit,
            ctx,
            flags,
        ),
        VerifyCommands::Get { id } => get::run(id, ctx, flags),
    }
}

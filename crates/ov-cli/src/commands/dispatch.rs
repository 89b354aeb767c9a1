use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Family { action } => commands::family::handle(&action, ctx, flags),
        Commands::Compiler { action } => commands::compiler::handle(&action, ctx, flags),
        Commands::Verify { action } => commands::verify::handle(&action, ctx, flags),
        Commands::Report { action } => commands::report::handle(&action, ctx, flags),
        Commands::Init(_) | Commands::Schema(_) => {
            unreachable!("init/schema are pre-dispatched in main")
        }
    }
}

use clap::Subcommand;

/// Compiler family commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FamilyCommands {
    /// List families and their supported optimization levels.
    List,
}

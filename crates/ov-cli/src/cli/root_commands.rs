use clap::{Args, Subcommand};

use crate::cli::subcommands::{CompilerCommands, FamilyCommands, ReportCommands, VerifyCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the store file seeded with the default compiler families.
    Init(InitArgs),
    /// Compiler families.
    Family {
        #[command(subcommand)]
        action: FamilyCommands,
    },
    /// Registered compiler versions.
    Compiler {
        #[command(subcommand)]
        action: CompilerCommands,
    },
    /// Verification records.
    Verify {
        #[command(subcommand)]
        action: VerifyCommands,
    },
    /// Generate JSON reports.
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Print the JSON Schema of a stored or reported type.
    Schema(SchemaArgs),
}

/// Arguments for `ovt init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing store with a freshly seeded one.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `ovt schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(required_unless_present = "list")]
    pub type_name: Option<String>,
    /// List the registered schema names.
    #[arg(long, conflicts_with = "type_name")]
    pub list: bool,
}

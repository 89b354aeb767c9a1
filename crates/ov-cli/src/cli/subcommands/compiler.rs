use clap::Subcommand;

/// Compiler version commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CompilerCommands {
    /// Register a compiler binary and record its SHA-256.
    Register {
        family: String,
        version: String,
        binary: String,
    },
    /// List registered versions.
    List {
        #[arg(long)]
        family: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Re-hash a registered binary and compare with the stored hash.
    Check { family: String, version: String },
}

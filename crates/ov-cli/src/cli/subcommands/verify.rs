use clap::Subcommand;

/// Verification record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VerifyCommands {
    /// Record a verification for a registered compiler version.
    Record {
        id: String,
        family: String,
        version: String,
        #[arg(allow_hyphen_values = true)]
        level: String,
        #[arg(long)]
        evidence: Vec<String>,
    },
    /// List verifications.
    List {
        #[arg(long)]
        family: Option<String>,
        #[arg(long)]
        version: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        level: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a verification by ID.
    Get { id: String },
}

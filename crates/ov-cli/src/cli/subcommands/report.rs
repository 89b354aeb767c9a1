use clap::Subcommand;

/// Report generation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// Write the verification report.
    Verification {
        /// Output file (defaults to `reports.dir/reports.verification_file`).
        #[arg(long)]
        output: Option<String>,
    },
    /// Write the optimization safety report.
    Safety {
        /// Output file (defaults to `reports.dir/reports.safety_file`).
        #[arg(long)]
        output: Option<String>,
    },
}

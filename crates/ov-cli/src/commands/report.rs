use std::path::PathBuf;

use anyhow::Context;
use ov_core::responses::ReportWrittenResponse;
use ov_report::{
    PlaceholderSafetyChecker, generate_optimization_safety_report, generate_verification_report,
};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;
use crate::context::{AppContext, ensure_parent_dir};
use crate::output::output;

/// Handle `ovt report`.
pub fn handle(
    action: &ReportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = match action {
        ReportCommands::Verification { output } => {
            let path = output
                .as_ref()
                .map_or_else(|| ctx.config.reports.verification_path(), PathBuf::from);
            ensure_parent_dir(&path)?;
            let report = generate_verification_report(&ctx.registry, &path).with_context(|| {
                format!("failed to generate verification report at {}", path.display())
            })?;
            ReportWrittenResponse {
                report: String::from("verification"),
                output_path: path.display().to_string(),
                entries: report.verifications.len(),
            }
        }
        ReportCommands::Safety { output } => {
            let path = output
                .as_ref()
                .map_or_else(|| ctx.config.reports.safety_path(), PathBuf::from);
            ensure_parent_dir(&path)?;
            let report =
                generate_optimization_safety_report(&ctx.registry, &PlaceholderSafetyChecker, &path)
                    .with_context(|| {
                        format!("failed to generate safety report at {}", path.display())
                    })?;
            ReportWrittenResponse {
                report: String::from("safety"),
                output_path: path.display().to_string(),
                entries: report.results.len(),
            }
        }
    };

    output(&response, flags.format)
}

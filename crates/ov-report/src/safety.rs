//! Optimization safety report.

use std::path::Path;

use chrono::{DateTime, Utc};
use ov_core::reports::{ReportMetadata, SafetyEvaluation, SafetyReport, SafetySummary};
use ov_store::Registry;

use crate::checker::SafetyChecker;
use crate::error::ReportError;
use crate::write_report;

/// Run `checker` over every family × registered version × supported level.
///
/// Families and versions are visited in key order, levels in the family's
/// declared order.
pub fn build_optimization_safety_report<C: SafetyChecker + ?Sized>(
    registry: &Registry,
    checker: &C,
    generated_at: DateTime<Utc>,
) -> SafetyReport {
    let mut results = Vec::new();
    for family in registry.families() {
        for version in registry.versions(&family.id) {
            for level in &family.supported_optimization_levels {
                results.push(SafetyEvaluation {
                    compiler_type: family.id.clone(),
                    version: version.version_string.clone(),
                    optimization_level: level.clone(),
                    checks: checker.run(family, version, level),
                });
            }
        }
    }

    let summary = SafetySummary::tally(&results);
    if summary.placeholder_checks > 0 {
        tracing::warn!(
            placeholder_checks = summary.placeholder_checks,
            "safety report contains placeholder checks; no optimization safety was verified"
        );
    }

    SafetyReport {
        metadata: ReportMetadata::new(generated_at),
        summary,
        results,
    }
}

/// Build the safety report now and write it to `output_path`.
///
/// # Errors
///
/// Returns `ReportError::Write` if the file cannot be written.
pub fn generate_optimization_safety_report<C: SafetyChecker + ?Sized>(
    registry: &Registry,
    checker: &C,
    output_path: impl AsRef<Path>,
) -> Result<SafetyReport, ReportError> {
    let report = build_optimization_safety_report(registry, checker, Utc::now());
    write_report(&report, output_path.as_ref())?;
    Ok(report)
}

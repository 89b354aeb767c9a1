//! Verification summary report.

use std::path::Path;

use chrono::{DateTime, Utc};
use ov_core::document::VersionEntry;
use ov_core::reports::{CompilerSummary, ReportMetadata, VerificationReport, VerificationSummary};
use ov_store::{Registry, VerificationFilter};

use crate::error::ReportError;
use crate::write_report;

/// Summarize every family, registered version, and verification.
#[must_use]
pub fn build_verification_report(
    registry: &Registry,
    generated_at: DateTime<Utc>,
) -> VerificationReport {
    let compilers = registry
        .families()
        .map(|family| {
            let versions = registry
                .versions(&family.id)
                .map(|version| (version.version_string.clone(), VersionEntry::from(version)))
                .collect();
            (
                family.id.clone(),
                CompilerSummary {
                    name: family.display_name.clone(),
                    versions,
                },
            )
        })
        .collect();

    let verifications = registry
        .list_verifications(&VerificationFilter::default())
        .map(|record| VerificationSummary {
            id: record.id.clone(),
            compiler_type: record.family_id.clone(),
            version: record.version_string.clone(),
            optimization_level: record.optimization_level.clone(),
            status: record.status,
            verified: record.verified_at,
        })
        .collect();

    VerificationReport {
        metadata: ReportMetadata::new(generated_at),
        compilers,
        verifications,
    }
}

/// Build the verification report now and write it to `output_path`.
///
/// # Errors
///
/// Returns `ReportError::Write` if the file cannot be written.
pub fn generate_verification_report(
    registry: &Registry,
    output_path: impl AsRef<Path>,
) -> Result<VerificationReport, ReportError> {
    let report = build_verification_report(registry, Utc::now());
    write_report(&report, output_path.as_ref())?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeded_registry_reports_families_without_versions() {
        let report = build_verification_report(&Registry::seeded(), Utc::now());
        let ids: Vec<&str> = report.compilers.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["clang", "gcc"]);
        assert_eq!(report.compilers["gcc"].name, "GNU Compiler Collection");
        assert!(report.compilers["gcc"].versions.is_empty());
        assert!(report.verifications.is_empty());
    }

    #[test]
    fn metadata_uses_given_time() {
        let at = DateTime::parse_from_rfc3339("2026-02-08T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let report = build_verification_report(&Registry::seeded(), at);
        assert_eq!(report.metadata.generation_time, at);
        assert_eq!(report.metadata.tool_version, "1.0.0");
    }

    #[test]
    fn verifications_keep_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let binary = dir.path().join("clang");
        std::fs::write(&binary, b"clang").unwrap();
        let mut registry = Registry::seeded();
        registry
            .register_compiler_version("clang", "17.0.6", &binary)
            .unwrap();
        for (id, level) in [("VC-B", "-O2"), ("VC-A", "-O0")] {
            registry
                .record_verification(id, "clang", "17.0.6", level, vec![])
                .unwrap();
        }

        let report = build_verification_report(&registry, Utc::now());
        let ids: Vec<&str> = report.verifications.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["VC-B", "VC-A"]);
        assert_eq!(report.verifications[0].compiler_type, "clang");
    }
}

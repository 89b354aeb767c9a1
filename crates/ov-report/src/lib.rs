//! # ov-report
//!
//! Serializes registry state into the two JSON reports:
//! - the verification report (registered compilers + verification summaries)
//! - the optimization safety report (one evaluation per family × version ×
//!   supported level)
//!
//! Each report has a pure `build_*` function and a `generate_*` wrapper that
//! writes it, replacing any existing file.

mod checker;
mod error;
mod safety;
mod verification;

pub use checker::{PlaceholderSafetyChecker, SAFETY_CHECK_NAMES, SafetyChecker};
pub use error::ReportError;
pub use safety::{build_optimization_safety_report, generate_optimization_safety_report};
pub use verification::{build_verification_report, generate_verification_report};

use std::path::Path;

use serde::Serialize;

/// Write `report` as pretty JSON to `path`.
fn write_report<T: Serialize>(report: &T, path: &Path) -> Result<(), ReportError> {
    let mut json = serde_json::to_string_pretty(report).map_err(ReportError::Serialize)?;
    json.push('\n');
    ov_store::atomic::write_file(path, json.as_bytes()).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "wrote report");
    Ok(())
}

//! Report shapes written by `ovt report`.
//!
//! Both reports carry a [`ReportMetadata`] block. The safety report keeps
//! placeholder checks in their own [`SafetyCheckResult::Placeholder`]
//! variant so they can never be read as executed evidence.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::TOOL_VERSION;
use crate::document::VersionEntry;
use crate::enums::{CheckOutcome, VerificationStatus};

/// Header common to every report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportMetadata {
    pub tool_version: String,
    pub generation_time: DateTime<Utc>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(generation_time: DateTime<Utc>) -> Self {
        Self {
            tool_version: TOOL_VERSION.to_string(),
            generation_time,
        }
    }
}

// ---------------------------------------------------------------------------
// Verification report
// ---------------------------------------------------------------------------

/// Output of `ovt report verification`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerificationReport {
    pub metadata: ReportMetadata,
    /// Family id → family summary.
    pub compilers: BTreeMap<String, CompilerSummary>,
    pub verifications: Vec<VerificationSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompilerSummary {
    pub name: String,
    /// Version string → registered binary.
    pub versions: BTreeMap<String, VersionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerificationSummary {
    pub id: String,
    pub compiler_type: String,
    pub version: String,
    pub optimization_level: String,
    pub status: VerificationStatus,
    pub verified: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Optimization safety report
// ---------------------------------------------------------------------------

/// Result of one named safety check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SafetyCheckResult {
    /// The check ran and produced `outcome`.
    Executed { outcome: CheckOutcome },
    /// Nothing ran; `nominal` is a canned value, not evidence.
    Placeholder { nominal: CheckOutcome },
}

impl SafetyCheckResult {
    #[must_use]
    pub const fn is_executed(self) -> bool {
        matches!(self, Self::Executed { .. })
    }

    /// The outcome as written, whether executed or canned.
    #[must_use]
    pub const fn nominal_outcome(self) -> CheckOutcome {
        match self {
            Self::Executed { outcome } => outcome,
            Self::Placeholder { nominal } => nominal,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SafetyCheck {
    pub name: String,
    pub result: SafetyCheckResult,
}

/// Checks run for one family × version × optimization level combination.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SafetyEvaluation {
    pub compiler_type: String,
    pub version: String,
    pub optimization_level: String,
    pub checks: Vec<SafetyCheck>,
}

/// Totals across every evaluation in a safety report.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SafetySummary {
    pub evaluations: usize,
    pub total_checks: usize,
    pub executed_checks: usize,
    pub placeholder_checks: usize,
}

impl SafetySummary {
    /// Tally the checks in `results`.
    #[must_use]
    pub fn tally(results: &[SafetyEvaluation]) -> Self {
        let mut summary = Self {
            evaluations: results.len(),
            ..Self::default()
        };
        for check in results.iter().flat_map(|evaluation| &evaluation.checks) {
            summary.total_checks += 1;
            if check.result.is_executed() {
                summary.executed_checks += 1;
            } else {
                summary.placeholder_checks += 1;
            }
        }
        summary
    }
}

/// Output of `ovt report safety`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SafetyReport {
    pub metadata: ReportMetadata,
    pub summary: SafetySummary,
    pub results: Vec<SafetyEvaluation>,
}

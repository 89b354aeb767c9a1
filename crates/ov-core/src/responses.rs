//! CLI response types returned as JSON by `ovt` commands that do not simply
//! echo an entity.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response from `ovt init`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InitResponse {
    pub store_path: String,
    /// `false` when a store already existed and `--force` was not given.
    pub created: bool,
    pub families: Vec<String>,
}

/// Response from `ovt compiler check`: the stored hash compared with a fresh
/// hash of the binary on disk.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IntegrityCheckResponse {
    pub family_id: String,
    pub version_string: String,
    pub binary_path: String,
    pub expected_hash: String,
    pub actual_hash: String,
    pub matches: bool,
}

/// Response from `ovt report ...`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportWrittenResponse {
    pub report: String,
    pub output_path: String,
    /// Number of top-level entries (verifications or evaluations) written.
    pub entries: usize,
}

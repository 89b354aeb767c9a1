use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::VerificationStatus;

/// Asserts that a compiler version at one optimization level was checked
/// against the fixed requirement tags. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerificationRecord {
    pub id: String,
    pub family_id: String,
    pub version_string: String,
    pub optimization_level: String,
    pub requirement_tags: Vec<String>,
    /// Opaque references, typically evidence file names.
    pub evidence_refs: Vec<String>,
    pub verified_at: DateTime<Utc>,
    pub status: VerificationStatus,
}

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A registered compiler binary.
///
/// `(family_id, version_string)` is unique across the registry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompilerVersion {
    pub family_id: String,
    pub version_string: String,
    pub binary_path: String,
    /// Lowercase hex SHA-256 of the binary at registration time.
    pub content_hash: String,
    pub registered_at: DateTime<Utc>,
}

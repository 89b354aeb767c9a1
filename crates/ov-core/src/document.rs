//! On-disk JSON wire shape of the store.
//!
//! The store file is a single JSON document keyed by family id, with versions
//! nested under their family and verifications kept as an ordered list. Field
//! names here are the wire names (`compiler_type`, `hash`, `registered`, ...);
//! conversion to and from the typed entities happens only in this module.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CompilerFamily, CompilerVersion, VerificationRecord};
use crate::enums::VerificationStatus;
use crate::errors::CoreError;

/// Root of the store file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StoreDocument {
    /// Family id → family entry. Sorted by key for deterministic output.
    #[serde(default)]
    pub compilers: BTreeMap<String, FamilyEntry>,
    #[serde(default)]
    pub verifications: Vec<VerificationEntry>,
}

/// A compiler family together with its registered versions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FamilyEntry {
    pub name: String,
    /// Version string → registered binary.
    #[serde(default)]
    pub versions: BTreeMap<String, VersionEntry>,
    pub optimization_levels: Vec<String>,
}

/// A registered binary as stored under its family.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VersionEntry {
    pub path: String,
    pub hash: String,
    pub registered: DateTime<Utc>,
}

/// A verification record as stored in the `verifications` list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerificationEntry {
    pub id: String,
    pub compiler_type: String,
    pub version: String,
    pub optimization_level: String,
    pub requirements: Vec<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
    pub verified: DateTime<Utc>,
    pub status: VerificationStatus,
}

impl FamilyEntry {
    /// Build an entry for `family` with no versions.
    #[must_use]
    pub fn from_family(family: &CompilerFamily) -> Self {
        Self {
            name: family.display_name.clone(),
            versions: BTreeMap::new(),
            optimization_levels: family.supported_optimization_levels.clone(),
        }
    }

    /// Recover the typed family stored under `family_id`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the entry violates a family invariant.
    pub fn to_family(&self, family_id: &str) -> Result<CompilerFamily, CoreError> {
        CompilerFamily::new(
            family_id,
            self.name.clone(),
            self.optimization_levels.clone(),
        )
    }

    /// Recover the typed versions stored under `family_id`, in key order.
    #[must_use]
    pub fn to_versions(&self, family_id: &str) -> Vec<CompilerVersion> {
        self.versions
            .iter()
            .map(|(version_string, entry)| entry.to_version(family_id, version_string))
            .collect()
    }
}

impl VersionEntry {
    #[must_use]
    pub fn to_version(&self, family_id: &str, version_string: &str) -> CompilerVersion {
        CompilerVersion {
            family_id: family_id.to_string(),
            version_string: version_string.to_string(),
            binary_path: self.path.clone(),
            content_hash: self.hash.clone(),
            registered_at: self.registered,
        }
    }
}

impl From<&CompilerVersion> for VersionEntry {
    fn from(version: &CompilerVersion) -> Self {
        Self {
            path: version.binary_path.clone(),
            hash: version.content_hash.clone(),
            registered: version.registered_at,
        }
    }
}

impl From<&VerificationRecord> for VerificationEntry {
    fn from(record: &VerificationRecord) -> Self {
        Self {
            id: record.id.clone(),
            compiler_type: record.family_id.clone(),
            version: record.version_string.clone(),
            optimization_level: record.optimization_level.clone(),
            requirements: record.requirement_tags.clone(),
            evidence: record.evidence_refs.clone(),
            verified: record.verified_at,
            status: record.status,
        }
    }
}

impl From<VerificationEntry> for VerificationRecord {
    fn from(entry: VerificationEntry) -> Self {
        Self {
            id: entry.id,
            family_id: entry.compiler_type,
            version_string: entry.version,
            optimization_level: entry.optimization_level,
            requirement_tags: entry.requirements,
            evidence_refs: entry.evidence,
            verified_at: entry.verified,
            status: entry.status,
        }
    }
}

//! Loading and saving the registry as a single JSON document.

use std::io;
use std::path::Path;

use ov_core::constants::REQUIREMENT_TAGS;
use ov_core::document::{FamilyEntry, StoreDocument, VersionEntry, VerificationEntry};
use ov_core::entities::{CompilerFamily, VerificationRecord};
use ov_core::errors::CoreError;
use ov_schema::{STORE_DOCUMENT, SchemaRegistry};

use crate::atomic;
use crate::error::StoreError;
use crate::registry::{FamilyState, Registry};

impl Registry {
    /// Load the registry stored at `path`.
    ///
    /// A missing file yields [`Registry::seeded`]; nothing is written until
    /// [`Registry::save`]. Schema drift in an otherwise loadable file is
    /// logged and tolerated.
    ///
    /// # Errors
    ///
    /// - `StoreError::Corrupt` if the file is not a valid store document
    /// - `StoreError::Inconsistent` if it breaks a registry invariant
    /// - `StoreError::Read` for any other read failure
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no store file; using seeded registry");
                return Ok(Self::seeded());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let corrupt = |source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        };
        let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(corrupt)?;
        if let Err(error) = SchemaRegistry::new().validate(STORE_DOCUMENT, &value) {
            tracing::warn!(path = %path.display(), %error, "store file does not match schema");
        }
        let document: StoreDocument = serde_json::from_value(value).map_err(corrupt)?;

        let registry =
            Self::from_document(document).map_err(|error| StoreError::Inconsistent {
                path: path.to_path_buf(),
                reason: error.to_string(),
            })?;
        tracing::debug!(
            path = %path.display(),
            families = registry.families.len(),
            verifications = registry.verifications.len(),
            "loaded store"
        );
        Ok(registry)
    }

    /// Write the whole registry to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` on any I/O failure; the previous file is
    /// left as it was.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let mut json =
            serde_json::to_string_pretty(&self.to_document()).map_err(StoreError::Serialize)?;
        json.push('\n');

        atomic::write_file(path, json.as_bytes()).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "saved store");
        Ok(())
    }

    /// Convert to the on-disk wire shape.
    #[must_use]
    pub fn to_document(&self) -> StoreDocument {
        let compilers = self
            .families
            .iter()
            .map(|(id, state)| {
                let mut entry = FamilyEntry::from_family(&state.family);
                entry.versions = state
                    .versions
                    .iter()
                    .map(|(version_string, version)| {
                        (version_string.clone(), VersionEntry::from(version))
                    })
                    .collect();
                (id.clone(), entry)
            })
            .collect();

        StoreDocument {
            compilers,
            verifications: self
                .verifications
                .iter()
                .map(VerificationEntry::from)
                .collect(),
        }
    }

    /// Rebuild a registry from the wire shape, re-checking every invariant
    /// the registry operations enforce. Each verification must carry exactly
    /// the fixed requirement tags, in order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` describing the first violation.
    pub fn from_document(document: StoreDocument) -> Result<Self, CoreError> {
        let mut registry = Self::with_families(std::iter::empty::<CompilerFamily>());

        for (family_id, entry) in &document.compilers {
            let family = entry.to_family(family_id)?;
            let versions = entry
                .to_versions(family_id)
                .into_iter()
                .map(|version| {
                    if version.version_string.trim().is_empty() {
                        Err(CoreError::Validation(format!(
                            "compiler family '{family_id}' has a version with an empty name"
                        )))
                    } else {
                        Ok((version.version_string.clone(), version))
                    }
                })
                .collect::<Result<_, _>>()?;
            registry
                .families
                .insert(family_id.clone(), FamilyState { family, versions });
        }

        for entry in document.verifications {
            let record = VerificationRecord::from(entry);
            registry
                .check_verification(
                    &record.id,
                    &record.family_id,
                    &record.version_string,
                    &record.optimization_level,
                )
                .map_err(|error| {
                    CoreError::Validation(format!("verification '{}': {error}", record.id))
                })?;
            if !record.requirement_tags.iter().eq(REQUIREMENT_TAGS.iter()) {
                return Err(CoreError::Validation(format!(
                    "verification '{}' has requirement tags {:?}, expected {:?}",
                    record.id, record.requirement_tags, REQUIREMENT_TAGS
                )));
            }
            registry.verifications.push(record);
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn populated(dir: &tempfile::TempDir) -> Registry {
        let binary = dir.path().join("gcc-11");
        std::fs::write(&binary, b"gcc 11.2.0").unwrap();
        let mut registry = Registry::seeded();
        registry
            .register_compiler_version("gcc", "11.2.0", &binary)
            .unwrap();
        registry
            .record_verification(
                "VC-GCC-O0-001",
                "gcc",
                "11.2.0",
                "-O0",
                vec!["test_results.xml".into()],
            )
            .unwrap();
        registry
    }

    #[test]
    fn missing_file_loads_seeded_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let registry = Registry::load(&path).unwrap();
        assert_eq!(registry, Registry::seeded());
        assert!(!path.exists());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let registry = populated(&dir);

        registry.save(&path).unwrap();
        let loaded = Registry::load(&path).unwrap();
        assert_eq!(loaded, registry);
    }

    #[test]
    fn saved_file_uses_wire_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        populated(&dir).save(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let version = &value["compilers"]["gcc"]["versions"]["11.2.0"];
        assert!(version["path"].as_str().unwrap().ends_with("gcc-11"));
        assert_eq!(version["hash"].as_str().unwrap().len(), 64);
        assert!(version["registered"].is_string());
        assert_eq!(
            value["compilers"]["clang"]["optimization_levels"],
            serde_json::json!(["-O0", "-O1", "-O2", "-Os"])
        );
        let verification = &value["verifications"][0];
        assert_eq!(verification["compiler_type"], "gcc");
        assert_eq!(verification["status"], "verified");
        assert_eq!(verification["evidence"][0], "test_results.xml");
    }

    #[test]
    fn invalid_json_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, b"{ not json").unwrap();
        assert!(matches!(
            Registry::load(&path),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn wrong_shape_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, br#"{"compilers": [], "verifications": {}}"#).unwrap();
        assert!(matches!(
            Registry::load(&path),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn dangling_verification_is_inconsistent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(
            &path,
            br#"{
  "compilers": {
    "gcc": { "name": "GCC", "versions": {}, "optimization_levels": ["-O0"] }
  },
  "verifications": [{
    "id": "VC-1", "compiler_type": "gcc", "version": "11.2.0",
    "optimization_level": "-O0",
    "requirements": ["REQ-OPT-VERIFY-001", "REQ-OPT-VERIFY-002", "REQ-OPT-VERIFY-003"],
    "evidence": [],
    "verified": "2026-02-08T12:00:00Z", "status": "verified"
  }]
}"#,
        )
        .unwrap();

        let err = Registry::load(&path).unwrap_err();
        match err {
            StoreError::Inconsistent { reason, .. } => {
                assert!(reason.contains("VC-1"), "reason: {reason}");
            }
            other => panic!("expected Inconsistent, got {other:?}"),
        }
    }

    #[test]
    fn altered_requirement_tags_are_inconsistent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut document = populated(&dir).to_document();
        document.verifications[0].requirements = vec!["REQ-OPT-VERIFY-001".to_string()];
        std::fs::write(&path, serde_json::to_vec(&document).unwrap()).unwrap();

        match Registry::load(&path).unwrap_err() {
            StoreError::Inconsistent { reason, .. } => {
                assert!(reason.contains("requirement tags"), "reason: {reason}");
            }
            other => panic!("expected Inconsistent, got {other:?}"),
        }
    }

    #[test]
    fn empty_requirement_tags_are_inconsistent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut document = populated(&dir).to_document();
        document.verifications[0].requirements.clear();
        std::fs::write(&path, serde_json::to_vec(&document).unwrap()).unwrap();

        assert!(matches!(
            Registry::load(&path),
            Err(StoreError::Inconsistent { .. })
        ));
    }

    #[test]
    fn duplicate_verification_ids_are_inconsistent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut document = populated(&dir).to_document();
        document
            .verifications
            .push(document.verifications[0].clone());
        std::fs::write(&path, serde_json::to_vec(&document).unwrap()).unwrap();

        assert!(matches!(
            Registry::load(&path),
            Err(StoreError::Inconsistent { .. })
        ));
    }

    #[test]
    fn save_into_missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("store.json");
        assert!(matches!(
            Registry::seeded().save(&path),
            Err(StoreError::Write { .. })
        ));
    }

    #[test]
    fn failed_save_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        Registry::seeded().save(&path).unwrap();
        let before = std::fs::read(&path).unwrap();

        // Replacing a directory fails at the final rename.
        let blocked = dir.path().join("blocked");
        std::fs::create_dir(&blocked).unwrap();
        std::fs::write(blocked.join("inner"), b"x").unwrap();
        assert!(populated(&dir).save(&blocked).is_err());

        assert_eq!(std::fs::read(&path).unwrap(), before);
        assert!(blocked.is_dir());
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, b"stale").unwrap();
        Registry::seeded().save(&path).unwrap();
        assert_eq!(Registry::load(&path).unwrap(), Registry::seeded());
    }
}

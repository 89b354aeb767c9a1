//! In-memory registry of compiler families, registered versions, and
//! verification records.
//!
//! Every mutation validates first and mutates last, so a failed call leaves
//! the registry exactly as it was. Nothing is ever updated in place or
//! removed.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use ov_core::constants::requirement_tags;
use ov_core::entities::{CompilerFamily, CompilerVersion, VerificationRecord};
use ov_core::enums::VerificationStatus;
use ov_core::responses::IntegrityCheckResponse;

use crate::error::{HashError, RegistryError};
use crate::hash::hash_file;

/// Absolute form of `path` (relative paths are joined to the current
/// directory; symlinks are kept as given), as a UTF-8 string.
fn resolve_binary_path(path: &Path) -> Result<String, RegistryError> {
    let absolute = std::path::absolute(path).map_err(|source| HashError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    absolute
        .into_os_string()
        .into_string()
        .map_err(|raw| RegistryError::NonUtf8Path { path: raw.into() })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FamilyState {
    pub(crate) family: CompilerFamily,
    /// Version string → registered version.
    pub(crate) versions: BTreeMap<String, CompilerVersion>,
}

/// The full registry. Pass it explicitly to every operation; there is no
/// process-wide instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    /// Family id → family and its versions.
    pub(crate) families: BTreeMap<String, FamilyState>,
    pub(crate) verifications: Vec<VerificationRecord>,
}

/// Narrows [`Registry::list_verifications`]. The default matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationFilter {
    pub family_id: Option<String>,
    pub version_string: Option<String>,
    pub optimization_level: Option<String>,
}

impl VerificationFilter {
    #[must_use]
    pub fn family(mut self, family_id: impl Into<String>) -> Self {
        self.family_id = Some(family_id.into());
        self
    }

    #[must_use]
    pub fn version(mut self, version_string: impl Into<String>) -> Self {
        self.version_string = Some(version_string.into());
        self
    }

    #[must_use]
    pub fn level(mut self, optimization_level: impl Into<String>) -> Self {
        self.optimization_level = Some(optimization_level.into());
        self
    }

    #[must_use]
    pub fn matches(&self, record: &VerificationRecord) -> bool {
        self.family_id
            .as_ref()
            .is_none_or(|family| *family == record.family_id)
            && self
                .version_string
                .as_ref()
                .is_none_or(|version| *version == record.version_string)
            && self
                .optimization_level
                .as_ref()
                .is_none_or(|level| *level == record.optimization_level)
    }
}

impl Registry {
    /// A registry holding the seeded families and nothing else.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_families(CompilerFamily::seeded())
    }

    /// A registry holding `families` and nothing else. A later family with
    /// a repeated id replaces the earlier one.
    #[must_use]
    pub fn with_families(families: impl IntoIterator<Item = CompilerFamily>) -> Self {
        let families = families
            .into_iter()
            .map(|family| {
                (
                    family.id.clone(),
                    FamilyState {
                        family,
                        versions: BTreeMap::new(),
                    },
                )
            })
            .collect();
        Self {
            families,
            verifications: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Register a compiler binary under `family_id`, recording the SHA-256
    /// of the file at `binary_path`.
    ///
    /// # Errors
    ///
    /// - `UnknownFamily` if `family_id` is not in the registry
    /// - `EmptyVersion` if `version_string` is blank
    /// - `DuplicateVersion` if the pair is already registered
    /// - `Hash` if the binary cannot be read
    /// - `NonUtf8Path` if the path cannot be stored as a string
    ///
    /// The stored path is absolute, so later integrity checks do not depend
    /// on the working directory.
    pub fn register_compiler_version(
        &mut self,
        family_id: &str,
        version_string: &str,
        binary_path: impl AsRef<Path>,
    ) -> Result<CompilerVersion, RegistryError> {
        let binary_path = binary_path.as_ref();
        let state = self
            .families
            .get(family_id)
            .ok_or_else(|| RegistryError::UnknownFamily {
                family_id: family_id.to_string(),
            })?;
        if version_string.trim().is_empty() {
            return Err(RegistryError::EmptyVersion);
        }
        if state.versions.contains_key(version_string) {
            return Err(RegistryError::DuplicateVersion {
                family_id: family_id.to_string(),
                version_string: version_string.to_string(),
            });
        }

        let content_hash = hash_file(binary_path)?;
        let binary_path = resolve_binary_path(binary_path)?;
        let version = CompilerVersion {
            family_id: family_id.to_string(),
            version_string: version_string.to_string(),
            binary_path,
            content_hash,
            registered_at: Utc::now(),
        };

        if let Some(state) = self.families.get_mut(family_id) {
            state
                .versions
                .insert(version_string.to_string(), version.clone());
        }
        tracing::debug!(
            family = family_id,
            version = version_string,
            hash = %version.content_hash,
            "registered compiler version"
        );
        Ok(version)
    }

    /// Append a verification record for a registered compiler version.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `EmptyVerificationId` / `DuplicateVerificationId`
    /// - `UnknownFamily`
    /// - `UnknownCompilerVersion` if the pair was never registered
    /// - `UnsupportedOptimizationLevel` if the family does not list the level
    pub fn record_verification(
        &mut self,
        verification_id: &str,
        family_id: &str,
        version_string: &str,
        optimization_level: &str,
        evidence_refs: Vec<String>,
    ) -> Result<VerificationRecord, RegistryError> {
        self.check_verification(
            verification_id,
            family_id,
            version_string,
            optimization_level,
        )?;

        let record = VerificationRecord {
            id: verification_id.to_string(),
            family_id: family_id.to_string(),
            version_string: version_string.to_string(),
            optimization_level: optimization_level.to_string(),
            requirement_tags: requirement_tags(),
            evidence_refs,
            verified_at: Utc::now(),
            status: VerificationStatus::Verified,
        };
        self.verifications.push(record.clone());
        tracing::debug!(
            id = verification_id,
            family = family_id,
            version = version_string,
            level = optimization_level,
            "recorded verification"
        );
        Ok(record)
    }

    /// Validate a prospective verification against the current state.
    pub(crate) fn check_verification(
        &self,
        verification_id: &str,
        family_id: &str,
        version_string: &str,
        optimization_level: &str,
    ) -> Result<(), RegistryError> {
        if verification_id.trim().is_empty() {
            return Err(RegistryError::EmptyVerificationId);
        }
        if self.verification(verification_id).is_some() {
            return Err(RegistryError::DuplicateVerificationId {
                id: verification_id.to_string(),
            });
        }
        let state = self
            .families
            .get(family_id)
            .ok_or_else(|| RegistryError::UnknownFamily {
                family_id: family_id.to_string(),
            })?;
        if !state.versions.contains_key(version_string) {
            return Err(RegistryError::UnknownCompilerVersion {
                family_id: family_id.to_string(),
                version_string: version_string.to_string(),
            });
        }
        if !state.family.supports(optimization_level) {
            return Err(RegistryError::UnsupportedOptimizationLevel {
                family_id: family_id.to_string(),
                level: optimization_level.to_string(),
            });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Verification records matching `filter`, in insertion order.
    ///
    /// The iterator borrows the registry, so every call walks the current
    /// state and can be restarted by calling again.
    pub fn list_verifications<'a>(
        &'a self,
        filter: &'a VerificationFilter,
    ) -> impl Iterator<Item = &'a VerificationRecord> + 'a {
        self.verifications
            .iter()
            .filter(move |record| filter.matches(record))
    }

    #[must_use]
    pub fn verification(&self, id: &str) -> Option<&VerificationRecord> {
        self.verifications.iter().find(|record| record.id == id)
    }

    #[must_use]
    pub fn verification_count(&self) -> usize {
        self.verifications.len()
    }

    /// All families in id order.
    pub fn families(&self) -> impl Iterator<Item = &CompilerFamily> {
        self.families.values().map(|state| &state.family)
    }

    #[must_use]
    pub fn family(&self, family_id: &str) -> Option<&CompilerFamily> {
        self.families.get(family_id).map(|state| &state.family)
    }

    /// Registered versions of `family_id` in version-string order. Empty for
    /// an unknown family.
    pub fn versions<'a>(
        &'a self,
        family_id: &str,
    ) -> impl Iterator<Item = &'a CompilerVersion> + 'a {
        self.families
            .get(family_id)
            .into_iter()
            .flat_map(|state| state.versions.values())
    }

    /// Every registered version, grouped by family id.
    pub fn all_versions(&self) -> impl Iterator<Item = &CompilerVersion> {
        self.families
            .values()
            .flat_map(|state| state.versions.values())
    }

    #[must_use]
    pub fn version(&self, family_id: &str, version_string: &str) -> Option<&CompilerVersion> {
        self.families
            .get(family_id)
            .and_then(|state| state.versions.get(version_string))
    }

    /// Re-hash a registered binary and compare it with the recorded hash.
    ///
    /// # Errors
    ///
    /// Returns `UnknownFamily` / `UnknownCompilerVersion` if the pair is not
    /// registered, or `Hash` if the binary can no longer be read.
    pub fn check_integrity(
        &self,
        family_id: &str,
        version_string: &str,
    ) -> Result<IntegrityCheckResponse, RegistryError> {
        if self.family(family_id).is_none() {
            return Err(RegistryError::UnknownFamily {
                family_id: family_id.to_string(),
            });
        }
        let version = self.version(family_id, version_string).ok_or_else(|| {
            RegistryError::UnknownCompilerVersion {
                family_id: family_id.to_string(),
                version_string: version_string.to_string(),
            }
        })?;

        let actual_hash = hash_file(&version.binary_path)?;
        let matches = actual_hash == version.content_hash;
        if !matches {
            tracing::warn!(
                family = family_id,
                version = version_string,
                path = %version.binary_path,
                "compiler binary hash changed since registration"
            );
        }
        Ok(IntegrityCheckResponse {
            family_id: family_id.to_string(),
            version_string: version_string.to_string(),
            binary_path: version.binary_path.clone(),
            expected_hash: version.content_hash.clone(),
            actual_hash,
            matches,
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HashError;
    use std::path::PathBuf;

    fn binary(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn registry_with_gcc(dir: &tempfile::TempDir) -> Registry {
        let mut registry = Registry::seeded();
        let path = binary(dir, "gcc-11", b"gcc 11.2.0");
        registry
            .register_compiler_version("gcc", "11.2.0", &path)
            .unwrap();
        registry
    }

    #[test]
    fn seeded_registry_is_empty_apart_from_families() {
        let registry = Registry::seeded();
        let ids: Vec<&str> = registry.families().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["clang", "gcc"]);
        assert_eq!(registry.all_versions().count(), 0);
        assert_eq!(registry.verification_count(), 0);
    }

    #[test]
    fn register_unknown_family_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = binary(&dir, "icc", b"icc");
        let mut registry = Registry::seeded();
        let err = registry
            .register_compiler_version("icc", "2021.1", &path)
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnknownFamily { family_id } if family_id == "icc"));
    }

    #[test]
    fn register_blank_version_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = binary(&dir, "gcc", b"gcc");
        let mut registry = Registry::seeded();
        let err = registry
            .register_compiler_version("gcc", "  ", &path)
            .unwrap_err();
        assert!(matches!(err, RegistryError::EmptyVersion));
        assert_eq!(registry, Registry::seeded());
    }

    #[test]
    fn register_missing_binary_leaves_registry_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = Registry::seeded();
        let err = registry
            .register_compiler_version("gcc", "11.2.0", dir.path().join("absent"))
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Hash(HashError::FileNotFound { .. })
        ));
        assert_eq!(registry, Registry::seeded());
    }

    #[test]
    fn duplicate_version_is_rejected_without_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = registry_with_gcc(&dir);
        let before = registry.clone();
        let other = binary(&dir, "gcc-11-copy", b"different bytes");

        let err = registry
            .register_compiler_version("gcc", "11.2.0", &other)
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateVersion { .. }));
        assert_eq!(registry, before);
    }

    #[test]
    fn same_version_in_other_family_is_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = registry_with_gcc(&dir);
        let path = binary(&dir, "clang", b"clang");
        registry
            .register_compiler_version("clang", "11.2.0", &path)
            .unwrap();
        assert_eq!(registry.all_versions().count(), 2);
    }

    #[test]
    fn verification_checks_run_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = registry_with_gcc(&dir);
        registry
            .record_verification("VC-1", "gcc", "11.2.0", "-O0", vec![])
            .unwrap();

        // Duplicate id wins over every other problem.
        let err = registry
            .record_verification("VC-1", "icc", "1.0", "-O9", vec![])
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateVerificationId { .. }));

        let err = registry
            .record_verification("VC-2", "icc", "1.0", "-O9", vec![])
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnknownFamily { .. }));

        let err = registry
            .record_verification("VC-2", "gcc", "1.0", "-O9", vec![])
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnknownCompilerVersion { .. }));

        let err = registry
            .record_verification("VC-2", "gcc", "11.2.0", "-O9", vec![])
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::UnsupportedOptimizationLevel { .. }
        ));

        assert_eq!(registry.verification_count(), 1);
    }

    #[test]
    fn blank_verification_id_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = registry_with_gcc(&dir);
        let err = registry
            .record_verification("", "gcc", "11.2.0", "-O0", vec![])
            .unwrap_err();
        assert!(matches!(err, RegistryError::EmptyVerificationId));
    }

    #[test]
    fn list_reflects_current_state_on_each_call() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = registry_with_gcc(&dir);
        let all = VerificationFilter::default();
        assert_eq!(registry.list_verifications(&all).count(), 0);

        registry
            .record_verification("VC-1", "gcc", "11.2.0", "-O0", vec![])
            .unwrap();
        registry
            .record_verification("VC-2", "gcc", "11.2.0", "-O2", vec![])
            .unwrap();

        let ids: Vec<&str> = registry
            .list_verifications(&all)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["VC-1", "VC-2"]);

        let o2 = VerificationFilter::default().family("gcc").level("-O2");
        let ids: Vec<&str> = registry
            .list_verifications(&o2)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["VC-2"]);

        let none = VerificationFilter::default().version("12.1.0");
        assert_eq!(registry.list_verifications(&none).count(), 0);
    }

    #[test]
    fn integrity_check_detects_modified_binary() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_with_gcc(&dir);

        let clean = registry.check_integrity("gcc", "11.2.0").unwrap();
        assert!(clean.matches);
        assert_eq!(clean.expected_hash, clean.actual_hash);

        std::fs::write(dir.path().join("gcc-11"), b"tampered").unwrap();
        let dirty = registry.check_integrity("gcc", "11.2.0").unwrap();
        assert!(!dirty.matches);
        assert_ne!(dirty.expected_hash, dirty.actual_hash);
    }

    #[test]
    fn integrity_check_for_unregistered_version_fails() {
        let registry = Registry::seeded();
        let err = registry.check_integrity("gcc", "99.9.9").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownCompilerVersion { .. }));
    }

    #[test]
    fn relative_binary_path_is_stored_absolute() {
        let resolved = resolve_binary_path(Path::new("bin/gcc-12")).unwrap();
        let resolved = PathBuf::from(resolved);
        assert!(resolved.is_absolute());
        assert_eq!(
            resolved,
            std::env::current_dir().unwrap().join("bin/gcc-12")
        );
    }

    #[test]
    fn registered_path_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_with_gcc(&dir);
        let version = registry.version("gcc", "11.2.0").unwrap();
        assert!(Path::new(&version.binary_path).is_absolute());
        assert_eq!(
            PathBuf::from(&version.binary_path),
            dir.path().join("gcc-11")
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_binary_path_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/opt/gcc-\xff"));
        let err = resolve_binary_path(path).unwrap_err();
        assert!(matches!(err, RegistryError::NonUtf8Path { .. }));
        assert_eq!(err.category(), crate::error::ErrorCategory::Configuration);
    }
}

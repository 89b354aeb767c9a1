//! Error types for ov-store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from hashing a compiler binary.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Open or read failure. A partial digest is never returned.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Broad classification of a [`RegistryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller named something the registry does not know.
    Configuration,
    /// The caller tried to reuse an existing key.
    Uniqueness,
    /// A reference points at a record that was never registered.
    Referential,
    Io,
}

/// Errors from registry operations. No variant leaves a partial mutation.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unknown compiler family: {family_id}")]
    UnknownFamily { family_id: String },

    #[error("Version string must not be empty")]
    EmptyVersion,

    #[error("Compiler version already registered: {family_id} {version_string}")]
    DuplicateVersion {
        family_id: String,
        version_string: String,
    },

    #[error("Verification id must not be empty")]
    EmptyVerificationId,

    #[error("Verification id already used: {id}")]
    DuplicateVerificationId { id: String },

    #[error("Compiler version not registered: {family_id} {version_string}")]
    UnknownCompilerVersion {
        family_id: String,
        version_string: String,
    },

    #[error("Optimization level {level} is not supported by {family_id}")]
    UnsupportedOptimizationLevel { family_id: String, level: String },

    /// Stored paths are UTF-8 strings; anything else could not be reopened.
    #[error("Compiler binary path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },

    #[error(transparent)]
    Hash(#[from] HashError),
}

impl RegistryError {
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownFamily { .. }
            | Self::UnsupportedOptimizationLevel { .. }
            | Self::EmptyVersion
            | Self::EmptyVerificationId
            | Self::NonUtf8Path { .. } => ErrorCategory::Configuration,
            Self::DuplicateVersion { .. } | Self::DuplicateVerificationId { .. } => {
                ErrorCategory::Uniqueness
            }
            Self::UnknownCompilerVersion { .. } => ErrorCategory::Referential,
            Self::Hash(_) => ErrorCategory::Io,
        }
    }
}

/// Errors from loading or saving the store file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file is not a valid store document.
    #[error("Store file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file parses but breaks a registry invariant.
    #[error("Store file {} is inconsistent: {reason}", path.display())]
    Inconsistent { path: PathBuf, reason: String },

    #[error("Failed to read store file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The previous file contents are left untouched.
    #[error("Failed to write store file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize store: {0}")]
    Serialize(#[source] serde_json::Error),
}

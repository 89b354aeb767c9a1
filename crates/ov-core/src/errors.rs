//! Cross-cutting error types.
//!
//! Domain-specific errors (`RegistryError`, `StoreError`, `ReportError`) are
//! defined in their respective crates. The CLI converges them through `anyhow`.

use thiserror::Error;

/// Errors raised while constructing or converting core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (empty identifiers, duplicate levels, ...).
    #[error("Validation error: {0}")]
    Validation(String),
}

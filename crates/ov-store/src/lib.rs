//! # ov-store
//!
//! Persistent registry state for the optimization verification tracker.
//!
//! Holds the compiler registry (families, registered versions) and the
//! append-only verification list, enforces their invariants, and loads/saves
//! them as a single JSON document. Binary identity is a streaming SHA-256 of
//! the compiler executable.
//!
//! Everything is synchronous and single-threaded. There is no file locking:
//! concurrent runs against one store file race and the last save wins.

pub mod atomic;
pub mod error;
pub mod hash;
pub mod registry;
mod store;

pub use error::{ErrorCategory, HashError, RegistryError, StoreError};
pub use registry::{Registry, VerificationFilter};

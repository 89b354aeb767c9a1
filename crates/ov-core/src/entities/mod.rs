//! Entity structs for the verification tracker's domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. The on-disk wire shape lives in
//! [`crate::document`]; these are the typed records the registry works with.

mod family;
mod verification;
mod version;

pub use family::CompilerFamily;
pub use verification::VerificationRecord;
pub use version::CompilerVersion;

//! Central schema registry for all wire and report types.
//!
//! The `SchemaRegistry` builds JSON Schemas from ov-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::BTreeMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Name of the schema describing the on-disk store file.
pub const STORE_DOCUMENT: &str = "store_document";

/// Central store of all JSON Schemas known to `ovt`.
pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all entity, wire, and report schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = BTreeMap::new();

        // --- Entity types (3) ---
        register!(schemas, "compiler_family", ov_core::entities::CompilerFamily);
        register!(
            schemas,
            "compiler_version",
            ov_core::entities::CompilerVersion
        );
        register!(
            schemas,
            "verification_record",
            ov_core::entities::VerificationRecord
        );

        // --- Store wire document (1) ---
        register!(schemas, STORE_DOCUMENT, ov_core::document::StoreDocument);

        // --- Reports (2) ---
        register!(
            schemas,
            "verification_report",
            ov_core::reports::VerificationReport
        );
        register!(schemas, "safety_report", ov_core::reports::SafetyReport);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|error| SchemaError::Generation(error.to_string()))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|error| format!("{}: {error}", error.instance_path))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Registered schema names in alphabetical order.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        self.schemas.keys().copied().collect()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

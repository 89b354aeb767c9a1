use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_OPTIMIZATION_LEVELS, SEEDED_FAMILIES};
use crate::errors::CoreError;

/// A named toolchain identity (e.g. `gcc`) grouping installed versions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompilerFamily {
    pub id: String,
    pub display_name: String,
    /// Ordered, duplicate-free list of optimization flags (e.g. `-O2`).
    pub supported_optimization_levels: Vec<String>,
}

impl CompilerFamily {
    /// Build a family, rejecting an empty id, an empty level list, or
    /// repeated levels.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if any invariant is violated.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        supported_optimization_levels: Vec<String>,
    ) -> Result<Self, CoreError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoreError::Validation(
                "compiler family id must not be empty".into(),
            ));
        }
        if supported_optimization_levels.is_empty() {
            return Err(CoreError::Validation(format!(
                "compiler family '{id}' must support at least one optimization level"
            )));
        }
        for (index, level) in supported_optimization_levels.iter().enumerate() {
            if level.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "compiler family '{id}' has an empty optimization level"
                )));
            }
            if supported_optimization_levels[..index].contains(level) {
                return Err(CoreError::Validation(format!(
                    "compiler family '{id}' lists optimization level '{level}' twice"
                )));
            }
        }

        Ok(Self {
            id,
            display_name: display_name.into(),
            supported_optimization_levels,
        })
    }

    /// The families present in a freshly initialized store.
    #[must_use]
    pub fn seeded() -> Vec<Self> {
        SEEDED_FAMILIES
            .iter()
            .map(|(id, name)| Self {
                id: (*id).to_string(),
                display_name: (*name).to_string(),
                supported_optimization_levels: DEFAULT_OPTIMIZATION_LEVELS
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            })
            .collect()
    }

    /// Whether `level` is one of this family's supported optimization levels.
    #[must_use]
    pub fn supports(&self, level: &str) -> bool {
        self.supported_optimization_levels
            .iter()
            .any(|supported| supported == level)
    }
}

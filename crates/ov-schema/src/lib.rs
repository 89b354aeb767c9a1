//! # ov-schema
//!
//! JSON Schema generation, validation, and registry.
//!
//! Entity, wire, and report types are defined in `ov-core` with
//! `#[derive(JsonSchema)]`. This crate builds their schemas once and provides
//! lookup, validation, and export (`ovt schema`). `ov-store` uses it to flag
//! drift in hand-edited store files.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{STORE_DOCUMENT, SchemaRegistry};

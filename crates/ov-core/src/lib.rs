//! # ov-core
//!
//! Core types and error types for the optimization verification tracker.
//!
//! This crate provides the foundational types shared across all `ov-*` crates:
//! - Entity structs for compiler families, compiler versions, and verification records
//! - Status and outcome enums
//! - Fixed constants (requirement tags, seeded families, tool version)
//! - The JSON wire document used by the on-disk store
//! - Report shapes emitted by `ov-report`
//! - CLI response types
//! - Cross-cutting error types

pub mod constants;
pub mod document;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod reports;
pub mod responses;

//! Rust ↔ JS conversions.

pub mod error_types;
pub mod json;

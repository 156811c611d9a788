//! # opterra-napi
//!
//! NAPI bindings for TypeScript interop.
//! Owns the `OpterraRuntime` singleton holding the configured engine.
//!
//! ## Architecture
//!
//! - `runtime.rs` — Global `OpterraRuntime` singleton and tracing setup
//! - `bindings/` — domain-specific NAPI binding modules, JSON in / JSON out
//! - `conversions/` — Rust ↔ JS conversions via serde_json and error mapping

pub mod bindings;
pub mod conversions;
pub mod runtime;

//! Error mapping from engine errors to `napi::Error`.
//!
//! Every message is prefixed with a stable code in brackets so the
//! TypeScript layer can branch on it without parsing prose.

use opterra_core::OpterraError;

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SNAPSHOT_ERROR: &str = "SNAPSHOT_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const RUNTIME_NOT_INITIALIZED: &str = "RUNTIME_NOT_INITIALIZED";

/// Stable code for an engine error.
pub fn error_code(err: &OpterraError) -> &'static str {
    match err {
        OpterraError::ConfigError(_) => CONFIG_ERROR,
        OpterraError::SnapshotError(_) => SNAPSHOT_ERROR,
        OpterraError::SerializationError(_) => SERIALIZATION_ERROR,
        OpterraError::InvalidArgument { .. } => INVALID_ARGUMENT,
    }
}

pub fn to_napi_error(err: OpterraError) -> napi::Error {
    napi::Error::from_reason(format!("[{}] {err}", error_code(&err)))
}

pub fn serialization_error(err: serde_json::Error) -> napi::Error {
    to_napi_error(err.into())
}

pub fn invalid_argument(name: &str, reason: impl Into<String>) -> napi::Error {
    to_napi_error(OpterraError::InvalidArgument {
        name: name.to_string(),
        reason: reason.into(),
    })
}

pub fn runtime_not_initialized() -> napi::Error {
    napi::Error::from_reason(format!(
        "[{RUNTIME_NOT_INITIALIZED}] call opterra_initialize() first"
    ))
}

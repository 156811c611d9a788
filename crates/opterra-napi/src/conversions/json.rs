//! serde_json helpers shared by every binding.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error_types;

/// Deserialize a JS value into an engine type.
pub fn from_js<T: DeserializeOwned>(value: serde_json::Value) -> napi::Result<T> {
    serde_json::from_value(value).map_err(error_types::serialization_error)
}

/// Serialize an engine type for JS.
pub fn to_js<T: Serialize>(value: &T) -> napi::Result<serde_json::Value> {
    serde_json::to_value(value).map_err(error_types::serialization_error)
}

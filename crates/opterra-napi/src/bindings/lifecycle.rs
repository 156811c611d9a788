//! Lifecycle bindings: initialize, isInitialized, config, cache control.

use napi_derive::napi;

use crate::conversions::json;
use crate::runtime::{self, RuntimeOptions};

/// Initialize the Opterra runtime. Must be called before any stateful binding.
#[napi]
pub fn opterra_initialize(config_toml: Option<String>) -> napi::Result<()> {
    runtime::initialize(RuntimeOptions { config_toml })
}

#[napi]
pub fn opterra_is_initialized() -> bool {
    runtime::is_initialized()
}

/// Active configuration, defaults filled in.
#[napi]
pub fn opterra_get_config() -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    json::to_js(rt.config())
}

/// Number of cached assessments.
#[napi]
pub fn opterra_cache_entries() -> napi::Result<i64> {
    let rt = runtime::get()?;
    Ok(rt.engine.cached_entries() as i64)
}

#[napi]
pub fn opterra_clear_cache() -> napi::Result<()> {
    let rt = runtime::get()?;
    rt.engine.clear_cache();
    Ok(())
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Runtime settings for the engine façade and bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Max cached results keyed by input fingerprint. 0 disables the cache.
    pub cache_capacity: u64,
    /// `tracing` filter directive used when the bindings install a subscriber.
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

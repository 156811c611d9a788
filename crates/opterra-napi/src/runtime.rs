//! OpterraRuntime — owns the configured engine.
//!
//! The runtime is a singleton stored behind `OnceLock`. It's initialized once
//! via `initialize()` and accessed via `get()` for the lifetime of the process.

use std::sync::{Arc, OnceLock};

use opterra_core::{EngineResult, OpterraConfig};
use opterra_engine::OpterraEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::conversions::error_types;

/// Global singleton.
static RUNTIME: OnceLock<Arc<OpterraRuntime>> = OnceLock::new();

/// The central runtime. The engine is stateless apart from its result
/// cache, which is internally synchronized, so no `Mutex` is needed.
pub struct OpterraRuntime {
    pub engine: OpterraEngine,
}

/// Options for initializing the runtime.
#[derive(Default)]
pub struct RuntimeOptions {
    /// TOML configuration string. If None, uses defaults.
    pub config_toml: Option<String>,
}

impl OpterraRuntime {
    fn new(opts: RuntimeOptions) -> EngineResult<Self> {
        let config = match &opts.config_toml {
            Some(toml_str) => OpterraConfig::from_toml(toml_str)?,
            None => OpterraConfig::default(),
        };
        init_tracing(&config.engine.log_level);
        info!(
            cache_capacity = config.engine.cache_capacity,
            "opterra runtime initialized"
        );
        Ok(Self {
            engine: OpterraEngine::with_config(config),
        })
    }

    pub fn config(&self) -> &OpterraConfig {
        self.engine.config()
    }
}

/// Install a JSON `tracing` subscriber. `OPTERRA_LOG` overrides the
/// configured filter. A host that already installed a subscriber keeps it.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_env("OPTERRA_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init();
}

/// Initialize the global OpterraRuntime singleton.
///
/// Returns an error if already initialized or if the config is invalid.
pub fn initialize(opts: RuntimeOptions) -> napi::Result<()> {
    let runtime = OpterraRuntime::new(opts).map_err(error_types::to_napi_error)?;
    RUNTIME
        .set(Arc::new(runtime))
        .map_err(|_| napi::Error::from_reason("OpterraRuntime already initialized"))
}

/// Get a reference to the global OpterraRuntime.
///
/// Returns an error if not yet initialized.
pub fn get() -> napi::Result<Arc<OpterraRuntime>> {
    RUNTIME
        .get()
        .cloned()
        .ok_or_else(error_types::runtime_not_initialized)
}

/// Check if the runtime has been initialized.
pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}

mod config_error;
mod snapshot_error;

pub use config_error::ConfigError;
pub use snapshot_error::SnapshotError;

/// Top-level error for the outer surfaces of the engine.
///
/// The calculation itself never fails on typed input; these variants cover
/// config loading, JSON boundaries, and snapshot audits.
#[derive(Debug, thiserror::Error)]
pub enum OpterraError {
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("snapshot error: {0}")]
    SnapshotError(#[from] SnapshotError),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("invalid argument {name}: {reason}")]
    InvalidArgument { name: String, reason: String },
}

impl From<serde_json::Error> for OpterraError {
    fn from(err: serde_json::Error) -> Self {
        OpterraError::SerializationError(err.to_string())
    }
}

/// Convenience alias used across the workspace.
pub type EngineResult<T> = Result<T, OpterraError>;

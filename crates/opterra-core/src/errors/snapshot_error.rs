/// Assessment snapshot audit errors.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("algorithm version mismatch: snapshot {stored}, engine {current}")]
    VersionMismatch { stored: String, current: String },

    #[error("input fingerprint mismatch: stored {stored}, recomputed {recomputed}")]
    FingerprintMismatch { stored: String, recomputed: String },

    #[error("denormalized column {column} is {column_value} but result holds {result_value}")]
    DenormalizedMismatch {
        column: String,
        column_value: String,
        result_value: String,
    },

    #[error("stored result not reproducible: {field} stored {stored}, recomputed {recomputed}")]
    NotReproducible {
        field: String,
        stored: String,
        recomputed: String,
    },
}

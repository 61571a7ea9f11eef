//! Feature Error Types

use thiserror::Error;

/// Errors raised while loading feature artifacts
///
/// Encoding itself never fails; these only surface when the scaler
/// artifact does not agree with the compiled-in column schema.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Artifact could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Artifact is not valid JSON for the expected layout
    #[error("Invalid artifact: {0}")]
    Parse(#[from] serde_json::Error),

    /// Artifact was produced for another schema version
    #[error("Schema version mismatch: expected {expected}, got {actual}")]
    SchemaVersion { expected: u32, actual: u32 },

    /// Column names or order differ from the serving schema
    #[error("Column mismatch at position {index}: expected {expected:?}, got {actual:?}")]
    ColumnMismatch {
        index: usize,
        expected: &'static str,
        actual: String,
    },

    /// A parameter vector has the wrong length
    #[error("{field} has {actual} entries, expected {expected}")]
    DimensionMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

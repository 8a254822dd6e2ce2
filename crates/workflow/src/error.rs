//! Workflow error types.

use anomaly_core::AnomalyError;
use thiserror::Error;

/// Result type for workflow operations.
pub type Result<T> = std::result::Result<T, WorkflowError>;

/// Errors that can occur while resolving experiment configuration.
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// Configuration names a detector with no registered constructor
    #[error("Unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    /// Detector construction failed; the detector's own error is preserved
    #[error(transparent)]
    Detector(#[from] AnomalyError),

    /// Configuration document could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

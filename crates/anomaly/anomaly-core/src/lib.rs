//! Anomaly Detection Core
//!
//! Error handling and detector implementations.

pub use anomaly_spi::{AnomalyDetector, AnomalyResult, Supervision};
use thiserror::Error;

/// Re-export SPI Result type for trait implementations
pub use anomaly_spi::Result as SpiResult;

/// Result type for detector operations
pub type Result<T> = std::result::Result<T, AnomalyError>;

/// Errors that can occur during anomaly detection
#[derive(Error, Debug)]
pub enum AnomalyError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Detector has not been fitted yet
    #[error("Detector must be fitted before scoring")]
    NotFitted,

    /// A supervised detector was fitted without labels
    #[error("Detector requires ground-truth labels for fitting")]
    MissingLabels,

    /// Invalid input data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

mod detectors;

pub use detectors::{IqrDetector, ZScoreDetector};

//! Anomaly Detection Service Provider Interface
//!
//! Defines traits and types for anomaly detection.

use std::error::Error;

pub mod contract;
pub mod model;

/// Result type for anomaly detection operations
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

// Re-export all public items at crate root for convenience
pub use contract::AnomalyDetector;
pub use model::{AnomalyResult, Supervision};

//! Anomaly Detection Facade
//!
//! Unified re-exports for the anomaly detection module.
//!
//! This facade provides a single entry point to all anomaly detection functionality:
//! - `AnomalyDetector` trait, `Supervision` and `AnomalyResult` (re-exported through Core)
//! - Configuration types from API
//! - Detector implementations (`ZScoreDetector`, `IqrDetector`) from Core

// Re-export everything from API
pub use anomaly_api::*;

// Re-export everything from Core (includes the SPI trait and models)
pub use anomaly_core::*;

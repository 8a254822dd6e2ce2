//! Anomaly Detection API
//!
//! Configuration types for anomaly detectors. Every configuration is a
//! fully-enumerated struct with defaulted fields; unknown keys are
//! rejected rather than silently accepted.

use serde::{Deserialize, Serialize};

// ============================================================================
// Detector Configuration
// ============================================================================

/// Z-Score detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZScoreConfig {
    /// Z-score threshold for anomaly detection (default: 3.0).
    pub threshold: f64,
}

impl Default for ZScoreConfig {
    fn default() -> Self {
        Self { threshold: 3.0 }
    }
}

impl ZScoreConfig {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

/// IQR detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IqrConfig {
    /// IQR multiplier for outlier bounds (default: 1.5).
    pub multiplier: f64,
}

impl Default for IqrConfig {
    fn default() -> Self {
        Self { multiplier: 1.5 }
    }
}

impl IqrConfig {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }
}

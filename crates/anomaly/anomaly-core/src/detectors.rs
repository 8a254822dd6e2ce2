//! Anomaly detector implementations.

use anomaly_api::{IqrConfig, ZScoreConfig};
use anomaly_spi::{AnomalyDetector, AnomalyResult, Result as SpiResult, Supervision};
use serde::{Deserialize, Serialize};

use crate::{AnomalyError, Result};

// ============================================================================
// Z-Score Detector
// ============================================================================

/// Z-Score based anomaly detector.
///
/// Scores each time step by how many standard deviations it sits from the
/// fitted mean. Unsupervised; labels are ignored during fitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZScoreDetector {
    threshold: f64,
    mean: f64,
    std_dev: f64,
    fitted: bool,
}

impl ZScoreDetector {
    /// Create a new Z-Score detector with given threshold.
    pub fn new(threshold: f64) -> Result<Self> {
        if threshold <= 0.0 {
            return Err(AnomalyError::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            threshold,
            mean: 0.0,
            std_dev: 1.0,
            fitted: false,
        })
    }

    /// Create from configuration.
    pub fn from_config(config: ZScoreConfig) -> Result<Self> {
        Self::new(config.threshold)
    }

    /// Get the threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Get the fitted mean
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Get the fitted standard deviation
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Threshold the scores of `data` into a detection result.
    pub fn detect(&self, data: &[f64]) -> SpiResult<AnomalyResult> {
        let scores = self.score(data)?;
        let is_anomaly = scores.iter().map(|&s| s.abs() > self.threshold).collect();
        Ok(AnomalyResult::new(is_anomaly, scores, self.threshold))
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self::new(3.0).unwrap()
    }
}

impl AnomalyDetector for ZScoreDetector {
    fn fit(&mut self, data: &[f64], _labels: Option<&[bool]>) -> SpiResult<()> {
        if data.len() < 2 {
            return Err(AnomalyError::InsufficientData {
                required: 2,
                actual: data.len(),
            }
            .into());
        }

        let n = data.len() as f64;
        self.mean = data.iter().sum::<f64>() / n;
        self.std_dev = (data.iter().map(|x| (x - self.mean).powi(2)).sum::<f64>() / n).sqrt();
        self.fitted = true;
        Ok(())
    }

    fn score(&self, data: &[f64]) -> SpiResult<Vec<f64>> {
        if !self.fitted {
            return Err(AnomalyError::NotFitted.into());
        }

        if self.std_dev == 0.0 {
            return Ok(vec![0.0; data.len()]);
        }

        Ok(data
            .iter()
            .map(|&x| (x - self.mean) / self.std_dev)
            .collect())
    }

    fn supervision(&self) -> Supervision {
        Supervision::Unsupervised
    }

    fn name(&self) -> &str {
        "z_score"
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

// ============================================================================
// IQR Detector
// ============================================================================

/// IQR-based anomaly detector.
///
/// Scores each time step by its distance outside the interquartile fences,
/// scaled by the IQR; points within the fences score zero. Unsupervised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IqrDetector {
    multiplier: f64,
    q1: f64,
    q3: f64,
    fitted: bool,
}

impl IqrDetector {
    /// Create a new IQR detector with given multiplier.
    pub fn new(multiplier: f64) -> Result<Self> {
        if multiplier <= 0.0 {
            return Err(AnomalyError::InvalidParameter {
                name: "multiplier".to_string(),
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            multiplier,
            q1: 0.0,
            q3: 0.0,
            fitted: false,
        })
    }

    /// Create from configuration.
    pub fn from_config(config: IqrConfig) -> Result<Self> {
        Self::new(config.multiplier)
    }

    /// Get the multiplier
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Threshold the scores of `data` into a detection result.
    pub fn detect(&self, data: &[f64]) -> SpiResult<AnomalyResult> {
        let scores = self.score(data)?;
        let is_anomaly = scores.iter().map(|&s| s > 0.0).collect();
        Ok(AnomalyResult::new(is_anomaly, scores, self.multiplier))
    }
}

impl Default for IqrDetector {
    fn default() -> Self {
        Self::new(1.5).unwrap()
    }
}

impl AnomalyDetector for IqrDetector {
    fn fit(&mut self, data: &[f64], _labels: Option<&[bool]>) -> SpiResult<()> {
        if data.len() < 4 {
            return Err(AnomalyError::InsufficientData {
                required: 4,
                actual: data.len(),
            }
            .into());
        }

        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();
        self.q1 = sorted[n / 4];
        self.q3 = sorted[3 * n / 4];
        self.fitted = true;
        Ok(())
    }

    fn score(&self, data: &[f64]) -> SpiResult<Vec<f64>> {
        if !self.fitted {
            return Err(AnomalyError::NotFitted.into());
        }

        let iqr = self.q3 - self.q1;
        if iqr == 0.0 {
            return Ok(vec![0.0; data.len()]);
        }

        let lower = self.q1 - self.multiplier * iqr;
        let upper = self.q3 + self.multiplier * iqr;
        Ok(data
            .iter()
            .map(|&x| {
                if x < lower {
                    (lower - x) / iqr
                } else if x > upper {
                    (x - upper) / iqr
                } else {
                    0.0
                }
            })
            .collect())
    }

    fn supervision(&self) -> Supervision {
        Supervision::Unsupervised
    }

    fn name(&self) -> &str {
        "iqr"
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

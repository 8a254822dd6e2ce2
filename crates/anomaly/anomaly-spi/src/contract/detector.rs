//! Anomaly detector trait definition.

use crate::model::Supervision;
use crate::Result;

/// Anomaly detector trait.
///
/// Implementations fit on a time series (with optional ground-truth labels)
/// and produce a real-valued anomaly score per time step.
pub trait AnomalyDetector: Send + Sync {
    /// Fit the detector to training data.
    ///
    /// Whether `labels` is required is governed by
    /// [`supervision`](AnomalyDetector::supervision).
    fn fit(&mut self, data: &[f64], labels: Option<&[bool]>) -> Result<()>;

    /// Compute one anomaly score per time step, aligned 1:1 with `data`.
    fn score(&self, data: &[f64]) -> Result<Vec<f64>>;

    /// Supervision mode of this detector.
    fn supervision(&self) -> Supervision;

    /// Name of this detector.
    fn name(&self) -> &str;

    /// Check if the detector has been fitted.
    fn is_fitted(&self) -> bool;
}

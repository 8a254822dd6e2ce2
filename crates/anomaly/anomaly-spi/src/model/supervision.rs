//! Supervision mode tag.

use serde::{Deserialize, Serialize};

/// Supervision mode of an anomaly detector.
///
/// Governs whether ground-truth labels are required during fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Supervision {
    /// Fitting never uses labels.
    Unsupervised,
    /// Fitting assumes the training series is normal; labels, when given,
    /// only mark samples to exclude.
    SemiSupervised,
    /// Fitting requires ground-truth labels.
    Supervised,
}

impl Supervision {
    /// Whether fitting can proceed without labels.
    pub fn allows_unlabeled(&self) -> bool {
        !matches!(self, Supervision::Supervised)
    }
}

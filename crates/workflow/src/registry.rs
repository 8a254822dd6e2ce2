//! Detector registration table.

use std::collections::HashMap;

use anomaly_api::{IqrConfig, ZScoreConfig};
use anomaly_core::{IqrDetector, ZScoreDetector};
use anomaly_spi::AnomalyDetector;

use crate::error::{Result, WorkflowError};

/// Constructor building a detector from its JSON parameters.
pub type DetectorBuilder = fn(&serde_json::Value) -> Result<Box<dyn AnomalyDetector>>;

/// Registration table mapping algorithm names to detector constructors.
///
/// Populated at process start; lookup is explicit, there is no module
/// scanning. Unknown names fail with [`WorkflowError::UnknownAlgorithm`];
/// invalid parameters fail with whatever the detector's own construction
/// raises.
pub struct DetectorRegistry {
    builders: HashMap<String, DetectorBuilder>,
}

impl DetectorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Create a registry with the built-in detectors registered.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("z_score", build_z_score);
        registry.register("iqr", build_iqr);
        registry
    }

    /// Register a constructor under a name, replacing any previous one.
    pub fn register(&mut self, name: &str, builder: DetectorBuilder) {
        self.builders.insert(name.to_string(), builder);
    }

    /// Whether a constructor is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    /// Registered algorithm names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve `name` and construct a detector from `params`.
    pub fn build(&self, name: &str, params: &serde_json::Value) -> Result<Box<dyn AnomalyDetector>> {
        let builder = self
            .builders
            .get(name)
            .ok_or_else(|| WorkflowError::UnknownAlgorithm(name.to_string()))?;
        tracing::debug!(algorithm = name, "building detector from configuration");
        builder(params)
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

fn build_z_score(params: &serde_json::Value) -> Result<Box<dyn AnomalyDetector>> {
    let config: ZScoreConfig = serde_json::from_value(params.clone())?;
    Ok(Box::new(ZScoreDetector::from_config(config)?))
}

fn build_iqr(params: &serde_json::Value) -> Result<Box<dyn AnomalyDetector>> {
    let config: IqrConfig = serde_json::from_value(params.clone())?;
    Ok(Box::new(IqrDetector::from_config(config)?))
}

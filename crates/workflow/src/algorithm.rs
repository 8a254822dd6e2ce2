//! Algorithm configuration handling.

use std::fs;
use std::path::PathBuf;

use anomaly_spi::AnomalyDetector;
use serde::Deserialize;

use crate::error::Result;
use crate::registry::DetectorRegistry;

/// Source of an algorithm configuration document.
#[derive(Debug, Clone)]
pub enum AlgorithmSource {
    /// Path to a JSON document
    File(PathBuf),
    /// Inline configuration mapping
    Inline(serde_json::Value),
}

/// Declarative detector configuration.
///
/// The `detector` key names a registered algorithm; every remaining key is
/// passed to that algorithm's constructor.
#[derive(Debug, Clone, Deserialize)]
pub struct AlgorithmConfiguration {
    /// Registered name of the detector
    pub detector: String,
    /// Constructor parameters
    #[serde(flatten)]
    pub params: serde_json::Map<String, serde_json::Value>,
}

impl AlgorithmConfiguration {
    /// Read a configuration from an inline mapping or a JSON file.
    pub fn from_source(source: &AlgorithmSource) -> Result<Self> {
        let value = match source {
            AlgorithmSource::File(path) => {
                let content = fs::read_to_string(path)?;
                serde_json::from_str(&content)?
            }
            AlgorithmSource::Inline(value) => value.clone(),
        };
        Ok(serde_json::from_value(value)?)
    }
}

/// Resolve a configuration and construct the detector instance it names.
pub fn load_detector(
    source: &AlgorithmSource,
    registry: &DetectorRegistry,
) -> Result<Box<dyn AnomalyDetector>> {
    let config = AlgorithmConfiguration::from_source(source)?;
    registry.build(
        &config.detector,
        &serde_json::Value::Object(config.params),
    )
}

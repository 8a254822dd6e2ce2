//! # workflow
//!
//! Experiment configuration resolution for anomaly detection runs.
//!
//! Two concerns live here, both pure glue around the composition layer:
//!
//! - constructing a detector instance from a declarative JSON configuration,
//!   by name lookup against a [`DetectorRegistry`]
//! - resolving where experiment artifacts (result tables, score plots, raw
//!   scores) should be written, from an [`OutputConfiguration`]

mod algorithm;
mod error;
mod output;
mod registry;

pub use algorithm::{load_detector, AlgorithmConfiguration, AlgorithmSource};
pub use error::{Result, WorkflowError};
pub use output::{resolve_output_configuration, OutputConfiguration, OutputSource};
pub use registry::DetectorRegistry;

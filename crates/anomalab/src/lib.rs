//! # anomalab
//!
//! Experiment orchestration for time series anomaly detection.
//!
//! A [`pipeline::Pipeline`] composes a chain of [`preprocessing`] steps
//! with an [`anomaly`] detector into a single detector-shaped unit; the
//! [`workflow`] module resolves detectors from declarative configuration
//! and decides where experiment artifacts should be written.

pub use anomaly_facade as anomaly;
pub use pipeline_facade as pipeline;
pub use preprocessing_facade as preprocessing;
pub use workflow;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::anomaly::{
        AnomalyDetector, AnomalyError, AnomalyResult, IqrDetector, Supervision, ZScoreDetector,
    };
    pub use crate::pipeline::{Pipeline, PipelineError};
    pub use crate::preprocessing::{
        ChainedPreprocessor, Differencer, Downsampler, Identity, MinMaxScaler, MovingAverage,
        PreprocessingError, Preprocessor, StandardScaler,
    };
    pub use crate::workflow::{
        load_detector, resolve_output_configuration, AlgorithmSource, DetectorRegistry,
        OutputConfiguration, OutputSource, WorkflowError,
    };
}

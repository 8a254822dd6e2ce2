//! Pipeline Core
//!
//! Composes a preprocessing step with an anomaly detector behind the
//! detector contract, so a pipeline is substitutable wherever a bare
//! detector is expected.

pub use anomaly_spi::{AnomalyDetector, Supervision};
pub use preprocessing_core::ChainedPreprocessor;
pub use preprocessing_spi::Preprocessor;

use anomaly_spi::Result as SpiResult;
use preprocessing_core::PreprocessingError;
use thiserror::Error;

/// Result type for pipeline construction
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur when composing a pipeline
///
/// All pipeline validation happens at construction; `fit` and `score`
/// surface component errors unmodified instead of defining their own.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Construction-time validation failure
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },
}

/// A preprocessor and an anomaly detector composed into one detector
///
/// The pipeline performs no algorithmic work itself; it delegates fitting
/// and scoring to its components in order. A pipeline always carries a
/// preprocessing step; pass the explicit `Identity` preprocessor when no
/// transformation is desired.
pub struct Pipeline {
    preprocessor: Box<dyn Preprocessor>,
    detector: Box<dyn AnomalyDetector>,
    description: String,
}

impl Pipeline {
    /// Compose a single preprocessor with a detector.
    pub fn new(preprocessor: Box<dyn Preprocessor>, detector: Box<dyn AnomalyDetector>) -> Self {
        let description = format!("{}->{}", preprocessor.name(), detector.name());
        Self {
            preprocessor,
            detector,
            description,
        }
    }

    /// Compose an ordered sequence of preprocessors with a detector.
    ///
    /// The sequence is wrapped in a [`ChainedPreprocessor`] and must be
    /// non-empty; validation happens here, never at fit time.
    pub fn from_steps(
        steps: Vec<Box<dyn Preprocessor>>,
        detector: Box<dyn AnomalyDetector>,
    ) -> Result<Self> {
        let chain = ChainedPreprocessor::new(steps).map_err(|e| match e {
            PreprocessingError::InvalidArgument { name, reason } => {
                PipelineError::InvalidArgument { name, reason }
            }
            other => PipelineError::InvalidArgument {
                name: "steps".to_string(),
                reason: other.to_string(),
            },
        })?;
        Ok(Self::new(Box::new(chain), detector))
    }

    /// The wrapped preprocessor.
    pub fn preprocessor(&self) -> &dyn Preprocessor {
        self.preprocessor.as_ref()
    }

    /// The wrapped detector.
    pub fn detector(&self) -> &dyn AnomalyDetector {
        self.detector.as_ref()
    }
}

impl AnomalyDetector for Pipeline {
    /// Fit the preprocessor and the detector in sequence.
    ///
    /// The preprocessed series and labels feed the detector fit. Both
    /// components mutate in place. There is no rollback: if the detector
    /// fit fails after the preprocessor was already fit, the preprocessor
    /// keeps its new state and the pipeline should be reconstructed before
    /// retrying.
    fn fit(&mut self, data: &[f64], labels: Option<&[bool]>) -> SpiResult<()> {
        let (x, y) = self.preprocessor.fit_transform(data, labels)?;
        self.detector.fit(&x, y.as_deref())
    }

    /// Score through the preprocessor's transform.
    ///
    /// Labels are discarded for inference. The output follows the
    /// transformed series, so its length may differ from the input length;
    /// callers needing score-to-original-timestamp alignment must consult
    /// the preprocessor's documented shape transform.
    fn score(&self, data: &[f64]) -> SpiResult<Vec<f64>> {
        let (x, _) = self.preprocessor.transform(data, None)?;
        self.detector.score(&x)
    }

    /// Supervision mode, taken verbatim from the wrapped detector.
    fn supervision(&self) -> Supervision {
        self.detector.supervision()
    }

    /// Composition string of the form `<preprocessor>-><detector>`.
    fn name(&self) -> &str {
        &self.description
    }

    fn is_fitted(&self) -> bool {
        self.detector.is_fitted()
    }
}

//! Preprocessing Core
//!
//! Core types, error handling, and the chained preprocessor.

pub use preprocessing_spi::{Preprocessor, Result as SpiResult};
use thiserror::Error;

/// Result type for preprocessing operations
pub type Result<T> = std::result::Result<T, PreprocessingError>;

/// Errors that can occur during preprocessing
#[derive(Error, Debug)]
pub enum PreprocessingError {
    /// Construction-time validation failure
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Preprocessor has not been fitted yet
    #[error("Preprocessor must be fitted before transform")]
    NotFitted,
}

/// Check that labels, when present, align with the series
pub fn check_series(data: &[f64], labels: Option<&[bool]>) -> Result<()> {
    if let Some(y) = labels {
        if y.len() != data.len() {
            return Err(PreprocessingError::InvalidArgument {
                name: "labels".to_string(),
                reason: format!("expected length {}, got {}", data.len(), y.len()),
            });
        }
    }
    Ok(())
}

/// Ordered sequence of preprocessors applied left-to-right
///
/// The output of step *i* feeds step *i + 1*. Order is significant and
/// fixed at construction; the caller is responsible for a meaningful order
/// (e.g. smoothing before scaling).
pub struct ChainedPreprocessor {
    steps: Vec<Box<dyn Preprocessor>>,
    description: String,
}

impl ChainedPreprocessor {
    /// Create a chain from an ordered, non-empty sequence of steps
    pub fn new(steps: Vec<Box<dyn Preprocessor>>) -> Result<Self> {
        if steps.is_empty() {
            return Err(PreprocessingError::InvalidArgument {
                name: "steps".to_string(),
                reason: "chained preprocessor requires at least one step".to_string(),
            });
        }
        let description = steps
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join("->");
        Ok(Self { steps, description })
    }

    /// Number of steps in the chain
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Preprocessor for ChainedPreprocessor {
    fn fit(&mut self, data: &[f64], labels: Option<&[bool]>) -> SpiResult<()> {
        // Each step must fit on the output of the previous one, so fitting
        // the chain transforms through all but the last step.
        let mut x = data.to_vec();
        let mut y = labels.map(<[bool]>::to_vec);
        let last = self.steps.len() - 1;
        for (i, step) in self.steps.iter_mut().enumerate() {
            if i == last {
                step.fit(&x, y.as_deref())?;
            } else {
                let (nx, ny) = step.fit_transform(&x, y.as_deref())?;
                x = nx;
                y = ny;
            }
        }
        Ok(())
    }

    fn transform(
        &self,
        data: &[f64],
        labels: Option<&[bool]>,
    ) -> SpiResult<(Vec<f64>, Option<Vec<bool>>)> {
        let mut x = data.to_vec();
        let mut y = labels.map(<[bool]>::to_vec);
        for step in &self.steps {
            let (nx, ny) = step.transform(&x, y.as_deref())?;
            x = nx;
            y = ny;
        }
        Ok((x, y))
    }

    fn fit_transform(
        &mut self,
        data: &[f64],
        labels: Option<&[bool]>,
    ) -> SpiResult<(Vec<f64>, Option<Vec<bool>>)> {
        let mut x = data.to_vec();
        let mut y = labels.map(<[bool]>::to_vec);
        for step in &mut self.steps {
            let (nx, ny) = step.fit_transform(&x, y.as_deref())?;
            x = nx;
            y = ny;
        }
        Ok((x, y))
    }

    fn name(&self) -> &str {
        &self.description
    }
}

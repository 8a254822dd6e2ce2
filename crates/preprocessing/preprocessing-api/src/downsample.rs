//! Downsampling preprocessor

use preprocessing_core::{check_series, PreprocessingError, Result};
use preprocessing_spi::{Preprocessor, Result as SpiResult};
use serde::{Deserialize, Serialize};

/// Keep every n-th sample of the series
///
/// Output length is `ceil(len / factor)`; labels are subsampled at the same
/// positions. Score-to-original-timestamp alignment is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Downsampler {
    factor: usize,
}

impl Downsampler {
    /// Create a new downsampler keeping every `factor`-th sample
    pub fn new(factor: usize) -> Result<Self> {
        if factor == 0 {
            return Err(PreprocessingError::InvalidArgument {
                name: "factor".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self { factor })
    }

    pub fn factor(&self) -> usize {
        self.factor
    }
}

impl Preprocessor for Downsampler {
    fn fit(&mut self, data: &[f64], labels: Option<&[bool]>) -> SpiResult<()> {
        check_series(data, labels)?;
        Ok(())
    }

    fn transform(
        &self,
        data: &[f64],
        labels: Option<&[bool]>,
    ) -> SpiResult<(Vec<f64>, Option<Vec<bool>>)> {
        check_series(data, labels)?;

        let x = data.iter().step_by(self.factor).copied().collect();
        let y = labels.map(|l| l.iter().step_by(self.factor).copied().collect());
        Ok((x, y))
    }

    fn name(&self) -> &str {
        "downsample"
    }
}

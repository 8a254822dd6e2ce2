//! Min-max scaling preprocessor

use preprocessing_core::{check_series, PreprocessingError};
use preprocessing_spi::{Preprocessor, Result as SpiResult};
use serde::{Deserialize, Serialize};

/// Rescale data to the [0, 1] range
///
/// The range is learned during fit; transform maps values outside the
/// fitted range beyond [0, 1] rather than clipping them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    min: f64,
    max: f64,
    fitted: bool,
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl MinMaxScaler {
    pub fn new() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            fitted: false,
        }
    }

    /// Get the fitted minimum
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Get the fitted maximum
    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Preprocessor for MinMaxScaler {
    fn fit(&mut self, data: &[f64], labels: Option<&[bool]>) -> SpiResult<()> {
        check_series(data, labels)?;
        if data.is_empty() {
            return Err(PreprocessingError::InsufficientData {
                required: 1,
                actual: 0,
            }
            .into());
        }

        self.min = data.iter().cloned().fold(f64::INFINITY, f64::min);
        self.max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        self.fitted = true;
        Ok(())
    }

    fn transform(
        &self,
        data: &[f64],
        labels: Option<&[bool]>,
    ) -> SpiResult<(Vec<f64>, Option<Vec<bool>>)> {
        if !self.fitted {
            return Err(PreprocessingError::NotFitted.into());
        }
        check_series(data, labels)?;

        let range = self.max - self.min;
        let scaled = if range == 0.0 {
            vec![0.5; data.len()]
        } else {
            data.iter().map(|&x| (x - self.min) / range).collect()
        };
        Ok((scaled, labels.map(<[bool]>::to_vec)))
    }

    fn name(&self) -> &str {
        "min_max"
    }
}

//! Standardization preprocessor

use preprocessing_core::{check_series, PreprocessingError};
use preprocessing_spi::{Preprocessor, Result as SpiResult};
use serde::{Deserialize, Serialize};

/// Standardize data to zero mean and unit variance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: f64,
    std_dev: f64,
    fitted: bool,
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardScaler {
    pub fn new() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
            fitted: false,
        }
    }

    /// Get the fitted mean
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Get the fitted standard deviation
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Preprocessor for StandardScaler {
    fn fit(&mut self, data: &[f64], labels: Option<&[bool]>) -> SpiResult<()> {
        check_series(data, labels)?;
        if data.is_empty() {
            return Err(PreprocessingError::InsufficientData {
                required: 1,
                actual: 0,
            }
            .into());
        }

        let n = data.len() as f64;
        self.mean = data.iter().sum::<f64>() / n;
        self.std_dev =
            (data.iter().map(|x| (x - self.mean).powi(2)).sum::<f64>() / n).sqrt();
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

        let scaled = if self.std_dev == 0.0 {
            vec![0.0; data.len()]
        } else {
            data.iter()
                .map(|&x| (x - self.mean) / self.std_dev)
                .collect()
        };
        Ok((scaled, labels.map(<[bool]>::to_vec)))
    }

    fn name(&self) -> &str {
        "standard"
    }
}

//! Differencing preprocessor

use preprocessing_core::{check_series, PreprocessingError};
use preprocessing_spi::{Preprocessor, Result as SpiResult};
use serde::{Deserialize, Serialize};

/// First-order differencing
///
/// Replaces the series by consecutive differences, shortening it by one.
/// A difference is labeled by its later endpoint, so labels drop their
/// first element.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Differencer;

impl Differencer {
    pub fn new() -> Self {
        Self
    }
}

impl Preprocessor for Differencer {
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
        if data.len() < 2 {
            return Err(PreprocessingError::InsufficientData {
                required: 2,
                actual: data.len(),
            }
            .into());
        }

        let x = data.windows(2).map(|w| w[1] - w[0]).collect();
        let y = labels.map(|l| l[1..].to_vec());
        Ok((x, y))
    }

    fn name(&self) -> &str {
        "difference"
    }
}

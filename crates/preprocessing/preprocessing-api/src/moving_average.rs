//! Moving-average smoothing preprocessor

use preprocessing_core::{check_series, PreprocessingError, Result};
use preprocessing_spi::{Preprocessor, Result as SpiResult};
use serde::{Deserialize, Serialize};

/// Centered moving-average smoothing
///
/// Each value is replaced by the mean of the window centered on it; windows
/// are truncated at the series boundaries, so the output length equals the
/// input length and labels are unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingAverage {
    window_size: usize,
}

impl MovingAverage {
    /// Create a new moving average with the given window size
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(PreprocessingError::InvalidArgument {
                name: "window_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self { window_size })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }
}

impl Preprocessor for MovingAverage {
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

        let half = self.window_size / 2;
        let smoothed = (0..data.len())
            .map(|i| {
                let start = i.saturating_sub(half);
                let end = (i + half + 1).min(data.len());
                let window = &data[start..end];
                window.iter().sum::<f64>() / window.len() as f64
            })
            .collect();
        Ok((smoothed, labels.map(<[bool]>::to_vec)))
    }

    fn name(&self) -> &str {
        "moving_average"
    }
}

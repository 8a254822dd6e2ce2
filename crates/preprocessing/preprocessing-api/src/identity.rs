//! Identity preprocessor

use preprocessing_core::check_series;
use preprocessing_spi::{Preprocessor, Result as SpiResult};
use serde::{Deserialize, Serialize};

/// Explicit no-op preprocessor
///
/// A pipeline always requires a preprocessing step; `Identity` is the
/// explicit way to opt out of transformation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Identity;

impl Identity {
    pub fn new() -> Self {
        Self
    }
}

impl Preprocessor for Identity {
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
        Ok((data.to_vec(), labels.map(<[bool]>::to_vec)))
    }

    fn name(&self) -> &str {
        "identity"
    }
}

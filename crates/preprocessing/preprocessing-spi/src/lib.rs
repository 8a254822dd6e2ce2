//! Preprocessing Service Provider Interface
//!
//! Defines the preprocessor capability for time series transformation.

use std::error::Error;

/// Result type for preprocessing operations
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Common trait for all time series preprocessors
///
/// A preprocessor transforms a series and its optional ground-truth labels
/// before detection. A transformation may change the number of time steps;
/// labels stay aligned with the transformed series, not the original one.
///
/// Once fit, repeated `transform` calls on the same input must produce the
/// same output.
pub trait Preprocessor: Send + Sync {
    /// Fit the preprocessor to data (learn parameters)
    fn fit(&mut self, data: &[f64], labels: Option<&[bool]>) -> Result<()>;

    /// Transform data and labels
    fn transform(
        &self,
        data: &[f64],
        labels: Option<&[bool]>,
    ) -> Result<(Vec<f64>, Option<Vec<bool>>)>;

    /// Fit to the data, then transform it
    ///
    /// May be called repeatedly to refit.
    fn fit_transform(
        &mut self,
        data: &[f64],
        labels: Option<&[bool]>,
    ) -> Result<(Vec<f64>, Option<Vec<bool>>)> {
        self.fit(data, labels)?;
        self.transform(data, labels)
    }

    /// Name of this preprocessor
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock implementation: pass-through with a fitted flag
    struct PassThrough {
        fitted: bool,
    }

    impl PassThrough {
        fn new() -> Self {
            Self { fitted: false }
        }
    }

    impl Preprocessor for PassThrough {
        fn fit(&mut self, _data: &[f64], _labels: Option<&[bool]>) -> Result<()> {
            self.fitted = true;
            Ok(())
        }

        fn transform(
            &self,
            data: &[f64],
            labels: Option<&[bool]>,
        ) -> Result<(Vec<f64>, Option<Vec<bool>>)> {
            if !self.fitted {
                return Err("pass_through must be fitted before transform".into());
            }
            Ok((data.to_vec(), labels.map(<[bool]>::to_vec)))
        }

        fn name(&self) -> &str {
            "pass_through"
        }
    }

    /// Mock implementation: drops the last time step of data and labels
    struct DropLast;

    impl Preprocessor for DropLast {
        fn fit(&mut self, _data: &[f64], _labels: Option<&[bool]>) -> Result<()> {
            Ok(())
        }

        fn transform(
            &self,
            data: &[f64],
            labels: Option<&[bool]>,
        ) -> Result<(Vec<f64>, Option<Vec<bool>>)> {
            let n = data.len().saturating_sub(1);
            Ok((
                data[..n].to_vec(),
                labels.map(|y| y[..n.min(y.len())].to_vec()),
            ))
        }

        fn name(&self) -> &str {
            "drop_last"
        }
    }

    #[test]
    fn test_fit_transform_default_fits_then_transforms() {
        let mut step = PassThrough::new();
        let data = vec![1.0, 2.0, 3.0];

        let (x, y) = step.fit_transform(&data, None).unwrap();

        assert!(step.fitted);
        assert_eq!(x, data);
        assert!(y.is_none());
    }

    #[test]
    fn test_transform_before_fit_errors() {
        let step = PassThrough::new();
        let result = step.transform(&[1.0, 2.0], None);
        assert!(result.is_err());
    }

    #[test]
    fn test_labels_follow_data() {
        let mut step = PassThrough::new();
        let data = vec![1.0, 2.0, 3.0];
        let labels = vec![false, true, false];

        let (_, y) = step.fit_transform(&data, Some(&labels)).unwrap();

        assert_eq!(y, Some(labels));
    }

    #[test]
    fn test_transform_may_change_length() {
        let mut step = DropLast;
        let data = vec![1.0, 2.0, 3.0, 4.0];
        let labels = vec![false, false, true, false];

        let (x, y) = step.fit_transform(&data, Some(&labels)).unwrap();

        assert_eq!(x, vec![1.0, 2.0, 3.0]);
        assert_eq!(y, Some(vec![false, false, true]));
    }

    #[test]
    fn test_transform_is_idempotent_once_fit() {
        let mut step = PassThrough::new();
        step.fit(&[1.0, 2.0], None).unwrap();

        let first = step.transform(&[5.0, 6.0], None).unwrap();
        let second = step.transform(&[5.0, 6.0], None).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_preprocessor_as_trait_object() {
        let mut step: Box<dyn Preprocessor> = Box::new(PassThrough::new());
        let (x, _) = step.fit_transform(&[1.0, 2.0], None).unwrap();
        assert_eq!(x, vec![1.0, 2.0]);
        assert_eq!(step.name(), "pass_through");
    }

    #[test]
    fn test_preprocessor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PassThrough>();
        assert_send_sync::<DropLast>();
    }
}

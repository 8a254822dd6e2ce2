//! Preprocessing Facade
//!
//! High-level, simplified API for time series preprocessing.

// Re-export everything from preprocessing-api
pub use preprocessing_api::*;

// Re-export prelude for convenience
pub use preprocessing_api::prelude;

//! Pipeline Facade
//!
//! High-level, simplified API for pipeline composition.

// Re-export everything from pipeline-core
pub use pipeline_core::*;

//! Basic example demonstrating pipeline composition and workflow resolution
//!
//! Run with: cargo run --example basic -p anomalab

use anomalab::prelude::*;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    println!("=== anomalab Basic Example ===\n");

    // A noisy series with two injected anomalies
    let mut data: Vec<f64> = (0..60)
        .map(|i| 10.0 + (i as f64 * 0.4).sin())
        .collect();
    data[20] = 25.0;
    data[45] = -8.0;

    // 1. Build a detector from a declarative configuration
    let registry = DetectorRegistry::with_builtin();
    let detector = load_detector(
        &AlgorithmSource::Inline(json!({ "detector": "z_score", "threshold": 3.0 })),
        &registry,
    )?;
    println!("1. Loaded detector: {}", detector.name());

    // 2. Compose it with a preprocessing chain
    let mut pipeline = Pipeline::from_steps(
        vec![
            Box::new(MovingAverage::new(3)?),
            Box::new(StandardScaler::new()),
        ],
        detector,
    )?;
    println!("2. Pipeline: {}", pipeline.name());

    // 3. Fit and score
    pipeline.fit(&data, None)?;
    let scores = pipeline.score(&data)?;
    let mut flagged: Vec<usize> = scores
        .iter()
        .enumerate()
        .filter(|(_, s)| s.abs() > 3.0)
        .map(|(i, _)| i)
        .collect();
    flagged.sort_unstable();
    println!("3. Time steps scoring above threshold: {:?}", flagged);

    // 4. Resolve where a run would write its artifacts
    let output_dir = tempfile::tempdir()?;
    let output = resolve_output_configuration(
        OutputSource::Inline(json!({
            "directory_path": output_dir.path(),
            "save_anomaly_scores": true,
        })),
        "z_score",
    )?;
    println!("4. Results would be written to {:?}", output.results_path());

    println!("\n=== Example Complete ===");
    Ok(())
}

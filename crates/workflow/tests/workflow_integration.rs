//! Integration tests for workflow

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;
use workflow::{
    load_detector, resolve_output_configuration, AlgorithmSource, DetectorRegistry, OutputSource,
    WorkflowError,
};

#[test]
fn test_load_detector_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"detector": "z_score", "threshold": 2.5}}"#).unwrap();

    let registry = DetectorRegistry::with_builtin();
    let detector = load_detector(
        &AlgorithmSource::File(file.path().to_path_buf()),
        &registry,
    )
    .unwrap();

    assert_eq!(detector.name(), "z_score");
}

#[test]
fn test_load_detector_without_parameters_uses_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"detector": "iqr"}}"#).unwrap();

    let registry = DetectorRegistry::with_builtin();
    let detector = load_detector(
        &AlgorithmSource::File(file.path().to_path_buf()),
        &registry,
    )
    .unwrap();

    assert_eq!(detector.name(), "iqr");
}

#[test]
fn test_unknown_algorithm_in_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"detector": "isolation_forest"}}"#).unwrap();

    let registry = DetectorRegistry::with_builtin();
    let result = load_detector(
        &AlgorithmSource::File(file.path().to_path_buf()),
        &registry,
    );

    assert!(matches!(
        result,
        Err(WorkflowError::UnknownAlgorithm(name)) if name == "isolation_forest"
    ));
}

#[test]
fn test_loaded_detector_fits_and_scores() {
    let registry = DetectorRegistry::with_builtin();
    let mut detector = load_detector(
        &AlgorithmSource::Inline(json!({ "detector": "z_score" })),
        &registry,
    )
    .unwrap();

    let data = vec![10.0, 10.5, 11.0, 10.2, 10.8, 10.6];
    detector.fit(&data, None).unwrap();
    let scores = detector.score(&data).unwrap();

    assert_eq!(scores.len(), data.len());
}

#[test]
fn test_resolve_creates_algorithm_directory() {
    let base = tempfile::tempdir().unwrap();

    let config = resolve_output_configuration(
        OutputSource::Inline(json!({
            "directory_path": base.path(),
        })),
        "z_score",
    )
    .unwrap();

    assert_eq!(config.algorithm_name, "z_score");
    assert!(config.directory().is_dir());
    assert!(!config.anomaly_score_plots_directory_path().exists());
    assert!(!config.anomaly_scores_directory_path().exists());
}

#[test]
fn test_resolve_creates_artifact_directories_when_saving() {
    let base = tempfile::tempdir().unwrap();

    let config = resolve_output_configuration(
        OutputSource::Inline(json!({
            "directory_path": base.path(),
            "save_anomaly_scores_plot": true,
            "save_anomaly_scores": true,
        })),
        "iqr",
    )
    .unwrap();

    assert!(config.anomaly_score_plots_directory_path().is_dir());
    assert!(config.anomaly_scores_directory_path().is_dir());
}

#[test]
fn test_resolve_is_idempotent() {
    let base = tempfile::tempdir().unwrap();
    let inline = json!({ "directory_path": base.path() });

    let first =
        resolve_output_configuration(OutputSource::Inline(inline.clone()), "z_score").unwrap();
    let second =
        resolve_output_configuration(OutputSource::Inline(inline), "z_score").unwrap();

    assert_eq!(first.directory(), second.directory());
    assert!(second.directory().is_dir());
}

#[test]
fn test_resolve_from_json_file() {
    let base = tempfile::tempdir().unwrap();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"directory_path": {:?}, "save_results": true}}"#,
        base.path()
    )
    .unwrap();

    let config = resolve_output_configuration(
        OutputSource::File(file.path().to_path_buf()),
        "z_score",
    )
    .unwrap();

    assert!(config.save_results);
    assert_eq!(
        config.results_path(),
        base.path().join("z_score").join("results.csv")
    );
}

#[test]
fn test_resolved_configuration_is_used_as_is() {
    let base = tempfile::tempdir().unwrap();

    let prebuilt = resolve_output_configuration(
        OutputSource::Inline(json!({ "directory_path": base.path() })),
        "iqr",
    )
    .unwrap();

    // The algorithm name of an already-built configuration wins
    let config =
        resolve_output_configuration(OutputSource::Resolved(prebuilt), "z_score").unwrap();

    assert_eq!(config.algorithm_name, "iqr");
}

#[test]
fn test_unknown_output_key_is_rejected() {
    let base = tempfile::tempdir().unwrap();

    let result = resolve_output_configuration(
        OutputSource::Inline(json!({
            "directory_path": base.path(),
            "save_plots": true,
        })),
        "z_score",
    );

    assert!(matches!(result, Err(WorkflowError::Json(_))));
}

//! Output configuration handling.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

fn default_results_file() -> String {
    "results.csv".to_string()
}

fn default_plots_directory() -> String {
    "anomaly_score_plots".to_string()
}

fn default_plots_file_format() -> String {
    "svg".to_string()
}

fn default_show_anomaly_scores() -> String {
    "overlay".to_string()
}

fn default_scores_directory() -> String {
    "anomaly_scores".to_string()
}

fn default_true() -> bool {
    true
}

/// Where experiment artifacts should be written.
///
/// Every field is enumerated with a default; unknown keys in a
/// configuration document are rejected rather than silently accepted.
/// Derived paths are computed by deterministic interpolation from the base
/// directory and the algorithm name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfiguration {
    /// Base directory where everything should be saved
    pub directory_path: PathBuf,
    /// Name of the algorithm, filled in during resolution
    #[serde(default)]
    pub algorithm_name: String,

    /// Whether intermediate information should be printed
    #[serde(default)]
    pub verbose: bool,

    // Basic run tracing
    #[serde(default)]
    pub trace_time: bool,
    #[serde(default)]
    pub trace_memory: bool,

    // Result table handling
    #[serde(default)]
    pub print_results: bool,
    #[serde(default)]
    pub save_results: bool,
    #[serde(default)]
    pub constantly_save_results: bool,
    #[serde(default = "default_results_file")]
    pub results_file: String,

    // Anomaly score plots
    #[serde(default)]
    pub save_anomaly_scores_plot: bool,
    #[serde(default = "default_plots_directory")]
    pub anomaly_scores_plots_directory: String,
    #[serde(default = "default_plots_file_format")]
    pub anomaly_scores_plots_file_format: String,
    #[serde(default = "default_show_anomaly_scores")]
    pub anomaly_scores_plots_show_anomaly_scores: String,
    #[serde(default)]
    pub anomaly_scores_plots_show_ground_truth: Option<String>,

    // Raw anomaly scores
    #[serde(default)]
    pub save_anomaly_scores: bool,
    #[serde(default = "default_scores_directory")]
    pub anomaly_scores_directory: String,

    /// Raise an error when the algorithm's train type does not match the
    /// dataset's train type
    #[serde(default = "default_true")]
    pub invalid_train_type_raise_error: bool,
}

impl OutputConfiguration {
    /// Directory holding everything this algorithm's run produces.
    pub fn directory(&self) -> PathBuf {
        self.directory_path.join(&self.algorithm_name)
    }

    /// Path of the aggregated result table.
    pub fn results_path(&self) -> PathBuf {
        self.directory().join(&self.results_file)
    }

    /// Path of the partial result table written while a run is in flight.
    pub fn intermediate_results_path(&self, dataset_index: (&str, &str)) -> PathBuf {
        self.directory().join(format!(
            "tmp_intermediate_results_{}.csv",
            Self::dataset_index_to_str(dataset_index)
        ))
    }

    /// Directory holding anomaly score plots.
    pub fn anomaly_score_plots_directory_path(&self) -> PathBuf {
        self.directory().join(&self.anomaly_scores_plots_directory)
    }

    /// Plot file for one dataset.
    pub fn anomaly_score_plot_path(&self, dataset_index: (&str, &str)) -> PathBuf {
        self.anomaly_score_plots_directory_path().join(format!(
            "{}.{}",
            Self::dataset_index_to_str(dataset_index),
            self.anomaly_scores_plots_file_format
        ))
    }

    /// Directory holding raw anomaly scores.
    pub fn anomaly_scores_directory_path(&self) -> PathBuf {
        self.directory().join(&self.anomaly_scores_directory)
    }

    /// Raw score file for one dataset.
    pub fn anomaly_scores_path(&self, dataset_index: (&str, &str)) -> PathBuf {
        self.anomaly_scores_directory_path()
            .join(Self::dataset_index_to_str(dataset_index))
    }

    fn dataset_index_to_str((collection, name): (&str, &str)) -> String {
        format!("{}_{}", collection.to_lowercase(), name.to_lowercase())
    }
}

/// Source of an output configuration document.
#[derive(Debug, Clone)]
pub enum OutputSource {
    /// Path to a JSON document
    File(PathBuf),
    /// Inline configuration mapping
    Inline(serde_json::Value),
    /// An already-built configuration, used as-is
    Resolved(OutputConfiguration),
}

/// Resolve an output configuration and create its directories.
///
/// For file and inline sources the algorithm name is filled in; an
/// already-resolved configuration keeps its own. Directory creation is
/// idempotent. No files are written here.
pub fn resolve_output_configuration(
    source: OutputSource,
    algorithm_name: &str,
) -> Result<OutputConfiguration> {
    let config = match source {
        OutputSource::Resolved(config) => config,
        OutputSource::File(path) => {
            let content = fs::read_to_string(&path)?;
            let mut config: OutputConfiguration = serde_json::from_str(&content)?;
            config.algorithm_name = algorithm_name.to_string();
            config
        }
        OutputSource::Inline(value) => {
            let mut config: OutputConfiguration = serde_json::from_value(value)?;
            config.algorithm_name = algorithm_name.to_string();
            config
        }
    };

    fs::create_dir_all(config.directory())?;
    if config.save_anomaly_scores_plot {
        fs::create_dir_all(config.anomaly_score_plots_directory_path())?;
    }
    if config.save_anomaly_scores {
        fs::create_dir_all(config.anomaly_scores_directory_path())?;
    }

    tracing::debug!(directory = %config.directory().display(), "resolved output configuration");
    Ok(config)
}

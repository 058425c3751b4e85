//! JSON report writer for classification runs.

use std::fs;
use std::path::{Path, PathBuf};

use sakoe_knn::{Dimensionality, Evaluation};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::domain::ExperimentName;
use crate::IoError;

/// Run parameters recorded alongside the evaluation.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Training corpus path.
    pub training_path: PathBuf,
    /// Test corpus path.
    pub test_path: PathBuf,
    /// Sakoe-Chiba bandwidth fraction in `[0, 1]`.
    pub bandwidth: f64,
    /// How lines were parsed and compared.
    pub dimensionality: Dimensionality,
    /// Whether the 1D scan abandoned hopeless candidates early.
    pub early_abandon: bool,
}

/// Writes evaluation reports to JSON files.
///
/// Creates the output directory on construction if it does not exist.
/// Reports are named `{experiment}_evaluation.json`.
pub struct ReportWriter {
    output_dir: PathBuf,
    experiment: ExperimentName,
}

impl ReportWriter {
    /// Create a new writer targeting the given directory and experiment name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OutputDirCreate`] if the directory cannot be created.
    #[instrument(skip_all, fields(dir = %output_dir.display(), experiment = %experiment))]
    pub fn new(output_dir: &Path, experiment: ExperimentName) -> Result<Self, IoError> {
        fs::create_dir_all(output_dir).map_err(|e| IoError::OutputDirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        debug!("output directory ready");
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            experiment,
        })
    }

    /// Path of the evaluation report for this experiment.
    #[must_use]
    pub fn evaluation_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_evaluation.json", self.experiment.as_str()))
    }

    /// Write an evaluation to `{experiment}_evaluation.json` and return its path.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`IoError::Serialize`] | The report cannot be encoded |
    /// | [`IoError::WriteFile`] | The file cannot be written |
    #[instrument(skip_all, fields(experiment = %self.experiment))]
    pub fn write_evaluation(
        &self,
        evaluation: &Evaluation,
        run: &RunSummary,
    ) -> Result<PathBuf, IoError> {
        let path = self.evaluation_path();

        let predictions: Vec<PredictionEntry> = evaluation
            .predictions
            .iter()
            .map(|p| PredictionEntry {
                test_index: p.test_index,
                truth: p.truth.as_str(),
                predicted: p.predicted.as_str(),
                neighbor_index: p.neighbor_index,
                distance: p.distance.value(),
                correct: p.is_correct(),
            })
            .collect();

        // Empty evaluations have no confusion matrix.
        let confusion = evaluation.confusion_matrix().ok();
        let labels: Vec<&str> = confusion
            .as_ref()
            .map(|cm| cm.labels().iter().map(|l| l.as_str()).collect())
            .unwrap_or_default();
        let class_metrics: Vec<ClassEntry> = confusion
            .as_ref()
            .map(|cm| {
                cm.class_metrics()
                    .into_iter()
                    .map(|m| ClassEntry {
                        label: m.label.as_str().to_string(),
                        precision: m.precision,
                        recall: m.recall,
                        f1: m.f1,
                        support: m.support,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let n_channels = match run.dimensionality {
            Dimensionality::Univariate => None,
            Dimensionality::Multivariate(layout) => Some(layout.n_channels()),
        };

        let artifact = EvaluationArtifact {
            experiment: self.experiment.as_str(),
            training: run.training_path.display().to_string(),
            test: run.test_path.display().to_string(),
            bandwidth: run.bandwidth,
            dimensionality: run.dimensionality.name(),
            n_channels,
            early_abandon: run.early_abandon,
            n_training: evaluation.n_training,
            n_test: evaluation.n_test(),
            n_correct: evaluation.n_correct,
            accuracy: evaluation.accuracy(),
            predictions,
            confusion_matrix: ConfusionEntry {
                labels,
                rows: confusion.as_ref().map_or(&[][..], |cm| cm.as_rows()),
            },
            class_metrics,
        };

        let json = serde_json::to_string_pretty(&artifact).map_err(|e| IoError::Serialize {
            path: path.clone(),
            source: e,
        })?;
        fs::write(&path, &json).map_err(|e| IoError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), "evaluation report written");
        Ok(path)
    }
}

// --- Shadow structs for JSON serialization ---

#[derive(Serialize)]
struct EvaluationArtifact<'a> {
    experiment: &'a str,
    training: String,
    test: String,
    bandwidth: f64,
    dimensionality: &'static str,
    n_channels: Option<usize>,
    early_abandon: bool,
    n_training: usize,
    n_test: usize,
    n_correct: usize,
    accuracy: f64,
    predictions: Vec<PredictionEntry<'a>>,
    confusion_matrix: ConfusionEntry<'a>,
    class_metrics: Vec<ClassEntry>,
}

#[derive(Serialize)]
struct PredictionEntry<'a> {
    test_index: usize,
    truth: &'a str,
    predicted: &'a str,
    neighbor_index: usize,
    distance: f64,
    correct: bool,
}

#[derive(Serialize)]
struct ConfusionEntry<'a> {
    labels: Vec<&'a str>,
    rows: &'a [Vec<usize>],
}

#[derive(Serialize)]
struct ClassEntry {
    label: String,
    precision: f64,
    recall: f64,
    f1: f64,
    support: usize,
}

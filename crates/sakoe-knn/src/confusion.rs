//! Confusion matrix and per-class classification metrics.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::KnnError;
use crate::label::ClassLabel;

/// A confusion matrix over the labels seen in truths and predictions.
///
/// Labels are sorted; entry `matrix[t][p]` counts samples whose true label is
/// `labels[t]` and whose predicted label is `labels[p]`.
#[derive(Debug, Clone)]
pub struct ConfusionMatrix {
    labels: Vec<ClassLabel>,
    matrix: Vec<Vec<usize>>,
}

/// Per-class precision, recall, and F1 score.
#[derive(Debug, Clone)]
pub struct ClassMetrics {
    /// The class label.
    pub label: ClassLabel,
    /// TP / (TP + FP). 0.0 if nothing was predicted as this class.
    pub precision: f64,
    /// TP / (TP + FN). 0.0 if no test sample has this class.
    pub recall: f64,
    /// Harmonic mean of precision and recall. 0.0 if both are zero.
    pub f1: f64,
    /// Number of test samples with this true class.
    pub support: usize,
}

impl ConfusionMatrix {
    /// Build a confusion matrix from parallel lists of true and predicted labels.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`KnnError::EmptyTest`] | Zero labels provided |
    /// | [`KnnError::LabelCountMismatch`] | Lists differ in length |
    pub fn from_labels(truths: &[ClassLabel], predicted: &[ClassLabel]) -> Result<Self, KnnError> {
        if truths.is_empty() {
            return Err(KnnError::EmptyTest);
        }
        if truths.len() != predicted.len() {
            return Err(KnnError::LabelCountMismatch {
                truths: truths.len(),
                predicted: predicted.len(),
            });
        }

        let labels: Vec<ClassLabel> = truths
            .iter()
            .chain(predicted)
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let position = |label: &ClassLabel| labels.binary_search(label).unwrap_or_default();

        let n = labels.len();
        let mut matrix = vec![vec![0usize; n]; n];
        for (t, p) in truths.iter().zip(predicted) {
            matrix[position(t)][position(p)] += 1;
        }
        Ok(Self { labels, matrix })
    }

    /// Overall accuracy: proportion of correct predictions.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        let correct: usize = (0..self.n_classes()).map(|i| self.matrix[i][i]).sum();
        let total: usize = self.matrix.iter().flatten().sum();
        if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64
        }
    }

    /// Per-class precision, recall, F1, and support, in label order.
    #[must_use]
    pub fn class_metrics(&self) -> Vec<ClassMetrics> {
        let n = self.n_classes();
        self.labels
            .iter()
            .enumerate()
            .map(|(c, label)| {
                let tp = self.matrix[c][c];
                let fp: usize = (0..n).filter(|&i| i != c).map(|i| self.matrix[i][c]).sum();
                let fn_: usize = (0..n).filter(|&j| j != c).map(|j| self.matrix[c][j]).sum();
                let support = tp + fn_;
                let precision = if tp + fp == 0 {
                    0.0
                } else {
                    tp as f64 / (tp + fp) as f64
                };
                let recall = if support == 0 {
                    0.0
                } else {
                    tp as f64 / support as f64
                };
                let f1 = if precision + recall == 0.0 {
                    0.0
                } else {
                    2.0 * precision * recall / (precision + recall)
                };
                ClassMetrics {
                    label: label.clone(),
                    precision,
                    recall,
                    f1,
                    support,
                }
            })
            .collect()
    }

    /// Return the sorted labels indexing rows and columns.
    #[must_use]
    pub fn labels(&self) -> &[ClassLabel] {
        &self.labels
    }

    /// Return the underlying matrix rows.
    #[must_use]
    pub fn as_rows(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    /// Return the number of distinct labels.
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .labels
            .iter()
            .map(|l| l.as_str().len())
            .max()
            .unwrap_or(0)
            .max(7);

        write!(f, "{:>width$}", "true\\pred")?;
        for label in &self.labels {
            write!(f, " {:>width$}", label.as_str())?;
        }
        writeln!(f)?;

        for (label, row) in self.labels.iter().zip(&self.matrix) {
            write!(f, "{:>width$}", label.as_str())?;
            for val in row {
                write!(f, " {val:>width$}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

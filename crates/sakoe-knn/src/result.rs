//! Classification results.

use sakoe_dtw::DtwDistance;

use crate::confusion::ConfusionMatrix;
use crate::error::KnnError;
use crate::label::ClassLabel;

/// The closest training sample found for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Zero-based index into the training corpus.
    pub index: usize,
    /// Label of that training sample.
    pub label: ClassLabel,
    /// DTW distance from the query.
    pub distance: DtwDistance,
}

/// Outcome for one test sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Zero-based index into the test corpus.
    pub test_index: usize,
    /// The test sample's own label.
    pub truth: ClassLabel,
    /// Label of the nearest training sample.
    pub predicted: ClassLabel,
    /// Zero-based index of the nearest training sample.
    pub neighbor_index: usize,
    /// Distance to the nearest training sample.
    pub distance: DtwDistance,
}

impl Prediction {
    /// True when the predicted label equals the true label.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.truth == self.predicted
    }
}

/// Result of classifying a whole test corpus.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// One prediction per test sample, in test-corpus order.
    pub predictions: Vec<Prediction>,
    /// Number of correct predictions.
    pub n_correct: usize,
    /// Number of training samples scanned per query.
    pub n_training: usize,
}

impl Evaluation {
    /// Number of test samples classified.
    #[must_use]
    pub fn n_test(&self) -> usize {
        self.predictions.len()
    }

    /// Fraction of test samples classified correctly.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.n_correct as f64 / self.n_test() as f64
    }

    /// Fraction of test samples classified incorrectly.
    #[must_use]
    pub fn error_rate(&self) -> f64 {
        1.0 - self.accuracy()
    }

    /// Cross-tabulate true against predicted labels.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::EmptyTest`] if there are no predictions.
    pub fn confusion_matrix(&self) -> Result<ConfusionMatrix, KnnError> {
        let truths: Vec<ClassLabel> = self.predictions.iter().map(|p| p.truth.clone()).collect();
        let predicted: Vec<ClassLabel> =
            self.predictions.iter().map(|p| p.predicted.clone()).collect();
        ConfusionMatrix::from_labels(&truths, &predicted)
    }
}

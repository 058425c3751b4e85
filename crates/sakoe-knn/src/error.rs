//! Error types for nearest-neighbor classification.

use std::fmt;

use sakoe_dtw::DtwError;

/// Which corpus a sample belongs to, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A training sample.
    Training,
    /// A test sample.
    Test,
    /// A standalone query passed to [`NearestNeighborConfig::nearest`](crate::NearestNeighborConfig::nearest).
    Query,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Training => "training",
            Self::Test => "test",
            Self::Query => "query",
        })
    }
}

/// Errors from nearest-neighbor classification.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// Returned when a class label is empty.
    #[error("class label must be non-empty")]
    EmptyLabel,

    /// Returned when the training corpus has no samples.
    #[error("training corpus is empty")]
    EmptyTraining,

    /// Returned when the test corpus has no samples.
    #[error("test corpus is empty")]
    EmptyTest,

    /// Returned when a sample's shape does not match the configured dimensionality.
    #[error("{role} sample {index} is {found}, expected {expected}")]
    DimensionalityMismatch {
        /// Corpus of the offending sample.
        role: Role,
        /// Zero-based index within that corpus.
        index: usize,
        /// The configured dimensionality.
        expected: &'static str,
        /// The sample's dimensionality.
        found: &'static str,
    },

    /// Returned when every training sample is unreachable from a test sample under the band.
    #[error("no training sample is reachable from test sample {test_index} under the band")]
    NoReachableNeighbor {
        /// Zero-based index of the test sample.
        test_index: usize,
    },

    /// Returned when truth and prediction label lists differ in length.
    #[error("{truths} true labels but {predicted} predicted labels")]
    LabelCountMismatch {
        /// Number of true labels.
        truths: usize,
        /// Number of predicted labels.
        predicted: usize,
    },

    /// Wraps a DTW configuration or shape error.
    #[error("DTW error: {0}")]
    Dtw(#[from] DtwError),
}

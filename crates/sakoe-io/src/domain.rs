//! Domain types for sakoe-io.

use std::collections::BTreeMap;

use sakoe_knn::LabeledSeries;

use crate::IoError;

/// A validated experiment name for output file naming.
///
/// Must match `[a-zA-Z0-9_-]+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentName(String);

impl ExperimentName {
    /// Parse and validate an experiment name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidExperimentName`] if the name is empty or
    /// contains characters outside `[a-zA-Z0-9_-]`.
    pub fn new(name: impl Into<String>) -> Result<Self, IoError> {
        let name = name.into();
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(IoError::InvalidExperimentName { name });
        }
        Ok(Self(name))
    }

    /// Return the experiment name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExperimentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered collection of labeled series loaded from one file.
///
/// Order is file order, which fixes how nearest-neighbor ties resolve.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Samples in file order.
    pub series: Vec<LabeledSeries>,
}

impl Corpus {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// True when the file held no series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Count samples per class label, sorted by label.
    #[must_use]
    pub fn class_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for s in &self.series {
            *counts.entry(s.label().as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Shortest and longest series length, or `None` for an empty corpus.
    #[must_use]
    pub fn length_range(&self) -> Option<(usize, usize)> {
        let lengths = self.series.iter().map(|s| s.data().len());
        Some((lengths.clone().min()?, lengths.max()?))
    }
}

impl From<Vec<LabeledSeries>> for Corpus {
    fn from(series: Vec<LabeledSeries>) -> Self {
        Self { series }
    }
}

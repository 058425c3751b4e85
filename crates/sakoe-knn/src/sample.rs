//! Labeled samples and their shapes.

use sakoe_dtw::{ChannelLayout, MultiChannelSeries, TimeSeries};

use crate::label::ClassLabel;

/// Whether samples are single sequences or de-interleaved channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dimensionality {
    /// One sequence per sample.
    #[default]
    Univariate,
    /// Flat values grouped into channels by the layout.
    Multivariate(ChannelLayout),
}

impl Dimensionality {
    /// Short name used in reports and error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Univariate => "univariate",
            Self::Multivariate(_) => "multivariate",
        }
    }
}

/// The numeric payload of a sample.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesData {
    /// A single sequence.
    Univariate(TimeSeries),
    /// Equal-length channels.
    Multivariate(MultiChannelSeries),
}

impl SeriesData {
    /// Short name matching [`Dimensionality::name`].
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Univariate(_) => "univariate",
            Self::Multivariate(_) => "multivariate",
        }
    }

    /// Samples per sequence (per channel for multivariate data).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Univariate(s) => s.len(),
            Self::Multivariate(s) => s.len(),
        }
    }

    /// Always `false` for validated data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn matches(&self, dimensionality: Dimensionality) -> bool {
        matches!(
            (self, dimensionality),
            (Self::Univariate(_), Dimensionality::Univariate)
                | (Self::Multivariate(_), Dimensionality::Multivariate(_))
        )
    }
}

impl From<TimeSeries> for SeriesData {
    fn from(series: TimeSeries) -> Self {
        Self::Univariate(series)
    }
}

impl From<MultiChannelSeries> for SeriesData {
    fn from(series: MultiChannelSeries) -> Self {
        Self::Multivariate(series)
    }
}

/// A class label paired with its series. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSeries {
    label: ClassLabel,
    data: SeriesData,
}

impl LabeledSeries {
    /// Pair a label with univariate or multivariate data.
    pub fn new(label: ClassLabel, data: impl Into<SeriesData>) -> Self {
        Self {
            label,
            data: data.into(),
        }
    }

    /// Return the class label.
    #[must_use]
    pub fn label(&self) -> &ClassLabel {
        &self.label
    }

    /// Return the numeric payload.
    #[must_use]
    pub fn data(&self) -> &SeriesData {
        &self.data
    }
}

//! Configuration builder for nearest-neighbor classification.

use sakoe_dtw::{Bandwidth, Dtw};

use crate::error::KnnError;
use crate::sample::Dimensionality;

/// Configuration for 1-NN classification under DTW.
///
/// Construct via [`NearestNeighborConfig::new`], then chain `with_*` methods.
///
/// # Defaults
///
/// | Parameter        | Default      |
/// |------------------|--------------|
/// | `dimensionality` | `Univariate` |
/// | `early_abandon`  | `true`       |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestNeighborConfig {
    pub(crate) bandwidth: Bandwidth,
    pub(crate) dtw: Dtw,
    pub(crate) dimensionality: Dimensionality,
    pub(crate) early_abandon: bool,
}

impl NearestNeighborConfig {
    /// Create a config for a fractional Sakoe-Chiba bandwidth (1 = unconstrained).
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::Dtw`] wrapping
    /// [`DtwError::InvalidBandwidth`](sakoe_dtw::DtwError::InvalidBandwidth)
    /// if `bandwidth` is outside `[0, 1]`.
    pub fn new(bandwidth: f64) -> Result<Self, KnnError> {
        let bandwidth = Bandwidth::new(bandwidth)?;
        Ok(Self {
            bandwidth,
            dtw: Dtw::with_bandwidth(bandwidth),
            dimensionality: Dimensionality::Univariate,
            early_abandon: true,
        })
    }

    /// Set how samples are shaped.
    #[must_use]
    pub fn with_dimensionality(mut self, dimensionality: Dimensionality) -> Self {
        self.dimensionality = dimensionality;
        self
    }

    /// Enable or disable abandoning univariate distances that exceed the best so far.
    #[must_use]
    pub fn with_early_abandon(mut self, early_abandon: bool) -> Self {
        self.early_abandon = early_abandon;
        self
    }

    /// Return the configured bandwidth.
    #[must_use]
    pub fn bandwidth(&self) -> Bandwidth {
        self.bandwidth
    }

    /// Return the configured dimensionality.
    #[must_use]
    pub fn dimensionality(&self) -> Dimensionality {
        self.dimensionality
    }
}

//! 1-nearest-neighbor classification of labeled time series under DTW.
//!
//! Each test series takes the label of the training series with the smallest
//! DTW distance; ties go to the earliest training series. Test series are
//! classified in parallel via rayon, each against the full training corpus.

mod confusion;
mod config;
mod error;
mod label;
mod neighbor;
mod result;
mod sample;

pub use confusion::{ClassMetrics, ConfusionMatrix};
pub use config::NearestNeighborConfig;
pub use error::{KnnError, Role};
pub use label::ClassLabel;
pub use result::{Evaluation, Neighbor, Prediction};
pub use sample::{Dimensionality, LabeledSeries, SeriesData};

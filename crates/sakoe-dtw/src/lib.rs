//! Banded DTW distance for univariate and multi-channel time series.
//!
//! Pure math library, zero I/O. Provides Dynamic Time Warping distance with an
//! optional Sakoe-Chiba band (given as an absolute radius or as a fraction of
//! the shorter series), early abandoning against a cutoff, and a multi-channel
//! mode that averages per-channel distances.

mod aggregate;
mod channels;
mod constraint;
mod distance;
mod dtw;
mod error;
mod series;

pub use channels::{ChannelLayout, MultiChannelSeries, Remainder, DEFAULT_CHANNELS};
pub use constraint::{BandConstraint, Bandwidth};
pub use distance::DtwDistance;
pub use dtw::{distance, Dtw};
pub use error::DtwError;
pub use series::{TimeSeries, TimeSeriesView};

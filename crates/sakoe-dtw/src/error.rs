//! Error types for DTW computation and series validation.

/// Errors from series validation, band configuration, and multi-channel distances.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DtwError {
    /// Returned when an empty slice is provided as a time series.
    #[error("time series must be non-empty")]
    EmptySeries,

    /// Returned when a time series contains NaN, infinity, or negative infinity.
    #[error("time series contains non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the first non-finite value found.
        index: usize,
    },

    /// Returned when a fractional bandwidth lies outside `[0, 1]` or is NaN.
    #[error("bandwidth must be in [0, 1], got {bandwidth}")]
    InvalidBandwidth {
        /// The rejected bandwidth.
        bandwidth: f64,
    },

    /// Returned when a channel layout asks for zero channels.
    #[error("channel count must be at least 1, got {n_channels}")]
    InvalidChannelCount {
        /// The rejected channel count.
        n_channels: usize,
    },

    /// Returned when interleaved values do not split into whole channel tuples.
    #[error("{len} values do not form whole groups of {n_channels} channels")]
    PartialChannelGroup {
        /// Number of interleaved values supplied.
        len: usize,
        /// Channels per tuple.
        n_channels: usize,
    },

    /// Returned when the channels of a multi-channel series differ in length.
    #[error("channel {channel} has {got} samples, expected {expected}")]
    ChannelLengthMismatch {
        /// Index of the offending channel.
        channel: usize,
        /// Length of channel 0.
        expected: usize,
        /// Length of the offending channel.
        got: usize,
    },

    /// Returned when a channel index beyond the series' channel count is requested.
    #[error("channel {channel} requested but series has only {available} channels")]
    ChannelOutOfRange {
        /// The requested channel index.
        channel: usize,
        /// Number of channels the series holds.
        available: usize,
    },
}

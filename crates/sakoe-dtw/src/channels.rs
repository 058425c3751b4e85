//! Multi-channel series built by de-interleaving flat samples.

use crate::error::DtwError;
use crate::series::{TimeSeries, TimeSeriesView};

/// Channels per tuple when none is configured (x, y, z).
pub const DEFAULT_CHANNELS: usize = 3;

/// What to do with trailing values that do not fill a whole tuple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Remainder {
    /// Refuse the input with [`DtwError::PartialChannelGroup`].
    #[default]
    Reject,
    /// Drop the trailing partial tuple.
    Truncate,
}

/// How a flat sequence is grouped into channels.
///
/// # Defaults
///
/// | Parameter    | Default  |
/// |--------------|----------|
/// | `n_channels` | 3        |
/// | `remainder`  | `Reject` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelLayout {
    n_channels: usize,
    remainder: Remainder,
}

impl ChannelLayout {
    /// Create a layout with `n_channels` values per tuple.
    ///
    /// # Errors
    ///
    /// Returns [`DtwError::InvalidChannelCount`] if `n_channels` is zero.
    pub fn new(n_channels: usize) -> Result<Self, DtwError> {
        if n_channels == 0 {
            return Err(DtwError::InvalidChannelCount { n_channels });
        }
        Ok(Self {
            n_channels,
            remainder: Remainder::Reject,
        })
    }

    /// Set the policy for a trailing partial tuple.
    #[must_use]
    pub fn with_remainder(mut self, remainder: Remainder) -> Self {
        self.remainder = remainder;
        self
    }

    /// Return the number of channels per tuple.
    #[must_use]
    pub fn n_channels(&self) -> usize {
        self.n_channels
    }

    /// Return the trailing-tuple policy.
    #[must_use]
    pub fn remainder(&self) -> Remainder {
        self.remainder
    }
}

impl Default for ChannelLayout {
    fn default() -> Self {
        Self {
            n_channels: DEFAULT_CHANNELS,
            remainder: Remainder::Reject,
        }
    }
}

/// A fixed set of equal-length channels.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiChannelSeries {
    channels: Vec<TimeSeries>,
}

impl MultiChannelSeries {
    /// Build a series from already separated channels.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::InvalidChannelCount`] | `channels` is empty |
    /// | [`DtwError::ChannelLengthMismatch`] | Channels differ in length |
    pub fn new(channels: Vec<TimeSeries>) -> Result<Self, DtwError> {
        let Some(first) = channels.first() else {
            return Err(DtwError::InvalidChannelCount { n_channels: 0 });
        };
        let expected = first.len();
        if let Some((channel, got)) = channels
            .iter()
            .map(TimeSeries::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(DtwError::ChannelLengthMismatch {
                channel,
                expected,
                got,
            });
        }
        Ok(Self { channels })
    }

    /// De-interleave `values` into channels.
    ///
    /// Values are grouped into consecutive tuples of `layout.n_channels()` and
    /// transposed, so channel `k` holds the `k`-th coordinate of every tuple
    /// in original order: `[x0, y0, z0, x1, y1, z1]` becomes
    /// `[[x0, x1], [y0, y1], [z0, z1]]`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::PartialChannelGroup`] | Length not divisible and layout rejects the remainder |
    /// | [`DtwError::EmptySeries`] | No complete tuple |
    /// | [`DtwError::NonFiniteValue`] | A kept value is NaN or infinite |
    pub fn from_interleaved(values: &[f64], layout: ChannelLayout) -> Result<Self, DtwError> {
        let n_channels = layout.n_channels();
        if layout.remainder() == Remainder::Reject && values.len() % n_channels != 0 {
            return Err(DtwError::PartialChannelGroup {
                len: values.len(),
                n_channels,
            });
        }

        let channels = (0..n_channels)
            .map(|k| {
                let channel: Vec<f64> = values.chunks_exact(n_channels).map(|t| t[k]).collect();
                TimeSeries::new(channel).map_err(|e| match e {
                    DtwError::NonFiniteValue { index } => DtwError::NonFiniteValue {
                        index: index * n_channels + k,
                    },
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { channels })
    }

    /// Borrow channel `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DtwError::ChannelOutOfRange`] if the series has no such channel.
    pub fn channel(&self, index: usize) -> Result<TimeSeriesView<'_>, DtwError> {
        self.channels
            .get(index)
            .map(TimeSeries::as_view)
            .ok_or(DtwError::ChannelOutOfRange {
                channel: index,
                available: self.channels.len(),
            })
    }

    /// Return all channels.
    #[must_use]
    pub fn channels(&self) -> &[TimeSeries] {
        &self.channels
    }

    /// Return the number of channels.
    #[must_use]
    pub fn n_channels(&self) -> usize {
        self.channels.len()
    }

    /// Return the number of tuples (samples per channel).
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.first().map_or(0, TimeSeries::len)
    }

    /// Always `false` for a constructed series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Channel-averaged DTW for multi-channel series.

use tracing::instrument;

use crate::channels::MultiChannelSeries;
use crate::distance::DtwDistance;
use crate::dtw::Dtw;
use crate::error::DtwError;

impl Dtw {
    /// Average the per-channel DTW distances over the first `n_channels` channels.
    ///
    /// Channels are compared independently, channel `c` of `a` against channel
    /// `c` of `b`, and the sum is divided by `n_channels`. If any channel pair
    /// is unreachable under the band, so is the average.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::InvalidChannelCount`] | `n_channels` is zero |
    /// | [`DtwError::ChannelOutOfRange`] | Either series has fewer than `n_channels` channels |
    #[instrument(level = "trace", skip(a, b))]
    pub fn distance_multichannel(
        &self,
        a: &MultiChannelSeries,
        b: &MultiChannelSeries,
        n_channels: usize,
    ) -> Result<DtwDistance, DtwError> {
        if n_channels == 0 {
            return Err(DtwError::InvalidChannelCount { n_channels });
        }

        let mut total = 0.0;
        for c in 0..n_channels {
            total += self.distance(a.channel(c)?, b.channel(c)?).value();
        }

        Ok(DtwDistance::new(total / n_channels as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::ChannelLayout;

    fn triads(values: &[f64]) -> MultiChannelSeries {
        MultiChannelSeries::from_interleaved(values, ChannelLayout::default()).unwrap()
    }

    #[test]
    fn identical_series_average_zero() {
        let a = triads(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let d = Dtw::unconstrained().distance_multichannel(&a, &a, 3).unwrap();
        assert_eq!(d, DtwDistance::ZERO);
    }

    #[test]
    fn averages_channel_distances() {
        // Channels of a: [0,0], [0,0], [0,0]; of b: [0,3], [0,0], [0,6].
        // Per-channel costs 9, 0, 36 -> mean 15.
        let a = triads(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let b = triads(&[0.0, 0.0, 0.0, 3.0, 0.0, 6.0]);
        let d = Dtw::unconstrained().distance_multichannel(&a, &b, 3).unwrap();
        assert_eq!(d.value(), 15.0);
    }

    #[test]
    fn missing_channel_is_a_shape_error() {
        let layout = ChannelLayout::new(2).unwrap();
        let a = MultiChannelSeries::from_interleaved(&[1.0, 2.0, 3.0, 4.0], layout).unwrap();
        let b = triads(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let err = Dtw::unconstrained().distance_multichannel(&a, &b, 3);
        assert_eq!(
            err,
            Err(DtwError::ChannelOutOfRange {
                channel: 2,
                available: 2
            })
        );
    }

    #[test]
    fn unreachable_channel_propagates() {
        let a = triads(&[1.0, 1.0, 1.0]);
        let b = triads(&[1.0, 1.0, 1.0, 2.0, 2.0, 2.0]);
        let d = Dtw::unconstrained().distance_multichannel(&a, &b, 3).unwrap();
        assert!(!d.is_reachable());
    }

    #[test]
    fn zero_channels_rejected() {
        let a = triads(&[1.0, 1.0, 1.0]);
        assert!(matches!(
            Dtw::unconstrained().distance_multichannel(&a, &a, 0),
            Err(DtwError::InvalidChannelCount { n_channels: 0 })
        ));
    }
}

//! Property tests for the DTW engine and the channel aggregator.

use proptest::prelude::*;
use sakoe_dtw::{Bandwidth, ChannelLayout, Dtw, DtwDistance, MultiChannelSeries, TimeSeries};

fn series(max_len: usize) -> impl Strategy<Value = TimeSeries> {
    prop::collection::vec(-100.0f64..100.0, 1..max_len)
        .prop_map(|v| TimeSeries::new(v).expect("finite, non-empty"))
}

fn bandwidth() -> impl Strategy<Value = Bandwidth> {
    (0.0f64..=1.0).prop_map(|v| Bandwidth::new(v).expect("in range"))
}

fn triads(max_tuples: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0), 1..max_tuples)
        .prop_map(|tuples| tuples.into_iter().flat_map(|(x, y, z)| [x, y, z]).collect())
}

proptest! {
    #[test]
    fn self_distance_is_zero(a in series(40), bw in bandwidth()) {
        let d = Dtw::with_bandwidth(bw).distance(a.as_view(), a.as_view());
        prop_assert_eq!(d, DtwDistance::ZERO);
    }

    #[test]
    fn distance_is_symmetric(a in series(30), b in series(30), bw in bandwidth()) {
        let dtw = Dtw::with_bandwidth(bw);
        let ab = dtw.distance(a.as_view(), b.as_view());
        let ba = dtw.distance(b.as_view(), a.as_view());
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn distance_is_non_negative(a in series(30), b in series(30), bw in bandwidth()) {
        let d = Dtw::with_bandwidth(bw).distance(a.as_view(), b.as_view());
        prop_assert!(d.value() >= 0.0);
    }

    #[test]
    fn full_band_never_worse_than_narrow(a in series(30), b in series(30), bw in bandwidth()) {
        let full = Dtw::with_bandwidth(Bandwidth::FULL).distance(a.as_view(), b.as_view());
        let narrow = Dtw::with_bandwidth(bw).distance(a.as_view(), b.as_view());
        if let (Some(f), Some(n)) = (full.finite(), narrow.finite()) {
            prop_assert!(f <= n, "full {} > narrow {}", f, n);
        }
        if narrow.is_reachable() {
            prop_assert!(full.is_reachable());
        }
    }

    #[test]
    fn cutoff_is_exact_or_abandoned(
        a in series(25),
        b in series(25),
        cutoff in 0.0f64..50_000.0,
    ) {
        let dtw = Dtw::unconstrained();
        let exact = dtw.distance(a.as_view(), b.as_view());
        let cut = dtw.distance_with_cutoff(a.as_view(), b.as_view(), cutoff);
        if exact.value() <= cutoff {
            prop_assert_eq!(cut, exact);
        } else {
            prop_assert_eq!(cut, DtwDistance::UNREACHABLE);
        }
    }

    #[test]
    fn multichannel_is_mean_of_channels(
        a in triads(15),
        b in triads(15),
        bw in bandwidth(),
    ) {
        let layout = ChannelLayout::default();
        let ma = MultiChannelSeries::from_interleaved(&a, layout).unwrap();
        let mb = MultiChannelSeries::from_interleaved(&b, layout).unwrap();
        let dtw = Dtw::with_bandwidth(bw);

        let combined = dtw.distance_multichannel(&ma, &mb, 3).unwrap();
        let mut total = 0.0;
        for c in 0..3 {
            total += dtw
                .distance(ma.channel(c).unwrap(), mb.channel(c).unwrap())
                .value();
        }
        let mean = total / 3.0;

        if mean.is_finite() {
            prop_assert!((combined.value() - mean).abs() <= 1e-9 * mean.max(1.0));
        } else {
            prop_assert!(!combined.is_reachable());
        }
    }
}

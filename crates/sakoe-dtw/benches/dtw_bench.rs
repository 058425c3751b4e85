//! Criterion benchmarks for sakoe-dtw: banded distance, early abandoning, and channel averaging.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use sakoe_dtw::{Bandwidth, ChannelLayout, Dtw, MultiChannelSeries, TimeSeries};

fn make_sine_series(n: usize, offset: f64) -> TimeSeries {
    let values: Vec<f64> = (0..n).map(|i| (i as f64 * 0.1).sin() + offset).collect();
    TimeSeries::new(values).unwrap()
}

fn bench_dtw_distance(c: &mut Criterion) {
    let lengths = [64usize, 256, 1024];
    let bands: &[(f64, &str)] = &[(1.0, "full"), (0.1, "band_10pct"), (0.02, "band_2pct")];

    let mut group = c.benchmark_group("dtw_distance");

    for &len in &lengths {
        for &(fraction, band_label) in bands {
            let id = BenchmarkId::new(format!("len{len}"), band_label);
            let a = make_sine_series(len, 0.0);
            let b = make_sine_series(len, 1.0);
            let dtw = Dtw::with_bandwidth(Bandwidth::new(fraction).unwrap());

            group.bench_with_input(id, &(a, b, dtw), |bencher, (a, b, dtw)| {
                bencher.iter(|| dtw.distance(a.as_view(), b.as_view()));
            });
        }
    }

    group.finish();
}

fn bench_dtw_cutoff(c: &mut Criterion) {
    let a = make_sine_series(512, 0.0);
    let b = make_sine_series(512, 3.0);
    let dtw = Dtw::unconstrained();

    c.bench_function("dtw_cutoff_512_abandoned", |bencher| {
        bencher.iter(|| dtw.distance_with_cutoff(a.as_view(), b.as_view(), 1.0));
    });
}

fn bench_multichannel(c: &mut Criterion) {
    let flat = |offset: f64| -> Vec<f64> {
        (0..3 * 256)
            .map(|i| (i as f64 * 0.05).cos() + offset)
            .collect()
    };
    let layout = ChannelLayout::default();
    let a = MultiChannelSeries::from_interleaved(&flat(0.0), layout).unwrap();
    let b = MultiChannelSeries::from_interleaved(&flat(0.5), layout).unwrap();
    let dtw = Dtw::with_bandwidth(Bandwidth::new(0.1).unwrap());

    c.bench_function("dtw_multichannel_3x256_band_10pct", |bencher| {
        bencher.iter(|| dtw.distance_multichannel(&a, &b, 3).unwrap());
    });
}

criterion_group!(benches, bench_dtw_distance, bench_dtw_cutoff, bench_multichannel);
criterion_main!(benches);

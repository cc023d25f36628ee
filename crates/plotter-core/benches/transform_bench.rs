use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plotter_core::transform::{device_to_plot_local, find_plot_at, plot_local_to_device};
use plotter_core::{FixedAdvance, Orientation, Pair, PlotConfig, PlotGeometry, Theme};

fn grid_of_plots(n: usize) -> Vec<PlotGeometry> {
    let theme = Theme::classic();
    (0..n)
        .map(|i| {
            let cfg = PlotConfig::new()
                .with_offset((i % 8) as f64 * 320.0, (i / 8) as f64 * 300.0)
                .with_orientation(Orientation::ALL[i % 4]);
            PlotGeometry::new(&cfg, &FixedAdvance::default(), &theme)
        })
        .collect()
}

fn bench_find_plot(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_plot_at");
    for &n in &[4usize, 64] {
        let plots = grid_of_plots(n);
        // Lands in the last plot, so the scan visits every one.
        let last = plots[n - 1].offset().plus(Pair::new(100.0, 100.0));
        group.bench_function(format!("plots_{n}"), |b| {
            b.iter(|| black_box(find_plot_at(black_box(last), Pair::ZERO, &plots)));
        });
    }
    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let plots = grid_of_plots(4);
    let origin = Pair::new(8.0, 8.0);
    c.bench_function("device_round_trip_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..10_000 {
                let plot = &plots[i % plots.len()];
                let d = Pair::new(i as f64 * 0.1, (i % 300) as f64);
                let back = plot_local_to_device(device_to_plot_local(d, origin, plot), origin, plot);
                acc += back.x + back.y;
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_find_plot, bench_round_trip);
criterion_main!(benches);

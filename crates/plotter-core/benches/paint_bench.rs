use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plotter_core::{PlotConfig, Plotter, RecordingSurface};

fn bench_paint(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint");
    for &(name, ppu) in &[("default", 10.0), ("dense_grid", 40.0)] {
        group.bench_function(name, |b| {
            let mut plotter = Plotter::new(RecordingSurface::default());
            let id = plotter.register(&PlotConfig::new().with_pixel_per_unit(ppu, ppu), None);
            plotter.select(id, false, false);
            b.iter(|| {
                plotter.clear_plot(false);
                black_box(plotter.surface_mut().take_ops());
            });
        });
    }
    group.finish();
}

fn bench_function_sampling(c: &mut Criterion) {
    let mut plotter = Plotter::new(RecordingSurface::default());
    let id = plotter.register(&PlotConfig::new(), None);
    plotter.select(id, false, true);
    c.bench_function("plot_function_step_0.01", |b| {
        b.iter(|| {
            plotter.plot_function(|x| Some((x * 0.5).sin() * 8.0), true, 0.01, None, None);
            black_box(plotter.surface_mut().take_ops());
        });
    });
}

criterion_group!(benches, bench_paint, bench_function_sampling);
criterion_main!(benches);

// File: crates/plotter-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot of a label-free plot with primitives, with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns without failing.

use plotter_core::{Orientation, Pair, PlotConfig, PlotterOptions, Theme};
use plotter_render_skia::raster_plotter;

fn render_bytes() -> Vec<u8> {
    let mut plotter = raster_plotter(PlotterOptions::default(), Theme::classic()).expect("raster surface");
    // No labels or titles: avoids font differences between machines.
    let quiet = PlotConfig::new().with_axes("", "").with_label_frequency(0, 0);
    let left = plotter.register(&quiet.clone().with_domain(-5.0, 5.0).with_range(-5.0, 5.0).with_pixel_per_unit(20.0, 20.0), None);
    plotter.register(
        &quiet.with_offset(260.0, 0.0).with_orientation(Orientation::C).with_zero_bound_axis(false),
        Some("mirrored"),
    );

    plotter.select(left, false, true);
    plotter.plot_slope(Pair::ZERO, 0.5);
    plotter.plot_function(|x| Some(x * x * 0.2 - 4.0), true, 0.25, None, None);
    plotter.plot_poly(&[Pair::new(-4.0, 1.0), Pair::new(-2.0, 4.0), Pair::new(-1.0, 1.0)], true);

    plotter.select("mirrored", false, true);
    plotter.plot_point(Pair::new(-8.0, -8.0), 4.0, true);
    plotter.plot_point(Pair::new(8.0, 8.0), 4.0, false);
    plotter.plot_line(Pair::new(-10.0, 0.0), Pair::new(10.0, 5.0));

    plotter.surface_mut().png_bytes().expect("encode png")
}

#[test]
fn golden_two_plots() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("two_plots.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.dimensions(), want_img.dimensions(), "snapshot size changed");
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

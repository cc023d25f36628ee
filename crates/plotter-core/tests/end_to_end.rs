// File: crates/plotter-core/tests/end_to_end.rs
// Purpose: Register/edit/slope flow and surface auto-fit sizing on a recording surface.

use plotter_core::{
    DrawOp, Orientation, Pair, PlotConfig, Plotter, PlotterOptions, RecordingSurface, Rect, Surface, TextAlign, Theme,
};

fn last_resize(s: &RecordingSurface) -> Option<(f64, f64)> {
    s.ops().iter().rev().find_map(|op| match op {
        DrawOp::Resize { width, height } => Some((*width, *height)),
        _ => None,
    })
}

#[test]
fn default_plot_edit_and_slope() {
    let mut plotter = Plotter::new(RecordingSurface::default());
    let id = plotter.register(&PlotConfig::new(), None);

    let plot = plotter.plot(id).expect("registered plot resolves");
    assert_eq!(plot.domain(), Pair::new(-10.0, 10.0));
    assert_eq!(plot.range(), Pair::new(-10.0, 10.0));
    assert_eq!(plot.pixel_per_unit(), Pair::new(10.0, 10.0));
    assert_eq!(plot.plot_size(), Pair::new(200.0, 200.0));

    let wide = plotter.register(&PlotConfig::new(), Some("wide"));
    plotter.edit("wide", &PlotConfig::new().with_domain(0.0, 100.0), false, false);
    assert_eq!(plotter.plot(wide).map(|p| p.plot_size().x), Some(1000.0));

    plotter.select(id, true, true);
    let line = plotter.plot_slope(Pair::ZERO, 1.0).expect("plot is selected");
    assert_eq!(line.a, Pair::new(-10.0, -10.0));
    assert_eq!(line.b, Pair::new(10.0, 10.0));
    assert_eq!(line.point, Some(Pair::ZERO));
    assert_eq!(line.slope, Some(1.0));
}

#[test]
fn steep_slope_is_cut_at_the_range() {
    let mut plotter = Plotter::new(RecordingSurface::default());
    let id = plotter.register(&PlotConfig::new(), None);
    plotter.select(id, false, false);

    let line = plotter.plot_slope(Pair::ZERO, 4.0).expect("plot is selected");
    assert_eq!(line.a, Pair::new(-2.5, -10.0));
    assert_eq!(line.b, Pair::new(2.5, 10.0));

    let vertical = plotter.plot_slope(Pair::new(3.0, 0.0), f64::INFINITY).expect("plot is selected");
    assert_eq!(vertical.a, Pair::new(3.0, -10.0));
    assert_eq!(vertical.b, Pair::new(3.0, 10.0));
}

#[test]
fn auto_fit_covers_offsets_labels_and_padding() {
    // Default plot with FixedAdvance metrics: bleed.x = 8, label_size.y = 48.
    let mut plotter = Plotter::new(RecordingSurface::default());
    plotter.register(&PlotConfig::new(), None);
    assert_eq!(last_resize(plotter.surface()), Some((75.0 + 200.0 + 8.0 + 10.0, 20.0 + 200.0 + 48.0 + 10.0)));

    plotter.register(&PlotConfig::new().with_offset(300.0, 0.0), None);
    assert_eq!(last_resize(plotter.surface()), Some((375.0 + 200.0 + 8.0 + 10.0, 278.0)));

    let options = PlotterOptions { padding: Pair::new(5.0, 7.0), ..PlotterOptions::default() };
    let mut padded = Plotter::with_options(RecordingSurface::default(), options, Theme::classic());
    padded.register(&PlotConfig::new(), None);
    assert_eq!(padded.surface().size(), Pair::new(298.0, 285.0));
}

#[test]
fn auto_fit_without_plots_leaves_surface_alone() {
    let mut plotter = Plotter::new(RecordingSurface::new(120.0, 80.0));
    plotter.auto_fit();
    assert!(plotter.surface().ops().is_empty());
    assert_eq!(plotter.surface().size(), Pair::new(120.0, 80.0));
}

#[test]
fn fit_strokes_border_then_paints_every_plot() {
    let mut plotter = Plotter::new(RecordingSurface::default());
    plotter.register(&PlotConfig::new(), None);
    let ops = plotter.surface().ops();
    assert!(matches!(ops[0], DrawOp::Resize { .. }));
    match &ops[1] {
        DrawOp::StrokeRect { rect, stroke } => {
            assert_eq!(*rect, Rect::from_ltwh(0.0, 0.0, 293.0, 278.0));
            assert_eq!(stroke.width, 2.0);
        }
        other => panic!("expected border, got {other:?}"),
    }
    assert_eq!(plotter.surface().save_depth(), 0);
}

#[test]
fn tick_zero_under_a_meets_last_tick_under_c() {
    fn x_label_positions(o: Orientation) -> Vec<(String, f64)> {
        let mut plotter = Plotter::new(RecordingSurface::default());
        plotter.register(&PlotConfig::new().with_orientation(o), None);
        plotter
            .surface()
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, at, style, .. } if style.font.size == 16.0 && style.align == TextAlign::Center => {
                    Some((text.clone(), at.x))
                }
                _ => None,
            })
            .collect()
    }
    let a = x_label_positions(Orientation::A);
    let c = x_label_positions(Orientation::C);
    assert_eq!(a.first(), Some(&("-10".to_string(), 75.0)));
    // Under c the last tick (value 10) sits where tick 0 sits under a.
    assert_eq!(c.last(), Some(&("10".to_string(), 75.0)));
    assert_eq!(c.first(), Some(&("-10".to_string(), 275.0)));
}

#[test]
fn coordinate_overlay_stays_off_by_default() {
    let mut plotter = Plotter::new(RecordingSurface::default());
    let id = plotter.register(&PlotConfig::new(), None);
    plotter.select(id, true, false);
    assert!(!plotter.surface().texts().iter().any(|t| t.starts_with("x: ") || t.starts_with("y: ")));
}

#[test]
fn full_redraw_clears_surface_and_repaints() {
    let mut plotter = Plotter::new(RecordingSurface::default());
    let first = plotter.register(&PlotConfig::new(), None);
    plotter.register(&PlotConfig::new().with_offset(300.0, 0.0), None);
    plotter.surface_mut().take_ops();

    plotter.edit(first, &PlotConfig::new().with_draw_grid(false), false, true);
    let ops = plotter.surface().ops();
    assert_eq!(ops[0], DrawOp::ClearRect(Rect::from_ltwh(0.0, 0.0, 593.0, 278.0)));
    assert!(matches!(ops[1], DrawOp::StrokeRect { .. }));
    let titles = plotter.surface().texts().iter().filter(|t| **t == "xAxis").count();
    assert_eq!(titles, 2);
}

#[test]
fn edit_without_recompute_keeps_label_gutters() {
    let mut plotter = Plotter::new(RecordingSurface::default());
    let id = plotter.register(&PlotConfig::new(), None);
    let before = plotter.plot(id).map(|p| p.label_size());

    plotter.edit(id, &PlotConfig::new().with_axes("", ""), false, false);
    assert_eq!(plotter.plot(id).map(|p| p.label_size()), before);

    plotter.edit(id, &PlotConfig::new(), true, false);
    assert_eq!(plotter.plot(id).map(|p| p.label_size().y), Some(24.0));
}

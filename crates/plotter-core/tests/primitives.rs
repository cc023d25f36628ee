// File: crates/plotter-core/tests/primitives.rs
// Purpose: Drawing primitives on the selected plot: points, polygons, sampled functions, text.

use std::cell::RefCell;
use std::rc::Rc;

use plotter_core::surface::PathOp;
use plotter_core::{DrawOp, Pair, Path, PlotConfig, PlotError, Plotter, RecordingSurface};

/// Default plot selected without clip, with the paint log cleared.
fn selected_default() -> Plotter<RecordingSurface> {
    let mut plotter = Plotter::new(RecordingSurface::default());
    let id = plotter.register(&PlotConfig::new(), None);
    plotter.select(id, false, false);
    plotter.surface_mut().take_ops();
    plotter
}

fn only_path(plotter: &Plotter<RecordingSurface>) -> Path {
    let paths: Vec<&Path> = plotter
        .surface()
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::StrokePath { path, .. } => Some(path),
            _ => None,
        })
        .collect();
    assert_eq!(paths.len(), 1, "expected exactly one stroked path");
    paths[0].clone()
}

#[test]
fn point_lands_on_transformed_position() {
    let mut plotter = selected_default();
    plotter.plot_point(Pair::new(-10.0, -10.0), 3.0, true);
    plotter.plot_point(Pair::ZERO, 2.0, false);
    let ops = plotter.surface().ops();
    assert!(matches!(ops[0], DrawOp::FillCircle { center, radius, .. } if center == Pair::new(75.0, 220.0) && radius == 3.0));
    assert!(matches!(ops[1], DrawOp::StrokeCircle { center, .. } if center == Pair::new(175.0, 120.0)));
}

#[test]
fn line_uses_round_caps() {
    let mut plotter = selected_default();
    plotter.plot_line(Pair::ZERO, Pair::new(10.0, 0.0));
    match &plotter.surface().ops()[0] {
        DrawOp::StrokePath { path, stroke } => {
            assert!(stroke.round_cap);
            assert_eq!(path.ops(), &[PathOp::MoveTo(Pair::new(175.0, 120.0)), PathOp::LineTo(Pair::new(275.0, 120.0))]);
        }
        other => panic!("expected a path, got {other:?}"),
    }
}

#[test]
fn polygon_includes_every_vertex() {
    let mut plotter = selected_default();
    let triangle = [Pair::new(0.0, 0.0), Pair::new(5.0, 0.0), Pair::new(5.0, 5.0)];
    plotter.plot_poly(&triangle, false);
    let open = only_path(&plotter);
    assert_eq!(open.segment_count(), 2);
    assert_eq!(open.ops().last(), Some(&PathOp::LineTo(Pair::new(225.0, 70.0))));

    plotter.surface_mut().take_ops();
    plotter.plot_poly(&triangle, true);
    let closed = only_path(&plotter);
    assert_eq!(closed.segment_count(), 3);
    assert_eq!(closed.ops().last(), Some(&PathOp::LineTo(Pair::new(175.0, 120.0))));
}

#[test]
fn polygon_needs_two_vertices() {
    let mut plotter = selected_default();
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&errors);
    plotter.set_diagnostics(move |e| sink.borrow_mut().push(e.clone()));

    plotter.plot_poly(&[Pair::ZERO], true);
    plotter.plot_poly(&[], false);
    assert!(plotter.surface().ops().is_empty());
    assert_eq!(
        *errors.borrow(),
        vec![PlotError::IncompleteShape { vertices: 1 }, PlotError::IncompleteShape { vertices: 0 }]
    );
}

#[test]
fn function_gap_breaks_the_curve() {
    let mut plotter = selected_default();
    plotter.plot_function(|x| if x == 0.0 { None } else { Some(x) }, true, 1.0, None, None);
    let path = only_path(&plotter);
    let moves = path.ops().iter().filter(|op| matches!(op, PathOp::MoveTo(_))).count();
    assert_eq!(moves, 2);
    // -10..=-1 and 1..=10: nine segments on each side of the gap
    assert_eq!(path.segment_count(), 18);
}

#[test]
fn function_ends_exactly_on_end() {
    let mut plotter = selected_default();
    let mut seen = Vec::new();
    plotter.plot_function(
        |x| {
            seen.push(x);
            Some(x)
        },
        true,
        3.0,
        Some(0.0),
        Some(10.0),
    );
    assert_eq!(seen, vec![0.0, 3.0, 6.0, 9.0, 10.0]);
    let path = only_path(&plotter);
    assert_eq!(path.segment_count(), 4);
    assert_eq!(path.ops().last(), Some(&PathOp::LineTo(Pair::new(275.0, 20.0))));
}

#[test]
fn function_advances_past_coarse_float_spacing() {
    // Around 1e17 adjacent doubles are 16 apart, so a step of 1 cannot be
    // added to the running value directly.
    let mut plotter = selected_default();
    let mut seen = Vec::new();
    plotter.plot_function(
        |x| {
            seen.push(x);
            assert!(seen.len() < 1_000, "sampling made no progress at {x}");
            Some(0.0)
        },
        true,
        1.0,
        Some(1e17),
        Some(1e17 + 64.0),
    );
    assert_eq!(seen.first(), Some(&1e17));
    assert_eq!(seen.last(), Some(&(1e17 + 64.0)));
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(only_path(&plotter).segment_count(), seen.len() - 1);
}

#[test]
fn range_function_swaps_axes() {
    let mut plotter = selected_default();
    plotter.plot_function(|_| Some(-10.0), false, 10.0, None, None);
    let path = only_path(&plotter);
    // x = -10 for y in -10, 0, 10: a vertical line on the left edge
    assert_eq!(
        path.ops(),
        &[
            PathOp::MoveTo(Pair::new(75.0, 220.0)),
            PathOp::LineTo(Pair::new(75.0, 120.0)),
            PathOp::LineTo(Pair::new(75.0, 20.0)),
        ]
    );
}

#[test]
fn function_rejects_bad_step() {
    let mut plotter = selected_default();
    let errors = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&errors);
    plotter.set_diagnostics(move |e| sink.borrow_mut().push(e.clone()));

    plotter.plot_function(Some, true, 0.0, None, None);
    plotter.plot_function(Some, true, -1.0, None, None);
    assert!(plotter.surface().ops().is_empty());
    assert_eq!(*errors.borrow(), vec![PlotError::InvalidStep(0.0), PlotError::InvalidStep(-1.0)]);
}

#[test]
fn text_defaults_to_plot_centre() {
    let mut plotter = selected_default();
    plotter.plot_text("centre", None);
    plotter.plot_text("corner", Some(Pair::new(10.0, 10.0)));
    let placed: Vec<(String, Pair)> = plotter
        .surface()
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, at, .. } => Some((text.clone(), *at)),
            _ => None,
        })
        .collect();
    assert_eq!(
        placed,
        vec![("centre".to_string(), Pair::new(175.0, 120.0)), ("corner".to_string(), Pair::new(275.0, 20.0))]
    );
}

// File: crates/plotter-core/src/render.rs
// Summary: Per-plot paint pipeline: background, grid, tick labels, axis lines, titles, coordinate overlay.

use std::f64::consts::PI;

use crate::geometry::{clamp, Rect};
use crate::plot::PlotGeometry;
use crate::surface::{Path, Stroke, Surface, TextAlign, TextBaseline, TextStyle};
use crate::theme::Theme;
use crate::types::Pair;

/// Gap between the plot box and its tick labels.
const TICK_LABEL_GAP: f64 = 5.0;

/// Grid segments per stroked path.
const GRID_CHUNK: usize = 4096;

/// One grid position along an axis. `pixel` is measured from the plot's
/// drawing origin (left edge for x, top edge for y).
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub index: u32,
    pub pixel: f64,
    pub value: f64,
    pub label: Option<String>,
}

/// Grid positions along the x axis, mirrored for orientations c and d.
/// Ticks are produced lazily; a dense axis never materialises all of them.
pub fn x_ticks(plot: &PlotGeometry) -> impl Iterator<Item = Tick> + '_ {
    let grid = plot.grid_size().x;
    let size = plot.plot_size().x;
    let mirror = plot.orientation().mirrors_x();
    let freq = plot.label_frequency().x;
    (0..=plot.last_tick().x).map(move |i| {
        let along = i as f64 * grid;
        let value = plot.domain().x + i as f64 * plot.unit_per_tick().x;
        Tick {
            index: i,
            pixel: if mirror { size - along } else { along },
            value,
            label: labelled(i, freq).then(|| plot.tick_label(value, true)),
        }
    })
}

/// Grid positions along the y axis; pixel rows grow downward, so the
/// unmirrored orientations (a, d) count up from the bottom edge.
pub fn y_ticks(plot: &PlotGeometry) -> impl Iterator<Item = Tick> + '_ {
    let grid = plot.grid_size().y;
    let size = plot.plot_size().y;
    let mirror = plot.orientation().mirrors_y();
    let freq = plot.label_frequency().y;
    (0..=plot.last_tick().y).map(move |j| {
        let along = j as f64 * grid;
        let value = plot.range().x + j as f64 * plot.unit_per_tick().y;
        Tick {
            index: j,
            pixel: if mirror { along } else { size - along },
            value,
            label: labelled(j, freq).then(|| plot.tick_label(value, false)),
        }
    })
}

fn labelled(index: u32, frequency: i32) -> bool {
    frequency > 0 && index % frequency as u32 == 0
}

/// Pixel position (from the drawing origin) of the vertical axis line (`x`)
/// and the horizontal axis line (`y`).
pub fn axis_position(plot: &PlotGeometry) -> Pair {
    let o = plot.orientation();
    let size = plot.plot_size();
    let ppu = plot.pixel_per_unit();
    if plot.zero_bound_axis() {
        let zero_x = if o.mirrors_x() { plot.domain().y } else { -plot.domain().x } * ppu.x;
        let zero_y = if o.mirrors_y() { -plot.range().x } else { plot.range().y } * ppu.y;
        Pair::new(clamp(zero_x, 0.0, size.x), clamp(zero_y, 0.0, size.y))
    } else {
        Pair::new(
            if o.mirrors_x() { size.x } else { 0.0 },
            if o.mirrors_y() { 0.0 } else { size.y },
        )
    }
}

/// Region cleared before a plot is painted, relative to its drawing origin:
/// the plot box plus label gutters and bleed.
pub fn clear_region(plot: &PlotGeometry) -> Rect {
    let size = plot.plot_size();
    let label = plot.label_size();
    let bleed = plot.label_bleed();
    Rect::from_ltwh(
        -label.x,
        bleed.y,
        size.x + label.x + bleed.x,
        size.y + label.y - bleed.y,
    )
}

/// Clip rectangle for primitives drawn on a selected plot, in surface pixels.
/// Inset by one pixel on the near edges so the axis lines stay intact.
pub fn clip_region(plot: &PlotGeometry) -> Rect {
    let offset = plot.offset();
    let size = plot.plot_size();
    Rect::from_ltwh(offset.x + 1.0, offset.y, size.x - 1.0, size.y - 1.0)
}

/// Paint one plot: clear its region, then background, grid, labels, axes,
/// titles and (if enabled) the pointer coordinate overlay.
pub fn paint<S: Surface + ?Sized>(surface: &mut S, plot: &PlotGeometry, theme: &Theme, debug_borders: bool) {
    let size = plot.plot_size();
    let label_size = plot.label_size();

    surface.save();
    surface.translate(plot.offset());

    let region = clear_region(plot);
    surface.clear_rect(region);
    if debug_borders {
        surface.stroke_rect(region, &Stroke::new(theme.surface_border, theme.debug_border_width));
    }

    surface.fill_rect(Rect::from_ltwh(0.0, 0.0, size.x, size.y), theme.background);

    // grid, stroked in bounded chunks
    if plot.draw_grid() {
        let stroke = Stroke::new(theme.grid, theme.grid_width);
        let mut grid = Path::new();
        let vertical = x_ticks(plot).map(|t| (Pair::new(t.pixel, size.y), Pair::new(t.pixel, 0.0)));
        let horizontal = y_ticks(plot).map(|t| (Pair::new(0.0, t.pixel), Pair::new(size.x, t.pixel)));
        for (a, b) in vertical.chain(horizontal) {
            grid.segment(a, b);
            if grid.segment_count() >= GRID_CHUNK {
                surface.stroke_path(&grid, &stroke);
                grid = Path::new();
            }
        }
        if !grid.is_empty() {
            surface.stroke_path(&grid, &stroke);
        }
    }

    // tick labels
    let x_style = TextStyle::new(theme.tick_font.clone(), theme.tick_label)
        .aligned(TextAlign::Center, TextBaseline::Top);
    for tick in x_ticks(plot) {
        if let Some(text) = tick.label {
            surface.fill_text(&text, Pair::new(tick.pixel, size.y + TICK_LABEL_GAP), &x_style);
        }
    }
    let y_style = TextStyle::new(theme.tick_font.clone(), theme.tick_label)
        .aligned(TextAlign::Right, TextBaseline::Middle);
    for tick in y_ticks(plot) {
        if let Some(text) = tick.label {
            surface.fill_text(&text, Pair::new(-TICK_LABEL_GAP, tick.pixel), &y_style);
        }
    }

    // axis lines
    let axis = axis_position(plot);
    let mut axes = Path::new();
    axes.segment(Pair::new(axis.x, 0.0), Pair::new(axis.x, size.y));
    axes.segment(Pair::new(0.0, axis.y), Pair::new(size.x, axis.y));
    surface.stroke_path(&axes, &Stroke::new(theme.axis_line, theme.axis_width));

    // titles
    if !plot.x_axis().is_empty() {
        let style = TextStyle::new(theme.title_font.clone(), theme.axis_title)
            .aligned(TextAlign::Center, TextBaseline::Bottom);
        surface.fill_text(plot.x_axis(), Pair::new(size.x * 0.5, size.y + label_size.y), &style);
    }
    if !plot.y_axis().is_empty() {
        let style = TextStyle::new(theme.title_font.clone(), theme.axis_title)
            .aligned(TextAlign::Center, TextBaseline::Top);
        surface.save();
        surface.translate(Pair::new(-label_size.x, size.y * 0.5));
        surface.rotate(1.5 * PI);
        surface.fill_text(plot.y_axis(), Pair::ZERO, &style);
        surface.restore();
    }

    if plot.draw_coords() {
        paint_coords(surface, plot, theme);
    }

    surface.restore();
}

/// Best-effort overlay of the latest pointer position, bottom right of the
/// plot. Expects the surface to be translated to the plot origin.
fn paint_coords<S: Surface + ?Sized>(surface: &mut S, plot: &PlotGeometry, theme: &Theme) {
    let size = plot.plot_size();
    let baseline = size.y + plot.label_size().y;
    let font = &theme.title_font;
    let value_width = surface
        .measure_text(&plot.tick_label(plot.domain().x, true), font)
        .max(surface.measure_text(&plot.tick_label(plot.domain().y, true), font));
    let x_column = value_width * 2.0 + surface.measure_text("y: ", font);

    let style = TextStyle::new(font.clone(), theme.axis_title).aligned(TextAlign::Left, TextBaseline::Bottom);
    let at = plot.mouse.moved;
    surface.fill_text(&format!("x: {}", rounded(at.x)), Pair::new(size.x - x_column - 20.0, baseline), &style);
    surface.fill_text(&format!("y: {}", rounded(at.y)), Pair::new(size.x - value_width - 10.0, baseline), &style);
}

fn rounded(v: f64) -> i64 {
    let r = v.round();
    if r.is_finite() { r as i64 } else { 0 }
}

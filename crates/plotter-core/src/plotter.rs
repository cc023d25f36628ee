// File: crates/plotter-core/src/plotter.rs
// Summary: Multi-plot surface manager: registry, selection and clip state, drawing primitives, input routing.

use std::collections::HashMap;
use std::fmt;

use crate::config::{PlotConfig, PlotterOptions};
use crate::error::PlotError;
use crate::geometry::Rect;
use crate::input::{PointerEvent, PointerKind, TouchEvent, TouchPhase};
use crate::line::Line;
use crate::plot::{MouseState, PlotGeometry};
use crate::render;
use crate::surface::{Path, Stroke, Surface, TextStyle};
use crate::theme::Theme;
use crate::transform;
use crate::types::{Pair, FIT_SAFETY_MARGIN};

/// Stable handle of a registered plot. Plots are never removed, so a handle
/// stays valid for the lifetime of its [`Plotter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlotId(usize);

impl PlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ways of naming a plot in manager calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotRef<'a> {
    Index(usize),
    Name(&'a str),
    Handle(PlotId),
}

impl From<usize> for PlotRef<'_> {
    fn from(i: usize) -> Self {
        PlotRef::Index(i)
    }
}

impl<'a> From<&'a str> for PlotRef<'a> {
    fn from(name: &'a str) -> Self {
        PlotRef::Name(name)
    }
}

impl From<PlotId> for PlotRef<'_> {
    fn from(id: PlotId) -> Self {
        PlotRef::Handle(id)
    }
}

impl fmt::Display for PlotRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotRef::Index(i) => write!(f, "#{i}"),
            PlotRef::Name(n) => write!(f, "'{n}'"),
            PlotRef::Handle(id) => write!(f, "handle {}", id.0),
        }
    }
}

type Diagnostics = Box<dyn FnMut(&PlotError)>;

/// Owns a drawing surface and the plots laid out on it.
///
/// At most one plot is selected; drawing primitives target it and are
/// clipped to its interior while the selection holds a clip. The clip is
/// always released before a surface-wide repaint and put back afterwards.
///
/// Failed calls (unknown plot, nothing selected, too few vertices) do
/// nothing. They are logged at debug level and passed to the hook set with
/// [`Plotter::set_diagnostics`].
pub struct Plotter<S: Surface> {
    surface: S,
    plots: Vec<PlotGeometry>,
    names: HashMap<String, usize>,
    current: Option<PlotId>,
    clipped: bool,
    options: PlotterOptions,
    theme: Theme,
    diagnostics: Option<Diagnostics>,
}

impl<S: Surface> Plotter<S> {
    pub fn new(surface: S) -> Self {
        Self::with_options(surface, PlotterOptions::default(), Theme::default())
    }

    pub fn with_options(surface: S, options: PlotterOptions, theme: Theme) -> Self {
        Self {
            surface,
            plots: Vec::new(),
            names: HashMap::new(),
            current: None,
            clipped: false,
            options,
            theme,
            diagnostics: None,
        }
    }

    /// Install a hook that receives every error the manager swallows.
    pub fn set_diagnostics(&mut self, hook: impl FnMut(&PlotError) + 'static) {
        self.diagnostics = Some(Box::new(hook));
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn options(&self) -> &PlotterOptions {
        &self.options
    }

    /// Move the surface in device space; affects pointer routing only.
    pub fn set_origin(&mut self, origin: Pair) {
        self.options.origin = origin;
    }

    pub fn debug_borders(&self) -> bool {
        self.options.debug_borders
    }

    /// Outline each plot's cleared region on subsequent paints.
    pub fn set_debug_borders(&mut self, on: bool) {
        self.options.debug_borders = on;
    }

    pub fn plots(&self) -> &[PlotGeometry] {
        &self.plots
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    pub fn is_clipped(&self) -> bool {
        self.clipped
    }

    // ---- registry -----------------------------------------------------------

    /// Add a plot built from `config` and refit the surface around all plots.
    /// A name already in use is rebound to the new plot.
    pub fn register(&mut self, config: &PlotConfig, name: Option<&str>) -> PlotId {
        let plot = PlotGeometry::new(config, &self.surface, &self.theme);
        let id = PlotId(self.plots.len());
        self.plots.push(plot);
        if let Some(name) = name {
            if let Some(prev) = self.names.insert(name.to_string(), id.0) {
                log::debug!(target: "plotter", "name '{name}' moved from plot {prev} to plot {}", id.0);
            }
        }
        log::debug!(target: "plotter", "registered plot {} name={:?}", id.0, name);
        self.auto_fit();
        id
    }

    /// Look up a plot without side effects.
    pub fn resolve<'a>(&self, r: impl Into<PlotRef<'a>>) -> Option<PlotId> {
        let index = match r.into() {
            PlotRef::Index(i) | PlotRef::Handle(PlotId(i)) => i,
            PlotRef::Name(n) => *self.names.get(n)?,
        };
        (index < self.plots.len()).then_some(PlotId(index))
    }

    pub fn plot<'a>(&self, r: impl Into<PlotRef<'a>>) -> Option<&PlotGeometry> {
        self.resolve(r).map(|id| &self.plots[id.0])
    }

    pub fn id_of(&self, name: &str) -> Option<PlotId> {
        self.resolve(name)
    }

    /// Selected plot, if any.
    pub fn current_id(&self) -> Option<PlotId> {
        self.current
    }

    pub fn current(&self) -> Option<&PlotGeometry> {
        self.current.map(|id| &self.plots[id.0])
    }

    /// Pointer state of the selected plot.
    pub fn current_mouse(&self) -> Option<&MouseState> {
        self.current().map(|p| &p.mouse)
    }

    /// Transform `p` through the selected plot into surface pixels.
    pub fn plot_to_surface(&self, p: Pair) -> Option<Pair> {
        self.current().map(|plot| transform::plot_local_to_surface(p, plot))
    }

    /// Whether `p` lies inside the referenced plot, or the selected plot when
    /// no reference is given.
    pub fn point_on_plot(&self, p: Pair, r: Option<PlotRef<'_>>) -> bool {
        let target = match r {
            Some(r) => self.plot(r),
            None => self.current(),
        };
        target.is_some_and(|plot| transform::is_in_bounds(p, plot))
    }

    // ---- surface management -------------------------------------------------

    /// Resize the surface to fit every plot with its labels, stroke the
    /// surface border and repaint all plots.
    pub fn auto_fit(&mut self) {
        if self.plots.is_empty() {
            return;
        }
        let mut size = Pair::ZERO;
        for plot in &self.plots {
            let offset = plot.offset();
            let extent = plot.plot_size();
            size.x = size.x.max(offset.x + extent.x + plot.label_bleed().x);
            size.y = size.y.max(offset.y + extent.y + plot.label_size().y);
        }
        let size = size.plus(self.options.padding).plus(Pair::new(FIT_SAFETY_MARGIN, FIT_SAFETY_MARGIN));
        log::debug!(target: "plotter", "autofit surface to {:.0}x{:.0}", size.x, size.y);

        let reclip = self.release_clip();
        self.surface.resize(size.x, size.y);
        self.stroke_surface_border();
        for i in 0..self.plots.len() {
            self.paint_plot(i);
        }
        if reclip {
            self.reclip_current();
        }
    }

    /// Make the referenced plot current. `clear` repaints it; `clip` confines
    /// subsequent primitives to its interior.
    pub fn select<'a>(&mut self, r: impl Into<PlotRef<'a>>, clear: bool, clip: bool) {
        let Some(id) = self.lookup("select", r.into()) else {
            return;
        };
        self.release_clip();
        self.current = Some(id);
        log::debug!(target: "plotter", "selected plot {} clear={clear} clip={clip}", id.0);
        if clear {
            self.paint_plot(id.0);
        }
        if clip {
            self.clip_to(id.0);
        }
    }

    /// Merge `config` into the referenced plot and repaint it. With
    /// `recompute_labels` the label gutters are re-measured; with
    /// `full_redraw` the whole surface is cleared and every plot repainted.
    pub fn edit<'a>(&mut self, r: impl Into<PlotRef<'a>>, config: &PlotConfig, recompute_labels: bool, full_redraw: bool) {
        let Some(id) = self.lookup("edit", r.into()) else {
            return;
        };
        let reclip = self.release_clip();

        let plot = &mut self.plots[id.0];
        plot.apply(config);
        if recompute_labels {
            plot.recompute_label_geometry(&self.surface, &self.theme);
        } else if config.touches_labels() {
            log::trace!(target: "plotter", "plot {} edited without label recompute; gutters keep their old size", id.0);
        }
        log::debug!(target: "plotter", "edited plot {} recompute_labels={recompute_labels} full_redraw={full_redraw}", id.0);

        if full_redraw {
            let size = self.surface.size();
            self.surface.clear_rect(Rect::from_ltwh(0.0, 0.0, size.x, size.y));
            self.stroke_surface_border();
            for i in 0..self.plots.len() {
                self.paint_plot(i);
            }
        } else {
            self.paint_plot(id.0);
        }

        if reclip {
            self.reclip_current();
        }
    }

    /// Repaint the selected plot. With `unclip` the clip is lifted for the
    /// repaint (so labels outside the plot box are redrawn) and restored after.
    pub fn clear_plot(&mut self, unclip: bool) {
        let Some(id) = self.current else {
            self.fail("clear_plot", PlotError::NoActivePlot);
            return;
        };
        let reclip = unclip && self.release_clip();
        self.paint_plot(id.0);
        if reclip {
            self.clip_to(id.0);
        }
    }

    // ---- drawing primitives -------------------------------------------------

    /// Circle of `radius` pixels at the plot-local point `p`.
    pub fn plot_point(&mut self, p: Pair, radius: f64, fill: bool) {
        let Some(at) = self.to_surface("plot_point", p) else {
            return;
        };
        log::trace!(target: "plotter", "point at ({:.1},{:.1}) r={radius}", at.x, at.y);
        if fill {
            self.surface.fill_circle(at, radius, self.theme.ink);
        } else {
            let stroke = self.primitive_stroke();
            self.surface.stroke_circle(at, radius, &stroke);
        }
    }

    pub fn plot_line(&mut self, a: Pair, b: Pair) {
        let Some(plot) = self.selected("plot_line") else {
            return;
        };
        let mut path = Path::new();
        path.segment(
            transform::plot_local_to_surface(a, plot),
            transform::plot_local_to_surface(b, plot),
        );
        let stroke = self.primitive_stroke().round();
        self.surface.stroke_path(&path, &stroke);
    }

    /// Line through `p` with `slope`, cut to the plot's domain/range box and
    /// painted. Returns the cut endpoints along with `p` and `slope`.
    pub fn plot_slope(&mut self, p: Pair, slope: f64) -> Option<Line> {
        let plot = self.selected("plot_slope")?;
        let (domain, range) = (plot.domain(), plot.range());

        let (a, b) = if slope.is_infinite() {
            (Pair::new(p.x, range.x), Pair::new(p.x, range.y))
        } else if slope.is_nan() {
            log::debug!(target: "plotter", "plot_slope: slope is NaN");
            return None;
        } else if slope == 0.0 {
            (Pair::new(domain.x, p.y), Pair::new(domain.y, p.y))
        } else {
            let edge = |x: f64| {
                let mut q = Pair::new(x, p.y - slope * (p.x - x));
                if q.y < range.x || q.y > range.y {
                    q.y = if q.y < range.x { range.x } else { range.y };
                    q.x = p.x - (p.y - q.y) / slope;
                }
                q
            };
            (edge(domain.x), edge(domain.y))
        };

        self.plot_line(a, b);
        Some(Line::from_point_slope(a, b, p, slope))
    }

    /// Connect `vertices` in order; `closed` adds a segment back to the first.
    pub fn plot_poly(&mut self, vertices: &[Pair], closed: bool) {
        if vertices.len() < 2 {
            self.fail("plot_poly", PlotError::IncompleteShape { vertices: vertices.len() });
            return;
        }
        let Some(plot) = self.selected("plot_poly") else {
            return;
        };
        let mut path = Path::new();
        let mut points = vertices.iter().map(|v| transform::plot_local_to_surface(*v, plot));
        if let Some(first) = points.next() {
            path.move_to(first);
            for p in points {
                path.line_to(p);
            }
            if closed {
                path.line_to(first);
            }
        }
        let stroke = self.primitive_stroke().round();
        self.surface.stroke_path(&path, &stroke);
    }

    /// Sample `f` from `start` to `end` (both inclusive) every `step` units
    /// and stroke the result. With `x_domain` the samples are x values and
    /// `f` returns y; otherwise the roles swap. Bounds default to the plot's
    /// domain or range. A sample where `f` returns `None` (or a non-finite
    /// value) breaks the curve without stopping the sweep.
    pub fn plot_function<F>(&mut self, mut f: F, x_domain: bool, step: f64, start: Option<f64>, end: Option<f64>)
    where
        F: FnMut(f64) -> Option<f64>,
    {
        if !(step.is_finite() && step > 0.0) {
            self.fail("plot_function", PlotError::InvalidStep(step));
            return;
        }
        let Some(plot) = self.selected("plot_function") else {
            return;
        };
        let bounds = if x_domain { plot.domain() } else { plot.range() };
        let start = start.unwrap_or(bounds.x);
        let end = end.unwrap_or(bounds.y);
        if !(start.is_finite() && end.is_finite()) {
            log::debug!(target: "plotter", "plot_function: non-finite bounds {start}..{end}");
            return;
        }

        // Sample k sits at `start + k * step`; values that round onto the
        // previous sample are skipped.
        let mut path = Path::new();
        let mut pen_down = false;
        let mut previous = None;
        let mut k: u64 = 0;
        loop {
            let t = if k == 0 { start } else { (start + k as f64 * step).min(end) };
            k += 1;
            if previous == Some(t) {
                continue;
            }
            previous = Some(t);
            match f(t).filter(|v| v.is_finite()) {
                Some(v) => {
                    let local = if x_domain { Pair::new(t, v) } else { Pair::new(v, t) };
                    let at = transform::plot_local_to_surface(local, plot);
                    if pen_down {
                        path.line_to(at);
                    } else {
                        path.move_to(at);
                    }
                    pen_down = true;
                }
                None => pen_down = false,
            }
            if t >= end {
                break;
            }
        }
        log::trace!(target: "plotter", "function sampled {start}..={end} step={step}: {} segments", path.segment_count());

        let stroke = self.primitive_stroke().round();
        self.surface.stroke_path(&path, &stroke);
    }

    /// Text anchored at the plot-local point `at`, or the plot's centre.
    pub fn plot_text(&mut self, text: &str, at: Option<Pair>) {
        let Some(plot) = self.selected("plot_text") else {
            return;
        };
        let local = at.unwrap_or_else(|| Pair::new(plot.domain().mid(), plot.range().mid()));
        let pos = transform::plot_local_to_surface(local, plot);
        let style = TextStyle::new(self.theme.tick_font.clone(), self.theme.ink);
        self.surface.fill_text(text, pos, &style);
    }

    // ---- input --------------------------------------------------------------

    /// Record a pointer event on the plot under it. Returns that plot.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<PlotId> {
        let origin = self.options.origin;
        let index = transform::find_plot_at(event.position, origin, &self.plots)?;
        if !event.is_relevant() {
            return None;
        }
        let plot = &mut self.plots[index];
        let local = transform::device_to_plot_local(event.position, origin, plot);
        match event.kind {
            PointerKind::Down => plot.mouse.press(local),
            PointerKind::Move => plot.mouse.moved = local,
            PointerKind::Up => plot.mouse.release(local),
        }
        log::trace!(target: "plotter", "{:?} on plot {index} at ({:.2},{:.2})", event.kind, local.x, local.y);
        Some(PlotId(index))
    }

    /// Route each changed touch as a pointer event, then keep the plot under
    /// the first remaining touch pressed. Returns true when the host should
    /// suppress its default handling (a single finger dragging).
    pub fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        let kind = match event.phase {
            TouchPhase::Start => PointerKind::Down,
            TouchPhase::Move => PointerKind::Move,
            TouchPhase::End | TouchPhase::Cancel => PointerKind::Up,
        };
        for &position in &event.changed {
            self.handle_pointer(PointerEvent::new(kind, position).with_buttons(true, true));
        }
        if let Some(&first) = event.active.first() {
            if let Some(index) = transform::find_plot_at(first, self.options.origin, &self.plots) {
                self.plots[index].mouse.hold();
            }
        }
        event.is_single_drag()
    }

    // ---- internals ----------------------------------------------------------

    fn lookup(&mut self, op: &str, r: PlotRef<'_>) -> Option<PlotId> {
        let found = self.resolve(r);
        if found.is_none() {
            self.fail(op, PlotError::InvalidPlotReference(r.to_string()));
        }
        found
    }

    /// Selected plot for a primitive, reporting when there is none.
    fn selected(&mut self, op: &str) -> Option<&PlotGeometry> {
        match self.current {
            Some(id) => Some(&self.plots[id.0]),
            None => {
                self.fail(op, PlotError::NoActivePlot);
                None
            }
        }
    }

    fn to_surface(&mut self, op: &str, p: Pair) -> Option<Pair> {
        self.selected(op).map(|plot| transform::plot_local_to_surface(p, plot))
    }

    fn fail(&mut self, op: &str, err: PlotError) {
        log::debug!(target: "plotter", "{op}: {err}");
        if let Some(hook) = self.diagnostics.as_mut() {
            hook(&err);
        }
    }

    fn primitive_stroke(&self) -> Stroke {
        Stroke::new(self.theme.ink, self.theme.primitive_width)
    }

    fn paint_plot(&mut self, index: usize) {
        render::paint(&mut self.surface, &self.plots[index], &self.theme, self.options.debug_borders);
    }

    fn stroke_surface_border(&mut self) {
        let size = self.surface.size();
        let stroke = Stroke::new(self.theme.surface_border, self.theme.border_width);
        self.surface.stroke_rect(Rect::from_ltwh(0.0, 0.0, size.x, size.y), &stroke);
    }

    fn clip_to(&mut self, index: usize) {
        debug_assert!(!self.clipped, "clip established twice");
        self.surface.save();
        self.surface.clip_rect(render::clip_region(&self.plots[index]));
        self.clipped = true;
    }

    fn reclip_current(&mut self) {
        if let Some(id) = self.current {
            self.clip_to(id.0);
        }
    }

    /// Drop the active clip; returns whether there was one.
    fn release_clip(&mut self) -> bool {
        if !self.clipped {
            return false;
        }
        self.surface.restore();
        self.clipped = false;
        true
    }
}

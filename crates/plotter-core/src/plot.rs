// File: crates/plotter-core/src/plot.rs
// Summary: Plot geometry model; owns one plot's settings and keeps derived pixel geometry consistent.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::PlotConfig;
use crate::text::{format_tick, Font, TextMeasure};
use crate::theme::Theme;
use crate::types::{
    Pair, DEFAULT_EXTENT, DEFAULT_LABEL_FREQUENCY, DEFAULT_LABEL_PRECISION,
    DEFAULT_PIXEL_PER_UNIT, DEFAULT_UNIT_PER_TICK, MAX_LABEL_PRECISION, MIN_LABEL_GUTTER,
    ORIGIN_MARGIN, Y_LABEL_TOP_BLEED,
};

/// Corner holding the (domain.x, range.x) origin, read counter-clockwise
/// starting at bottom-left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Bottom-left.
    #[default]
    A,
    /// Top-left.
    B,
    /// Top-right.
    C,
    /// Bottom-right.
    D,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// x grows leftwards (origin on the right edge).
    #[inline]
    pub fn mirrors_x(self) -> bool {
        matches!(self, Self::C | Self::D)
    }

    /// y grows downwards (origin on the top edge).
    #[inline]
    pub fn mirrors_y(self) -> bool {
        matches!(self, Self::B | Self::C)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        };
        f.write_str(c)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrientationError(pub String);

impl fmt::Display for ParseOrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown orientation '{}' (expected a, b, c or d)", self.0)
    }
}

impl std::error::Error for ParseOrientationError {}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            "d" => Ok(Self::D),
            _ => Err(ParseOrientationError(s.to_string())),
        }
    }
}

/// Latest pointer positions over a plot, in plot-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseState {
    pub down: Pair,
    pub moved: Pair,
    pub up: Pair,
    pub is_down: bool,
    pub is_up: bool,
}

impl Default for MouseState {
    fn default() -> Self {
        // Positions start unset; the coordinate overlay renders them as 0.
        let unset = Pair::new(f64::NAN, f64::NAN);
        Self { down: unset, moved: unset, up: unset, is_down: false, is_up: true }
    }
}

impl MouseState {
    pub(crate) fn press(&mut self, at: Pair) {
        self.down = at;
        self.is_down = true;
        self.is_up = false;
    }

    pub(crate) fn release(&mut self, at: Pair) {
        self.up = at;
        self.is_down = false;
        self.is_up = true;
    }

    pub(crate) fn hold(&mut self) {
        self.is_down = true;
        self.is_up = false;
    }
}

/// One plot's settings plus the pixel geometry derived from them.
///
/// Primary fields are only reachable through setters, which keep the
/// invariants (`domain.x <= domain.y`, positive scale factors, clamped label
/// settings) and refresh `plot_size`. Label gutters depend on text metrics and
/// are refreshed by [`PlotGeometry::recompute_label_geometry`].
#[derive(Clone, Debug)]
pub struct PlotGeometry {
    offset: Pair,
    domain: Pair,
    range: Pair,
    pixel_per_unit: Pair,
    plot_size: Pair,
    unit_per_tick: Pair,
    label_frequency: Pair<i32>,
    label_size: Pair,
    label_bleed: Pair,
    label_precision: Pair<i32>,
    x_axis: String,
    y_axis: String,
    zero_bound_axis: bool,
    draw_grid: bool,
    draw_coords: bool,
    orientation: Orientation,
    pub mouse: MouseState,
}

impl Default for PlotGeometry {
    /// Default settings with label geometry not yet measured.
    fn default() -> Self {
        let mut plot = Self {
            offset: Pair::ZERO,
            domain: DEFAULT_EXTENT,
            range: DEFAULT_EXTENT,
            pixel_per_unit: DEFAULT_PIXEL_PER_UNIT,
            plot_size: Pair::ZERO,
            unit_per_tick: DEFAULT_UNIT_PER_TICK,
            label_frequency: DEFAULT_LABEL_FREQUENCY,
            label_size: Pair::ZERO,
            label_bleed: Pair::ZERO,
            label_precision: DEFAULT_LABEL_PRECISION,
            x_axis: "xAxis".to_string(),
            y_axis: "yAxis".to_string(),
            zero_bound_axis: true,
            draw_grid: true,
            draw_coords: false,
            orientation: Orientation::A,
            mouse: MouseState::default(),
        };
        plot.refresh_plot_size();
        plot
    }
}

impl PlotGeometry {
    /// Build a plot from `config` over the defaults and measure its labels.
    pub fn new(config: &PlotConfig, measure: &dyn TextMeasure, theme: &Theme) -> Self {
        let mut plot = Self::default();
        plot.apply(config);
        plot.recompute_label_geometry(measure, theme);
        plot
    }

    /// Merge every `Some` field of `config` through the setters. Label
    /// geometry is left untouched.
    pub fn apply(&mut self, config: &PlotConfig) {
        if let Some(v) = config.offset { self.set_offset(v); }
        if let Some(v) = config.domain { self.set_domain(v); }
        if let Some(v) = config.range { self.set_range(v); }
        if let Some(v) = config.pixel_per_unit { self.set_pixel_per_unit(v); }
        if let Some(v) = config.unit_per_tick { self.set_unit_per_tick(v); }
        if let Some(v) = config.label_frequency { self.set_label_frequency(v); }
        if let Some(v) = config.label_precision { self.set_label_precision(v); }
        if let Some(v) = &config.x_axis { self.x_axis = v.clone(); }
        if let Some(v) = &config.y_axis { self.y_axis = v.clone(); }
        if let Some(v) = config.zero_bound_axis { self.zero_bound_axis = v; }
        if let Some(v) = config.draw_grid { self.draw_grid = v; }
        if let Some(v) = config.draw_coords { self.draw_coords = v; }
        if let Some(v) = config.orientation { self.orientation = v; }
    }

    // ---- setters ------------------------------------------------------------

    pub fn set_offset(&mut self, v: Pair) {
        self.offset = v;
    }

    /// Store the bounds sorted; non-finite input is ignored.
    pub fn set_domain(&mut self, v: Pair) {
        if !v.is_finite() { return; }
        self.domain = sorted(v);
        self.refresh_plot_size();
    }

    pub fn set_range(&mut self, v: Pair) {
        if !v.is_finite() { return; }
        self.range = sorted(v);
        self.refresh_plot_size();
    }

    /// Components that are not strictly positive keep their previous value.
    pub fn set_pixel_per_unit(&mut self, v: Pair) {
        self.pixel_per_unit = sticky_positive(self.pixel_per_unit, v);
        self.refresh_plot_size();
    }

    pub fn set_unit_per_tick(&mut self, v: Pair) {
        self.unit_per_tick = sticky_positive(self.unit_per_tick, v);
    }

    /// Negative frequencies clamp to 0, which disables labels on that axis.
    pub fn set_label_frequency(&mut self, v: Pair<i32>) {
        self.label_frequency = v.map(|f| f.max(0));
    }

    /// Negative precision means "raw number"; otherwise clamped to `0..=20`.
    pub fn set_label_precision(&mut self, v: Pair<i32>) {
        self.label_precision = v.map(|p| if p < 0 { -1 } else { p.min(MAX_LABEL_PRECISION) });
    }

    pub fn set_x_axis(&mut self, title: impl Into<String>) { self.x_axis = title.into(); }
    pub fn set_y_axis(&mut self, title: impl Into<String>) { self.y_axis = title.into(); }
    pub fn set_zero_bound_axis(&mut self, on: bool) { self.zero_bound_axis = on; }
    pub fn set_draw_grid(&mut self, on: bool) { self.draw_grid = on; }
    pub fn set_draw_coords(&mut self, on: bool) { self.draw_coords = on; }
    pub fn set_orientation(&mut self, o: Orientation) { self.orientation = o; }

    // ---- accessors ----------------------------------------------------------

    /// Drawing origin on the surface: the raw offset plus [`ORIGIN_MARGIN`].
    pub fn offset(&self) -> Pair { self.offset.plus(ORIGIN_MARGIN) }
    /// Offset as configured, without the margin.
    pub fn raw_offset(&self) -> Pair { self.offset }
    pub fn domain(&self) -> Pair { self.domain }
    pub fn range(&self) -> Pair { self.range }
    pub fn pixel_per_unit(&self) -> Pair { self.pixel_per_unit }
    pub fn plot_size(&self) -> Pair { self.plot_size }
    pub fn unit_per_tick(&self) -> Pair { self.unit_per_tick }
    /// Pixels between grid lines.
    pub fn grid_size(&self) -> Pair { self.unit_per_tick.times(self.pixel_per_unit) }
    pub fn label_frequency(&self) -> Pair<i32> { self.label_frequency }
    pub fn label_size(&self) -> Pair { self.label_size }
    pub fn label_bleed(&self) -> Pair { self.label_bleed }
    pub fn label_precision(&self) -> Pair<i32> { self.label_precision }
    pub fn x_axis(&self) -> &str { &self.x_axis }
    pub fn y_axis(&self) -> &str { &self.y_axis }
    pub fn zero_bound_axis(&self) -> bool { self.zero_bound_axis }
    pub fn draw_grid(&self) -> bool { self.draw_grid }
    pub fn draw_coords(&self) -> bool { self.draw_coords }
    pub fn orientation(&self) -> Orientation { self.orientation }

    /// Index of the last grid line on each axis (ticks run `0..=last`).
    pub fn last_tick(&self) -> Pair<u32> {
        let grid = self.grid_size();
        Pair::new(
            (self.plot_size.x / grid.x).floor().max(0.0) as u32,
            (self.plot_size.y / grid.y).floor().max(0.0) as u32,
        )
    }

    /// Tick label text for `value` on the x (`horizontal`) or y axis.
    pub fn tick_label(&self, value: f64, horizontal: bool) -> String {
        let precision = if horizontal { self.label_precision.x } else { self.label_precision.y };
        format_tick(value, precision)
    }

    // ---- label geometry -----------------------------------------------------

    /// Re-measure label gutters and bleed. Call after changing label-affecting
    /// settings; setters never trigger this on their own.
    pub fn recompute_label_geometry(&mut self, measure: &dyn TextMeasure, theme: &Theme) {
        self.label_size = self.measure_label_size(measure, &theme.title_font);
        self.label_bleed = self.measure_label_bleed(measure, &theme.tick_font, &theme.title_font);
        log::trace!(
            target: "plotter",
            "label geometry size=({:.1},{:.1}) bleed=({:.1},{:.1})",
            self.label_size.x, self.label_size.y, self.label_bleed.x, self.label_bleed.y
        );
    }

    fn measure_label_size(&self, measure: &dyn TextMeasure, title_font: &Font) -> Pair {
        // A two-glyph sample doubles as the line height of one label row.
        let line = measure.measure_text("M.", title_font);
        let last = self.last_tick();

        let mut gutter_x = 0.0;
        if self.label_frequency.y != 0 {
            let low = self.tick_label(self.range.x, false);
            let high = self.tick_label(self.range.x + last.y as f64 * self.unit_per_tick.y, false);
            gutter_x += measure
                .measure_text(&low, title_font)
                .max(measure.measure_text(&high, title_font));
        } else {
            gutter_x += MIN_LABEL_GUTTER;
        }
        if !self.y_axis.is_empty() {
            gutter_x += line;
        }

        let mut gutter_y = if self.label_frequency.x != 0 { line } else { MIN_LABEL_GUTTER };
        if !self.x_axis.is_empty() {
            gutter_y += line;
        }
        if !self.y_axis.is_empty() {
            // The rotated title is centred on the plot; whatever hangs below
            // the plot box has to fit in the bottom gutter.
            let overhang = measure.measure_text(&self.y_axis, title_font) * 0.5 - self.plot_size.y * 0.5;
            gutter_y = gutter_y.max(overhang);
        }
        Pair::new(gutter_x, gutter_y)
    }

    fn measure_label_bleed(&self, measure: &dyn TextMeasure, tick_font: &Font, title_font: &Font) -> Pair {
        let mut bleed_x: f64 = 0.0;
        let mut bleed_y = if self.label_frequency.y != 0 { Y_LABEL_TOP_BLEED } else { 0.0 };

        if self.label_frequency.x != 0 {
            let last = self.last_tick().x as f64;
            let text = self.tick_label(self.domain.x + last * self.unit_per_tick.x, true);
            let right = last * self.grid_size().x + measure.measure_text(&text, tick_font) * 0.5;
            bleed_x = (right - self.plot_size.x).max(0.0);
        }

        if !self.x_axis.is_empty() {
            let half_title = measure.measure_text(&self.x_axis, title_font) * 0.5;
            let title_bleed = (self.plot_size.x * 0.5 + half_title - self.plot_size.x).max(0.0);
            bleed_x = bleed_x.max(title_bleed);
        }

        if !self.y_axis.is_empty() {
            let top = self.plot_size.y * 0.5 - measure.measure_text(&self.y_axis, title_font) * 0.5;
            bleed_y = bleed_y.min(top);
        }
        Pair::new(bleed_x, bleed_y)
    }

    fn refresh_plot_size(&mut self) {
        self.plot_size = Pair::new(self.domain.span(), self.range.span()).times(self.pixel_per_unit);
    }
}

fn sorted(v: Pair) -> Pair {
    if v.x <= v.y { v } else { Pair::new(v.y, v.x) }
}

fn sticky_positive(prev: Pair, next: Pair) -> Pair {
    let pick = |old: f64, new: f64| if new.is_finite() && new > 0.0 { new } else { old };
    Pair::new(pick(prev.x, next.x), pick(prev.y, next.y))
}

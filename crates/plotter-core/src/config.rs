// File: crates/plotter-core/src/config.rs
// Summary: Plot configuration: the recognized settings keys, builder helpers and manager options.

use serde::Deserialize;

use crate::plot::Orientation;
use crate::types::Pair;

/// Partial plot settings. Every field is a recognized key; `None` means "leave
/// as is". Deserializing ignores keys that are not listed here, so configs can
/// be loaded from JSON or any other serde format without pre-filtering.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlotConfig {
    pub offset: Option<Pair>,
    pub domain: Option<Pair>,
    pub range: Option<Pair>,
    pub pixel_per_unit: Option<Pair>,
    pub unit_per_tick: Option<Pair>,
    pub label_frequency: Option<Pair<i32>>,
    pub label_precision: Option<Pair<i32>>,
    pub x_axis: Option<String>,
    pub y_axis: Option<String>,
    pub zero_bound_axis: Option<bool>,
    pub draw_grid: Option<bool>,
    pub draw_coords: Option<bool>,
    pub orientation: Option<Orientation>,
}

impl PlotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset = Some(Pair::new(x, y));
        self
    }

    #[must_use]
    pub fn with_domain(mut self, a: f64, b: f64) -> Self {
        self.domain = Some(Pair::new(a, b));
        self
    }

    #[must_use]
    pub fn with_range(mut self, a: f64, b: f64) -> Self {
        self.range = Some(Pair::new(a, b));
        self
    }

    #[must_use]
    pub fn with_pixel_per_unit(mut self, x: f64, y: f64) -> Self {
        self.pixel_per_unit = Some(Pair::new(x, y));
        self
    }

    #[must_use]
    pub fn with_unit_per_tick(mut self, x: f64, y: f64) -> Self {
        self.unit_per_tick = Some(Pair::new(x, y));
        self
    }

    #[must_use]
    pub fn with_label_frequency(mut self, x: i32, y: i32) -> Self {
        self.label_frequency = Some(Pair::new(x, y));
        self
    }

    #[must_use]
    pub fn with_label_precision(mut self, x: i32, y: i32) -> Self {
        self.label_precision = Some(Pair::new(x, y));
        self
    }

    /// Axis titles; an empty string suppresses the title and its gutter.
    #[must_use]
    pub fn with_axes(mut self, x_axis: impl Into<String>, y_axis: impl Into<String>) -> Self {
        self.x_axis = Some(x_axis.into());
        self.y_axis = Some(y_axis.into());
        self
    }

    #[must_use]
    pub fn with_zero_bound_axis(mut self, on: bool) -> Self {
        self.zero_bound_axis = Some(on);
        self
    }

    #[must_use]
    pub fn with_draw_grid(mut self, on: bool) -> Self {
        self.draw_grid = Some(on);
        self
    }

    #[must_use]
    pub fn with_draw_coords(mut self, on: bool) -> Self {
        self.draw_coords = Some(on);
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// True when any field that feeds label measurement is set.
    pub fn touches_labels(&self) -> bool {
        self.label_frequency.is_some()
            || self.label_precision.is_some()
            || self.x_axis.is_some()
            || self.y_axis.is_some()
            || self.domain.is_some()
            || self.range.is_some()
            || self.pixel_per_unit.is_some()
            || self.unit_per_tick.is_some()
    }
}

/// Surface-wide settings of a [`crate::Plotter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotterOptions {
    /// Added to the fitted surface size on both axes.
    pub padding: Pair,
    /// Position of the surface in device (pointer) coordinates.
    pub origin: Pair,
    /// Stroke each plot's cleared region while painting.
    pub debug_borders: bool,
}

impl Default for PlotterOptions {
    fn default() -> Self {
        Self { padding: Pair::ZERO, origin: Pair::ZERO, debug_borders: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keys_are_camel_case_and_unknown_keys_dropped() {
        let cfg: PlotConfig = serde_json::from_str(
            r#"{ "domain": {"x": 0, "y": 100}, "pixelPerUnit": {"x": 5, "y": 5},
                 "orientation": "c", "color": "red", "plotSize": {"x": 1, "y": 1} }"#,
        )
        .expect("parse config");
        assert_eq!(cfg.domain, Some(Pair::new(0.0, 100.0)));
        assert_eq!(cfg.pixel_per_unit, Some(Pair::new(5.0, 5.0)));
        assert_eq!(cfg.orientation, Some(Orientation::C));
        assert!(cfg.range.is_none());
    }

    #[test]
    fn builder_sets_only_requested_keys() {
        let cfg = PlotConfig::new().with_domain(5.0, -5.0).with_draw_grid(false);
        assert_eq!(cfg.domain, Some(Pair::new(5.0, -5.0)));
        assert_eq!(cfg.draw_grid, Some(false));
        assert!(cfg.x_axis.is_none());
        assert!(cfg.touches_labels());
        assert!(!PlotConfig::new().with_draw_grid(true).touches_labels());
    }
}

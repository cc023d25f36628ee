// File: crates/plotter-core/src/types.rs
// Summary: Shared types and constants (scalar pairs, margins, default plot settings).

use serde::{Deserialize, Serialize};

/// Ordered pair used for positions, extents and per-axis settings.
/// `x` always refers to the horizontal axis, `y` to the vertical one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Pair<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Apply `f` to both components.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Pair<U> {
        Pair { x: f(self.x), y: f(self.y) }
    }
}

impl Pair<f64> {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Distance from the lower to the upper bound when the pair holds an interval.
    #[inline]
    pub fn span(&self) -> f64 {
        self.y - self.x
    }

    /// Midpoint of the interval `[x, y]`.
    #[inline]
    pub fn mid(&self) -> f64 {
        self.x + self.span() * 0.5
    }

    /// Component-wise product.
    #[inline]
    pub fn times(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise sum.
    #[inline]
    pub fn plus(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Pair {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Pair> for (f64, f64) {
    fn from(p: Pair) -> Self {
        (p.x, p.y)
    }
}

/// Fixed gap between a plot's raw offset and its drawing origin, leaving room
/// for the y-axis label gutter on the left and the top bleed of labels.
pub const ORIGIN_MARGIN: Pair = Pair::new(75.0, 20.0);

/// Extra pixels added on both axes when the surface is auto-fitted.
pub const FIT_SAFETY_MARGIN: f64 = 10.0;

/// Gutter used in place of tick labels on an axis whose labels are disabled.
pub const MIN_LABEL_GUTTER: f64 = 6.0;

/// Upward shift of the top y tick label, folded into the vertical bleed.
pub const Y_LABEL_TOP_BLEED: f64 = -8.0;

/// Largest accepted number of decimals for tick labels.
pub const MAX_LABEL_PRECISION: i32 = 20;

/// Default domain and range of a freshly registered plot.
pub const DEFAULT_EXTENT: Pair = Pair::new(-10.0, 10.0);
pub const DEFAULT_PIXEL_PER_UNIT: Pair = Pair::new(10.0, 10.0);
pub const DEFAULT_UNIT_PER_TICK: Pair = Pair::new(1.0, 1.0);
pub const DEFAULT_LABEL_FREQUENCY: Pair<i32> = Pair::new(2, 2);
pub const DEFAULT_LABEL_PRECISION: Pair<i32> = Pair::new(-1, -1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_and_mid() {
        let p = Pair::new(-10.0, 30.0);
        assert_eq!(p.span(), 40.0);
        assert_eq!(p.mid(), 10.0);
    }

    #[test]
    fn map_changes_component_type() {
        let p = Pair::new(2.6f64, -1.2).map(|v| v.round() as i32);
        assert_eq!(p, Pair::new(3, -1));
    }
}

// File: crates/plotter-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Pair;

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn origin(&self) -> Pair { Pair::new(self.left, self.top) }

    /// Move the rectangle by `d`.
    pub fn translated(&self, d: Pair) -> Self {
        Self::from_ltrb(self.left + d.x, self.top + d.y, self.right + d.x, self.bottom + d.y)
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Pair) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

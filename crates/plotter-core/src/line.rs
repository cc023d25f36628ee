// File: crates/plotter-core/src/line.rs
// Summary: Line descriptor returned by slope plotting.

use crate::types::Pair;

/// Segment `a`-`b` in plot-local coordinates, optionally remembering the
/// point and slope it was constructed from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: Pair,
    pub b: Pair,
    pub slope: Option<f64>,
    pub point: Option<Pair>,
}

impl Line {
    /// Line through two points.
    pub fn through(a: Pair, b: Pair) -> Self {
        Self { a, b, slope: None, point: None }
    }

    /// Segment `a`-`b` lying on the line with `slope` through `point`.
    pub fn from_point_slope(a: Pair, b: Pair, point: Pair, slope: f64) -> Self {
        Self { a, b, slope: Some(slope), point: Some(point) }
    }

    /// Slope as stored, or as implied by the endpoints.
    pub fn slope(&self) -> f64 {
        self.slope.unwrap_or_else(|| (self.b.y - self.a.y) / (self.b.x - self.a.x))
    }

    /// y on the infinite line at `x`.
    pub fn y_at(&self, x: f64) -> f64 {
        let anchor = self.point.unwrap_or(self.a);
        anchor.y + self.slope() * (x - anchor.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_point_line_has_no_anchor() {
        let l = Line::through(Pair::new(1.0, 2.0), Pair::new(3.0, 4.0));
        assert_eq!(l.a, Pair::new(1.0, 2.0));
        assert_eq!(l.b, Pair::new(3.0, 4.0));
        assert!(l.point.is_none() && l.slope.is_none());
        assert_eq!(l.slope(), 1.0);
        assert_eq!(l.y_at(5.0), 6.0);
    }

    #[test]
    fn point_slope_line_keeps_anchor() {
        let l = Line::from_point_slope(Pair::new(-1.0, -2.0), Pair::new(1.0, 2.0), Pair::ZERO, 2.0);
        assert_eq!(l.point, Some(Pair::ZERO));
        assert_eq!(l.y_at(3.0), 6.0);
    }
}

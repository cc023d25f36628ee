// File: crates/plotter-core/src/text.rs
// Summary: Font description, the text-metric collaborator trait and tick label formatting.

/// Font request passed to the text-metric collaborator and the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: &'static str,
    pub size: f32,
}

impl Font {
    pub const fn new(family: &'static str, size: f32) -> Self {
        Self { family, size }
    }
}

/// Measures rendered text width. Implemented by drawing backends; the plot
/// model only ever asks for widths.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, font: &Font) -> f64;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        (**self).measure_text(text, font)
    }
}

/// Approximate metrics: every character advances by `ratio * font.size`.
/// Deterministic, so tests and headless layout agree across platforms.
#[derive(Clone, Copy, Debug)]
pub struct FixedAdvance {
    pub ratio: f64,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self { ratio: 0.5 }
    }
}

impl TextMeasure for FixedAdvance {
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        text.chars().count() as f64 * font.size as f64 * self.ratio
    }
}

/// Format a tick value. A negative `precision` prints the shortest
/// representation; otherwise exactly `precision` decimals.
pub fn format_tick(value: f64, precision: i32) -> String {
    if precision < 0 {
        // Avoid "-0" for values that are zero after arithmetic.
        let v = if value == 0.0 { 0.0 } else { value };
        format!("{v}")
    } else {
        format!("{value:.prec$}", prec = precision as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_format_drops_trailing_zero() {
        assert_eq!(format_tick(-10.0, -1), "-10");
        assert_eq!(format_tick(2.5, -1), "2.5");
        assert_eq!(format_tick(-0.0, -1), "0");
    }

    #[test]
    fn fixed_format_pads_decimals() {
        assert_eq!(format_tick(3.0, 2), "3.00");
        assert_eq!(format_tick(1.23456, 0), "1");
    }

    #[test]
    fn fixed_advance_scales_with_font() {
        let m = FixedAdvance::default();
        assert_eq!(m.measure_text("abcd", &Font::new("Helvetica", 16.0)), 32.0);
        assert_eq!(m.measure_text("", &Font::new("Helvetica", 16.0)), 0.0);
    }
}

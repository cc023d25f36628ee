// File: crates/plotter-render-skia/src/text.rs
// Summary: Text shaper on Skia textlayout; measures and paints single-line labels.

use plotter_core::{Font, TextAlign, TextBaseline, TextMeasure};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

/// Families tried after the one a [`Font`] asks for.
const FALLBACK_FAMILIES: [&str; 5] = ["Helvetica", "Arial", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &Font, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(color);
        let mut families = vec![font.family];
        families.extend(FALLBACK_FAMILIES.iter().copied().filter(|f| *f != font.family));
        ts.set_font_families(&families);
        ts
    }

    pub fn layout(&self, text: &str, font: &Font, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, font: &Font) -> f32 {
        self.layout(text, font, skia::Color::TRANSPARENT).longest_line()
    }

    /// Paint `text` so that `(x, y)` is the anchor selected by `align` and
    /// `baseline`, the way a 2D canvas places text.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        font: &Font,
        color: skia::Color,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        let mut p = self.layout(text, font, color);
        let width = p.longest_line();
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - width * 0.5,
            TextAlign::Right => x - width,
        };
        // Paragraphs paint from their top-left corner.
        let top = match baseline {
            TextBaseline::Top => y,
            TextBaseline::Middle => y - p.height() * 0.5,
            TextBaseline::Bottom => y - p.height(),
            TextBaseline::Alphabetic => y - p.alphabetic_baseline(),
        };
        p.paint(canvas, (left, top));
    }
}

impl TextMeasure for TextShaper {
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        self.measure_width(text, font) as f64
    }
}

// File: crates/plotter-render-skia/src/surface.rs
// Summary: plotter-core Surface on a Skia CPU raster surface, with PNG and RGBA export.

use anyhow::{anyhow, Context, Result};
use plotter_core::{Color, Font, Pair, Path, Rect, Stroke, Surface, TextMeasure, TextStyle};
use plotter_core::surface::PathOp;
use skia_safe as skia;

use crate::text::TextShaper;

fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn sk_rect(r: Rect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn sk_point(p: Pair) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk_color(color));
    paint
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(sk_color(stroke.color));
    if stroke.round_cap {
        paint.set_stroke_cap(skia::paint::Cap::Round);
    }
    paint
}

/// Raster surface the plot manager paints on. Resizing replaces the pixel
/// buffer, so content and canvas state start over.
pub struct SkiaSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
    shaper: TextShaper,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let (width, height) = (width.max(1), height.max(1));
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;
        Ok(Self { surface, width, height, shaper: TextShaper::new() })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn shaper(&self) -> &TextShaper {
        &self.shaper
    }

    /// Encode the current pixels as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        log::debug!(target: "plotter", "wrote {}x{} PNG to {}", self.width, self.height, path.display());
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, row stride)`.
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(anyhow!("read_pixels failed"));
        }
        Ok((pixels, self.width as u32, self.height as u32, stride))
    }
}

impl TextMeasure for SkiaSurface {
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        self.shaper.measure_text(text, font)
    }
}

impl Surface for SkiaSurface {
    fn size(&self) -> Pair {
        Pair::new(self.width as f64, self.height as f64)
    }

    fn resize(&mut self, width: f64, height: f64) {
        let (w, h) = (width.ceil().max(1.0) as i32, height.ceil().max(1.0) as i32);
        match skia::surfaces::raster_n32_premul((w, h)) {
            Some(surface) => {
                self.surface = surface;
                self.width = w;
                self.height = h;
                log::debug!(target: "plotter", "raster surface resized to {w}x{h}");
            }
            None => log::warn!(target: "plotter", "could not allocate {w}x{h} surface; keeping {}x{}", self.width, self.height),
        }
    }

    fn clear_rect(&mut self, rect: Rect) {
        let mut paint = skia::Paint::default();
        paint.set_blend_mode(skia::BlendMode::Clear);
        self.surface.canvas().draw_rect(sk_rect(rect), &paint);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.surface.canvas().draw_rect(sk_rect(rect), &fill_paint(color));
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.surface.canvas().draw_rect(sk_rect(rect), &stroke_paint(stroke));
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        let mut sk_path = skia::Path::new();
        for op in path.ops() {
            match *op {
                PathOp::MoveTo(p) => sk_path.move_to(sk_point(p)),
                PathOp::LineTo(p) => sk_path.line_to(sk_point(p)),
            };
        }
        self.surface.canvas().draw_path(&sk_path, &stroke_paint(stroke));
    }

    fn fill_circle(&mut self, center: Pair, radius: f64, color: Color) {
        self.surface.canvas().draw_circle(sk_point(center), radius as f32, &fill_paint(color));
    }

    fn stroke_circle(&mut self, center: Pair, radius: f64, stroke: &Stroke) {
        self.surface.canvas().draw_circle(sk_point(center), radius as f32, &stroke_paint(stroke));
    }

    fn fill_text(&mut self, text: &str, at: Pair, style: &TextStyle) {
        let canvas = self.surface.canvas();
        self.shaper.draw(
            canvas,
            text,
            at.x as f32,
            at.y as f32,
            &style.font,
            sk_color(style.color),
            style.align,
            style.baseline,
        );
    }

    fn translate(&mut self, d: Pair) {
        self.surface.canvas().translate((d.x as f32, d.y as f32));
    }

    fn rotate(&mut self, radians: f64) {
        self.surface.canvas().rotate(radians.to_degrees() as f32, None);
    }

    fn save(&mut self) {
        self.surface.canvas().save();
    }

    fn restore(&mut self) {
        self.surface.canvas().restore();
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.surface.canvas().clip_rect(sk_rect(rect), skia::ClipOp::Intersect, true);
    }
}

// File: crates/plotter-core/src/surface.rs
// Summary: Drawing-surface collaborator trait, paint styles, and an in-memory recording surface.

use crate::geometry::Rect;
use crate::text::{FixedAdvance, Font, TextMeasure};
use crate::theme::Color;
use crate::types::Pair;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
    Alphabetic,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub color: Color,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextStyle {
    pub fn new(font: Font, color: Color) -> Self {
        Self { font, color, align: TextAlign::Left, baseline: TextBaseline::Alphabetic }
    }

    #[must_use]
    pub fn aligned(mut self, align: TextAlign, baseline: TextBaseline) -> Self {
        self.align = align;
        self.baseline = baseline;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub round_cap: bool,
}

impl Stroke {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width, round_cap: false }
    }

    #[must_use]
    pub const fn round(mut self) -> Self {
        self.round_cap = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(Pair),
    LineTo(Pair),
}

/// Polyline built from move/line commands; stroked in one call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    ops: Vec<PathOp>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Pair) -> &mut Self {
        self.ops.push(PathOp::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Pair) -> &mut Self {
        self.ops.push(PathOp::LineTo(p));
        self
    }

    /// Convenience for a standalone segment.
    pub fn segment(&mut self, a: Pair, b: Pair) -> &mut Self {
        self.move_to(a).line_to(b)
    }

    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of drawn segments (line commands that follow a current point).
    pub fn segment_count(&self) -> usize {
        let mut has_point = false;
        let mut n = 0;
        for op in &self.ops {
            match op {
                PathOp::MoveTo(_) => has_point = true,
                PathOp::LineTo(_) if has_point => n += 1,
                PathOp::LineTo(_) => has_point = true,
            }
        }
        n
    }
}

/// 2D drawing surface the plot manager paints on.
///
/// Coordinates are surface pixels after the current transform. `save`/`restore`
/// scope the transform and clip; `resize` discards content and all saved state.
pub trait Surface: TextMeasure {
    fn size(&self) -> Pair;
    fn resize(&mut self, width: f64, height: f64);

    fn clear_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);
    fn fill_circle(&mut self, center: Pair, radius: f64, color: Color);
    fn stroke_circle(&mut self, center: Pair, radius: f64, stroke: &Stroke);
    fn fill_text(&mut self, text: &str, at: Pair, style: &TextStyle);

    fn translate(&mut self, d: Pair);
    /// Rotate subsequent drawing clockwise by `radians` around the current origin.
    fn rotate(&mut self, radians: f64);
    fn save(&mut self);
    fn restore(&mut self);
    /// Intersect the clip with `rect` until the matching `restore`.
    fn clip_rect(&mut self, rect: Rect);
}

// ---- recording surface ------------------------------------------------------

/// One primitive call as seen by [`RecordingSurface`]. Positions already
/// include the translation active at the time of the call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Resize { width: f64, height: f64 },
    ClearRect(Rect),
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, stroke: Stroke },
    StrokePath { path: Path, stroke: Stroke },
    FillCircle { center: Pair, radius: f64, color: Color },
    StrokeCircle { center: Pair, radius: f64, stroke: Stroke },
    Text { text: String, at: Pair, rotation: f64, style: TextStyle },
    Save,
    Restore,
    Clip(Rect),
}

#[derive(Clone, Copy, Debug, Default)]
struct DrawState {
    translation: Pair,
    rotation: f64,
    clip: Option<Rect>,
    clips: usize,
}

/// Headless [`Surface`] that keeps a log of primitive calls. Text is measured
/// with [`FixedAdvance`], so layouts are reproducible everywhere.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Pair,
    metrics: FixedAdvance,
    state: DrawState,
    stack: Vec<DrawState>,
    ops: Vec<DrawOp>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(300.0, 150.0)
    }
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Pair::new(width, height),
            metrics: FixedAdvance::default(),
            state: DrawState::default(),
            stack: Vec::new(),
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drop the log, keeping size and state.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of unmatched `save` calls.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Clip rectangle in effect, in surface pixels.
    pub fn active_clip(&self) -> Option<Rect> {
        self.state.clip
    }

    /// Number of clip calls currently in effect.
    pub fn clip_depth(&self) -> usize {
        self.state.clips
    }

    /// Strings painted so far, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn map(&self, p: Pair) -> Pair {
        p.plus(self.state.translation)
    }

    fn map_rect(&self, r: Rect) -> Rect {
        r.translated(self.state.translation)
    }
}

impl TextMeasure for RecordingSurface {
    fn measure_text(&self, text: &str, font: &Font) -> f64 {
        self.metrics.measure_text(text, font)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Pair {
        self.size
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.size = Pair::new(width, height);
        self.state = DrawState::default();
        self.stack.clear();
        self.ops.push(DrawOp::Resize { width, height });
    }

    fn clear_rect(&mut self, rect: Rect) {
        let rect = self.map_rect(rect);
        self.ops.push(DrawOp::ClearRect(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = self.map_rect(rect);
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        let rect = self.map_rect(rect);
        self.ops.push(DrawOp::StrokeRect { rect, stroke: *stroke });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        let mut mapped = Path::new();
        for op in path.ops() {
            match *op {
                PathOp::MoveTo(p) => mapped.move_to(self.map(p)),
                PathOp::LineTo(p) => mapped.line_to(self.map(p)),
            };
        }
        self.ops.push(DrawOp::StrokePath { path: mapped, stroke: *stroke });
    }

    fn fill_circle(&mut self, center: Pair, radius: f64, color: Color) {
        let center = self.map(center);
        self.ops.push(DrawOp::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Pair, radius: f64, stroke: &Stroke) {
        let center = self.map(center);
        self.ops.push(DrawOp::StrokeCircle { center, radius, stroke: *stroke });
    }

    fn fill_text(&mut self, text: &str, at: Pair, style: &TextStyle) {
        let at = self.map(at);
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
            rotation: self.state.rotation,
            style: style.clone(),
        });
    }

    fn translate(&mut self, d: Pair) {
        // Rotation is only ever applied right before text drawn at the origin,
        // so translations are tracked unrotated.
        self.state.translation = self.state.translation.plus(d);
    }

    fn rotate(&mut self, radians: f64) {
        self.state.rotation += radians;
    }

    fn save(&mut self) {
        self.stack.push(self.state);
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        if let Some(prev) = self.stack.pop() {
            self.state = prev;
        }
        self.ops.push(DrawOp::Restore);
    }

    fn clip_rect(&mut self, rect: Rect) {
        let rect = self.map_rect(rect);
        let clip = match self.state.clip {
            Some(c) => Rect::from_ltrb(
                c.left.max(rect.left),
                c.top.max(rect.top),
                c.right.min(rect.right),
                c.bottom.min(rect.bottom),
            ),
            None => rect,
        };
        self.state.clip = Some(clip);
        self.state.clips += 1;
        self.ops.push(DrawOp::Clip(rect));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_is_scoped_by_save_restore() {
        let mut s = RecordingSurface::default();
        s.save();
        s.translate(Pair::new(10.0, 20.0));
        s.fill_circle(Pair::new(1.0, 1.0), 2.0, Color::from_rgb(0, 0, 0));
        s.restore();
        s.fill_circle(Pair::new(1.0, 1.0), 2.0, Color::from_rgb(0, 0, 0));
        let centers: Vec<Pair> = s
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillCircle { center, .. } => Some(*center),
                _ => None,
            })
            .collect();
        assert_eq!(centers, vec![Pair::new(11.0, 21.0), Pair::new(1.0, 1.0)]);
        assert_eq!(s.save_depth(), 0);
    }

    #[test]
    fn clip_lives_until_restore() {
        let mut s = RecordingSurface::default();
        s.save();
        s.clip_rect(Rect::from_ltwh(0.0, 0.0, 10.0, 10.0));
        assert_eq!(s.clip_depth(), 1);
        s.restore();
        assert_eq!(s.clip_depth(), 0);
        assert!(s.active_clip().is_none());
    }

    #[test]
    fn resize_drops_saved_state() {
        let mut s = RecordingSurface::default();
        s.save();
        s.clip_rect(Rect::from_ltwh(0.0, 0.0, 10.0, 10.0));
        s.resize(400.0, 300.0);
        assert_eq!(s.save_depth(), 0);
        assert!(s.active_clip().is_none());
        assert_eq!(s.size(), Pair::new(400.0, 300.0));
    }

    #[test]
    fn path_counts_segments() {
        let mut p = Path::new();
        p.move_to(Pair::ZERO).line_to(Pair::new(1.0, 1.0)).line_to(Pair::new(2.0, 0.0));
        p.move_to(Pair::new(5.0, 5.0));
        assert_eq!(p.segment_count(), 2);
    }
}

//! The vector-backend collaborator interface, plus a recording painter for
//! tests.
//!
//! [`Painter`] is the drawing surface the paint walk and box paint routines
//! talk to. The production backend is [`super::raster::RasterPainter`];
//! [`RecordingPainter`] captures the call sequence as [`PaintOp`]s so tests
//! can assert on what was painted without rasterizing anything.

use crate::geometry::{Point, Rect, Size};
use crate::style::{Color, CornerRadius, FontStyle, FontWeight, Gradient};
use crate::widget::CHAR_WIDTH_FACTOR;

/// Object-safe drawing interface consumed by the paint walk.
///
/// The coordinate space is mutated by `translate` and scoped by
/// `save`/`restore`; fill and stroke consume the current source set by the
/// most recent `set_source_*` call.
pub trait Painter {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);

    /// Intersect the clip region with `rect` (current coordinate space).
    fn clip_rect(&mut self, rect: Rect);

    fn set_source_color(&mut self, color: Color);

    /// Install a gradient source spanning `bounds`.
    fn set_source_gradient(&mut self, gradient: &Gradient, bounds: Rect);

    /// Install an image source decoded from `path`, scaled to `bounds`.
    /// Returns `false` when the file is missing or fails to decode; the
    /// current source is left unchanged in that case.
    fn set_source_image(&mut self, path: &str, bounds: Rect) -> bool;

    fn set_line_width(&mut self, width: f32);
    fn set_dash(&mut self, on: f32, off: f32);
    fn clear_dash(&mut self);

    fn fill_rect(&mut self, rect: Rect);
    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius);
    fn stroke_rect(&mut self, rect: Rect);
    fn stroke_rounded_rect(&mut self, rect: Rect, radius: CornerRadius);
    fn stroke_line(&mut self, from: Point, to: Point);

    fn set_font(&mut self, family: &str, size: f32, weight: FontWeight, style: FontStyle);

    /// Extent of `text` in the current font.
    fn measure_text(&mut self, text: &str) -> Size;

    /// Draw `text` with its baseline starting at `baseline`.
    fn fill_text(&mut self, text: &str, baseline: Point);
}

// ---------------------------------------------------------------------------
// Recording painter
// ---------------------------------------------------------------------------

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    Save,
    Restore,
    Translate { dx: f32, dy: f32 },
    ClipRect(Rect),
    SourceColor(Color),
    SourceGradient { angle: f32, stop_count: usize },
    SourceImage(String),
    LineWidth(f32),
    Dash { on: f32, off: f32 },
    ClearDash,
    FillRect(Rect),
    FillRoundedRect { rect: Rect, radius: CornerRadius },
    StrokeRect(Rect),
    StrokeRoundedRect { rect: Rect, radius: CornerRadius },
    StrokeLine { from: Point, to: Point },
    SetFont { family: String, size: f32 },
    FillText { text: String, baseline: Point },
}

/// A [`Painter`] that records every call instead of drawing.
///
/// Text measurement uses the same per-character heuristic the layout
/// estimate uses, so recorded paint positions are deterministic. Paths
/// added through [`RecordingPainter::fail_image`] report decode failure.
#[derive(Default)]
pub struct RecordingPainter {
    pub ops: Vec<PaintOp>,
    failing_images: Vec<String>,
    font_size: f32,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            failing_images: Vec::new(),
            font_size: 14.0,
        }
    }

    /// Make `set_source_image` fail for this path.
    pub fn fail_image(&mut self, path: impl Into<String>) {
        self.failing_images.push(path.into());
    }

    /// All recorded ops of one kind, by predicate.
    pub fn ops_where(&self, predicate: impl Fn(&PaintOp) -> bool) -> Vec<&PaintOp> {
        self.ops.iter().filter(|op| predicate(op)).collect()
    }

    pub fn contains(&self, op: &PaintOp) -> bool {
        self.ops.contains(op)
    }
}

impl Painter for RecordingPainter {
    fn save(&mut self) {
        self.ops.push(PaintOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(PaintOp::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(PaintOp::Translate { dx, dy });
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.ops.push(PaintOp::ClipRect(rect));
    }

    fn set_source_color(&mut self, color: Color) {
        self.ops.push(PaintOp::SourceColor(color));
    }

    fn set_source_gradient(&mut self, gradient: &Gradient, _bounds: Rect) {
        self.ops.push(PaintOp::SourceGradient {
            angle: gradient.angle,
            stop_count: gradient.stops.len(),
        });
    }

    fn set_source_image(&mut self, path: &str, _bounds: Rect) -> bool {
        if self.failing_images.iter().any(|failing| failing == path) {
            return false;
        }
        self.ops.push(PaintOp::SourceImage(path.to_owned()));
        true
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(PaintOp::LineWidth(width));
    }

    fn set_dash(&mut self, on: f32, off: f32) {
        self.ops.push(PaintOp::Dash { on, off });
    }

    fn clear_dash(&mut self) {
        self.ops.push(PaintOp::ClearDash);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(PaintOp::FillRect(rect));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius) {
        self.ops.push(PaintOp::FillRoundedRect { rect, radius });
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ops.push(PaintOp::StrokeRect(rect));
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: CornerRadius) {
        self.ops.push(PaintOp::StrokeRoundedRect { rect, radius });
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.ops.push(PaintOp::StrokeLine { from, to });
    }

    fn set_font(&mut self, family: &str, size: f32, _weight: FontWeight, _style: FontStyle) {
        self.font_size = size;
        self.ops.push(PaintOp::SetFont {
            family: family.to_owned(),
            size,
        });
    }

    fn measure_text(&mut self, text: &str) -> Size {
        Size::new(
            text.chars().count() as f32 * self.font_size * CHAR_WIDTH_FACTOR,
            self.font_size,
        )
    }

    fn fill_text(&mut self, text: &str, baseline: Point) {
        self.ops.push(PaintOp::FillText {
            text: text.to_owned(),
            baseline,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_ops_in_order() {
        let mut painter = RecordingPainter::new();
        painter.save();
        painter.translate(5.0, 10.0);
        painter.set_source_color(Color::RED);
        painter.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        painter.restore();

        assert_eq!(
            painter.ops,
            vec![
                PaintOp::Save,
                PaintOp::Translate { dx: 5.0, dy: 10.0 },
                PaintOp::SourceColor(Color::RED),
                PaintOp::FillRect(Rect::new(0.0, 0.0, 10.0, 10.0)),
                PaintOp::Restore,
            ]
        );
    }

    #[test]
    fn failing_image_reports_false_and_records_nothing() {
        let mut painter = RecordingPainter::new();
        painter.fail_image("missing.png");
        assert!(!painter.set_source_image("missing.png", Rect::ZERO));
        assert!(painter.set_source_image("ok.png", Rect::ZERO));
        assert_eq!(painter.ops, vec![PaintOp::SourceImage("ok.png".into())]);
    }

    #[test]
    fn measure_uses_current_font_size() {
        let mut painter = RecordingPainter::new();
        painter.set_font("sans", 10.0, FontWeight::Normal, FontStyle::Normal);
        let size = painter.measure_text("abcd");
        assert_eq!(size.width, 4.0 * 10.0 * 0.6);
        assert_eq!(size.height, 10.0);
    }
}

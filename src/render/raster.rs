//! CPU raster backend.
//!
//! Draws into a `Vec<u32>` of `0x00RRGGBB` pixels, the format softbuffer
//! presents directly. Everything is plain scanline work: translation and
//! clipping come from a saved state stack, fills sample the current source
//! per pixel, strokes are stamped dots along the path, and text goes through
//! rusttype coverage rasterization.

use std::collections::HashMap;
use std::path::Path;

use image::RgbaImage;
use rusttype::{point, Font, Scale};

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect, Size};
use crate::style::{Color, CornerRadius, FontStyle, FontWeight, Gradient, GradientKind, GradientStop};
use crate::widget::CHAR_WIDTH_FACTOR;

use super::painter::Painter;

/// Font files probed in order when no explicit font is supplied.
const FONT_PROBE_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Copy, Clone)]
struct GfxState {
    offset: Point,
    clip: Option<Rect>,
}

/// Current fill/stroke source, captured in device space.
enum Source {
    Color(Color),
    Gradient {
        kind: GradientKind,
        angle: f32,
        stops: Vec<GradientStop>,
        bounds: Rect,
    },
    Image {
        pixels: RgbaImage,
        bounds: Rect,
    },
}

/// Software [`Painter`] writing into an in-memory pixel buffer.
///
/// Constructed without a font it degrades gracefully: text measurement falls
/// back to the per-character heuristic and `fill_text` draws nothing. A font
/// is probed from well-known system paths in [`RasterPainter::new`] or set
/// explicitly with [`RasterPainter::with_font_path`].
pub struct RasterPainter {
    width: u32,
    height: u32,
    buffer: Vec<u32>,
    state: GfxState,
    stack: Vec<GfxState>,
    source: Source,
    line_width: f32,
    dash: Option<(f32, f32)>,
    font: Option<Font<'static>>,
    font_size: f32,
    image_cache: HashMap<String, Option<RgbaImage>>,
}

impl RasterPainter {
    pub fn new(width: u32, height: u32) -> Self {
        let font = probe_system_font();
        if font.is_none() {
            log::debug!("no usable system font found, text will not rasterize");
        }
        Self {
            width,
            height,
            buffer: vec![0; (width * height) as usize],
            state: GfxState { offset: Point::ZERO, clip: None },
            stack: Vec::new(),
            source: Source::Color(Color::BLACK),
            line_width: 1.0,
            dash: None,
            font,
            font_size: 14.0,
            image_cache: HashMap::new(),
        }
    }

    /// Replace the rasterization font with one loaded from `path`.
    pub fn with_font_path(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FontNotFound);
        }
        let bytes = std::fs::read(path)?;
        self.font = Some(Font::try_from_vec(bytes).ok_or_else(|| Error::FontParse {
            path: path.display().to_string(),
        })?);
        Ok(self)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The pixel buffer, row-major `0x00RRGGBB`.
    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.buffer = vec![0; (width * height) as usize];
    }

    /// Fill the whole buffer with `color`, resetting any leftover state.
    pub fn clear(&mut self, color: Color) {
        let pixel = pack(color);
        self.buffer.fill(pixel);
        self.state = GfxState { offset: Point::ZERO, clip: None };
        self.stack.clear();
        self.dash = None;
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    // -- pixel plumbing -----------------------------------------------------

    fn device_rect(&self, rect: Rect) -> Option<Rect> {
        let mut device = rect.translated(self.state.offset.x, self.state.offset.y);
        if let Some(clip) = self.state.clip {
            device = device.intersect(clip)?;
        }
        device.intersect(Rect::new(0.0, 0.0, self.width as f32, self.height as f32))
    }

    fn sample_source(&self, x: f32, y: f32) -> Color {
        match &self.source {
            Source::Color(color) => *color,
            Source::Gradient { kind, angle, stops, bounds } => {
                let t = match kind {
                    GradientKind::Linear => linear_t(*angle, *bounds, x, y),
                    GradientKind::Radial => radial_t(*bounds, x, y),
                };
                sample_stops(stops, t)
            }
            Source::Image { pixels, bounds } => {
                if bounds.width <= 0.0 || bounds.height <= 0.0 {
                    return Color::TRANSPARENT;
                }
                let u = ((x - bounds.x) / bounds.width).clamp(0.0, 1.0);
                let v = ((y - bounds.y) / bounds.height).clamp(0.0, 1.0);
                let px = ((u * (pixels.width() - 1) as f32).round() as u32).min(pixels.width() - 1);
                let py =
                    ((v * (pixels.height() - 1) as f32).round() as u32).min(pixels.height() - 1);
                let p = pixels.get_pixel(px, py).0;
                Color::from_rgb8(p[0], p[1], p[2], p[3])
            }
        }
    }

    /// Blend one device pixel against the buffer with extra `coverage`.
    fn plot(&mut self, x: i32, y: i32, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
        if let Some(clip) = self.state.clip {
            if !clip.contains(Point::new(fx, fy)) {
                return;
            }
        }
        let color = self.sample_source(fx, fy);
        let alpha = (color.a * coverage).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let index = (y as u32 * self.width + x as u32) as usize;
        self.buffer[index] = blend(self.buffer[index], color, alpha);
    }

    fn fill_span(&mut self, rect: Rect, inside: impl Fn(f32, f32) -> bool) {
        let Some(device) = self.device_rect(rect) else {
            return;
        };
        let x0 = device.x.floor() as i32;
        let y0 = device.y.floor() as i32;
        let x1 = device.right().ceil() as i32;
        let y1 = device.bottom().ceil() as i32;
        // Membership test runs in the rect's local space.
        let origin_x = rect.x + self.state.offset.x;
        let origin_y = rect.y + self.state.offset.y;
        for y in y0..y1 {
            for x in x0..x1 {
                let (cx, cy) = (x as f32 + 0.5, y as f32 + 0.5);
                if inside(cx - origin_x, cy - origin_y) {
                    self.plot(x, y, 1.0);
                }
            }
        }
    }

    /// Stamp dots of the current line width from `from` to `to`, honoring
    /// the dash pattern.
    fn stamp_line(&mut self, from: Point, to: Point) {
        let from = from + self.state.offset;
        let to = to + self.state.offset;
        let delta = to - from;
        let length = from.distance(to);
        if length <= 0.0 {
            self.stamp_dot(from);
            return;
        }
        let step = 0.5;
        let mut travelled = 0.0;
        while travelled <= length {
            let visible = match self.dash {
                Some((on, off)) if on + off > 0.0 => travelled % (on + off) < on,
                _ => true,
            };
            if visible {
                let t = travelled / length;
                self.stamp_dot(Point::new(from.x + delta.x * t, from.y + delta.y * t));
            }
            travelled += step;
        }
    }

    fn stamp_dot(&mut self, center: Point) {
        let radius = (self.line_width / 2.0).max(0.5);
        let x0 = (center.x - radius).floor() as i32;
        let y0 = (center.y - radius).floor() as i32;
        let x1 = (center.x + radius).ceil() as i32;
        let y1 = (center.y + radius).ceil() as i32;
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= radius * radius {
                    self.plot(x, y, 1.0);
                }
            }
        }
    }

    fn load_image(&mut self, path: &str) -> Option<RgbaImage> {
        self.image_cache
            .entry(path.to_owned())
            .or_insert_with(|| match image::open(path) {
                Ok(decoded) => Some(decoded.to_rgba8()),
                Err(err) => {
                    log::debug!("failed to decode image {path:?}: {err}");
                    None
                }
            })
            .clone()
    }
}

impl Painter for RasterPainter {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.offset.x += dx;
        self.state.offset.y += dy;
    }

    fn clip_rect(&mut self, rect: Rect) {
        let device = rect.translated(self.state.offset.x, self.state.offset.y);
        self.state.clip = Some(match self.state.clip {
            Some(existing) => existing.intersect(device).unwrap_or(Rect::ZERO),
            None => device,
        });
    }

    fn set_source_color(&mut self, color: Color) {
        self.source = Source::Color(color);
    }

    fn set_source_gradient(&mut self, gradient: &Gradient, bounds: Rect) {
        self.source = Source::Gradient {
            kind: gradient.kind,
            angle: gradient.angle,
            stops: gradient.sorted_stops(),
            bounds: bounds.translated(self.state.offset.x, self.state.offset.y),
        };
    }

    fn set_source_image(&mut self, path: &str, bounds: Rect) -> bool {
        match self.load_image(path) {
            Some(pixels) => {
                self.source = Source::Image {
                    pixels,
                    bounds: bounds.translated(self.state.offset.x, self.state.offset.y),
                };
                true
            }
            None => false,
        }
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width.max(0.0);
    }

    fn set_dash(&mut self, on: f32, off: f32) {
        self.dash = Some((on, off));
    }

    fn clear_dash(&mut self) {
        self.dash = None;
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.fill_span(rect, |_, _| true);
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius) {
        let (w, h) = (rect.width, rect.height);
        self.fill_span(rect, move |x, y| rounded_contains(x, y, w, h, radius));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        let (a, b, c, d) = (
            Point::new(rect.x, rect.y),
            Point::new(rect.right(), rect.y),
            Point::new(rect.right(), rect.bottom()),
            Point::new(rect.x, rect.bottom()),
        );
        self.stamp_line(a, b);
        self.stamp_line(b, c);
        self.stamp_line(c, d);
        self.stamp_line(d, a);
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: CornerRadius) {
        // Straight segments between the corner arcs.
        let r = radius;
        self.stamp_line(
            Point::new(rect.x + r.top_left, rect.y),
            Point::new(rect.right() - r.top_right, rect.y),
        );
        self.stamp_line(
            Point::new(rect.right(), rect.y + r.top_right),
            Point::new(rect.right(), rect.bottom() - r.bottom_right),
        );
        self.stamp_line(
            Point::new(rect.right() - r.bottom_right, rect.bottom()),
            Point::new(rect.x + r.bottom_left, rect.bottom()),
        );
        self.stamp_line(
            Point::new(rect.x, rect.bottom() - r.bottom_left),
            Point::new(rect.x, rect.y + r.top_left),
        );
        let corners = [
            (Point::new(rect.x + r.top_left, rect.y + r.top_left), r.top_left, 180.0),
            (Point::new(rect.right() - r.top_right, rect.y + r.top_right), r.top_right, 270.0),
            (
                Point::new(rect.right() - r.bottom_right, rect.bottom() - r.bottom_right),
                r.bottom_right,
                0.0,
            ),
            (
                Point::new(rect.x + r.bottom_left, rect.bottom() - r.bottom_left),
                r.bottom_left,
                90.0,
            ),
        ];
        for (center, corner_radius, start_deg) in corners {
            if corner_radius <= 0.0 {
                continue;
            }
            let steps = (corner_radius * 2.0).ceil().max(4.0) as u32;
            for step in 0..=steps {
                let angle =
                    (start_deg + 90.0 * step as f32 / steps as f32).to_radians();
                self.stamp_dot(Point::new(
                    center.x + corner_radius * angle.cos() + self.state.offset.x,
                    center.y + corner_radius * angle.sin() + self.state.offset.y,
                ));
            }
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.stamp_line(from, to);
    }

    fn set_font(&mut self, _family: &str, size: f32, _weight: FontWeight, _style: FontStyle) {
        // Single-font backend: family, weight and style select nothing yet.
        self.font_size = size.max(1.0);
    }

    fn measure_text(&mut self, text: &str) -> Size {
        let Some(font) = &self.font else {
            return Size::new(
                text.chars().count() as f32 * self.font_size * CHAR_WIDTH_FACTOR,
                self.font_size,
            );
        };
        let scale = Scale::uniform(self.font_size);
        let v_metrics = font.v_metrics(scale);
        let width = font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
            .fold(0.0_f32, f32::max);
        Size::new(width, v_metrics.ascent - v_metrics.descent)
    }

    fn fill_text(&mut self, text: &str, baseline: Point) {
        let Some(font) = self.font.clone() else {
            return;
        };
        let scale = Scale::uniform(self.font_size);
        let origin = baseline + self.state.offset;
        for glyph in font.layout(text, scale, point(origin.x, origin.y)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            let mut covered = Vec::new();
            glyph.draw(|gx, gy, coverage| {
                if coverage > 0.0 {
                    covered.push((bb.min.x + gx as i32, bb.min.y + gy as i32, coverage));
                }
            });
            for (x, y, coverage) in covered {
                self.plot(x, y, coverage);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn probe_system_font() -> Option<Font<'static>> {
    for path in FONT_PROBE_PATHS {
        if let Ok(bytes) = std::fs::read(path) {
            if let Some(font) = Font::try_from_vec(bytes) {
                log::debug!("rasterizing text with {path}");
                return Some(font);
            }
        }
    }
    None
}

fn pack(color: Color) -> u32 {
    let r = (color.r.clamp(0.0, 1.0) * 255.0).round() as u32;
    let g = (color.g.clamp(0.0, 1.0) * 255.0).round() as u32;
    let b = (color.b.clamp(0.0, 1.0) * 255.0).round() as u32;
    (r << 16) | (g << 8) | b
}

fn blend(dst: u32, src: Color, alpha: f32) -> u32 {
    if alpha >= 1.0 {
        return pack(src);
    }
    let dr = ((dst >> 16) & 0xff) as f32 / 255.0;
    let dg = ((dst >> 8) & 0xff) as f32 / 255.0;
    let db = (dst & 0xff) as f32 / 255.0;
    pack(Color::new(
        src.r * alpha + dr * (1.0 - alpha),
        src.g * alpha + dg * (1.0 - alpha),
        src.b * alpha + db * (1.0 - alpha),
        1.0,
    ))
}

/// Normalized position of `(x, y)` along a linear gradient's axis.
fn linear_t(angle_deg: f32, bounds: Rect, x: f32, y: f32) -> f32 {
    if bounds.is_empty() {
        return 0.0;
    }
    let angle = angle_deg.to_radians();
    let (dx, dy) = (angle.cos(), angle.sin());
    let cx = bounds.x + bounds.width / 2.0;
    let cy = bounds.y + bounds.height / 2.0;
    // Half-extent of the bounds projected onto the axis.
    let half = (bounds.width / 2.0 * dx).abs() + (bounds.height / 2.0 * dy).abs();
    if half <= 0.0 {
        return 0.0;
    }
    let projected = (x - cx) * dx + (y - cy) * dy;
    ((projected / half) + 1.0) / 2.0
}

/// Normalized distance of `(x, y)` from a radial gradient's center.
fn radial_t(bounds: Rect, x: f32, y: f32) -> f32 {
    if bounds.is_empty() {
        return 0.0;
    }
    let cx = bounds.x + bounds.width / 2.0;
    let cy = bounds.y + bounds.height / 2.0;
    let half_diagonal = (bounds.width * bounds.width + bounds.height * bounds.height).sqrt() / 2.0;
    let distance = ((x - cx) * (x - cx) + (y - cy) * (y - cy)).sqrt();
    distance / half_diagonal
}

fn sample_stops(stops: &[GradientStop], t: f32) -> Color {
    let Some(first) = stops.first() else {
        return Color::TRANSPARENT;
    };
    if t <= first.position {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.position {
            let span = b.position - a.position;
            if span <= f32::EPSILON {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.position) / span);
        }
    }
    stops.last().map(|s| s.color).unwrap_or(Color::TRANSPARENT)
}

/// Point-in-rounded-rect test in the rect's local space.
fn rounded_contains(x: f32, y: f32, width: f32, height: f32, radius: CornerRadius) -> bool {
    if x < 0.0 || y < 0.0 || x >= width || y >= height {
        return false;
    }
    let corners = [
        (radius.top_left, radius.top_left, radius.top_left),
        (width - radius.top_right, radius.top_right, radius.top_right),
        (
            width - radius.bottom_right,
            height - radius.bottom_right,
            radius.bottom_right,
        ),
        (radius.bottom_left, height - radius.bottom_left, radius.bottom_left),
    ];
    for (cx, cy, r) in corners {
        if r <= 0.0 {
            continue;
        }
        let in_corner_x = if cx <= width / 2.0 { x < cx } else { x > cx };
        let in_corner_y = if cy <= height / 2.0 { y < cy } else { y > cy };
        if in_corner_x && in_corner_y {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy > r * r {
                return false;
            }
        }
    }
    true
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::RED
    }

    fn pixel(painter: &RasterPainter, x: u32, y: u32) -> u32 {
        painter.buffer()[(y * painter.width() + x) as usize]
    }

    #[test]
    fn clear_fills_buffer() {
        let mut painter = RasterPainter::new(4, 4);
        painter.clear(Color::WHITE);
        assert!(painter.buffer().iter().all(|&p| p == 0x00ff_ffff));
    }

    #[test]
    fn fill_rect_writes_inside_only() {
        let mut painter = RasterPainter::new(10, 10);
        painter.set_source_color(red());
        painter.fill_rect(Rect::new(2.0, 2.0, 4.0, 4.0));
        assert_eq!(pixel(&painter, 3, 3), 0x00ff_0000);
        assert_eq!(pixel(&painter, 0, 0), 0);
        assert_eq!(pixel(&painter, 8, 8), 0);
    }

    #[test]
    fn translate_offsets_fills() {
        let mut painter = RasterPainter::new(10, 10);
        painter.translate(5.0, 5.0);
        painter.set_source_color(red());
        painter.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(pixel(&painter, 6, 6), 0x00ff_0000);
        assert_eq!(pixel(&painter, 1, 1), 0);
    }

    #[test]
    fn save_restore_unwinds_translation() {
        let mut painter = RasterPainter::new(10, 10);
        painter.save();
        painter.translate(5.0, 0.0);
        painter.restore();
        painter.set_source_color(red());
        painter.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(pixel(&painter, 0, 0), 0x00ff_0000);
        assert_eq!(pixel(&painter, 6, 0), 0);
    }

    #[test]
    fn clip_masks_fill() {
        let mut painter = RasterPainter::new(10, 10);
        painter.clip_rect(Rect::new(0.0, 0.0, 3.0, 3.0));
        painter.set_source_color(red());
        painter.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(pixel(&painter, 1, 1), 0x00ff_0000);
        assert_eq!(pixel(&painter, 5, 5), 0);
    }

    #[test]
    fn alpha_blends_over_background() {
        let mut painter = RasterPainter::new(2, 2);
        painter.clear(Color::BLACK);
        painter.set_source_color(Color::new(1.0, 1.0, 1.0, 0.5));
        painter.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
        let p = pixel(&painter, 0, 0);
        let channel = (p >> 16) & 0xff;
        assert!((126..=129).contains(&channel), "channel {channel}");
    }

    #[test]
    fn linear_gradient_varies_along_axis() {
        let mut painter = RasterPainter::new(20, 4);
        let gradient = Gradient::linear(Color::BLACK, Color::WHITE, 0.0);
        let bounds = Rect::new(0.0, 0.0, 20.0, 4.0);
        painter.set_source_gradient(&gradient, bounds);
        painter.fill_rect(bounds);
        let left = pixel(&painter, 0, 2) & 0xff;
        let right = pixel(&painter, 19, 2) & 0xff;
        assert!(left < 40, "left {left}");
        assert!(right > 215, "right {right}");
    }

    #[test]
    fn radial_gradient_centered() {
        let mut painter = RasterPainter::new(21, 21);
        let gradient = Gradient {
            kind: GradientKind::Radial,
            angle: 0.0,
            stops: vec![
                GradientStop::new(Color::WHITE, 0.0),
                GradientStop::new(Color::BLACK, 1.0),
            ],
        };
        let bounds = Rect::new(0.0, 0.0, 21.0, 21.0);
        painter.set_source_gradient(&gradient, bounds);
        painter.fill_rect(bounds);
        let center = pixel(&painter, 10, 10) & 0xff;
        let corner = pixel(&painter, 0, 0) & 0xff;
        assert!(center > corner);
    }

    #[test]
    fn missing_image_reports_false() {
        let mut painter = RasterPainter::new(4, 4);
        assert!(!painter.set_source_image("/nonexistent/image.png", Rect::ZERO));
        // Cached: second call also fails without re-reading.
        assert!(!painter.set_source_image("/nonexistent/image.png", Rect::ZERO));
    }

    #[test]
    fn rounded_rect_clears_corners() {
        let mut painter = RasterPainter::new(20, 20);
        painter.set_source_color(red());
        painter.fill_rounded_rect(Rect::new(0.0, 0.0, 20.0, 20.0), CornerRadius::all(8.0));
        assert_eq!(pixel(&painter, 0, 0), 0);
        assert_eq!(pixel(&painter, 10, 10), 0x00ff_0000);
        assert_eq!(pixel(&painter, 10, 0), 0x00ff_0000);
    }

    #[test]
    fn stroke_line_marks_path() {
        let mut painter = RasterPainter::new(10, 10);
        painter.set_source_color(red());
        painter.set_line_width(2.0);
        painter.stroke_line(Point::new(0.0, 5.0), Point::new(10.0, 5.0));
        assert_eq!(pixel(&painter, 5, 5), 0x00ff_0000);
        assert_eq!(pixel(&painter, 5, 0), 0);
    }

    #[test]
    fn dashed_line_leaves_gaps() {
        let mut painter = RasterPainter::new(40, 4);
        painter.set_source_color(red());
        painter.set_line_width(1.0);
        painter.set_dash(4.0, 4.0);
        painter.stroke_line(Point::new(0.0, 2.0), Point::new(40.0, 2.0));
        let lit = (0..40).filter(|&x| pixel(&painter, x, 2) != 0).count();
        assert!(lit > 5, "lit {lit}");
        assert!(lit < 35, "lit {lit}");
    }

    #[test]
    fn resize_reallocates() {
        let mut painter = RasterPainter::new(4, 4);
        painter.resize(8, 2);
        assert_eq!(painter.buffer().len(), 16);
        assert_eq!(painter.width(), 8);
        assert_eq!(painter.height(), 2);
    }

    #[test]
    fn measure_without_font_uses_heuristic() {
        let mut painter = RasterPainter::new(4, 4);
        painter.font = None;
        painter.set_font("sans", 10.0, FontWeight::Normal, FontStyle::Normal);
        let size = painter.measure_text("abc");
        assert_eq!(size.width, 3.0 * 10.0 * CHAR_WIDTH_FACTOR);
    }
}

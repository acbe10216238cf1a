//! Box paint routines: background, border, and text for one node.
//!
//! These run inside the tree walk with the painter already translated to the
//! node's top-left corner, so everything here works in local coordinates
//! from `(0,0)` to `(width,height)`.

use crate::geometry::{Point, Rect};
use crate::layout::BoxLayout;
use crate::style::{
    BorderStyle, Color, Gradient, TextAlign, TextDecoration, TextOverflow, VisualStyle,
};

use super::painter::Painter;

/// Paint a node's own box: background, then border, then text.
pub fn paint_box(painter: &mut dyn Painter, layout: &BoxLayout, style: &VisualStyle) {
    paint_background(painter, layout, style);
    paint_border(painter, layout, style);
    paint_text(painter, layout, style);
}

// ---------------------------------------------------------------------------
// Background
// ---------------------------------------------------------------------------

/// Background priority: gradient > image > color. A failed image decode
/// skips the background entirely rather than falling through.
pub fn paint_background(painter: &mut dyn Painter, layout: &BoxLayout, style: &VisualStyle) {
    let border = layout.border;
    let rect = Rect::new(
        border.left,
        border.top,
        (layout.width - border.horizontal()).max(0.0),
        (layout.height - border.vertical()).max(0.0),
    );
    if rect.is_empty() {
        return;
    }
    let radius = style.corner_radius();

    if let Some(gradient) = &style.background_gradient {
        // Backends need monotonic stop positions; hand over a sorted copy.
        let sorted = Gradient {
            kind: gradient.kind,
            angle: gradient.angle,
            stops: gradient.sorted_stops(),
        };
        painter.set_source_gradient(&sorted, rect);
    } else if let Some(path) = &style.background_image {
        if !painter.set_source_image(path, rect) {
            log::debug!("background image {path:?} failed to load, skipping");
            return;
        }
    } else if let Some(color) = style.background_color {
        if !color.is_visible() {
            return;
        }
        painter.set_source_color(color);
    } else {
        return;
    }

    if radius.is_rounded() {
        painter.fill_rounded_rect(rect, radius);
    } else {
        painter.fill_rect(rect);
    }
}

// ---------------------------------------------------------------------------
// Border
// ---------------------------------------------------------------------------

fn apply_dash(painter: &mut dyn Painter, border_style: BorderStyle, width: f32) {
    match border_style {
        BorderStyle::Dashed => painter.set_dash(3.0 * width, 3.0 * width),
        BorderStyle::Dotted => painter.set_dash(width, width),
        // Double/Groove/Ridge/Inset/Outset have no distinct stroke yet.
        _ => painter.clear_dash(),
    }
}

/// Uniform edge widths stroke one centered path (rounded when any corner
/// radius is set); differing widths stroke each edge independently with no
/// rounded joins.
pub fn paint_border(painter: &mut dyn Painter, layout: &BoxLayout, style: &VisualStyle) {
    let widths = layout.border;
    if widths.horizontal() + widths.vertical() <= 0.0 {
        return;
    }
    let color = style.border_color.unwrap_or(Color::BLACK);
    if !color.is_visible() {
        return;
    }
    painter.set_source_color(color);
    let border_style = style.border_style.unwrap_or_default();

    if widths.is_uniform() {
        let width = widths.left;
        painter.set_line_width(width);
        apply_dash(painter, border_style, width);
        let rect = Rect::new(0.0, 0.0, layout.width, layout.height).inset(width / 2.0);
        let radius = style.corner_radius();
        if radius.is_rounded() {
            painter.stroke_rounded_rect(rect, radius);
        } else {
            painter.stroke_rect(rect);
        }
    } else {
        let (w, h) = (layout.width, layout.height);
        let edges = [
            (widths.top, Point::new(0.0, widths.top / 2.0), Point::new(w, widths.top / 2.0)),
            (
                widths.right,
                Point::new(w - widths.right / 2.0, 0.0),
                Point::new(w - widths.right / 2.0, h),
            ),
            (
                widths.bottom,
                Point::new(0.0, h - widths.bottom / 2.0),
                Point::new(w, h - widths.bottom / 2.0),
            ),
            (widths.left, Point::new(widths.left / 2.0, 0.0), Point::new(widths.left / 2.0, h)),
        ];
        for (width, from, to) in edges {
            if width <= 0.0 {
                continue;
            }
            painter.set_line_width(width);
            apply_dash(painter, border_style, width);
            painter.stroke_line(from, to);
        }
    }
    painter.clear_dash();
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

fn truncate_with_ellipsis(painter: &mut dyn Painter, line: &str, max_width: f32) -> String {
    let mut chars: Vec<char> = line.chars().collect();
    while !chars.is_empty() {
        let mut candidate: String = chars.iter().collect();
        candidate.push('…');
        if painter.measure_text(&candidate).width <= max_width {
            return candidate;
        }
        chars.pop();
    }
    "…".to_owned()
}

/// Newline-split lines stacked at `font_size * line_height` pitch, aligned
/// inside the content box. Justify degrades to left alignment.
pub fn paint_text(painter: &mut dyn Painter, layout: &BoxLayout, style: &VisualStyle) {
    let Some(text) = style.text.as_deref() else {
        return;
    };
    if text.is_empty() {
        return;
    }
    let color = style.text_color();
    if !color.is_visible() {
        return;
    }
    let content = layout.content_rect();
    if content.is_empty() {
        return;
    }

    painter.set_font(
        style.font_family.as_deref().unwrap_or("sans-serif"),
        style.font_size(),
        style.font_weight(),
        style.font_style(),
    );
    painter.set_source_color(color);

    let font_size = style.font_size();
    let pitch = style.line_pitch();
    let overflow = style.text_overflow();
    let decoration = style.text_decoration();
    // Fade needs per-glyph alpha masking; it clips like Clip for now.
    let clipped = matches!(overflow, TextOverflow::Clip | TextOverflow::Fade);
    if clipped {
        painter.save();
        painter.clip_rect(content);
    }

    for (index, raw_line) in text.split('\n').enumerate() {
        let mut line = raw_line.to_owned();
        let mut width = painter.measure_text(&line).width;
        if overflow == TextOverflow::Ellipsis && width > content.width {
            line = truncate_with_ellipsis(painter, raw_line, content.width);
            width = painter.measure_text(&line).width;
        }

        let x = match style.text_align() {
            TextAlign::Left | TextAlign::Justify => content.x,
            TextAlign::Center => content.x + (content.width - width) / 2.0,
            TextAlign::Right => content.x + content.width - width,
        };
        // Approximate ascent.
        let baseline_y = content.y + index as f32 * pitch + font_size * 0.8;
        painter.fill_text(&line, Point::new(x, baseline_y));

        let decoration_y = match decoration {
            TextDecoration::Underline => Some(baseline_y + font_size * 0.1),
            TextDecoration::Overline => Some(baseline_y - font_size * 0.9),
            TextDecoration::LineThrough => Some(baseline_y - font_size * 0.3),
            TextDecoration::None => None,
        };
        if let Some(y) = decoration_y {
            painter.set_line_width((font_size / 14.0).max(1.0));
            painter.stroke_line(Point::new(x, y), Point::new(x + width, y));
        }
    }

    if clipped {
        painter.restore();
    }
}

// ===========================================================================
// Tests
// ===========================================================================

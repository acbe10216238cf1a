//! Widget trait: per-node paint, measurement, and event hooks.
//!
//! The `Widget` trait is the behavior seam for all node kinds. A plain
//! container keeps every default; controls override the event hooks and
//! restyle themselves through the `&mut VisualStyle` they are handed.
//!
//! Widget is object-safe: the tree stores `Box<dyn Widget>` and downcasts
//! through `as_any`/`as_any_mut` where a concrete type is needed.

use std::any::Any;

use crate::event::{KeyEvent, MouseEvent};
use crate::geometry::Size;
use crate::layout::{BoxLayout, LayoutStyle};
use crate::render::{paint_box, Painter};
use crate::style::VisualStyle;

/// Per-character width factor for the text measurement estimate.
///
/// A deliberate approximation: good enough for the layout engine's sizing
/// pass, not glyph-exact.
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Estimate the size of a node's text content plus its padding and border.
///
/// Lines are split on literal newlines; width is the longest line's
/// character count times `font_size * 0.6`, height is the line count times
/// the line pitch. Percent-valued padding cannot be resolved here and
/// contributes zero.
pub fn estimate_text_size(style: &VisualStyle, layout: &LayoutStyle) -> Size {
    let Some(text) = style.text.as_deref() else {
        return Size::ZERO;
    };

    let font_size = style.font_size();
    let mut max_chars = 0usize;
    let mut line_count = 0usize;
    for line in text.split('\n') {
        max_chars = max_chars.max(line.chars().count());
        line_count += 1;
    }

    let pad_h = layout.padding.left.points().unwrap_or(0.0)
        + layout.padding.right.points().unwrap_or(0.0)
        + layout.border.left.points().unwrap_or(0.0)
        + layout.border.right.points().unwrap_or(0.0);
    let pad_v = layout.padding.top.points().unwrap_or(0.0)
        + layout.padding.bottom.points().unwrap_or(0.0)
        + layout.border.top.points().unwrap_or(0.0)
        + layout.border.bottom.points().unwrap_or(0.0);

    Size::new(
        max_chars as f32 * font_size * CHAR_WIDTH_FACTOR + pad_h,
        line_count as f32 * style.line_pitch() + pad_v,
    )
}

/// Core trait implemented by all node kinds.
pub trait Widget {
    /// Type name for debugging and the layout dump (e.g. "Button").
    fn widget_type(&self) -> &str;

    /// Paint this node's own box into an already-translated local coordinate
    /// space, origin `(0,0)` to `(width,height)`.
    ///
    /// Must not paint children; the tree walk does that.
    fn render(&self, painter: &mut dyn Painter, layout: &BoxLayout, style: &VisualStyle) {
        paint_box(painter, layout, style);
    }

    /// Size estimate consulted by the layout engine for leaves without a
    /// definite size. A known dimension from the engine overrides the
    /// estimate on that axis.
    fn measure(
        &self,
        style: &VisualStyle,
        layout: &LayoutStyle,
        known_width: Option<f32>,
        known_height: Option<f32>,
    ) -> Size {
        let estimate = estimate_text_size(style, layout);
        Size::new(
            known_width.unwrap_or(estimate.width),
            known_height.unwrap_or(estimate.height),
        )
    }

    /// Handle a dispatched mouse event. Returns `true` if visual output
    /// changed and the node should be marked dirty.
    fn on_mouse(&mut self, _event: &MouseEvent, _style: &mut VisualStyle) -> bool {
        false
    }

    /// Handle a key event while focused. Returns `true` if visual output
    /// changed.
    fn on_key(&mut self, _event: &KeyEvent, _style: &mut VisualStyle) -> bool {
        false
    }

    /// Focus gained or lost. Returns `true` if visual output changed.
    fn on_focus_changed(&mut self, _focused: bool, _style: &mut VisualStyle) -> bool {
        false
    }

    /// Periodic tick from the window clock (cursor blink). Returns `true`
    /// if visual output changed.
    fn on_tick(&mut self) -> bool {
        false
    }

    /// Whether this widget can receive keyboard focus.
    fn can_focus(&self) -> bool {
        false
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::LayoutValue;
    use crate::widgets::Container;

    #[derive(Debug)]
    struct Focusable;

    impl Widget for Focusable {
        fn widget_type(&self) -> &str {
            "Focusable"
        }

        fn can_focus(&self) -> bool {
            true
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    // -----------------------------------------------------------------------
    // estimate_text_size
    // -----------------------------------------------------------------------

    #[test]
    fn estimate_no_text_is_zero() {
        let size = estimate_text_size(&VisualStyle::new(), &LayoutStyle::new());
        assert_eq!(size, Size::ZERO);
    }

    #[test]
    fn estimate_single_line() {
        let mut style = VisualStyle::new();
        style.text = Some("hello".into());
        style.font_size = Some(10.0);
        style.line_height = Some(1.0);
        let size = estimate_text_size(&style, &LayoutStyle::new());
        // 5 chars * 10 * 0.6 wide, one line of 10 tall.
        assert_eq!(size.width, 30.0);
        assert_eq!(size.height, 10.0);
    }

    #[test]
    fn estimate_uses_longest_line() {
        let mut style = VisualStyle::new();
        style.text = Some("ab\nwider line\nc".into());
        style.font_size = Some(10.0);
        style.line_height = Some(1.0);
        let size = estimate_text_size(&style, &LayoutStyle::new());
        assert_eq!(size.width, 10.0 * 10.0 * 0.6);
        assert_eq!(size.height, 30.0);
    }

    #[test]
    fn estimate_adds_padding_and_border() {
        let mut style = VisualStyle::new();
        style.text = Some("x".into());
        style.font_size = Some(10.0);
        style.line_height = Some(1.0);

        let mut layout = LayoutStyle::new();
        layout.padding = crate::style::EdgeInsets::all(4.0);
        layout.border = crate::style::EdgeInsets::all(1.0);
        let size = estimate_text_size(&style, &layout);
        assert_eq!(size.width, 6.0 + 10.0);
        assert_eq!(size.height, 10.0 + 10.0);
    }

    #[test]
    fn estimate_ignores_percent_padding() {
        let mut style = VisualStyle::new();
        style.text = Some("x".into());
        style.font_size = Some(10.0);
        style.line_height = Some(1.0);

        let mut layout = LayoutStyle::new();
        layout.padding = crate::style::EdgeInsets::uniform(LayoutValue::Percent(50.0));
        let size = estimate_text_size(&style, &layout);
        assert_eq!(size.width, 6.0);
    }

    // -----------------------------------------------------------------------
    // Widget defaults
    // -----------------------------------------------------------------------

    #[test]
    fn default_measure_prefers_known_dimensions() {
        let widget = Container::new();
        let mut style = VisualStyle::new();
        style.text = Some("hello".into());
        let size = widget.measure(&style, &LayoutStyle::new(), Some(99.0), None);
        assert_eq!(size.width, 99.0);
        assert!(size.height > 0.0);
    }

    #[test]
    fn default_event_hooks_do_nothing() {
        let mut widget = Container::new();
        let mut style = VisualStyle::new();
        assert!(!widget.on_focus_changed(true, &mut style));
        assert!(!widget.on_tick());
        assert!(!widget.can_focus());
    }

    #[test]
    fn can_focus_overridden() {
        assert!(Focusable.can_focus());
    }

    #[test]
    fn widget_is_object_safe() {
        let widget: Box<dyn Widget> = Box::new(Focusable);
        assert_eq!(widget.widget_type(), "Focusable");
        assert!(widget.as_any().downcast_ref::<Focusable>().is_some());
    }
}

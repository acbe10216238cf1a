//! Per-node visual state: background, border, and text.
//!
//! Every property is an `Option` so that "never set" is distinguishable from
//! "set to a default-looking value". `has_background`, `has_border_style`,
//! and `has_text_style` report presence; the `clear_*` methods return the
//! corresponding group to the unset state.
//!
//! Border *widths* are layout properties and live on the layout style; paint
//! reads them back from the computed box model. This struct carries only the
//! border's appearance (color, line style, corner radius, shadow).

use super::background::{BoxShadow, Gradient};
use super::color::Color;
use super::text::{FontStyle, FontWeight, TextAlign, TextDecoration, TextOverflow};
use super::value::CornerRadius;

/// Border line style.
///
/// `Dashed` and `Dotted` map to dash patterns on the stroke; the remaining
/// non-solid variants paint as `Solid`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualStyle {
    // ── Background ───────────────────────────────────────────────────
    pub background_color: Option<Color>,
    pub background_gradient: Option<Gradient>,
    /// File path of a background image, decoded at paint time.
    pub background_image: Option<String>,

    // ── Border appearance ────────────────────────────────────────────
    pub border_color: Option<Color>,
    pub border_style: Option<BorderStyle>,
    pub corner_radius: Option<CornerRadius>,
    pub box_shadow: Option<BoxShadow>,

    // ── Text ─────────────────────────────────────────────────────────
    pub text: Option<String>,
    pub text_color: Option<Color>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub text_align: Option<TextAlign>,
    pub text_decoration: Option<TextDecoration>,
    pub text_overflow: Option<TextOverflow>,
    pub line_height: Option<f32>,
}

impl VisualStyle {
    pub const DEFAULT_FONT_SIZE: f32 = 14.0;
    pub const DEFAULT_LINE_HEIGHT: f32 = 1.2;

    pub fn new() -> Self {
        Self::default()
    }

    // ── Presence ─────────────────────────────────────────────────────

    pub fn has_background(&self) -> bool {
        self.background_color.is_some()
            || self.background_gradient.is_some()
            || self.background_image.is_some()
    }

    pub fn has_border_style(&self) -> bool {
        self.border_color.is_some()
            || self.border_style.is_some()
            || self.corner_radius.is_some()
            || self.box_shadow.is_some()
    }

    pub fn has_text_style(&self) -> bool {
        self.text.is_some()
            || self.text_color.is_some()
            || self.font_family.is_some()
            || self.font_size.is_some()
            || self.font_weight.is_some()
            || self.font_style.is_some()
            || self.text_align.is_some()
            || self.text_decoration.is_some()
            || self.text_overflow.is_some()
            || self.line_height.is_some()
    }

    // ── Clearing ─────────────────────────────────────────────────────

    pub fn clear_background(&mut self) {
        self.background_color = None;
        self.background_gradient = None;
        self.background_image = None;
    }

    pub fn clear_border_style(&mut self) {
        self.border_color = None;
        self.border_style = None;
        self.corner_radius = None;
        self.box_shadow = None;
    }

    pub fn clear_text_style(&mut self) {
        self.text = None;
        self.text_color = None;
        self.font_family = None;
        self.font_size = None;
        self.font_weight = None;
        self.font_style = None;
        self.text_align = None;
        self.text_decoration = None;
        self.text_overflow = None;
        self.line_height = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Copy every set property of `over` onto `self`; unset properties of
    /// `over` leave `self` untouched.
    pub fn apply(&mut self, over: &VisualStyle) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if over.$field.is_some() {
                    self.$field = over.$field.clone();
                })*
            };
        }
        take!(
            background_color,
            background_gradient,
            background_image,
            border_color,
            border_style,
            corner_radius,
            box_shadow,
            text,
            text_color,
            font_family,
            font_size,
            font_weight,
            font_style,
            text_align,
            text_decoration,
            text_overflow,
            line_height,
        );
    }

    // ── Defaulted accessors used by paint and measure ────────────────

    pub fn font_size(&self) -> f32 {
        self.font_size.unwrap_or(Self::DEFAULT_FONT_SIZE)
    }

    pub fn line_height(&self) -> f32 {
        self.line_height.unwrap_or(Self::DEFAULT_LINE_HEIGHT)
    }

    /// Vertical distance between successive text baselines.
    pub fn line_pitch(&self) -> f32 {
        self.font_size() * self.line_height()
    }

    pub fn text_color(&self) -> Color {
        self.text_color.unwrap_or(Color::BLACK)
    }

    pub fn text_align(&self) -> TextAlign {
        self.text_align.unwrap_or_default()
    }

    pub fn text_decoration(&self) -> TextDecoration {
        self.text_decoration.unwrap_or_default()
    }

    pub fn text_overflow(&self) -> TextOverflow {
        self.text_overflow.unwrap_or_default()
    }

    pub fn font_weight(&self) -> FontWeight {
        self.font_weight.unwrap_or_default()
    }

    pub fn font_style(&self) -> FontStyle {
        self.font_style.unwrap_or_default()
    }

    pub fn corner_radius(&self) -> CornerRadius {
        self.corner_radius.unwrap_or(CornerRadius::ZERO)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_style_has_nothing_set() {
        let s = VisualStyle::new();
        assert!(!s.has_background());
        assert!(!s.has_border_style());
        assert!(!s.has_text_style());
    }

    #[test]
    fn presence_tracks_individual_fields() {
        let mut s = VisualStyle::new();
        s.background_color = Some(Color::TRANSPARENT);
        // Set-to-transparent still counts as set.
        assert!(s.has_background());

        let mut s = VisualStyle::new();
        s.corner_radius = Some(CornerRadius::all(4.0));
        assert!(s.has_border_style());

        let mut s = VisualStyle::new();
        s.text = Some(String::new());
        assert!(s.has_text_style());
    }

    #[test]
    fn clear_background_unsets_all_three() {
        let mut s = VisualStyle::new();
        s.background_color = Some(Color::RED);
        s.background_gradient = Some(Gradient::linear(Color::RED, Color::BLUE, 0.0));
        s.background_image = Some("bg.png".into());
        s.clear_background();
        assert!(!s.has_background());
    }

    #[test]
    fn clear_groups_are_independent() {
        let mut s = VisualStyle::new();
        s.background_color = Some(Color::RED);
        s.border_color = Some(Color::BLACK);
        s.text = Some("hi".into());

        s.clear_border_style();
        assert!(!s.has_border_style());
        assert!(s.has_background());
        assert!(s.has_text_style());
    }

    #[test]
    fn reset_clears_everything() {
        let mut s = VisualStyle::new();
        s.background_color = Some(Color::RED);
        s.border_style = Some(BorderStyle::Dashed);
        s.font_size = Some(22.0);
        s.reset();
        assert_eq!(s, VisualStyle::default());
    }

    #[test]
    fn defaulted_accessors() {
        let s = VisualStyle::new();
        assert_eq!(s.font_size(), 14.0);
        assert_eq!(s.line_height(), 1.2);
        assert_eq!(s.text_color(), Color::BLACK);
        assert_eq!(s.text_align(), TextAlign::Left);

        let mut s = VisualStyle::new();
        s.font_size = Some(20.0);
        s.line_height = Some(1.5);
        assert_eq!(s.line_pitch(), 30.0);
    }
}

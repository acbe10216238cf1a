//! Box-model layout properties for a tree node.
//!
//! [`LayoutStyle`] is the full set of layout-affecting properties a node
//! carries; [`super::resolve`] converts it to a `taffy::Style` whenever the
//! engine's copy needs refreshing.

use crate::style::{EdgeInsets, LayoutValue};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Flex,
    /// Excluded from layout and skipped by the paint walk.
    None,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    #[default]
    Column,
    RowReverse,
    ColumnReverse,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AlignContent {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PositionType {
    #[default]
    Relative,
    Absolute,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    /// Clips this node's paint and all descendants.
    Hidden,
    Scroll,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BoxSizing {
    #[default]
    BorderBox,
    ContentBox,
}

/// Layout direction. Stored for API completeness; resolution is
/// left-to-right regardless.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Inherit,
    Ltr,
    Rtl,
}

/// All layout-affecting properties of a node.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutStyle {
    pub display: Display,
    pub direction: Direction,
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: LayoutValue,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_self: Option<AlignItems>,
    pub align_content: AlignContent,
    pub width: LayoutValue,
    pub height: LayoutValue,
    pub min_width: LayoutValue,
    pub min_height: LayoutValue,
    pub max_width: LayoutValue,
    pub max_height: LayoutValue,
    pub aspect_ratio: Option<f32>,
    pub margin: EdgeInsets,
    pub padding: EdgeInsets,
    /// Border widths participate in layout; border appearance lives on the
    /// visual style.
    pub border: EdgeInsets,
    pub position: PositionType,
    /// Offsets for positioned nodes. Defaults to all-auto.
    pub inset: EdgeInsets,
    pub row_gap: f32,
    pub column_gap: f32,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub box_sizing: BoxSizing,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            display: Display::Flex,
            direction: Direction::Inherit,
            flex_direction: FlexDirection::Column,
            flex_wrap: FlexWrap::NoWrap,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: LayoutValue::Auto,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            align_self: None,
            align_content: AlignContent::Stretch,
            width: LayoutValue::Auto,
            height: LayoutValue::Auto,
            min_width: LayoutValue::Auto,
            min_height: LayoutValue::Auto,
            max_width: LayoutValue::Auto,
            max_height: LayoutValue::Auto,
            aspect_ratio: None,
            margin: EdgeInsets::ZERO,
            padding: EdgeInsets::ZERO,
            border: EdgeInsets::ZERO,
            position: PositionType::Relative,
            inset: EdgeInsets::AUTO,
            row_gap: 0.0,
            column_gap: 0.0,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            box_sizing: BoxSizing::BorderBox,
        }
    }
}

impl LayoutStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when this node is excluded from layout and paint.
    pub fn is_hidden(&self) -> bool {
        self.display == Display::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_flex_column() {
        let s = LayoutStyle::default();
        assert_eq!(s.display, Display::Flex);
        assert_eq!(s.flex_direction, FlexDirection::Column);
        assert_eq!(s.flex_grow, 0.0);
        assert_eq!(s.flex_shrink, 1.0);
        assert!(s.width.is_auto());
        assert!(!s.is_hidden());
    }

    #[test]
    fn display_none_is_hidden() {
        let mut s = LayoutStyle::new();
        s.display = Display::None;
        assert!(s.is_hidden());
    }
}

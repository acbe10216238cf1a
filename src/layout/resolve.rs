//! [`LayoutStyle`] -> taffy Style conversion.
//!
//! Taffy exposes distinct value types per context (sizes allow auto, padding
//! and border do not), so each [`LayoutValue`] kind maps through a dedicated
//! function per target type.

use taffy::prelude::*;

use crate::style::{EdgeInsets, LayoutValue};

use super::style::{
    AlignContent, AlignItems, BoxSizing, Display, FlexDirection, FlexWrap, JustifyContent,
    LayoutStyle, Overflow, PositionType,
};

/// Convert a [`LayoutValue`] to a [`LengthPercentageAuto`] (margins, insets).
pub fn resolve_value(value: LayoutValue) -> LengthPercentageAuto {
    match value {
        LayoutValue::Point(v) => LengthPercentageAuto::from_length(v),
        LayoutValue::Percent(v) => LengthPercentageAuto::from_percent(v / 100.0),
        LayoutValue::Auto => LengthPercentageAuto::AUTO,
    }
}

/// Convert a [`LayoutValue`] to a [`LengthPercentage`] for contexts with no
/// auto variant (padding, border, gap). `Auto` maps to zero.
pub fn resolve_value_definite(value: LayoutValue) -> LengthPercentage {
    match value {
        LayoutValue::Point(v) => LengthPercentage::from_length(v),
        LayoutValue::Percent(v) => LengthPercentage::from_percent(v / 100.0),
        LayoutValue::Auto => LengthPercentage::ZERO,
    }
}

/// Convert a [`LayoutValue`] to a [`Dimension`] for sizing contexts
/// (width/height, min/max, flex basis).
pub fn resolve_value_dimension(value: LayoutValue) -> Dimension {
    match value {
        LayoutValue::Point(v) => Dimension::from_length(v),
        LayoutValue::Percent(v) => Dimension::from_percent(v / 100.0),
        LayoutValue::Auto => Dimension::AUTO,
    }
}

/// Convert [`EdgeInsets`] to a taffy [`Rect<LengthPercentageAuto>`].
pub fn resolve_insets(insets: &EdgeInsets) -> taffy::geometry::Rect<LengthPercentageAuto> {
    taffy::geometry::Rect {
        top: resolve_value(insets.top),
        right: resolve_value(insets.right),
        bottom: resolve_value(insets.bottom),
        left: resolve_value(insets.left),
    }
}

/// Convert [`EdgeInsets`] to a taffy [`Rect<LengthPercentage>`] (no auto).
pub fn resolve_insets_definite(insets: &EdgeInsets) -> taffy::geometry::Rect<LengthPercentage> {
    taffy::geometry::Rect {
        top: resolve_value_definite(insets.top),
        right: resolve_value_definite(insets.right),
        bottom: resolve_value_definite(insets.bottom),
        left: resolve_value_definite(insets.left),
    }
}

fn resolve_overflow(overflow: Overflow) -> taffy::style::Overflow {
    match overflow {
        Overflow::Visible => taffy::style::Overflow::Visible,
        Overflow::Hidden => taffy::style::Overflow::Hidden,
        Overflow::Scroll => taffy::style::Overflow::Scroll,
    }
}

fn resolve_align_items(align: AlignItems) -> taffy::style::AlignItems {
    match align {
        AlignItems::Stretch => taffy::style::AlignItems::Stretch,
        AlignItems::FlexStart => taffy::style::AlignItems::FlexStart,
        AlignItems::FlexEnd => taffy::style::AlignItems::FlexEnd,
        AlignItems::Center => taffy::style::AlignItems::Center,
        AlignItems::Baseline => taffy::style::AlignItems::Baseline,
    }
}

fn resolve_justify(justify: JustifyContent) -> taffy::style::JustifyContent {
    match justify {
        JustifyContent::FlexStart => taffy::style::JustifyContent::FlexStart,
        JustifyContent::FlexEnd => taffy::style::JustifyContent::FlexEnd,
        JustifyContent::Center => taffy::style::JustifyContent::Center,
        JustifyContent::SpaceBetween => taffy::style::JustifyContent::SpaceBetween,
        JustifyContent::SpaceAround => taffy::style::JustifyContent::SpaceAround,
        JustifyContent::SpaceEvenly => taffy::style::JustifyContent::SpaceEvenly,
    }
}

fn resolve_align_content(align: AlignContent) -> taffy::style::AlignContent {
    match align {
        AlignContent::Stretch => taffy::style::AlignContent::Stretch,
        AlignContent::FlexStart => taffy::style::AlignContent::FlexStart,
        AlignContent::FlexEnd => taffy::style::AlignContent::FlexEnd,
        AlignContent::Center => taffy::style::AlignContent::Center,
        AlignContent::SpaceBetween => taffy::style::AlignContent::SpaceBetween,
        AlignContent::SpaceAround => taffy::style::AlignContent::SpaceAround,
    }
}

/// Convert a full [`LayoutStyle`] into a [`taffy::Style`].
pub fn resolve_style(style: &LayoutStyle) -> taffy::Style {
    let mut out = taffy::Style::default();

    out.display = match style.display {
        Display::Flex => taffy::style::Display::Flex,
        Display::None => taffy::style::Display::None,
    };

    out.flex_direction = match style.flex_direction {
        FlexDirection::Row => taffy::style::FlexDirection::Row,
        FlexDirection::Column => taffy::style::FlexDirection::Column,
        FlexDirection::RowReverse => taffy::style::FlexDirection::RowReverse,
        FlexDirection::ColumnReverse => taffy::style::FlexDirection::ColumnReverse,
    };

    out.flex_wrap = match style.flex_wrap {
        FlexWrap::NoWrap => taffy::style::FlexWrap::NoWrap,
        FlexWrap::Wrap => taffy::style::FlexWrap::Wrap,
        FlexWrap::WrapReverse => taffy::style::FlexWrap::WrapReverse,
    };

    out.flex_grow = style.flex_grow;
    out.flex_shrink = style.flex_shrink;
    out.flex_basis = resolve_value_dimension(style.flex_basis);

    out.justify_content = Some(resolve_justify(style.justify_content));
    out.align_items = Some(resolve_align_items(style.align_items));
    out.align_self = style.align_self.map(resolve_align_items);
    out.align_content = Some(resolve_align_content(style.align_content));

    out.size = taffy::geometry::Size {
        width: resolve_value_dimension(style.width),
        height: resolve_value_dimension(style.height),
    };
    out.min_size = taffy::geometry::Size {
        width: resolve_value_dimension(style.min_width),
        height: resolve_value_dimension(style.min_height),
    };
    out.max_size = taffy::geometry::Size {
        width: resolve_value_dimension(style.max_width),
        height: resolve_value_dimension(style.max_height),
    };
    out.aspect_ratio = style.aspect_ratio;

    out.margin = resolve_insets(&style.margin);
    out.padding = resolve_insets_definite(&style.padding);
    out.border = resolve_insets_definite(&style.border);

    out.position = match style.position {
        PositionType::Relative => taffy::style::Position::Relative,
        PositionType::Absolute => taffy::style::Position::Absolute,
    };
    out.inset = resolve_insets(&style.inset);

    out.gap = taffy::geometry::Size {
        width: LengthPercentage::from_length(style.column_gap),
        height: LengthPercentage::from_length(style.row_gap),
    };

    out.overflow = taffy::geometry::Point {
        x: resolve_overflow(style.overflow_x),
        y: resolve_overflow(style.overflow_y),
    };

    out.box_sizing = match style.box_sizing {
        BoxSizing::BorderBox => taffy::style::BoxSizing::BorderBox,
        BoxSizing::ContentBox => taffy::style::BoxSizing::ContentBox,
    };

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{EdgeInsets, LayoutValue};

    // -----------------------------------------------------------------------
    // resolve_value
    // -----------------------------------------------------------------------

    #[test]
    fn resolve_point() {
        let result = resolve_value(LayoutValue::Point(10.0));
        assert_eq!(result, LengthPercentageAuto::from_length(10.0));
    }

    #[test]
    fn resolve_percent() {
        let result = resolve_value(LayoutValue::Percent(50.0));
        assert_eq!(result, LengthPercentageAuto::from_percent(0.5));
    }

    #[test]
    fn resolve_auto() {
        let result = resolve_value(LayoutValue::Auto);
        assert_eq!(result, LengthPercentageAuto::AUTO);
    }

    // -----------------------------------------------------------------------
    // resolve_value_definite
    // -----------------------------------------------------------------------

    #[test]
    fn resolve_definite_point() {
        let result = resolve_value_definite(LayoutValue::Point(5.0));
        assert_eq!(result, LengthPercentage::from_length(5.0));
    }

    #[test]
    fn resolve_definite_percent() {
        let result = resolve_value_definite(LayoutValue::Percent(25.0));
        assert_eq!(result, LengthPercentage::from_percent(0.25));
    }

    #[test]
    fn resolve_definite_auto_becomes_zero() {
        let result = resolve_value_definite(LayoutValue::Auto);
        assert_eq!(result, LengthPercentage::ZERO);
    }

    // -----------------------------------------------------------------------
    // resolve_value_dimension
    // -----------------------------------------------------------------------

    #[test]
    fn resolve_dimension_kinds() {
        assert_eq!(
            resolve_value_dimension(LayoutValue::Point(40.0)),
            Dimension::from_length(40.0)
        );
        assert_eq!(
            resolve_value_dimension(LayoutValue::Percent(100.0)),
            Dimension::from_percent(1.0)
        );
        assert_eq!(resolve_value_dimension(LayoutValue::Auto), Dimension::AUTO);
    }

    // -----------------------------------------------------------------------
    // resolve_insets
    // -----------------------------------------------------------------------

    #[test]
    fn resolve_insets_uniform() {
        let insets = EdgeInsets::all(2.0);
        let result = resolve_insets(&insets);
        let expected = LengthPercentageAuto::from_length(2.0);
        assert_eq!(result.top, expected);
        assert_eq!(result.right, expected);
        assert_eq!(result.bottom, expected);
        assert_eq!(result.left, expected);
    }

    #[test]
    fn resolve_insets_mixed() {
        let insets = EdgeInsets::new(
            LayoutValue::Point(1.0),
            LayoutValue::Percent(50.0),
            LayoutValue::Auto,
            LayoutValue::Point(4.0),
        );
        let result = resolve_insets(&insets);
        assert_eq!(result.left, LengthPercentageAuto::from_length(1.0));
        assert_eq!(result.top, LengthPercentageAuto::from_percent(0.5));
        assert_eq!(result.right, LengthPercentageAuto::AUTO);
        assert_eq!(result.bottom, LengthPercentageAuto::from_length(4.0));
    }

    // -----------------------------------------------------------------------
    // resolve_style
    // -----------------------------------------------------------------------

    #[test]
    fn style_default_is_flex_column() {
        let style = LayoutStyle::default();
        let taffy_style = resolve_style(&style);
        assert_eq!(taffy_style.display, taffy::style::Display::Flex);
        assert_eq!(
            taffy_style.flex_direction,
            taffy::style::FlexDirection::Column
        );
    }

    #[test]
    fn style_display_none() {
        let mut style = LayoutStyle::new();
        style.display = Display::None;
        let taffy_style = resolve_style(&style);
        assert_eq!(taffy_style.display, taffy::style::Display::None);
    }

    #[test]
    fn style_row_direction() {
        let mut style = LayoutStyle::new();
        style.flex_direction = FlexDirection::Row;
        let taffy_style = resolve_style(&style);
        assert_eq!(taffy_style.flex_direction, taffy::style::FlexDirection::Row);
    }

    #[test]
    fn style_sizing() {
        let mut style = LayoutStyle::new();
        style.width = LayoutValue::Point(300.0);
        style.height = LayoutValue::Percent(50.0);
        let taffy_style = resolve_style(&style);
        assert_eq!(taffy_style.size.width, Dimension::from_length(300.0));
        assert_eq!(taffy_style.size.height, Dimension::from_percent(0.5));
    }

    #[test]
    fn style_min_max_sizing() {
        let mut style = LayoutStyle::new();
        style.min_width = LayoutValue::Point(10.0);
        style.max_height = LayoutValue::Percent(100.0);
        let taffy_style = resolve_style(&style);
        assert_eq!(taffy_style.min_size.width, Dimension::from_length(10.0));
        assert_eq!(taffy_style.max_size.height, Dimension::from_percent(1.0));
    }

    #[test]
    fn style_flex_properties() {
        let mut style = LayoutStyle::new();
        style.flex_grow = 2.0;
        style.flex_shrink = 0.0;
        style.flex_basis = LayoutValue::Point(100.0);
        let taffy_style = resolve_style(&style);
        assert_eq!(taffy_style.flex_grow, 2.0);
        assert_eq!(taffy_style.flex_shrink, 0.0);
        assert_eq!(taffy_style.flex_basis, Dimension::from_length(100.0));
    }

    #[test]
    fn style_margin_padding_border() {
        let mut style = LayoutStyle::new();
        style.margin = EdgeInsets::all(2.0);
        style.padding = EdgeInsets::all(10.0);
        style.border = EdgeInsets::all(1.0);
        let taffy_style = resolve_style(&style);
        assert_eq!(taffy_style.margin.top, LengthPercentageAuto::from_length(2.0));
        assert_eq!(taffy_style.padding.left, LengthPercentage::from_length(10.0));
        assert_eq!(taffy_style.border.bottom, LengthPercentage::from_length(1.0));
    }

    #[test]
    fn style_absolute_position_with_inset() {
        let mut style = LayoutStyle::new();
        style.position = PositionType::Absolute;
        style.inset = EdgeInsets::new(
            LayoutValue::Point(5.0),
            LayoutValue::Point(5.0),
            LayoutValue::Auto,
            LayoutValue::Auto,
        );
        let taffy_style = resolve_style(&style);
        assert_eq!(taffy_style.position, taffy::style::Position::Absolute);
        assert_eq!(taffy_style.inset.left, LengthPercentageAuto::from_length(5.0));
        assert_eq!(taffy_style.inset.right, LengthPercentageAuto::AUTO);
    }

    #[test]
    fn style_gap() {
        let mut style = LayoutStyle::new();
        style.row_gap = 4.0;
        style.column_gap = 8.0;
        let taffy_style = resolve_style(&style);
        assert_eq!(taffy_style.gap.height, LengthPercentage::from_length(4.0));
        assert_eq!(taffy_style.gap.width, LengthPercentage::from_length(8.0));
    }

    #[test]
    fn style_overflow() {
        let mut style = LayoutStyle::new();
        style.overflow_x = Overflow::Scroll;
        style.overflow_y = Overflow::Hidden;
        let taffy_style = resolve_style(&style);
        assert_eq!(taffy_style.overflow.x, taffy::style::Overflow::Scroll);
        assert_eq!(taffy_style.overflow.y, taffy::style::Overflow::Hidden);
    }

    #[test]
    fn style_overflow_default_visible() {
        let taffy_style = resolve_style(&LayoutStyle::default());
        assert_eq!(taffy_style.overflow.x, taffy::style::Overflow::Visible);
        assert_eq!(taffy_style.overflow.y, taffy::style::Overflow::Visible);
    }

    #[test]
    fn style_alignment() {
        let mut style = LayoutStyle::new();
        style.justify_content = JustifyContent::SpaceBetween;
        style.align_items = AlignItems::Center;
        style.align_self = Some(AlignItems::FlexEnd);
        let taffy_style = resolve_style(&style);
        assert_eq!(
            taffy_style.justify_content,
            Some(taffy::style::JustifyContent::SpaceBetween)
        );
        assert_eq!(
            taffy_style.align_items,
            Some(taffy::style::AlignItems::Center)
        );
        assert_eq!(
            taffy_style.align_self,
            Some(taffy::style::AlignItems::FlexEnd)
        );
    }

    #[test]
    fn style_aspect_ratio_and_box_sizing() {
        let mut style = LayoutStyle::new();
        style.aspect_ratio = Some(1.5);
        style.box_sizing = BoxSizing::ContentBox;
        let taffy_style = resolve_style(&style);
        assert_eq!(taffy_style.aspect_ratio, Some(1.5));
        assert_eq!(taffy_style.box_sizing, taffy::style::BoxSizing::ContentBox);
    }
}

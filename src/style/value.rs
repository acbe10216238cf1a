//! Unit-tagged layout values and box-model edge groupings.
//!
//! [`LayoutValue`] is the unit vocabulary handed to the layout engine: an
//! absolute pixel amount, a percentage of the parent's corresponding extent,
//! or `Auto`. [`EdgeInsets`] groups four of them for margin/padding/border/
//! inset use; [`CornerRadius`] carries per-corner pixel radii.

// ---------------------------------------------------------------------------
// LayoutValue
// ---------------------------------------------------------------------------

/// A single box-model value: absolute pixels, percent of parent, or auto.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LayoutValue {
    /// Absolute length in pixels.
    Point(f32),
    /// Percentage of the parent's extent, in `[0, 100]`.
    Percent(f32),
    /// Let the layout engine decide.
    Auto,
}

impl LayoutValue {
    /// Zero pixels.
    pub const ZERO: LayoutValue = LayoutValue::Point(0.0);

    /// Whether this value is `Auto`.
    #[inline]
    pub fn is_auto(self) -> bool {
        matches!(self, LayoutValue::Auto)
    }

    /// The pixel magnitude if this is a `Point` value.
    #[inline]
    pub fn points(self) -> Option<f32> {
        match self {
            LayoutValue::Point(v) => Some(v),
            _ => None,
        }
    }

    /// Resolve against a parent extent: points pass through, percent scales,
    /// auto resolves to zero.
    pub fn resolve(self, basis: f32) -> f32 {
        match self {
            LayoutValue::Point(v) => v,
            LayoutValue::Percent(p) => basis * p / 100.0,
            LayoutValue::Auto => 0.0,
        }
    }
}

impl Default for LayoutValue {
    fn default() -> Self {
        LayoutValue::Auto
    }
}

// ---------------------------------------------------------------------------
// EdgeInsets
// ---------------------------------------------------------------------------

/// Four per-side [`LayoutValue`]s. Used for margin, padding, border widths,
/// and position offsets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeInsets {
    pub left: LayoutValue,
    pub top: LayoutValue,
    pub right: LayoutValue,
    pub bottom: LayoutValue,
}

impl EdgeInsets {
    /// All four sides zero pixels.
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: LayoutValue::ZERO,
        top: LayoutValue::ZERO,
        right: LayoutValue::ZERO,
        bottom: LayoutValue::ZERO,
    };

    /// All four sides `Auto`.
    pub const AUTO: EdgeInsets = EdgeInsets {
        left: LayoutValue::Auto,
        top: LayoutValue::Auto,
        right: LayoutValue::Auto,
        bottom: LayoutValue::Auto,
    };

    /// Per-side values in `left, top, right, bottom` order.
    pub const fn new(
        left: LayoutValue,
        top: LayoutValue,
        right: LayoutValue,
        bottom: LayoutValue,
    ) -> Self {
        Self { left, top, right, bottom }
    }

    /// The same pixel amount on every side.
    pub const fn all(pixels: f32) -> Self {
        Self::uniform(LayoutValue::Point(pixels))
    }

    /// The same value on every side.
    pub const fn uniform(value: LayoutValue) -> Self {
        Self { left: value, top: value, right: value, bottom: value }
    }

    /// Horizontal/vertical pairs.
    pub const fn symmetric(horizontal: LayoutValue, vertical: LayoutValue) -> Self {
        Self { left: horizontal, right: horizontal, top: vertical, bottom: vertical }
    }
}

impl Default for EdgeInsets {
    fn default() -> Self {
        Self::ZERO
    }
}

// ---------------------------------------------------------------------------
// CornerRadius
// ---------------------------------------------------------------------------

/// Per-corner radii in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    /// All corners square.
    pub const ZERO: CornerRadius = CornerRadius {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    /// The same radius on every corner.
    pub const fn all(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Whether any corner is rounded.
    #[inline]
    pub fn is_rounded(self) -> bool {
        self.top_left > 0.0 || self.top_right > 0.0 || self.bottom_right > 0.0 || self.bottom_left > 0.0
    }

    /// Radii shrunk by `amount`, floored at zero. Used to derive the inner
    /// edge of a stroked border.
    pub fn deflate(self, amount: f32) -> Self {
        Self {
            top_left: (self.top_left - amount).max(0.0),
            top_right: (self.top_right - amount).max(0.0),
            bottom_right: (self.bottom_right - amount).max(0.0),
            bottom_left: (self.bottom_left - amount).max(0.0),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

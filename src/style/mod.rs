//! Style value types and the styled-node state.
//!
//! - [`color`] — normalized RGBA colors with hex/byte conversion
//! - [`value`] — unit-tagged layout values and edge insets
//! - [`background`] — gradients, presets, box shadows
//! - [`text`] — font and text enums plus the text style block
//! - [`visual`] — per-node background/border/text state with unset sentinels

pub mod background;
pub mod color;
pub mod text;
pub mod value;
pub mod visual;

pub use background::{BoxShadow, Gradient, GradientKind, GradientStop};
pub use color::Color;
pub use text::{FontStyle, FontWeight, TextAlign, TextDecoration, TextOverflow};
pub use value::{CornerRadius, EdgeInsets, LayoutValue};
pub use visual::{BorderStyle, VisualStyle};

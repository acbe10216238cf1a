//! Layout engine: taffy integration and style resolution.

pub mod engine;
pub mod resolve;
pub mod style;

pub use engine::{BoxLayout, Edges, LayoutEngine};
pub use style::{
    AlignContent, AlignItems, BoxSizing, Direction, Display, FlexDirection, FlexWrap,
    JustifyContent, LayoutStyle, Overflow, PositionType,
};
